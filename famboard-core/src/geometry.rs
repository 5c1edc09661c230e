//! Pixel geometry for laid-out events on a vertical timeline.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutResult;

/// Timeline settings, stored under `[timeline]` in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// First hour drawn at the top of the timeline.
    pub start_hour: u32,
    pub visible_hours: u32,
    pub pixels_per_hour: f64,
    pub column_gap_px: f64,
    /// Shorter events are drawn as if they lasted this long.
    pub min_display_minutes: i32,
    pub min_block_height_px: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            start_hour: 7,
            visible_hours: 15,
            pixels_per_hour: 80.0,
            column_gap_px: 4.0,
            min_display_minutes: 15,
            min_block_height_px: 50.0,
        }
    }
}

impl TimelineConfig {
    /// Pixel offset of a span of minutes.
    pub fn minutes_to_px(&self, minutes: i32) -> f64 {
        minutes as f64 * self.pixels_per_hour / 60.0
    }

    /// Hours with a row on the timeline.
    pub fn hour_slots(&self) -> std::ops::Range<u32> {
        self.start_hour..self.start_hour + self.visible_hours
    }
}

/// A CSS-style `calc(percent% + px)` length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub percent: f64,
    pub px: f64,
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.px < 0.0 {
            write!(f, "calc({}% - {}px)", self.percent, -self.px)
        } else {
            write!(f, "calc({}% + {}px)", self.percent, self.px)
        }
    }
}

/// Where one event block is drawn inside its day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBlock {
    pub top_px: f64,
    pub height_px: f64,
    pub left: Length,
    pub width: Length,
}

/// Position an event given its time range and column placement.
///
/// Columns split the day width evenly with a fixed gap between neighbours.
/// Events before `start_hour` get a negative top and are left for the caller
/// to clip.
pub fn block_for(
    start_minutes: i32,
    end_minutes: i32,
    layout: &LayoutResult,
    config: &TimelineConfig,
) -> EventBlock {
    let display_minutes = (end_minutes - start_minutes).max(config.min_display_minutes);

    let total = layout.total_columns.max(1) as f64;
    let column = layout.column as f64;
    let gap = config.column_gap_px;
    let width_percent = 100.0 / total;

    EventBlock {
        top_px: config.minutes_to_px(start_minutes - config.start_hour as i32 * 60),
        height_px: config
            .minutes_to_px(display_minutes)
            .max(config.min_block_height_px),
        left: Length {
            percent: width_percent * column,
            px: gap * column,
        },
        width: Length {
            percent: width_percent,
            px: if total > 1.0 {
                -(gap * (total - 1.0) / total)
            } else {
                0.0
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(column: usize, total_columns: usize) -> LayoutResult {
        LayoutResult {
            id: "x".into(),
            column,
            total_columns,
        }
    }

    #[test]
    fn test_single_column_block() {
        let config = TimelineConfig::default();
        let block = block_for(9 * 60, 10 * 60, &placed(0, 1), &config);

        assert_eq!(block.top_px, 160.0);
        assert_eq!(block.height_px, 80.0);
        assert_eq!(block.left, Length { percent: 0.0, px: 0.0 });
        assert_eq!(block.width, Length { percent: 100.0, px: 0.0 });
        assert_eq!(block.width.to_string(), "calc(100% + 0px)");
    }

    #[test]
    fn test_second_of_two_columns() {
        let config = TimelineConfig::default();
        let block = block_for(9 * 60, 10 * 60, &placed(1, 2), &config);

        assert_eq!(block.left, Length { percent: 50.0, px: 4.0 });
        assert_eq!(block.width, Length { percent: 50.0, px: -2.0 });
        assert_eq!(block.width.to_string(), "calc(50% - 2px)");
    }

    #[test]
    fn test_short_events_get_minimum_height() {
        let config = TimelineConfig::default();

        // 5 minutes displays as 15 minutes (20px), then floors at 50px.
        let block = block_for(8 * 60, 8 * 60 + 5, &placed(0, 1), &config);
        assert_eq!(block.height_px, 50.0);

        let tall = TimelineConfig {
            min_block_height_px: 0.0,
            ..TimelineConfig::default()
        };
        let block = block_for(8 * 60, 8 * 60 + 5, &placed(0, 1), &tall);
        assert_eq!(block.height_px, 20.0);
    }

    #[test]
    fn test_hour_slots() {
        let config = TimelineConfig::default();
        let slots: Vec<u32> = config.hour_slots().collect();

        assert_eq!(slots.first(), Some(&7));
        assert_eq!(slots.last(), Some(&21));
    }
}
