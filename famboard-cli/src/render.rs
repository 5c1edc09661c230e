//! Terminal rendering for famboard types using owo_colors.

use famboard_core::geometry::EventBlock;
use famboard_core::occurrence::{Occurrence, PlacedOccurrence};
use famboard_core::schedule::{FamilyMember, ScheduleEvent, weekday_name};
use famboard_core::time_of_day::{format_minutes, parse_minutes};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for FamilyMember {
    fn render(&self) -> String {
        if self.avatar.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.avatar, self.name)
        }
    }
}

impl Render for ScheduleEvent {
    fn render(&self) -> String {
        let when = if self.is_recurring {
            let days: Vec<&str> = self
                .recurring_days
                .iter()
                .map(|d| &weekday_name(*d)[..3])
                .collect();
            format!("every {}", days.join(", "))
        } else {
            self.date
                .map(|d| d.format("%a %b %-d, %Y").to_string())
                .unwrap_or_default()
        };

        format!(
            "{} {} {} {}",
            swatch(&self.color),
            self.title.bold(),
            format!("{}-{}", short_time(&self.start_time), short_time(&self.end_time)).dimmed(),
            when.dimmed()
        )
    }
}

/// One line of the week view for a placed occurrence.
pub fn render_placed(
    placed: &PlacedOccurrence,
    member: Option<&FamilyMember>,
    ongoing: bool,
) -> String {
    let occ = &placed.occurrence;
    let time = format!(
        "{}-{}",
        format_minutes(occ.start_minutes),
        format_minutes(occ.end_minutes)
    );
    let who = member
        .map(Render::render)
        .unwrap_or_else(|| occ.member_id.clone());
    let lane = if placed.total_columns > 1 {
        format!("[{}/{}]", placed.column + 1, placed.total_columns)
    } else {
        String::new()
    };

    format!(
        "  {} {}{} {} {} {} {}",
        time,
        "  ".repeat(placed.column),
        swatch(&occ.color),
        occ.title,
        format!("({})", who).dimmed(),
        lane.dimmed(),
        now_tag(ongoing)
    )
    .trim_end()
    .to_string()
}

/// One line of the today summary.
pub fn render_occurrence(occ: &Occurrence, member: Option<&FamilyMember>, ongoing: bool) -> String {
    let who = member
        .map(Render::render)
        .unwrap_or_else(|| occ.member_id.clone());

    format!(
        "  {}-{} {} {} {} {}",
        format_minutes(occ.start_minutes),
        format_minutes(occ.end_minutes),
        swatch(&occ.color),
        occ.title,
        format!("({})", who).dimmed(),
        now_tag(ongoing)
    )
    .trim_end()
    .to_string()
}

/// Geometry line for the day view.
pub fn render_block(placed: &PlacedOccurrence, block: &EventBlock, ongoing: bool) -> String {
    format!(
        "  {} {} {} {}",
        swatch(&placed.occurrence.color),
        placed.occurrence.title,
        format!(
            "top={}px height={}px left={} width={}",
            block.top_px, block.height_px, block.left, block.width
        )
        .dimmed(),
        now_tag(ongoing)
    )
    .trim_end()
    .to_string()
}

fn now_tag(ongoing: bool) -> String {
    if ongoing {
        "● now".green().bold().to_string()
    } else {
        String::new()
    }
}

/// A colored block for an event color like "#8B5CF6"; plain when the color can't be parsed.
pub fn swatch(color: &str) -> String {
    match hex_rgb(color) {
        Some((r, g, b)) => "█".truecolor(r, g, b).to_string(),
        None => "█".to_string(),
    }
}

fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// "15:00:00" -> "15:00"; anything unparseable is shown as stored.
fn short_time(time: &str) -> String {
    parse_minutes(time)
        .map(format_minutes)
        .unwrap_or_else(|_| time.to_string())
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
