//! Resolve stored events into the concrete occurrences shown on a day.
//!
//! A recurring event occurs on every listed weekday; a one-off event on its
//! date. Each occurrence is repeated once per assigned member, so a shared
//! event shows up side by side for everyone it involves.

use chrono::NaiveDate;

use crate::error::FamboardResult;
use crate::layout::{LayoutOptions, LayoutResult, TimedItem, layout_day_with};
use crate::schedule::ScheduleEvent;
use crate::time_of_day::{DEFAULT_TIME, parse_minutes};
use crate::week::Week;

#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    /// `{event_id}-{date}-{member_id}`, unique within a day.
    pub key: String,
    pub event_id: String,
    pub title: String,
    pub date: NaiveDate,
    pub member_id: String,
    pub color: String,
    pub start_time: String,
    pub end_time: String,
    pub start_minutes: i32,
    pub end_minutes: i32,
}

impl Occurrence {
    fn new(event: &ScheduleEvent, date: NaiveDate, member_id: &str) -> FamboardResult<Self> {
        let start_minutes = parse_minutes(non_empty_or_default(&event.start_time))?;
        let end_minutes = parse_minutes(non_empty_or_default(&event.end_time))?;

        Ok(Occurrence {
            key: format!("{}-{}-{}", event.id, date.format("%Y-%m-%d"), member_id),
            event_id: event.id.clone(),
            title: event.title.clone(),
            date,
            member_id: member_id.to_string(),
            color: event.color.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            start_minutes,
            end_minutes,
        })
    }

    pub fn timed_item(&self) -> TimedItem {
        TimedItem::new(self.key.clone(), self.start_minutes, self.end_minutes)
    }

    /// Whether the occurrence is running at `minute` since midnight.
    /// Half-open: true at the start minute, false at the end minute.
    pub fn is_ongoing(&self, minute: i32) -> bool {
        self.start_minutes <= minute && minute < self.end_minutes
    }
}

/// The first `limit` occurrences of a day by start time, and how many were left out.
pub fn first_of_day(mut occurrences: Vec<Occurrence>, limit: usize) -> (Vec<Occurrence>, usize) {
    occurrences.sort_by_key(|o| o.start_minutes);

    let more = occurrences.len().saturating_sub(limit);
    occurrences.truncate(limit);
    (occurrences, more)
}

fn non_empty_or_default(time: &str) -> &str {
    if time.trim().is_empty() {
        DEFAULT_TIME
    } else {
        time
    }
}

/// Occurrences of `events` on `date`, in event order then member order.
pub fn occurrences_on(events: &[ScheduleEvent], date: NaiveDate) -> FamboardResult<Vec<Occurrence>> {
    let mut occurrences = Vec::new();

    for event in events.iter().filter(|e| e.occurs_on(date)) {
        for member_id in &event.assigned_member_ids {
            occurrences.push(Occurrence::new(event, date, member_id)?);
        }
    }

    Ok(occurrences)
}

/// Occurrences for each day of `week`, Sunday first.
pub fn occurrences_in_week(
    events: &[ScheduleEvent],
    week: &Week,
) -> FamboardResult<Vec<(NaiveDate, Vec<Occurrence>)>> {
    week.days()
        .into_iter()
        .map(|day| Ok((day, occurrences_on(events, day)?)))
        .collect()
}

/// An occurrence paired with its column placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOccurrence {
    pub occurrence: Occurrence,
    pub column: usize,
    pub total_columns: usize,
}

impl PlacedOccurrence {
    pub fn layout(&self) -> LayoutResult {
        LayoutResult {
            id: self.occurrence.key.clone(),
            column: self.column,
            total_columns: self.total_columns,
        }
    }
}

/// Lay out one day's occurrences and re-attach each result to its occurrence.
///
/// Output is sorted by start time, then column.
pub fn place_day(occurrences: Vec<Occurrence>, options: &LayoutOptions) -> Vec<PlacedOccurrence> {
    let items: Vec<TimedItem> = occurrences.iter().map(Occurrence::timed_item).collect();
    let mut layout = layout_day_with(&items, options);

    let mut placed: Vec<PlacedOccurrence> = occurrences
        .into_iter()
        .filter_map(|occurrence| {
            // Keys are unique per day unless an event lists a member twice;
            // take results in order so duplicates still each get one.
            let pos = layout.iter().position(|r| r.id == occurrence.key)?;
            let result = layout.swap_remove(pos);
            Some(PlacedOccurrence {
                occurrence,
                column: result.column,
                total_columns: result.total_columns,
            })
        })
        .collect();

    placed.sort_by(|a, b| {
        a.occurrence
            .start_minutes
            .cmp(&b.occurrence.start_minutes)
            .then(a.column.cmp(&b.column))
    });

    placed
}
