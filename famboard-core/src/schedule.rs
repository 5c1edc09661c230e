//! Family members and schedule events as stored in the household file.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{FamboardError, FamboardResult};
use crate::time_of_day::parse_minutes;

/// Colors offered for events, one per member slot.
pub const MEMBER_COLORS: [&str; 8] = [
    "#8B5CF6", // purple
    "#EC4899", // pink
    "#10B981", // green
    "#F59E0B", // amber
    "#3B82F6", // blue
    "#EF4444", // red
    "#06B6D4", // cyan
    "#8B5CF6", // purple (repeat for more members)
];

fn default_color() -> String {
    MEMBER_COLORS[0].to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

impl FamilyMember {
    /// Palette color for the member at `index` in the household list.
    pub fn color_for_index(index: usize) -> &'static str {
        MEMBER_COLORS[index % MEMBER_COLORS.len()]
    }
}

/// A one-off or weekly-recurring event assigned to one or more members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    /// Date of a one-off event. Ignored for recurring events.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub assigned_member_ids: Vec<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, with = "weekday_names")]
    pub recurring_days: Vec<Weekday>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ScheduleEvent {
    /// Check the fields a saved event needs, reporting the first problem found.
    pub fn validate(&self) -> FamboardResult<()> {
        let invalid = |msg: &str| -> FamboardResult<()> {
            Err(FamboardError::Validation(msg.to_string()))
        };

        if self.title.trim().is_empty() {
            return invalid("Event title is required");
        }
        if self.start_time.trim().is_empty() || self.end_time.trim().is_empty() {
            return invalid("Start and end times are required");
        }
        if self.assigned_member_ids.is_empty() {
            return invalid("Please assign at least one family member");
        }
        if self.is_recurring && self.recurring_days.is_empty() {
            return invalid("Please select recurring days");
        }
        if !self.is_recurring && self.date.is_none() {
            return invalid("Please select a date for non-recurring events");
        }

        parse_minutes(&self.start_time)?;
        parse_minutes(&self.end_time)?;

        Ok(())
    }

    /// Whether this event has an occurrence on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        if self.is_recurring {
            self.recurring_days.contains(&date.weekday())
        } else {
            self.date == Some(date)
        }
    }
}

/// Fields for an event that has not been saved yet.
#[derive(Debug, Clone, Default)]
pub struct NewScheduleEvent {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub start_time: String,
    pub end_time: String,
    pub assigned_member_ids: Vec<String>,
    pub recurring_days: Vec<Weekday>,
    pub color: Option<String>,
    pub notes: Option<String>,
}

impl NewScheduleEvent {
    /// An event is recurring exactly when it has recurring days.
    pub fn is_recurring(&self) -> bool {
        !self.recurring_days.is_empty()
    }

    pub fn into_event(self) -> ScheduleEvent {
        let is_recurring = self.is_recurring();

        ScheduleEvent {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            date: if is_recurring { None } else { self.date },
            start_time: self.start_time,
            end_time: self.end_time,
            assigned_member_ids: self.assigned_member_ids,
            is_recurring,
            recurring_days: self.recurring_days,
            color: self.color.unwrap_or_else(default_color),
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
        }
    }
}

/// Parse a weekday given by full or short English name, any case.
pub fn parse_weekday(s: &str) -> FamboardResult<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| FamboardError::Validation(format!("Unknown day '{}'", s)))
}

/// Full English name ("Monday"), the form stored in the household file.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

mod weekday_names {
    use chrono::Weekday;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::weekday_name;

    pub fn serialize<S: Serializer>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(days.iter().map(|d| weekday_name(*d)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Weekday>, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names
            .iter()
            .map(|n| {
                n.parse::<Weekday>()
                    .map_err(|_| D::Error::custom(format!("unknown weekday '{}'", n)))
            })
            .collect()
    }
}
