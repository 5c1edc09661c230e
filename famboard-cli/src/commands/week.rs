use anyhow::Result;
use famboard_core::occurrence::{occurrences_in_week, place_day};
use famboard_core::week::Week;
use owo_colors::OwoColorize;

use crate::render::render_placed;

/// Which week relative to the one containing `--date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Same,
    Next,
}

pub fn run(date: Option<&str>, member: Option<&str>, step: Step) -> Result<()> {
    let (config, store) = super::open_store()?;
    let week = step_week(Week::from_arg(date)?, step);

    let member_id = match member {
        Some(key) => Some(super::resolve_member(&store, key)?.id.clone()),
        None => None,
    };

    let events = store.events();
    let today = chrono::Local::now().date_naive();
    let showing_today = week.contains(today);

    println!("{}", week.label().bold());

    for (day, mut occurrences) in occurrences_in_week(&events, &week)? {
        if let Some(id) = &member_id {
            occurrences.retain(|o| &o.member_id == id);
        }

        let heading = day.format("%a %b %-d").to_string();
        println!();
        if day == today {
            println!("{}", heading.purple().bold());
        } else {
            println!("{}", heading.bold());
        }

        if occurrences.is_empty() {
            println!("  {}", "Nothing scheduled".dimmed());
            continue;
        }

        let now = if showing_today {
            super::current_minute(day)
        } else {
            None
        };

        for placed in place_day(occurrences, &config.layout_options()) {
            let who = store.member(&placed.occurrence.member_id);
            let ongoing = now.is_some_and(|m| placed.occurrence.is_ongoing(m));
            println!("{}", render_placed(&placed, who, ongoing));
        }
    }

    Ok(())
}

fn step_week(week: Week, step: Step) -> Week {
    match step {
        Step::Previous => week.previous(),
        Step::Same => week,
        Step::Next => week.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_step_week() {
        let week = Week::containing(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());

        assert_eq!(step_week(week, Step::Same), week);
        assert_eq!(
            step_week(week, Step::Next).start,
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert_eq!(
            step_week(week, Step::Previous).start,
            NaiveDate::from_ymd_opt(2025, 2, 23).unwrap()
        );
    }
}
