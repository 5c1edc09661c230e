use anyhow::Result;
use famboard_core::occurrence::{first_of_day, occurrences_on};
use owo_colors::OwoColorize;

use crate::render::render_occurrence;

/// How many of today's events the summary lists before collapsing the rest.
const SHOWN: usize = 3;

pub fn run() -> Result<()> {
    let (_config, store) = super::open_store()?;
    let today = chrono::Local::now().date_naive();
    let now = super::current_minute(today);

    let occurrences = occurrences_on(&store.events(), today)?;

    println!("{}", "Today's schedule".bold());

    if occurrences.is_empty() {
        println!("  {}", "No events today.".dimmed());
        return Ok(());
    }

    let (shown, more) = first_of_day(occurrences, SHOWN);
    for occ in &shown {
        let ongoing = now.is_some_and(|m| occ.is_ongoing(m));
        println!("{}", render_occurrence(occ, store.member(&occ.member_id), ongoing));
    }

    if more > 0 {
        println!("  {}", format!("+{more} more today").dimmed());
    }

    Ok(())
}
