use anyhow::Result;
use famboard_core::geometry::block_for;
use famboard_core::occurrence::{occurrences_on, place_day};
use famboard_core::time_of_day::format_minutes;
use famboard_core::week::parse_date;
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_block};

pub fn run(date: Option<&str>) -> Result<()> {
    let (config, store) = super::open_store()?;
    let day = match date {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let occurrences = occurrences_on(&store.events(), day)?;
    let placed = place_day(occurrences, &config.layout_options());
    let now = super::current_minute(day);
    let timeline = &config.timeline;

    println!(
        "{} {}",
        day.format("%A %b %-d, %Y").to_string().bold(),
        format!("({} {})", placed.len(), pluralize("event", placed.len())).dimmed()
    );

    for hour in timeline.hour_slots() {
        let hour_start = hour as i32 * 60;
        println!("{}", format_minutes(hour_start).dimmed());

        for p in placed
            .iter()
            .filter(|p| p.occurrence.start_minutes / 60 == hour as i32)
        {
            let block = block_for(
                p.occurrence.start_minutes,
                p.occurrence.end_minutes,
                &p.layout(),
                timeline,
            );
            let ongoing = now.is_some_and(|m| p.occurrence.is_ongoing(m));
            println!("{}", render_block(p, &block, ongoing));
        }
    }

    let outside: Vec<_> = placed
        .iter()
        .filter(|p| {
            let hour = (p.occurrence.start_minutes / 60) as u32;
            !timeline.hour_slots().contains(&hour)
        })
        .collect();

    if !outside.is_empty() {
        println!();
        println!("{}", "Outside the timeline:".dimmed());
        for p in outside {
            println!(
                "  {}-{} {}",
                format_minutes(p.occurrence.start_minutes),
                format_minutes(p.occurrence.end_minutes),
                p.occurrence.title
            );
        }
    }

    Ok(())
}
