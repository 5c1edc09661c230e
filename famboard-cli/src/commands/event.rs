use anyhow::{Context, Result};
use chrono::Weekday;
use clap::Subcommand;
use famboard_core::schedule::{NewScheduleEvent, parse_weekday};
use famboard_core::store::ScheduleStore;
use famboard_core::week::parse_date;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

#[derive(Subcommand)]
pub enum EventCommand {
    /// Add an event (one-off with --date, weekly with --days)
    Add {
        title: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: String,

        /// Member name or id; repeat for several members
        #[arg(short, long = "member", required = true)]
        members: Vec<String>,

        /// Date of a one-off event (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "days")]
        date: Option<String>,

        /// Weekdays for a recurring event, e.g. "Monday,Thursday"
        #[arg(long, value_delimiter = ',')]
        days: Vec<String>,

        /// Color such as "#10B981"
        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// List all events, newest first
    List,
    /// Change fields of an existing event
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        /// Replace the assigned members
        #[arg(short, long = "member")]
        members: Vec<String>,

        /// Make it a one-off event on this date
        #[arg(short, long, conflicts_with = "days")]
        date: Option<String>,

        /// Make it a weekly event on these days
        #[arg(long, value_delimiter = ',')]
        days: Vec<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
}

pub fn run(command: EventCommand) -> Result<()> {
    let (_config, mut store) = super::open_store()?;

    match command {
        EventCommand::Add {
            title,
            start,
            end,
            members,
            date,
            days,
            color,
            notes,
        } => {
            let new = NewScheduleEvent {
                title,
                date: date.as_deref().map(parse_date).transpose()?,
                start_time: start,
                end_time: end,
                assigned_member_ids: member_ids(&store, &members)?,
                recurring_days: weekdays(&days)?,
                color,
                notes,
            };

            let event = store.add_event(new).context("Could not add event")?;
            println!("{} {}", "Added".green(), event.render());
            println!("  {}", event.id.dimmed());
        }
        EventCommand::List => {
            let events = store.events();
            if events.is_empty() {
                println!("{}", "No events yet".dimmed());
                return Ok(());
            }

            println!(
                "{}",
                format!("{} {}", events.len(), pluralize("event", events.len())).bold()
            );
            for event in &events {
                println!("  {} {}", event.render(), event.id.dimmed());
            }
        }
        EventCommand::Update {
            id,
            title,
            start,
            end,
            members,
            date,
            days,
            color,
            notes,
        } => {
            let mut event = store.event(&id)?.clone();

            if let Some(title) = title {
                event.title = title.trim().to_string();
            }
            if let Some(start) = start {
                event.start_time = start;
            }
            if let Some(end) = end {
                event.end_time = end;
            }
            if !members.is_empty() {
                event.assigned_member_ids = member_ids(&store, &members)?;
            }
            if let Some(date) = date {
                event.date = Some(parse_date(&date)?);
                event.is_recurring = false;
                event.recurring_days.clear();
            }
            if !days.is_empty() {
                event.recurring_days = weekdays(&days)?;
                event.is_recurring = true;
            }
            if let Some(color) = color {
                event.color = color;
            }
            if let Some(notes) = notes {
                event.notes = Some(notes).filter(|n| !n.trim().is_empty());
            }

            let event = store
                .update_event(&id, event)
                .context("Could not update event")?;
            println!("{} {}", "Updated".yellow(), event.render());
        }
        EventCommand::Delete { id } => {
            let event = store.delete_event(&id)?;
            println!("{} {}", "Deleted".red(), event.title);
        }
    }

    Ok(())
}

fn member_ids(store: &ScheduleStore, keys: &[String]) -> Result<Vec<String>> {
    keys.iter()
        .map(|key| Ok(super::resolve_member(store, key)?.id.clone()))
        .collect()
}

fn weekdays(names: &[String]) -> Result<Vec<Weekday>> {
    let mut days = Vec::new();
    for name in names.iter().filter(|n| !n.trim().is_empty()) {
        let day = parse_weekday(name)?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    Ok(days)
}
