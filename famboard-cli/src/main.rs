mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "famboard")]
#[command(about = "Plan and view your family's weekly schedule")]
struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a week of events, overlapping events side by side
    Week {
        /// Any date in the week to show (YYYY-MM-DD), defaults to this week
        #[arg(short, long)]
        date: Option<String>,

        /// Only show events for this member (name or id)
        #[arg(short, long)]
        member: Option<String>,

        /// Show the week after
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Show the week before
        #[arg(long)]
        prev: bool,
    },
    /// Show the first few events of today, marking the ones happening now
    Today,
    /// Show one day with the timeline position of each event
    Day {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Lay out a JSON array of {id, startMinutes, endMinutes} items ("-" reads stdin)
    Layout { file: PathBuf },
    /// Manage schedule events
    #[command(subcommand)]
    Event(commands::event::EventCommand),
    /// Manage family members
    #[command(subcommand)]
    Member(commands::member::MemberCommand),
    /// Show config and data file locations
    Config {
        /// Set the tie break for events starting together: longest_first or input_order
        #[arg(long)]
        tie_break: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Week {
            date,
            member,
            next,
            prev,
        } => {
            let step = if next {
                commands::week::Step::Next
            } else if prev {
                commands::week::Step::Previous
            } else {
                commands::week::Step::Same
            };
            commands::week::run(date.as_deref(), member.as_deref(), step)
        }
        Commands::Today => commands::today::run(),
        Commands::Day { date } => commands::day::run(date.as_deref()),
        Commands::Layout { file } => commands::layout::run(&file),
        Commands::Event(command) => commands::event::run(command),
        Commands::Member(command) => commands::member::run(command),
        Commands::Config { tie_break } => commands::config::run(tie_break.as_deref()),
    }
}
