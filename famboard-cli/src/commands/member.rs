use anyhow::Result;
use clap::Subcommand;
use famboard_core::schedule::FamilyMember;
use owo_colors::OwoColorize;

use crate::render::{Render, swatch};

#[derive(Subcommand)]
pub enum MemberCommand {
    /// Add a family member
    Add {
        name: String,

        /// Emoji shown next to the name
        #[arg(short, long, default_value = "")]
        avatar: String,
    },
    /// List family members
    List,
    /// Remove a member and unassign them from every event
    Remove {
        /// Member name or id
        member: String,
    },
}

pub fn run(command: MemberCommand) -> Result<()> {
    let (_config, mut store) = super::open_store()?;

    match command {
        MemberCommand::Add { name, avatar } => {
            let member = store.add_member(&name, &avatar)?;
            println!("{} {}", "Added".green(), member.render());
            println!("  {}", member.id.dimmed());
        }
        MemberCommand::List => {
            if store.members().is_empty() {
                println!("{}", "No family members yet".dimmed());
            }
            for (i, member) in store.members().iter().enumerate() {
                println!(
                    "  {} {} {}",
                    swatch(FamilyMember::color_for_index(i)),
                    member.render(),
                    member.id.dimmed()
                );
            }
        }
        MemberCommand::Remove { member } => {
            let id = super::resolve_member(&store, &member)?.id.clone();
            let removed = store.remove_member(&id)?;
            println!("{} {}", "Removed".red(), removed.render());
        }
    }

    Ok(())
}
