pub mod config;
pub mod day;
pub mod event;
pub mod layout;
pub mod member;
pub mod today;
pub mod week;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime, Timelike};
use famboard_core::config::FamboardConfig;
use famboard_core::schedule::FamilyMember;
use famboard_core::store::ScheduleStore;
use tracing::debug;

pub fn load_config() -> Result<FamboardConfig> {
    load_config_at(&FamboardConfig::config_path()?)
}

pub fn load_config_at(path: &Path) -> Result<FamboardConfig> {
    FamboardConfig::load_at(path).context("Failed to load config")
}

/// Load the config and open the household file it points to.
pub fn open_store() -> Result<(FamboardConfig, ScheduleStore)> {
    let config = load_config()?;
    let path = config.household_path();
    debug!(path = %path.display(), "opening household");
    let store = ScheduleStore::open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    Ok((config, store))
}

/// Minutes since local midnight if `day` is today, for marking ongoing events.
pub fn current_minute(day: NaiveDate) -> Option<i32> {
    let now = chrono::Local::now();
    minute_on(day, now.date_naive(), now.time())
}

fn minute_on(day: NaiveDate, today: NaiveDate, time: NaiveTime) -> Option<i32> {
    (day == today).then(|| (time.hour() * 60 + time.minute()) as i32)
}

/// Find a member by id or by case-insensitive name.
pub fn resolve_member<'a>(store: &'a ScheduleStore, key: &str) -> Result<&'a FamilyMember> {
    let members = store.members();

    if let Some(member) = members.iter().find(|m| m.id == key) {
        return Ok(member);
    }

    let matches: Vec<&FamilyMember> = members
        .iter()
        .filter(|m| m.name.eq_ignore_ascii_case(key))
        .collect();

    match matches.as_slice() {
        [member] => Ok(*member),
        [] => {
            let available: Vec<_> = members.iter().map(|m| m.name.clone()).collect();
            if available.is_empty() {
                anyhow::bail!(
                    "No family members yet.\n\n\
                    Add one with:\n  \
                    famboard member add <name>"
                );
            }
            anyhow::bail!(
                "Member '{}' not found. Available: {}",
                key,
                available.join(", ")
            );
        }
        _ => anyhow::bail!("More than one member is named '{}'; use the id instead", key),
    }
}
