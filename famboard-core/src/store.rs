//! Household file storage.
//!
//! Members and schedule events live in a single pretty-printed JSON file in
//! the data directory. Every mutating call writes the whole file back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FamboardError, FamboardResult};
use crate::schedule::{FamilyMember, NewScheduleEvent, ScheduleEvent};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Household {
    #[serde(default)]
    pub members: Vec<FamilyMember>,
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
}

pub struct ScheduleStore {
    path: PathBuf,
    household: Household,
}

impl ScheduleStore {
    /// Open the household file at `path`; a missing file is an empty household.
    pub fn open(path: impl Into<PathBuf>) -> FamboardResult<Self> {
        let path = path.into();

        let household = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Household::default()
        };

        Ok(ScheduleStore { path, household })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> FamboardResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.household)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// All events, newest first.
    pub fn events(&self) -> Vec<ScheduleEvent> {
        let mut events = self.household.events.clone();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        events
    }

    pub fn event(&self, id: &str) -> FamboardResult<&ScheduleEvent> {
        self.household
            .events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| FamboardError::EventNotFound(id.to_string()))
    }

    pub fn add_event(&mut self, new: NewScheduleEvent) -> FamboardResult<ScheduleEvent> {
        let event = new.into_event();
        event.validate()?;
        self.check_members(&event)?;

        self.household.events.push(event.clone());
        self.save()?;

        info!(id = %event.id, title = %event.title, "added event");
        Ok(event)
    }

    /// Replace the event with `id`, keeping its id and creation time.
    pub fn update_event(&mut self, id: &str, mut event: ScheduleEvent) -> FamboardResult<ScheduleEvent> {
        let existing = self.event(id)?;
        event.id = existing.id.clone();
        event.created_at = existing.created_at;
        if event.is_recurring {
            event.date = None;
        }

        event.validate()?;
        self.check_members(&event)?;

        if let Some(slot) = self.household.events.iter_mut().find(|e| e.id == id) {
            *slot = event.clone();
        }
        self.save()?;

        info!(id = %event.id, "updated event");
        Ok(event)
    }

    pub fn delete_event(&mut self, id: &str) -> FamboardResult<ScheduleEvent> {
        let pos = self
            .household
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| FamboardError::EventNotFound(id.to_string()))?;

        let removed = self.household.events.remove(pos);
        self.save()?;

        info!(id = %removed.id, "deleted event");
        Ok(removed)
    }

    // =========================================================================
    // Members
    // =========================================================================

    pub fn members(&self) -> &[FamilyMember] {
        &self.household.members
    }

    pub fn member(&self, id: &str) -> Option<&FamilyMember> {
        self.household.members.iter().find(|m| m.id == id)
    }

    pub fn add_member(&mut self, name: &str, avatar: &str) -> FamboardResult<FamilyMember> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FamboardError::Validation("Member name is required".into()));
        }

        let member = FamilyMember {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            avatar: avatar.to_string(),
        };

        self.household.members.push(member.clone());
        self.save()?;

        info!(id = %member.id, name = %member.name, "added member");
        Ok(member)
    }

    /// Remove a member and unassign them from every event.
    ///
    /// Events left with nobody assigned are removed too, since they would no
    /// longer show up anywhere.
    pub fn remove_member(&mut self, id: &str) -> FamboardResult<FamilyMember> {
        let pos = self
            .household
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| FamboardError::MemberNotFound(id.to_string()))?;

        let removed = self.household.members.remove(pos);

        for event in &mut self.household.events {
            event.assigned_member_ids.retain(|m| m != id);
        }
        self.household
            .events
            .retain(|e| !e.assigned_member_ids.is_empty());

        self.save()?;

        info!(id = %removed.id, "removed member");
        Ok(removed)
    }

    fn check_members(&self, event: &ScheduleEvent) -> FamboardResult<()> {
        match event
            .assigned_member_ids
            .iter()
            .find(|id| self.member(id).is_none())
        {
            Some(unknown) => Err(FamboardError::MemberNotFound(unknown.clone())),
            None => Ok(()),
        }
    }
}
