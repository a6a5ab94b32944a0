//! Entity kinds
//!
//! The four record kinds share one shape: a collection endpoint, a creation
//! form, a POST body and a card template. [`Entity`] captures that shape so
//! listing, creating and rendering are written once.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::forms::{FieldSpec, FormValues, ValidationError};
use crate::models::{Activity, Goal, JournalEntry, MoodEntry};
use crate::render::Card;

/// One of the four tracked record kinds; also names the dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Mood,
    Journal,
    Activity,
    Goal,
}

/// Tab name that matched no entity kind
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown tab: {0} (expected one of mood, journal, activities, goals)")]
pub struct UnknownTab(pub String);

impl EntityKind {
    /// Tab order
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Mood,
        EntityKind::Journal,
        EntityKind::Activity,
        EntityKind::Goal,
    ];

    /// Position in [`EntityKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            EntityKind::Mood => 0,
            EntityKind::Journal => 1,
            EntityKind::Activity => 2,
            EntityKind::Goal => 3,
        }
    }

    pub fn tab_name(self) -> &'static str {
        match self {
            EntityKind::Mood => "mood",
            EntityKind::Journal => "journal",
            EntityKind::Activity => "activities",
            EntityKind::Goal => "goals",
        }
    }

    /// Look up a tab by name; singular kind names are accepted too
    pub fn from_tab_name(name: &str) -> Result<Self, UnknownTab> {
        match name.trim().to_lowercase().as_str() {
            "mood" => Ok(EntityKind::Mood),
            "journal" => Ok(EntityKind::Journal),
            "activities" | "activity" => Ok(EntityKind::Activity),
            "goals" | "goal" => Ok(EntityKind::Goal),
            _ => Err(UnknownTab(name.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Mood => "Mood",
            EntityKind::Journal => "Journal",
            EntityKind::Activity => "Activities",
            EntityKind::Goal => "Goals",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EntityKind::Mood => "😊",
            EntityKind::Journal => "📝",
            EntityKind::Activity => "🧘",
            EntityKind::Goal => "🎯",
        }
    }

    /// Collection endpoint, relative to the API origin
    pub fn path(self) -> &'static str {
        match self {
            EntityKind::Mood => "/api/mood",
            EntityKind::Journal => "/api/journal",
            EntityKind::Activity => "/api/activities",
            EntityKind::Goal => "/api/goals",
        }
    }

    /// Key of the record array inside the list envelope
    pub fn collection_key(self) -> &'static str {
        match self {
            EntityKind::Mood | EntityKind::Journal => "entries",
            EntityKind::Activity => "activities",
            EntityKind::Goal => "goals",
        }
    }

    pub fn add_label(self) -> &'static str {
        match self {
            EntityKind::Mood => "Add Mood Entry",
            EntityKind::Journal => "New Journal Entry",
            EntityKind::Activity => "Log Activity",
            EntityKind::Goal => "Add Goal",
        }
    }

    pub fn saved_message(self) -> &'static str {
        match self {
            EntityKind::Mood => "Mood entry saved successfully!",
            EntityKind::Journal => "Journal entry saved successfully!",
            EntityKind::Activity => "Activity logged successfully!",
            EntityKind::Goal => "Goal created successfully!",
        }
    }

    pub fn save_failed_message(self) -> &'static str {
        match self {
            EntityKind::Mood => "Failed to save mood entry",
            EntityKind::Journal => "Failed to save journal entry",
            EntityKind::Activity => "Failed to log activity",
            EntityKind::Goal => "Failed to create goal",
        }
    }

    pub fn load_failed_message(self) -> &'static str {
        match self {
            EntityKind::Mood => "Failed to load mood entries",
            EntityKind::Journal => "Failed to load journal entries",
            EntityKind::Activity => "Failed to load activities",
            EntityKind::Goal => "Failed to load goals",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            EntityKind::Mood => "No mood entries yet. Start tracking how you feel!",
            EntityKind::Journal => "No journal entries yet. Write your first entry!",
            EntityKind::Activity => "No activities logged yet.",
            EntityKind::Goal => "No goals yet. Set your first wellness goal!",
        }
    }

    /// Creation form field table
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            EntityKind::Mood => MoodEntry::FIELDS,
            EntityKind::Journal => JournalEntry::FIELDS,
            EntityKind::Activity => Activity::FIELDS,
            EntityKind::Goal => Goal::FIELDS,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_name())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tab_name(s)
    }
}

/// A record kind listed and created through the dashboard
pub trait Entity: DeserializeOwned + Serialize + Clone + fmt::Debug + PartialEq + 'static {
    /// POST body
    type Draft: Serialize + Clone + fmt::Debug;

    const KIND: EntityKind;

    const FIELDS: &'static [FieldSpec];

    /// Parse and validate a filled-in form
    fn draft_from_form(form: &FormValues) -> Result<Self::Draft, ValidationError>;

    fn card(&self) -> Card;
}

/// Optional paging for the list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    /// Goals only
    pub include_completed: Option<bool>,
}

impl ListQuery {
    /// Endpoint path with any query parameters appended
    pub fn path_for(&self, kind: EntityKind) -> String {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(format!("skip={}", skip));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if kind == EntityKind::Goal {
            if let Some(include) = self.include_completed {
                params.push(format!("include_completed={}", include));
            }
        }

        if params.is_empty() {
            kind.path().to_string()
        } else {
            format!("{}?{}", kind.path(), params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_names_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_tab_name(kind.tab_name()), Ok(kind));
            assert_eq!(EntityKind::ALL[kind.index()], kind);
        }
    }

    #[test]
    fn test_unknown_tab() {
        let err = EntityKind::from_tab_name("sleep").unwrap_err();
        assert_eq!(err, UnknownTab("sleep".to_string()));
    }

    #[test]
    fn test_default_query_has_no_params() {
        assert_eq!(ListQuery::default().path_for(EntityKind::Mood), "/api/mood");
    }

    #[test]
    fn test_query_params() {
        let query = ListQuery {
            skip: Some(10),
            limit: Some(5),
            include_completed: Some(false),
        };
        assert_eq!(
            query.path_for(EntityKind::Goal),
            "/api/goals?skip=10&limit=5&include_completed=false"
        );
        // include_completed only applies to goals
        assert_eq!(
            query.path_for(EntityKind::Journal),
            "/api/journal?skip=10&limit=5"
        );
    }
}
