//! Wellness activities

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::annotate::{activity_emoji, humanize};
use crate::entity::{Entity, EntityKind};
use crate::forms::{FieldKind, FieldSpec, FormValues, ValidationError};
use crate::render::Card;

/// Activity types offered by the form
pub const ACTIVITY_TYPES: &[&str] = &[
    "meditation",
    "exercise",
    "reading",
    "social",
    "music",
    "art",
    "nature",
    "sleep",
    "gratitude",
    "therapy",
    "other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: NaiveDateTime,
    pub activity_type: String,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Signed; positive lifted the mood
    #[serde(default)]
    pub mood_impact: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub created_at: Option<NaiveDateTime>,
}

/// POST /api/activities body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityDraft {
    pub activity_type: String,
    pub duration_minutes: Option<i64>,
    pub description: Option<String>,
    pub mood_impact: Option<i64>,
    pub notes: Option<String>,
}

impl Entity for Activity {
    type Draft = ActivityDraft;

    const KIND: EntityKind = EntityKind::Activity;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("activity_type", "Activity Type", FieldKind::Select(ACTIVITY_TYPES))
            .required(),
        FieldSpec::new("duration_minutes", "Duration (minutes)", FieldKind::Number { step: "1" }),
        FieldSpec::new("description", "Description", FieldKind::Text)
            .placeholder("What did you do?"),
        FieldSpec::new("mood_impact", "Mood Impact (-5 to +5)", FieldKind::Number { step: "1" }),
        FieldSpec::new("notes", "Notes", FieldKind::TextArea),
    ];

    fn draft_from_form(form: &FormValues) -> Result<ActivityDraft, ValidationError> {
        Ok(ActivityDraft {
            activity_type: form.required_text("activity_type")?,
            duration_minutes: form.int("duration_minutes")?,
            description: form.text("description"),
            mood_impact: form.int("mood_impact")?,
            notes: form.text("notes"),
        })
    }

    fn card(&self) -> Card {
        let heading = format!(
            "{} {}",
            activity_emoji(&self.activity_type),
            humanize(&self.activity_type)
        );

        Card::new("activity-item", heading)
            .date(self.date)
            .line_opt(
                "activity-duration",
                self.duration_minutes
                    .map(|m| format!("Duration: {} minutes", m)),
            )
            .line_opt(
                "activity-description",
                self.description.clone().filter(|d| !d.trim().is_empty()),
            )
            .line_opt(
                "activity-impact",
                self.mood_impact
                    .filter(|i| *i != 0)
                    .map(|i| format!("Mood impact: {:+}", i)),
            )
            .line_opt(
                "activity-notes",
                self.notes.clone().filter(|n| !n.trim().is_empty()),
            )
    }
}
