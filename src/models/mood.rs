//! Mood entries

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::annotate::{energy_emoji, mood_description, mood_emoji, stress_emoji};
use crate::entity::{Entity, EntityKind};
use crate::forms::{FieldKind, FieldSpec, FormValues, ValidationError};
use crate::render::Card;

/// A daily mood check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: NaiveDateTime,
    /// 1-10
    pub mood_level: i64,
    #[serde(default)]
    pub energy_level: Option<i64>,
    #[serde(default)]
    pub stress_level: Option<i64>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub created_at: Option<NaiveDateTime>,
}

/// POST /api/mood body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodDraft {
    pub mood_level: i64,
    pub energy_level: Option<i64>,
    pub stress_level: Option<i64>,
    pub sleep_hours: Option<f64>,
    pub notes: Option<String>,
}

const LEVEL: FieldKind = FieldKind::Range { min: 1, max: 10 };

impl Entity for MoodEntry {
    type Draft = MoodDraft;

    const KIND: EntityKind = EntityKind::Mood;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("mood_level", "Overall Mood", LEVEL)
            .required()
            .default_value("5"),
        FieldSpec::new("energy_level", "Energy Level", LEVEL).default_value("5"),
        FieldSpec::new("stress_level", "Stress Level", LEVEL).default_value("5"),
        FieldSpec::new("sleep_hours", "Hours of Sleep", FieldKind::Number { step: "0.5" })
            .placeholder("e.g. 7.5"),
        FieldSpec::new("notes", "Notes", FieldKind::TextArea)
            .placeholder("How are you feeling today?"),
    ];

    fn draft_from_form(form: &FormValues) -> Result<MoodDraft, ValidationError> {
        Ok(MoodDraft {
            mood_level: form.required_level("mood_level")?,
            energy_level: form.level("energy_level")?,
            stress_level: form.level("stress_level")?,
            sleep_hours: form.float("sleep_hours")?,
            notes: form.text("notes"),
        })
    }

    fn card(&self) -> Card {
        let mut card = Card::new("mood-entry", mood_description(self.mood_level))
            .date(self.date)
            .badge(format!("{} {}/10", mood_emoji(self.mood_level), self.mood_level));

        if let Some(energy) = self.energy_level {
            card = card.badge(format!("{} {}/10", energy_emoji(energy), energy));
        }
        if let Some(stress) = self.stress_level {
            card = card.badge(format!("{} {}/10", stress_emoji(stress), stress));
        }

        card.line_opt(
            "mood-sleep",
            self.sleep_hours.map(|h| format!("Sleep: {} hours", h)),
        )
        .line_opt(
            "mood-notes",
            self.notes.clone().filter(|n| !n.trim().is_empty()),
        )
    }
}
