//! Wellness goals

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::annotate::{goal_progress, goal_status_emoji};
use crate::entity::{Entity, EntityKind};
use crate::forms::{FieldKind, FieldSpec, FormValues, ValidationError};
use crate::render::Card;

/// Goal types offered by the form
pub const GOAL_TYPES: &[&str] = &["daily", "weekly", "monthly", "long_term"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub goal_type: String,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub target_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub updated_at: Option<NaiveDateTime>,
}

/// POST /api/goals body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalDraft {
    pub title: String,
    pub description: Option<String>,
    pub goal_type: String,
    pub target_value: Option<f64>,
    pub current_value: f64,
    /// Sent as `YYYY-MM-DD`
    pub target_date: Option<NaiveDate>,
}

impl Goal {
    /// Percent of target reached, 0-100
    pub fn progress(&self) -> f64 {
        goal_progress(self.current_value, self.target_value)
    }
}

impl Entity for Goal {
    type Draft = GoalDraft;

    const KIND: EntityKind = EntityKind::Goal;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Goal", FieldKind::Text)
            .required()
            .placeholder("e.g. Meditate every morning"),
        FieldSpec::new("description", "Description", FieldKind::TextArea),
        FieldSpec::new("goal_type", "Goal Type", FieldKind::Select(GOAL_TYPES)).required(),
        FieldSpec::new("target_value", "Target Value", FieldKind::Number { step: "any" }),
        FieldSpec::new("current_value", "Current Progress", FieldKind::Number { step: "any" })
            .placeholder("0"),
        FieldSpec::new("target_date", "Target Date", FieldKind::Date),
    ];

    fn draft_from_form(form: &FormValues) -> Result<GoalDraft, ValidationError> {
        Ok(GoalDraft {
            title: form.required_text("title")?,
            description: form.text("description"),
            goal_type: form.required_text("goal_type")?,
            target_value: form.float("target_value")?,
            current_value: form.float("current_value")?.unwrap_or(0.0),
            target_date: form.date("target_date")?,
        })
    }

    fn card(&self) -> Card {
        let progress = self.progress();
        let heading = format!(
            "{} {}",
            goal_status_emoji(self.is_completed, progress),
            self.title
        );
        let status = if self.is_completed { "Completed" } else { "Active" };

        let progress_line = match self.target_value {
            Some(target) => format!(
                "Progress: {} / {} ({:.0}%)",
                self.current_value, target, progress
            ),
            None => format!("Progress: {}", self.current_value),
        };

        Card::new("goal-item", heading)
            .status(status)
            .line_opt(
                "goal-description",
                self.description.clone().filter(|d| !d.trim().is_empty()),
            )
            .line("goal-progress", progress_line)
            .line_opt(
                "goal-target-date",
                self.target_date
                    .map(|d| format!("Target: {}", d.format("%Y-%m-%d"))),
            )
    }
}
