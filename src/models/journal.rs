//! Journal entries

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::annotate::{mood_change, parse_tags};
use crate::entity::{Entity, EntityKind};
use crate::forms::{FieldKind, FieldSpec, FormValues, ValidationError};
use crate::render::Card;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub mood_before: Option<i64>,
    #[serde(default)]
    pub mood_after: Option<i64>,
    /// Comma-separated
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub updated_at: Option<NaiveDateTime>,
}

/// POST /api/journal body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalDraft {
    pub title: Option<String>,
    pub content: String,
    pub mood_before: Option<i64>,
    pub mood_after: Option<i64>,
    pub tags: Option<String>,
}

impl JournalEntry {
    /// `Mood: 4 → 7 (Improved by 3 points)`, when either reading is present
    fn mood_line(&self) -> Option<String> {
        if self.mood_before.is_none() && self.mood_after.is_none() {
            return None;
        }
        let show = |v: Option<i64>| v.map(|m| m.to_string()).unwrap_or_else(|| "?".into());
        let mut line = format!("Mood: {} → {}", show(self.mood_before), show(self.mood_after));
        if let Some(change) = mood_change(self.mood_before, self.mood_after) {
            line.push_str(&format!(" ({})", change));
        }
        Some(line)
    }
}

impl Entity for JournalEntry {
    type Draft = JournalDraft;

    const KIND: EntityKind = EntityKind::Journal;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).placeholder("Give your entry a title"),
        FieldSpec::new("content", "Entry", FieldKind::TextArea)
            .required()
            .placeholder("What's on your mind?"),
        FieldSpec::new("mood_before", "Mood Before (1-10)", FieldKind::Number { step: "1" }),
        FieldSpec::new("mood_after", "Mood After (1-10)", FieldKind::Number { step: "1" }),
        FieldSpec::new("tags", "Tags", FieldKind::Text).placeholder("e.g. gratitude, work, family"),
    ];

    fn draft_from_form(form: &FormValues) -> Result<JournalDraft, ValidationError> {
        Ok(JournalDraft {
            title: form.text("title"),
            content: form.required_text("content")?,
            mood_before: form.level("mood_before")?,
            mood_after: form.level("mood_after")?,
            tags: form.text("tags"),
        })
    }

    fn card(&self) -> Card {
        let heading = self
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "Journal Entry".to_string());

        let mut card = Card::new("journal-entry", heading).date(self.date);
        if self.is_private {
            card = card.badge("🔒 Private");
        }

        card.line("journal-content", self.content.clone())
            .line_opt("journal-mood", self.mood_line())
            .tags(parse_tags(self.tags.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_rejected() {
        for content in ["", "   "] {
            let form = FormValues::new().with("title", "Monday").with("content", content);
            assert_eq!(
                JournalEntry::draft_from_form(&form),
                Err(ValidationError::Required {
                    field: "content".to_string()
                })
            );
        }
    }

    #[test]
    fn test_draft() {
        let form = FormValues::new()
            .with("content", "Felt calmer after the walk")
            .with("mood_before", "4")
            .with("mood_after", "7")
            .with("tags", "walk, calm");
        let draft = JournalEntry::draft_from_form(&form).unwrap();
        assert_eq!(draft.title, None);
        assert_eq!(draft.mood_before, Some(4));
        assert_eq!(draft.mood_after, Some(7));
        assert_eq!(draft.tags.as_deref(), Some("walk, calm"));
    }

    #[test]
    fn test_card() {
        let entry: JournalEntry = serde_json::from_value(serde_json::json!({
            "id": 3,
            "date": "2024-05-02T21:00:00",
            "title": null,
            "content": "Felt calmer after the walk",
            "mood_before": 4,
            "mood_after": 7,
            "tags": "walk, calm",
            "is_private": false,
            "created_at": "2024-05-02T21:00:00",
            "updated_at": null
        }))
        .unwrap();

        let card = entry.card();
        assert_eq!(card.heading, "Journal Entry");
        assert!(card.badges.is_empty());
        assert_eq!(card.lines[0].text, "Felt calmer after the walk");
        assert_eq!(card.lines[1].text, "Mood: 4 → 7 (Improved by 3 points)");
        assert_eq!(card.tags, vec!["walk", "calm"]);
    }

    #[test]
    fn test_mood_line_with_one_reading() {
        let entry = JournalEntry {
            id: 1,
            date: NaiveDateTime::default(),
            title: Some("Evening".into()),
            content: "Tired".into(),
            mood_before: None,
            mood_after: Some(3),
            tags: None,
            is_private: true,
            created_at: None,
            updated_at: None,
        };
        let card = entry.card();
        assert_eq!(card.heading, "Evening");
        assert_eq!(card.badges, vec!["🔒 Private"]);
        assert_eq!(card.lines[1].text, "Mood: ? → 3");
    }
}
