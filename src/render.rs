//! Record cards
//!
//! A [`Card`] is the display form of one record: a heading, emoji badges,
//! optional detail lines and tag chips. Each entity kind builds its own card;
//! the browser renders cards into the DOM and the CLI into plain text.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::Write;

/// One detail line of a card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardLine {
    /// CSS class in the browser, ignored in text output
    pub class: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub class: &'static str,
    pub heading: String,
    pub date: Option<NaiveDateTime>,
    /// Right-hand status label, used where a card has no date
    pub status: Option<&'static str>,
    pub badges: Vec<String>,
    pub lines: Vec<CardLine>,
    pub tags: Vec<String>,
}

impl Card {
    pub fn new(class: &'static str, heading: impl Into<String>) -> Self {
        Self {
            class,
            heading: heading.into(),
            date: None,
            status: None,
            badges: Vec::new(),
            lines: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn status(mut self, status: &'static str) -> Self {
        self.status = Some(status);
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badges.push(badge.into());
        self
    }

    pub fn line(mut self, class: &'static str, text: impl Into<String>) -> Self {
        self.lines.push(CardLine {
            class,
            text: text.into(),
        });
        self
    }

    /// Add a line only when there is something to say
    pub fn line_opt(self, class: &'static str, text: Option<String>) -> Self {
        match text {
            Some(t) => self.line(class, t),
            None => self,
        }
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Date column as shown in text output
    pub fn date_label(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Render a card as an indented text block
pub fn render_text(card: &Card) -> String {
    let mut out = String::new();

    let right = card
        .date_label()
        .or_else(|| card.status.map(str::to_string))
        .unwrap_or_default();
    let _ = write!(out, "{}", card.heading);
    if !right.is_empty() {
        let _ = write!(out, "  [{}]", right);
    }
    out.push('\n');

    if !card.badges.is_empty() {
        let _ = writeln!(out, "    {}", card.badges.join("   "));
    }
    for line in &card.lines {
        let _ = writeln!(out, "    {}", line.text);
    }
    if !card.tags.is_empty() {
        let _ = writeln!(out, "    Tags: {}", card.tags.join(", "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    #[test]
    fn test_line_opt_skips_none() {
        let card = Card::new("mood-entry", "Good")
            .line_opt("mood-notes", None)
            .line_opt("mood-notes", Some("walked".into()));
        assert_eq!(card.lines.len(), 1);
        assert_eq!(card.lines[0].text, "walked");
    }

    #[test]
    fn test_render_text() {
        let card = Card::new("mood-entry", "Good")
            .date(sample_date())
            .badge("😊 7/10")
            .badge("⚡ 8/10")
            .line("", "Sleep: 7.5 hours")
            .tags(vec!["work".into(), "family".into()]);

        let text = render_text(&card);
        assert_eq!(
            text,
            "Good  [2024-05-01]\n    😊 7/10   ⚡ 8/10\n    Sleep: 7.5 hours\n    Tags: work, family\n"
        );
    }

    #[test]
    fn test_render_text_uses_status_without_date() {
        let card = Card::new("goal-item", "🎯 Run 5k").status("Active");
        assert_eq!(render_text(&card), "🎯 Run 5k  [Active]\n");
    }
}
