//! Emoji and badge annotations
//!
//! Threshold tables used when rendering records. All level inputs are on the
//! 1-10 scale.

/// Mood level: ≥ 7 happy, ≥ 4 neutral, else sad
pub fn mood_emoji(level: i64) -> &'static str {
    if level >= 7 {
        "😊"
    } else if level >= 4 {
        "😐"
    } else {
        "😢"
    }
}

pub fn energy_emoji(level: i64) -> &'static str {
    if level >= 7 {
        "⚡"
    } else if level >= 4 {
        "🔋"
    } else {
        "😴"
    }
}

pub fn stress_emoji(level: i64) -> &'static str {
    if level >= 7 {
        "😰"
    } else if level >= 4 {
        "😟"
    } else {
        "😌"
    }
}

pub fn mood_description(level: i64) -> &'static str {
    match level {
        9.. => "Excellent",
        7..=8 => "Good",
        5..=6 => "Okay",
        3..=4 => "Low",
        _ => "Very Low",
    }
}

/// Activity type icon, case-insensitive
pub fn activity_emoji(activity_type: &str) -> &'static str {
    match activity_type.trim().to_lowercase().as_str() {
        "meditation" => "🧘",
        "exercise" => "💪",
        "reading" => "📚",
        "social" => "👥",
        "music" => "🎵",
        "art" => "🎨",
        "nature" => "🌳",
        "sleep" => "😴",
        "gratitude" => "🙏",
        "therapy" => "💬",
        _ => "✨",
    }
}

/// `deep_breathing` -> `deep breathing`
pub fn humanize(value: &str) -> String {
    value.replace('_', " ")
}

/// Describe the change between two journal mood readings
///
/// Both readings must be present.
pub fn mood_change(before: Option<i64>, after: Option<i64>) -> Option<String> {
    let change = after? - before?;
    Some(match change {
        1 => "Slightly improved".to_string(),
        0 => "No change".to_string(),
        -1 => "Slightly decreased".to_string(),
        c if c > 1 => format!("Improved by {} points", c),
        c => format!("Decreased by {} points", c.abs()),
    })
}

/// Goal completion percentage, capped at 100
///
/// Goals without a target report 0. A non-positive target counts as reached
/// once the current value meets it.
pub fn goal_progress(current: f64, target: Option<f64>) -> f64 {
    match target {
        None => 0.0,
        Some(t) if t <= 0.0 => {
            if current >= t {
                100.0
            } else {
                0.0
            }
        }
        Some(t) => (current / t * 100.0).min(100.0),
    }
}

pub fn goal_status_emoji(is_completed: bool, progress: f64) -> &'static str {
    if is_completed {
        "✅"
    } else if progress >= 75.0 {
        "🚀"
    } else if progress >= 50.0 {
        "📈"
    } else if progress >= 25.0 {
        "🔄"
    } else {
        "🎯"
    }
}

/// Split a comma-separated tag string, dropping blanks
pub fn parse_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_thresholds() {
        assert_eq!(mood_emoji(10), "😊");
        assert_eq!(mood_emoji(7), "😊");
        assert_eq!(mood_emoji(6), "😐");
        assert_eq!(mood_emoji(4), "😐");
        assert_eq!(mood_emoji(3), "😢");
        assert_eq!(mood_emoji(1), "😢");
    }

    #[test]
    fn test_energy_and_stress_thresholds() {
        assert_eq!(energy_emoji(8), "⚡");
        assert_eq!(energy_emoji(5), "🔋");
        assert_eq!(energy_emoji(2), "😴");

        assert_eq!(stress_emoji(9), "😰");
        assert_eq!(stress_emoji(4), "😟");
        assert_eq!(stress_emoji(3), "😌");
    }

    #[test]
    fn test_mood_description() {
        assert_eq!(mood_description(9), "Excellent");
        assert_eq!(mood_description(8), "Good");
        assert_eq!(mood_description(5), "Okay");
        assert_eq!(mood_description(3), "Low");
        assert_eq!(mood_description(1), "Very Low");
    }

    #[test]
    fn test_activity_emoji() {
        assert_eq!(activity_emoji("meditation"), "🧘");
        assert_eq!(activity_emoji("Exercise"), "💪");
        assert_eq!(activity_emoji("knitting"), "✨");
    }

    #[test]
    fn test_mood_change() {
        assert_eq!(mood_change(Some(3), Some(7)).as_deref(), Some("Improved by 4 points"));
        assert_eq!(mood_change(Some(5), Some(6)).as_deref(), Some("Slightly improved"));
        assert_eq!(mood_change(Some(5), Some(5)).as_deref(), Some("No change"));
        assert_eq!(mood_change(Some(6), Some(5)).as_deref(), Some("Slightly decreased"));
        assert_eq!(mood_change(Some(8), Some(2)).as_deref(), Some("Decreased by 6 points"));
        assert_eq!(mood_change(None, Some(2)), None);
    }

    #[test]
    fn test_goal_progress() {
        assert_eq!(goal_progress(3.0, Some(4.0)), 75.0);
        assert_eq!(goal_progress(12.0, Some(4.0)), 100.0);
        assert_eq!(goal_progress(3.0, None), 0.0);
        assert_eq!(goal_progress(0.0, Some(0.0)), 100.0);
    }

    #[test]
    fn test_goal_status() {
        assert_eq!(goal_status_emoji(true, 0.0), "✅");
        assert_eq!(goal_status_emoji(false, 80.0), "🚀");
        assert_eq!(goal_status_emoji(false, 50.0), "📈");
        assert_eq!(goal_status_emoji(false, 30.0), "🔄");
        assert_eq!(goal_status_emoji(false, 10.0), "🎯");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(Some("work, sleep,, family ")), vec!["work", "sleep", "family"]);
        assert!(parse_tags(None).is_empty());
    }
}
