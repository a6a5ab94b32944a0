//! Record types
//!
//! The four tracked record kinds, their POST bodies, and the dashboard stats
//! summary. Each record module also carries its creation form table and card
//! template through its [`Entity`](crate::entity::Entity) impl.
//!
//! Records are read-only on the client: they are listed and created, never
//! updated or deleted.

mod activity;
mod goal;
mod journal;
mod mood;
mod stats;

pub use activity::{Activity, ActivityDraft, ACTIVITY_TYPES};
pub use goal::{Goal, GoalDraft, GOAL_TYPES};
pub use journal::{JournalDraft, JournalEntry};
pub use mood::{MoodDraft, MoodEntry};
pub use stats::DashboardStats;

/// Lenient timestamp parsing for backend datetimes
///
/// The backend emits naive ISO-8601 (`2024-05-01T09:30:00.123456`); RFC 3339
/// with an offset and bare dates are accepted as well.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        raw.parse::<NaiveDateTime>()
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {}", raw)))
    }

    pub mod option {
        use super::*;

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            match Option::<String>::deserialize(d)? {
                None => Ok(None),
                Some(raw) => parse(&raw)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {}", raw))),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_formats() {
            let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(9, 30, 0))
                .unwrap();
            assert_eq!(parse("2024-05-01T09:30:00"), Some(expected));
            assert_eq!(parse("2024-05-01T09:30:00Z"), Some(expected));
            assert_eq!(parse("2024-05-01T11:30:00+02:00"), Some(expected));
            assert_eq!(
                parse("2024-05-01").map(|d| d.date()),
                Some(expected.date())
            );
            assert!(parse("2024-05-01T09:30:00.123456").is_some());
            assert_eq!(parse("yesterday"), None);
        }
    }
}
