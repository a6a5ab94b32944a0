use mockito::{Mock, ServerGuard};
use serde_json::{json, Value};

/// Register a JSON response on the mock server
pub async fn json_mock(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: Value,
) -> Mock {
    server
        .mock(method, path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub fn stats_body() -> Value {
    json!({
        "total_entries": 12,
        "avg_mood": 6.66,
        "total_journal_entries": 4,
        "active_goals": 2
    })
}

pub fn mood_record(id: i64, level: i64) -> Value {
    json!({
        "id": id,
        "date": "2024-05-01T09:30:00.123456",
        "mood_level": level,
        "energy_level": 7,
        "stress_level": 2,
        "sleep_hours": 8.0,
        "notes": "Slept well",
        "created_at": "2024-05-01T09:30:00.123456"
    })
}

#[allow(dead_code)] // Only used by the dashboard flow tests.
pub fn goal_record(id: i64, title: &str, current: f64, target: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "goal_type": "weekly",
        "target_value": target,
        "current_value": current,
        "target_date": "2024-06-30T00:00:00",
        "start_date": "2024-05-01T00:00:00",
        "is_completed": false,
        "created_at": "2024-05-01T00:00:00",
        "updated_at": null
    })
}
