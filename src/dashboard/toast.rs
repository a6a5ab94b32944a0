//! Toast notifications
//!
//! Transient success/error messages. Toasts are never queued or merged:
//! each one lives for the configured lifetime and then goes away.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Default toast lifetime
pub const DEFAULT_TOAST_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

/// Stack of live toasts, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime_ms: u64) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            lifetime: Duration::milliseconds(i64::try_from(lifetime_ms).unwrap_or(i64::MAX)),
        }
    }

    pub fn lifetime_ms(&self) -> u64 {
        u64::try_from(self.lifetime.num_milliseconds()).unwrap_or(0)
    }

    /// Show a toast now; returns its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.push_at(kind, message, Utc::now())
    }

    pub fn push_at(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
            shown_at: now,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Remove one toast; false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Drop every toast older than the lifetime; returns how many went
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        let lifetime = self.lifetime;
        self.items.retain(|t| now - t.shown_at < lifetime);
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter().filter(|t| t.kind == ToastKind::Error)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove and return everything
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.items)
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_MS)
    }
}
