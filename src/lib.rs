//! # Wellcheck
//!
//! Client for a personal wellness tracker: mood check-ins, journal entries,
//! activities and goals, plus a dashboard summary. The crate holds no
//! authoritative data; every view is fetched from the REST backend and
//! re-fetched in full after each change.
//!
//! ## Modules
//!
//! - [`models`]: wire records and POST bodies
//! - [`entity`]: the shared shape of the four record kinds
//! - [`forms`]: form field tables and validation
//! - [`client`]: the backend transport and typed operations
//! - [`dashboard`]: view state and the [`DashboardClient`] controller
//! - [`render`], [`annotate`]: record cards and their emoji annotations
//! - `config`: TOML configuration (native builds only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wellcheck::{ApiClient, DashboardClient, DashboardSettings, EntityKind, MoodEntry};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://localhost:8000")?;
//!     let mut dashboard = DashboardClient::new(client, DashboardSettings::default());
//!
//!     // Stats and all four lists
//!     dashboard.start().await;
//!
//!     // Log a mood check-in
//!     dashboard.set_field(EntityKind::Mood, "mood_level", "7");
//!     dashboard.create::<MoodEntry>().await?;
//!
//!     println!("Average mood: {}", dashboard.stats().display().avg_mood);
//!     Ok(())
//! }
//! ```

pub mod annotate;
pub mod client;
#[cfg(feature = "native")]
pub mod config;
pub mod dashboard;
pub mod entity;
pub mod forms;
pub mod models;
pub mod render;

// Re-export top-level types for convenience
pub use client::{
    create_entity, fetch_list, fetch_stats, submit, Backend, ClientError, CreateError,
    JsonResponse, STATS_PATH,
};

#[cfg(feature = "native")]
pub use client::{ApiClient, DEFAULT_BASE_URL};

pub use dashboard::{
    DashboardClient, DashboardSettings, FormPanel, ListState, Listed, StatsDisplay, StatsPanel,
    TabController, Toast, ToastKind, Toasts,
};

pub use entity::{Entity, EntityKind, ListQuery, UnknownTab};

pub use forms::{FieldKind, FieldSpec, FormValues, ValidationError};

pub use models::{
    Activity, ActivityDraft, DashboardStats, Goal, GoalDraft, JournalDraft, JournalEntry,
    MoodDraft, MoodEntry,
};

pub use render::{render_text, Card, CardLine};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
