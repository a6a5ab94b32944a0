//! Dashboard View State
//!
//! Presentation state shared by the CLI and the browser dashboard:
//!
//! - [`list`]: per-kind list view state machine
//! - [`stats`]: stats panel formatting
//! - [`tabs`]: active tab
//! - [`toast`]: transient success/error messages
//! - [`form`]: inline creation forms
//! - [`load`]: storing fetch results into the above
//! - [`controller`]: [`DashboardClient`], which ties the above to a backend

pub mod controller;
pub mod form;
pub mod list;
pub mod load;
pub mod stats;
pub mod tabs;
pub mod toast;

pub use controller::{DashboardClient, DashboardSettings, Listed, Lists};
pub use form::FormPanel;
pub use list::ListState;
pub use load::{apply_list, apply_stats, create_failed, reload, ListLoad, StartupLoad};
pub use stats::{StatsDisplay, StatsPanel, NOT_AVAILABLE};
pub use tabs::TabController;
pub use toast::{Toast, ToastKind, Toasts, DEFAULT_TOAST_MS};
