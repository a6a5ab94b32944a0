//! UI Components
//!
//! Leptos components for the dashboard. The entity list and form are plain
//! generic functions over [`wellcheck::Listed`], written once for all four
//! record kinds.

pub mod card;
pub mod entity_form;
pub mod entity_list;
pub mod loading;
pub mod stats_panel;
pub mod tabs;
pub mod toast;

pub use card::CardView;
pub use entity_form::entity_form;
pub use entity_list::entity_list;
pub use loading::Loading;
pub use stats_panel::StatsHeader;
pub use tabs::TabBar;
pub use toast::Toast;
