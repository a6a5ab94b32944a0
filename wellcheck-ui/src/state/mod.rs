//! Application State
//!
//! Reactive state shared by all components.

pub mod global;
