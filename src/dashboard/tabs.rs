//! Tab selection

use crate::entity::{EntityKind, UnknownTab};

/// Exactly one active tab, one per entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabController {
    active: EntityKind,
}

impl TabController {
    pub fn new(default: EntityKind) -> Self {
        Self { active: default }
    }

    pub fn active(&self) -> EntityKind {
        self.active
    }

    pub fn is_active(&self, kind: EntityKind) -> bool {
        self.active == kind
    }

    pub fn select(&mut self, kind: EntityKind) {
        self.active = kind;
    }

    /// Activate a tab by name; unknown names leave the current tab active
    pub fn select_by_name(&mut self, name: &str) -> Result<EntityKind, UnknownTab> {
        let kind = EntityKind::from_tab_name(name)?;
        self.select(kind);
        Ok(kind)
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(EntityKind::Mood)
    }
}
