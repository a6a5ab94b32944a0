//! Inline creation forms

use crate::entity::EntityKind;
use crate::forms::FormValues;

/// Visibility and current values of one creation form
#[derive(Debug, Clone, PartialEq)]
pub struct FormPanel {
    kind: EntityKind,
    visible: bool,
    values: FormValues,
}

impl FormPanel {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            visible: false,
            values: FormValues::with_defaults(kind.fields()),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide and reset every field to its default
    pub fn hide(&mut self) {
        self.visible = false;
        self.values = FormValues::with_defaults(self.kind.fields());
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.values.set(name, value);
    }

    /// Overwrite the given fields, leaving the rest as they are
    pub fn fill(&mut self, values: &FormValues) {
        for (name, value) in values.iter() {
            self.values.set(name, value);
        }
    }
}
