//! List view state

/// Visible state of one entity list
///
/// Every reload starts over at `Loading`; there is no incremental update.
/// A failed load drops back to `Idle`, showing neither the empty message nor
/// the list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Idle,
    Loading,
    Empty,
    Populated(Vec<T>),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Idle
    }
}

impl<T> ListState<T> {
    /// State after a completed fetch
    pub fn loaded(records: Vec<T>) -> Self {
        if records.is_empty() {
            ListState::Empty
        } else {
            ListState::Populated(records)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn shows_empty(&self) -> bool {
        matches!(self, ListState::Empty)
    }

    pub fn shows_list(&self) -> bool {
        matches!(self, ListState::Populated(_))
    }

    /// Displayed records; empty unless populated
    pub fn records(&self) -> &[T] {
        match self {
            ListState::Populated(records) => records,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_empty() {
        let state: ListState<u8> = ListState::loaded(Vec::new());
        assert!(state.shows_empty());
        assert!(!state.shows_list());
        assert!(state.records().is_empty());
    }

    #[test]
    fn test_loaded_populated() {
        let state = ListState::loaded(vec![1, 2]);
        assert!(state.shows_list());
        assert!(!state.shows_empty());
        assert_eq!(state.records(), &[1, 2]);
    }

    #[test]
    fn test_idle_shows_nothing() {
        let state: ListState<u8> = ListState::default();
        assert!(!state.is_loading());
        assert!(!state.shows_empty());
        assert!(!state.shows_list());
    }
}
