use std::collections::BTreeSet;

use contracts::{OrderId, WorklistId};

/// Page-lifetime selection: checked order rows and the worklist in focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    orders: BTreeSet<OrderId>,
    worklist: Option<WorklistId>,
}

/// Enablement of the action controls, derived from [`SelectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlStates {
    pub add_to_worklist: bool,
    pub status_select: bool,
    pub note_input: bool,
    pub action_buttons: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, order_id: OrderId, checked: bool) {
        if checked {
            self.orders.insert(order_id);
        } else {
            self.orders.remove(&order_id);
        }
    }

    pub fn set_many(&mut self, order_ids: &[OrderId], checked: bool) {
        for id in order_ids {
            self.set(*id, checked);
        }
    }

    /// Drop every selected id that is not among `checked`.
    pub fn retain_checked(&mut self, checked: &[OrderId]) {
        self.orders.retain(|id| checked.contains(id));
    }

    pub fn clear_orders(&mut self) {
        self.orders.clear();
    }

    pub fn order_ids(&self) -> Vec<OrderId> {
        self.orders.iter().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn worklist(&self) -> Option<WorklistId> {
        self.worklist
    }

    /// Focus a worklist. The order selection belongs to the previous listing and is dropped.
    pub fn focus_worklist(&mut self, worklist_id: WorklistId) {
        self.worklist = Some(worklist_id);
        self.orders.clear();
    }

    pub fn controls(&self) -> ControlStates {
        let has_selection = !self.orders.is_empty();
        ControlStates {
            add_to_worklist: has_selection && self.worklist.is_some(),
            status_select: has_selection,
            note_input: has_selection,
            action_buttons: has_selection,
        }
    }
}

/// Parse an id rendered into a checkbox value or data attribute.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_worklist_needs_both_selection_and_worklist() {
        let mut state = SelectionState::new();
        state.set(7, true);
        assert!(!state.controls().add_to_worklist);
        assert!(state.controls().action_buttons);

        state.worklist = Some(3);
        assert!(state.controls().add_to_worklist);

        state.set(7, false);
        let controls = state.controls();
        assert!(!controls.add_to_worklist);
        assert!(!controls.status_select);
        assert!(!controls.note_input);
        assert!(!controls.action_buttons);
    }

    #[test]
    fn test_toggles_track_checked_set() {
        let mut state = SelectionState::new();
        state.set(1, true);
        state.set(2, true);
        state.set(1, true);
        state.set(3, true);
        state.set(2, false);
        assert_eq!(state.order_ids(), vec![1, 3]);
    }

    #[test]
    fn test_focus_worklist_clears_orders() {
        let mut state = SelectionState::new();
        state.set_many(&[1, 2], true);
        state.focus_worklist(5);
        assert!(state.is_empty());
        assert_eq!(state.worklist(), Some(5));
    }

    #[test]
    fn test_retain_checked() {
        let mut state = SelectionState::new();
        state.set_many(&[1, 2, 3], true);
        state.retain_checked(&[2, 9]);
        assert_eq!(state.order_ids(), vec![2]);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" 42 "), Some(42));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
