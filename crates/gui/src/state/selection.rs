/// Which cube (by index) is selected, if any.
///
/// Indices are positions in the scene's cube list; they are only valid
/// until the next removal, so callers report removals via `on_removed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    /// Selected cube index
    pub fn primary(&self) -> Option<usize> {
        self.selected
    }

    /// Check if a cube is selected
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Select a single cube (replaces previous selection)
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Clear selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Keep the selection consistent after the cube at `index` was removed
    pub fn on_removed(&mut self, index: usize) {
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = SelectionState::default();
        assert!(s.primary().is_none());
        assert!(!s.has_selection());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut s = SelectionState::default();
        s.select(1);
        s.select(4);
        assert_eq!(s.primary(), Some(4));
        assert!(!s.is_selected(1));
        assert!(s.is_selected(4));
    }

    #[test]
    fn test_clear() {
        let mut s = SelectionState::default();
        s.select(2);
        s.clear();
        assert!(s.primary().is_none());
    }

    #[test]
    fn test_removed_selected_clears() {
        let mut s = SelectionState::default();
        s.select(2);
        s.on_removed(2);
        assert!(s.primary().is_none());
    }

    #[test]
    fn test_removed_before_selected_shifts() {
        let mut s = SelectionState::default();
        s.select(3);
        s.on_removed(0);
        assert_eq!(s.primary(), Some(2));
        s.on_removed(5);
        assert_eq!(s.primary(), Some(2));
    }
}
