/// Outcome of a single toggle, carried to the event bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub package_name: String,
    pub checked: bool,
}

/// The checked set. Insertion order is preserved so listeners that receive
/// the whole list see a stable sequence.
#[derive(Clone)]
pub struct SelectionState {
    checked: Vec<String>,
}

impl SelectionState {
    pub fn new(initial_checked: Vec<String>) -> Self {
        Self {
            checked: initial_checked,
        }
    }

    /// Total over rendered rows: an unchecked row becomes checked and vice
    /// versa. Toggling twice restores the original set.
    pub fn toggle(&mut self, package_name: &str) -> SelectionChange {
        if let Some(index) = self.checked.iter().position(|p| p == package_name) {
            self.checked.remove(index);
            SelectionChange {
                package_name: package_name.to_string(),
                checked: false,
            }
        } else {
            self.checked.push(package_name.to_string());
            SelectionChange {
                package_name: package_name.to_string(),
                checked: true,
            }
        }
    }

    pub fn is_checked(&self, package_name: &str) -> bool {
        self.checked.iter().any(|p| p == package_name)
    }

    pub fn checked_list(&self) -> Vec<String> {
        self.checked.clone()
    }

    pub fn count(&self) -> usize {
        self.checked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_list_renders_checked() {
        let state = SelectionState::new(vec!["pkg.a".to_string()]);
        assert!(state.is_checked("pkg.a"));
        assert!(!state.is_checked("pkg.b"));
    }

    #[test]
    fn toggle_reports_the_new_state() {
        let mut state = SelectionState::new(Vec::new());
        let change = state.toggle("pkg.a");
        assert!(change.checked);
        assert!(state.is_checked("pkg.a"));

        let change = state.toggle("pkg.a");
        assert!(!change.checked);
        assert!(!state.is_checked("pkg.a"));
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut state = SelectionState::new(vec!["pkg.a".to_string(), "pkg.b".to_string()]);
        let before = state.checked_list();
        state.toggle("pkg.c");
        state.toggle("pkg.c");
        assert_eq!(state.checked_list(), before);
    }
}
