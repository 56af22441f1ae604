
/// Clicking the open item closes it; clicking any other item opens that one.
pub fn toggle<K: Clone + PartialEq>(current: Option<&K>, key: &K) -> Option<K> {
    match current {
        Some(open) if open == key => None,
        _ => Some(key.clone()),
    }
}

pub fn is_active<K: PartialEq>(current: Option<&K>, key: &K) -> bool {
    current == Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::dual_state::DualState;

    const KEYS: [&str; 4] = ["strategy", "build", "launch", "scale"];

    fn active_count(current: Option<&&str>) -> usize {
        KEYS.iter().filter(|k| is_active(current, k)).count()
    }

    #[test]
    fn toggling_open_item_closes_everything() {
        assert_eq!(toggle(Some(&"build"), &"build"), None);
    }

    #[test]
    fn toggling_other_item_switches() {
        assert_eq!(toggle(Some(&"build"), &"launch"), Some("launch"));
        assert_eq!(toggle(None, &"launch"), Some("launch"));
    }

    #[test]
    fn accordion_sequences_keep_at_most_one_open() {
        let mut state: DualState<Option<&str>> = DualState::new(None, None);
        let clicks = ["build", "build", "scale", "strategy", "strategy", "launch", "scale"];
        for key in clicks {
            let write = state.update(|current| toggle(current.as_ref(), &key));
            state.apply(&write);
            assert!(active_count(state.value().as_ref()) <= 1);
        }
        assert_eq!(*state.value(), Some("scale"));
    }

    #[test]
    fn tab_sequences_keep_exactly_one_active() {
        let mut state: DualState<Option<&str>> = DualState::new(None, Some("strategy"));
        for key in ["launch", "build", "build", "scale"] {
            let write = state.write(Some(key));
            state.apply(&write);
            assert_eq!(active_count(state.value().as_ref()), 1);
        }
        assert_eq!(*state.value(), Some("scale"));
    }
}
