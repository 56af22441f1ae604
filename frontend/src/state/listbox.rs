#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListboxKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Space,
    Escape,
    Other,
}

impl ListboxKey {
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowDown" => ListboxKey::ArrowDown,
            "ArrowUp" => ListboxKey::ArrowUp,
            "Enter" => ListboxKey::Enter,
            " " | "Spacebar" => ListboxKey::Space,
            "Escape" | "Esc" => ListboxKey::Escape,
            _ => ListboxKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListboxEffect {
    None,
    Opened,
    Highlight(usize),
    /// Focus goes back to the trigger.
    Commit(usize),
    /// Closed without a selection change; focus goes back to the trigger.
    Dismissed,
    /// Focus is left where the user put it.
    ClosedOutside,
}

impl ListboxEffect {
    pub fn consumes_key(self) -> bool {
        !matches!(self, ListboxEffect::None | ListboxEffect::ClosedOutside)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Listbox {
    open: bool,
    highlighted: Option<usize>,
}

impl Listbox {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        if self.open { self.highlighted } else { None }
    }

    pub fn open(&mut self, selected: Option<usize>, len: usize) -> ListboxEffect {
        if self.open {
            return ListboxEffect::None;
        }
        self.open = true;
        self.highlighted = match selected {
            Some(index) if index < len => Some(index),
            _ if len > 0 => Some(0),
            _ => None,
        };
        ListboxEffect::Opened
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn toggle(&mut self, selected: Option<usize>, len: usize) -> ListboxEffect {
        if self.open {
            self.close();
            ListboxEffect::Dismissed
        } else {
            self.open(selected, len)
        }
    }

    pub fn key(&mut self, key: ListboxKey, selected: Option<usize>, len: usize) -> ListboxEffect {
        if !self.open {
            return match key {
                ListboxKey::ArrowDown | ListboxKey::Enter | ListboxKey::Space => self.open(selected, len),
                _ => ListboxEffect::None,
            };
        }

        match key {
            ListboxKey::ArrowDown => self.step(len, 1),
            ListboxKey::ArrowUp => self.step(len, -1),
            ListboxKey::Enter | ListboxKey::Space => match self.highlighted {
                Some(index) if index < len => {
                    self.close();
                    ListboxEffect::Commit(index)
                }
                // empty list: nothing to commit, stay open
                _ => ListboxEffect::None,
            },
            ListboxKey::Escape => {
                self.close();
                ListboxEffect::Dismissed
            }
            ListboxKey::Other => ListboxEffect::None,
        }
    }

    pub fn hover(&mut self, index: usize, len: usize) -> ListboxEffect {
        if !self.open || index >= len || self.highlighted == Some(index) {
            return ListboxEffect::None;
        }
        self.highlighted = Some(index);
        ListboxEffect::Highlight(index)
    }

    pub fn click_option(&mut self, index: usize, len: usize) -> ListboxEffect {
        if index >= len {
            return ListboxEffect::None;
        }
        self.close();
        ListboxEffect::Commit(index)
    }

    /// Pointer-down, focus or a key press landing outside the trigger and list.
    pub fn outside(&mut self) -> ListboxEffect {
        if !self.open {
            return ListboxEffect::None;
        }
        self.close();
        ListboxEffect::ClosedOutside
    }

    fn step(&mut self, len: usize, delta: isize) -> ListboxEffect {
        if len == 0 {
            return ListboxEffect::None;
        }
        let current = self.highlighted.unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.highlighted = Some(next);
        ListboxEffect::Highlight(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(selected: Option<usize>, len: usize) -> Listbox {
        let mut listbox = Listbox::default();
        assert_eq!(listbox.key(ListboxKey::ArrowDown, selected, len), ListboxEffect::Opened);
        listbox
    }

    #[test]
    fn starts_closed() {
        let listbox = Listbox::default();
        assert!(!listbox.is_open());
        assert_eq!(listbox.highlighted(), None);
    }

    #[test]
    fn opening_highlights_selection_or_first_row() {
        assert_eq!(opened(Some(2), 4).highlighted(), Some(2));
        assert_eq!(opened(None, 4).highlighted(), Some(0));
        assert_eq!(opened(None, 0).highlighted(), None);
    }

    #[test]
    fn trigger_keys_open_only_with_open_keys() {
        for key in [ListboxKey::Enter, ListboxKey::Space, ListboxKey::ArrowDown] {
            let mut listbox = Listbox::default();
            assert_eq!(listbox.key(key, None, 3), ListboxEffect::Opened);
        }
        let mut listbox = Listbox::default();
        assert_eq!(listbox.key(ListboxKey::ArrowUp, None, 3), ListboxEffect::None);
        assert_eq!(listbox.key(ListboxKey::Escape, None, 3), ListboxEffect::None);
        assert!(!listbox.is_open());
    }

    #[test]
    fn arrow_down_wraps_modulo_length() {
        let len = 4;
        for start in 0..len {
            for presses in 0..10 {
                let mut listbox = opened(Some(start), len);
                for _ in 0..presses {
                    listbox.key(ListboxKey::ArrowDown, Some(start), len);
                }
                assert_eq!(listbox.highlighted(), Some((start + presses) % len));
            }
        }
    }

    #[test]
    fn arrow_up_is_the_inverse() {
        let len = 3;
        let mut listbox = opened(Some(1), len);
        for _ in 0..7 {
            listbox.key(ListboxKey::ArrowDown, Some(1), len);
        }
        for _ in 0..7 {
            listbox.key(ListboxKey::ArrowUp, Some(1), len);
        }
        assert_eq!(listbox.highlighted(), Some(1));

        let mut listbox = opened(None, len);
        assert_eq!(listbox.key(ListboxKey::ArrowUp, None, len), ListboxEffect::Highlight(2));
    }

    #[test]
    fn enter_commits_highlight_and_closes() {
        let mut listbox = opened(None, 4);
        listbox.key(ListboxKey::ArrowDown, None, 4);
        assert_eq!(listbox.key(ListboxKey::Enter, None, 4), ListboxEffect::Commit(1));
        assert!(!listbox.is_open());
    }

    #[test]
    fn space_commits_too() {
        let mut listbox = opened(Some(3), 4);
        assert_eq!(listbox.key(ListboxKey::Space, Some(3), 4), ListboxEffect::Commit(3));
    }

    #[test]
    fn escape_dismisses_without_commit() {
        let mut listbox = opened(Some(1), 4);
        listbox.key(ListboxKey::ArrowDown, Some(1), 4);
        assert_eq!(listbox.key(ListboxKey::Escape, Some(1), 4), ListboxEffect::Dismissed);
        assert!(!listbox.is_open());
    }

    #[test]
    fn outside_interaction_closes_only_when_open() {
        let mut listbox = Listbox::default();
        assert_eq!(listbox.outside(), ListboxEffect::None);
        let mut listbox = opened(None, 2);
        assert_eq!(listbox.outside(), ListboxEffect::ClosedOutside);
        assert!(!listbox.is_open());
    }

    #[test]
    fn tabbing_away_closes_without_swallowing_keys() {
        let mut listbox = opened(Some(0), 3);
        let effect = listbox.outside();
        assert_eq!(effect, ListboxEffect::ClosedOutside);
        assert!(!effect.consumes_key());
        // typing elsewhere afterwards never commits a row
        assert_eq!(listbox.key(ListboxKey::Other, Some(0), 3), ListboxEffect::None);
        assert_eq!(listbox.highlighted(), None);
    }

    #[test]
    fn empty_list_never_commits() {
        let mut listbox = opened(None, 0);
        assert_eq!(listbox.key(ListboxKey::ArrowDown, None, 0), ListboxEffect::None);
        assert_eq!(listbox.key(ListboxKey::Enter, None, 0), ListboxEffect::None);
        assert!(listbox.is_open());
    }

    #[test]
    fn hover_moves_highlight() {
        let mut listbox = opened(None, 3);
        assert_eq!(listbox.hover(2, 3), ListboxEffect::Highlight(2));
        assert_eq!(listbox.hover(2, 3), ListboxEffect::None);
        assert_eq!(listbox.hover(5, 3), ListboxEffect::None);
        assert_eq!(listbox.key(ListboxKey::Enter, None, 3), ListboxEffect::Commit(2));
    }

    #[test]
    fn toggle_flips_open_state() {
        let mut listbox = Listbox::default();
        assert_eq!(listbox.toggle(None, 2), ListboxEffect::Opened);
        assert_eq!(listbox.toggle(None, 2), ListboxEffect::Dismissed);
        assert!(!listbox.is_open());
    }

    #[test]
    fn key_names_map_from_dom() {
        assert_eq!(ListboxKey::from_key(" "), ListboxKey::Space);
        assert_eq!(ListboxKey::from_key("Esc"), ListboxKey::Escape);
        assert_eq!(ListboxKey::from_key("Tab"), ListboxKey::Other);
    }
}
