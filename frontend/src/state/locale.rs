use crate::translations::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageState {
    current: Language,
}

impl LanguageState {
    pub fn new(current: Language) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn set(&mut self, language: Language) {
        self.current = language;
    }

    pub fn toggle(&mut self) -> Language {
        let all = Language::ALL;
        if all.len() > 1 {
            let index = all.iter().position(|l| *l == self.current).unwrap_or(0);
            self.current = all[(index + 1) % all.len()];
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        assert_eq!(LanguageState::default().current(), Language::En);
    }

    #[test]
    fn toggle_cycles_through_all_languages() {
        let mut state = LanguageState::default();
        assert_eq!(state.toggle(), Language::Pt);
        assert_eq!(state.toggle(), Language::En);
    }

    #[test]
    fn set_selects_directly() {
        let mut state = LanguageState::new(Language::Pt);
        state.set(Language::Pt);
        assert_eq!(state.current(), Language::Pt);
        state.set(Language::En);
        assert_eq!(state.current(), Language::En);
        assert_eq!(state.toggle(), Language::Pt);
    }
}
