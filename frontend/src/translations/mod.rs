mod en;
mod pt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Pt,
}

impl Language {
    /// Every language with a bundle, in switcher order.
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    pub fn code(self) -> &'static str {
        self.translations().meta.code
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::En => &en::EN,
            Language::Pt => &pt::PT,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

#[derive(Debug, PartialEq)]
pub struct TranslationMeta {
    pub code: &'static str,
    pub label: &'static str,
    pub name: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct NavbarTranslations {
    pub services: &'static str,
    pub case_studies: &'static str,
    pub process: &'static str,
    pub philosophy: &'static str,
    pub engagement: &'static str,
    pub cta: &'static str,
    pub toggle_label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct HeroTranslations {
    pub strap: &'static str,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub scroll_top: &'static str,
    pub scroll_bottom: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactTranslations {
    pub dialog_title: &'static str,
    pub dialog_description: &'static str,
    pub close_label: &'static str,
    pub full_name: &'static str,
    pub work_email: &'static str,
    pub company: &'static str,
    pub challenge: &'static str,
    pub challenge_placeholder: &'static str,
    pub project: &'static str,
    pub submit: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub fallback_error: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ToastTranslations {
    pub notice: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub dismiss: &'static str,
    pub sent_title: &'static str,
    pub failed_title: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Translations {
    pub meta: TranslationMeta,
    pub navbar: NavbarTranslations,
    pub hero: HeroTranslations,
    pub contact: ContactTranslations,
    pub toast: ToastTranslations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Pt.code(), "pt");
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(Language::En.translations().navbar.toggle_label, Language::Pt.translations().meta.label);
        assert_eq!(Language::Pt.translations().navbar.toggle_label, Language::En.translations().meta.label);
    }

    #[test]
    fn bundles_have_no_blank_strings() {
        for language in Language::ALL {
            let t = language.translations();
            let strings = [
                t.meta.name, t.navbar.cta, t.hero.headline, t.hero.primary_cta,
                t.contact.submit, t.contact.success, t.contact.fallback_error,
                t.toast.dismiss, t.toast.sent_title,
            ];
            assert!(strings.iter().all(|s| !s.trim().is_empty()), "{:?}", language);
        }
    }
}
