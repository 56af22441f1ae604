use log::info;
use yew::prelude::*;

use super::listener::document;
use crate::state::locale::LanguageState;
use crate::translations::{Language, Translations};

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    set_language: Callback<Language>,
    toggle: Callback<()>,
}

impl LanguageContext {
    pub fn t(&self) -> &'static Translations {
        self.language.translations()
    }

    pub fn set_language(&self, language: Language) {
        self.set_language.emit(language);
    }

    pub fn toggle_language(&self) {
        self.toggle.emit(());
    }

    pub fn available(&self) -> &'static [Language] {
        &Language::ALL
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("use_language must be used within a LanguageProvider")
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub initial: Language,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let state = {
        let initial = props.initial;
        use_state(move || LanguageState::new(initial))
    };

    use_effect_with_deps(
        |language: &Language| {
            if let Some(root) = document().and_then(|d| d.document_element()) {
                let _ = root.set_attribute("lang", language.code());
            }
            info!("Language set to {}", language.code());
            || ()
        },
        state.current(),
    );

    let set_language = {
        let state = state.clone();
        Callback::from(move |language: Language| {
            let mut next = *state;
            next.set(language);
            state.set(next);
        })
    };
    let toggle = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = *state;
            next.toggle();
            state.set(next);
        })
    };
    let context = LanguageContext { language: state.current(), set_language, toggle };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}

/// Navbar toggle showing the code of the language it switches to.
#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let language = use_language();
    let t = language.t();
    let onclick = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| language.toggle_language())
    };

    html! {
        <button
            type="button"
            class="language-switcher"
            aria-label={format!("{} / {}", t.meta.name, t.navbar.toggle_label)}
            {onclick}
        >
            { t.navbar.toggle_label }
        </button>
    }
}
