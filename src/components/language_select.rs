//! Language picker shared by the input card and the settings modal.

use leptos::prelude::*;

use crate::state::settings::{AccessibilitySettings, Language};

/// `<select>` bound to the shared language setting.
///
/// Changes apply immediately; persistence happens only through the
/// settings modal's save action.
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let settings = expect_context::<RwSignal<AccessibilitySettings>>();

    let on_change = move |ev: leptos::ev::Event| {
        let tag = event_target_value(&ev);
        settings.update(|s| s.selected_lang = Language::from_tag(&tag));
    };

    view! {
        <select
            class="language-select"
            aria-label="Summary language"
            prop:value=move || settings.get().selected_lang.tag()
            on:change=on_change
        >
            {Language::ALL
                .iter()
                .map(|language| {
                    view! { <option value=language.tag()>{language.label()}</option> }
                })
                .collect_view()}
        </select>
    }
}
