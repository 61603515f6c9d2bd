//! Top banner with zoom controls and the voice settings trigger.

use leptos::prelude::*;

use crate::state::settings::{AccessibilitySettings, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, zoom_in, zoom_out};

/// Page header: title, zoom percentage controls, settings trigger.
///
/// Zoom buttons disable at the bounds instead of silently clamping so the
/// limit is visible to screen readers as well.
#[component]
pub fn Header(on_open_settings: Callback<()>) -> impl IntoView {
    let settings = expect_context::<RwSignal<AccessibilitySettings>>();

    let zoom_label = move || format!("{}%", settings.get().zoom_level);
    let at_min = move || settings.get().zoom_level <= ZOOM_MIN;
    let at_max = move || settings.get().zoom_level >= ZOOM_MAX;

    let on_zoom_out = move |_| settings.update(|s| s.zoom_level = zoom_out(s.zoom_level));
    let on_zoom_in = move |_| settings.update(|s| s.zoom_level = zoom_in(s.zoom_level));
    let on_zoom_reset = move |_| settings.update(|s| s.zoom_level = ZOOM_DEFAULT);
    let on_settings_click = move |_| on_open_settings.run(());

    view! {
        <header class="app-header">
            <div class="app-header__titles">
                <h1 class="app-header__title">"PageSpeak"</h1>
                <p class="app-header__subtitle">"Webpage summaries for low-vision readers"</p>
            </div>
            <div class="app-header__toolbar">
                <div class="zoom-controls" role="group" aria-label="Page zoom">
                    <button class="button button--ghost" on:click=on_zoom_out disabled=at_min aria-label="Zoom out">
                        "-"
                    </button>
                    <span class="zoom-controls__level">{zoom_label}</span>
                    <button class="button button--ghost" on:click=on_zoom_in disabled=at_max aria-label="Zoom in">
                        "+"
                    </button>
                    <button class="button button--ghost" on:click=on_zoom_reset aria-label="Reset zoom">
                        "Reset"
                    </button>
                </div>
                <button class="button button--outline" on:click=on_settings_click>"Voice Settings"</button>
            </div>
        </header>
    }
}
