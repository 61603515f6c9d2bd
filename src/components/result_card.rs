//! Summary result card with the playback control.

use leptos::prelude::*;

use crate::state::playback::PlaybackState;
use crate::state::settings::AccessibilitySettings;
use crate::state::summary::SummaryState;

/// Result card: summary text sized per settings, play/stop, back.
///
/// The play button only renders once there is summary text; the text area
/// is read-only so screen readers treat it as content, not a form field.
/// `on_play` is unsync because the page-side handler owns the non-Send
/// audio session.
#[component]
pub fn ResultCard(on_play: UnsyncCallback<()>, on_back: Callback<()>) -> impl IntoView {
    let settings = expect_context::<RwSignal<AccessibilitySettings>>();
    let summary = expect_context::<RwSignal<SummaryState>>();
    let playback = expect_context::<RwSignal<PlaybackState>>();

    let has_summary = move || !summary.get().summary.is_empty();
    let is_playing = move || playback.get().playing;
    let font_size_style =
        move || format!("font-size: {}px; line-height: 1.5", settings.get().font_size_px);
    let play_class = move || {
        if is_playing() {
            "button button--ghost result-card__play result-card__play--playing"
        } else {
            "button button--ghost result-card__play"
        }
    };
    let play_label = move || if is_playing() { "Stop audio" } else { "Play audio" };

    let on_play_click = move |_| on_play.run(());
    let on_back_click = move |_| on_back.run(());

    view! {
        <div class="card result-card">
            <div class="card__head">
                <h2 class="card__title">"Summary"</h2>
                <Show when=has_summary>
                    <button class=play_class on:click=on_play_click aria-label=play_label>
                        {move || if is_playing() { "Stop" } else { "Listen" }}
                    </button>
                </Show>
            </div>
            <div class="card__body">
                <Show
                    when=has_summary
                    fallback=move || view! {
                        <div class="result-card__placeholder" style=font_size_style>
                            <p>"There is no summary to show."</p>
                        </div>
                    }
                >
                    <textarea
                        class="result-card__text"
                        readonly=true
                        prop:value=move || summary.get().summary
                        style=font_size_style
                    ></textarea>
                </Show>
                <div class="result-card__actions">
                    <button class="button button--outline" on:click=on_back_click>"← Back"</button>
                </div>
            </div>
        </div>
    }
}
