//! Modal for adjusting speech, font, and language settings.

use leptos::prelude::*;

use crate::components::language_select::LanguageSelect;
use crate::state::settings::{
    AccessibilitySettings, FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP, VOICE_PARAM_MAX,
    VOICE_PARAM_MIN, VOICE_PARAM_STEP,
};

/// Settings modal. Slider and language changes apply immediately so a
/// running playback can pick them up; `on_save` persists the record,
/// `on_close` discards nothing.
#[component]
pub fn VoiceSettingsModal(on_save: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let settings = expect_context::<RwSignal<AccessibilitySettings>>();

    let rate_label = move || format!("Reading speed: {:.1}", settings.get().voice_settings.rate);
    let pitch_label = move || format!("Voice height: {:.1}", settings.get().voice_settings.pitch);
    let font_label = move || format!("Font size: {}px", settings.get().font_size_px);

    let on_rate_input = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            settings.update(|s| s.voice_settings.rate = value);
        }
    };
    let on_pitch_input = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            settings.update(|s| s.voice_settings.pitch = value);
        }
    };
    let on_font_input = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<i32>() {
            settings.update(|s| s.font_size_px = value);
        }
    };

    let on_backdrop = move |_| on_close.run(());
    let on_save_click = move |_| on_save.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="voice-settings-modal__backdrop" on:click=on_backdrop>
            <div
                class="voice-settings-modal"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="voice-settings-modal__head">
                    <h3>"Voice Settings"</h3>
                </div>
                <div class="voice-settings-modal__body">
                    <label for="voice-rate">{rate_label}</label>
                    <input
                        id="voice-rate"
                        type="range"
                        min=VOICE_PARAM_MIN
                        max=VOICE_PARAM_MAX
                        step=VOICE_PARAM_STEP
                        prop:value=move || settings.get().voice_settings.rate.to_string()
                        on:input=on_rate_input
                    />
                    <label for="voice-pitch">{pitch_label}</label>
                    <input
                        id="voice-pitch"
                        type="range"
                        min=VOICE_PARAM_MIN
                        max=VOICE_PARAM_MAX
                        step=VOICE_PARAM_STEP
                        prop:value=move || settings.get().voice_settings.pitch.to_string()
                        on:input=on_pitch_input
                    />
                    <label for="voice-font-size">{font_label}</label>
                    <input
                        id="voice-font-size"
                        type="range"
                        min=FONT_SIZE_MIN
                        max=FONT_SIZE_MAX
                        step=FONT_SIZE_STEP
                        prop:value=move || settings.get().font_size_px.to_string()
                        on:input=on_font_input
                    />
                    <label>"Language"</label>
                    <LanguageSelect />
                </div>
                <div class="voice-settings-modal__foot">
                    <button class="button button--primary" on:click=on_save_click>"Save"</button>
                    <button class="button button--outline" on:click=on_close_click>"Close"</button>
                </div>
            </div>
        </div>
    }
}
