//! The summarize-and-listen page.
//!
//! ARCHITECTURE
//! ============
//! One page, two faces: the input card swaps to the result card once a
//! summary arrives. The audio session lives in a page-owned slot; shared
//! signals carry only `Send` data so state stays renderer-agnostic.
//!
//! PLAYBACK RESTART
//! ================
//! Changing reading speed, voice height, or language while audio plays
//! stops the current clip and fetches one replacement with the values in
//! effect after a short delay. The `auto_restarting` flag holds further
//! restarts off until the replacement clip starts or fails, so a burst of
//! slider moves produces a single restart.

#[cfg(test)]
#[path = "summarizer_test.rs"]
mod summarizer_test;

#[cfg(feature = "browser")]
use std::cell::RefCell;
#[cfg(feature = "browser")]
use std::rc::Rc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_query_map;

use crate::components::header::Header;
use crate::components::input_card::InputCard;
use crate::components::result_card::ResultCard;
use crate::components::voice_settings_modal::VoiceSettingsModal;
use crate::state::playback::PlaybackState;
use crate::state::settings::{AccessibilitySettings, save_settings, scaled_width_percent, zoom_scale};
use crate::state::summary::{SummaryPage, SummaryState};
use crate::util::alert;
#[cfg(feature = "browser")]
use crate::util::audio::{self, AudioPlayback};
#[cfg(feature = "browser")]
use crate::util::speech;

pub(crate) const INVALID_URL_MESSAGE: &str = "Please enter a valid URL.";

/// Delay between stopping the old clip and fetching the replacement.
#[cfg(feature = "browser")]
const RESTART_DELAY_MS: u32 = 100;

/// Outcome of checking the URL field before a summary request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SummarizeInput {
    /// Trimmed, parseable URL ready to submit.
    Ready(String),
    /// Nothing but whitespace; silently ignored.
    Empty,
    /// Present but not a parseable absolute URL.
    Invalid,
}

pub(crate) fn validate_summarize_input(raw: &str) -> SummarizeInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return SummarizeInput::Empty;
    }
    if url::Url::parse(trimmed).is_err() {
        return SummarizeInput::Invalid;
    }
    SummarizeInput::Ready(trimmed.to_owned())
}

/// Summarize-and-listen page.
#[component]
pub fn SummarizerPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<AccessibilitySettings>>();
    let summary = expect_context::<RwSignal<SummaryState>>();
    let playback = expect_context::<RwSignal<PlaybackState>>();
    let query = use_query_map();

    let url_input = RwSignal::new(String::new());
    let show_voice_modal = RwSignal::new(false);
    let last_init_url = RwSignal::new(None::<String>);
    #[cfg(feature = "browser")]
    let audio_slot = Rc::new(RefCell::new(None::<AudioPlayback>));

    let run_summarize = Callback::new(move |raw: String| {
        let link = match validate_summarize_input(&raw) {
            SummarizeInput::Ready(link) => link,
            SummarizeInput::Empty => return,
            SummarizeInput::Invalid => {
                alert::show(INVALID_URL_MESSAGE);
                return;
            }
        };
        if summary.get_untracked().loading {
            return;
        }
        let language = settings.get_untracked().selected_lang;
        summary.update(|s| {
            s.loading = true;
            s.summary.clear();
        });

        #[cfg(feature = "browser")]
        leptos::task::spawn_local(async move {
            let text = match crate::net::summary::fetch_summary(&link, language).await {
                Ok(text) => text,
                Err(message) => {
                    leptos::logging::warn!("summary request failed: {message}");
                    message
                }
            };
            summary.update(|s| {
                s.summary = text;
                s.page = SummaryPage::Result;
                s.loading = false;
            });
        });
        #[cfg(not(feature = "browser"))]
        {
            let _ = (link, language);
        }
    });

    // Auto-summarize when the page is opened with ?initUrl=..., once per
    // distinct value.
    let init_url = move || query.read().get("initUrl");
    Effect::new(move || {
        let next = init_url();
        if last_init_url.get_untracked() == next {
            return;
        }
        last_init_url.set(next.clone());
        let Some(target) = next else {
            return;
        };
        if target.is_empty() {
            return;
        }
        url_input.set(target.clone());
        run_summarize.run(target);
    });

    // Captures the non-Send audio slot, so it is an `UnsyncCallback`; the
    // handle itself still crosses the view tree.
    let on_play_audio = {
        #[cfg(feature = "browser")]
        {
            let audio_slot = Rc::clone(&audio_slot);
            UnsyncCallback::new(move |()| {
                let text = summary.get_untracked().summary;
                if text.is_empty() {
                    return;
                }
                if playback.get_untracked().playing {
                    audio::stop(&audio_slot);
                    playback.update(|p| {
                        p.playing = false;
                        p.auto_restarting = false;
                    });
                    return;
                }
                let audio_slot = Rc::clone(&audio_slot);
                leptos::task::spawn_local(async move {
                    start_playback(text, audio_slot, settings, playback).await;
                });
            })
        }
        #[cfg(not(feature = "browser"))]
        {
            UnsyncCallback::new(move |()| {})
        }
    };

    // Restart a running playback when voice parameters change.
    #[cfg(feature = "browser")]
    {
        let initial = settings.get_untracked();
        let last_voice_params =
            RwSignal::new((initial.voice_settings.rate, initial.voice_settings.pitch));
        let last_language = RwSignal::new(initial.selected_lang);

        let slot = Rc::clone(&audio_slot);
        Effect::new(move || {
            let voice = settings.get().voice_settings;
            let params = (voice.rate, voice.pitch);
            if last_voice_params.get_untracked() == params {
                return;
            }
            last_voice_params.set(params);
            restart_playback_if_needed(&slot, settings, summary, playback);
        });

        let slot = Rc::clone(&audio_slot);
        Effect::new(move || {
            let language = settings.get().selected_lang;
            if last_language.get_untracked() == language {
                return;
            }
            last_language.set(language);
            restart_playback_if_needed(&slot, settings, summary, playback);
        });
    }

    // `on_cleanup` requires `Send + Sync`; a thread-local `StoredValue`
    // handle carries the non-`Send` slot across that bound. Cleanups run
    // before the owner disposes its stored values, so the read is safe.
    #[cfg(feature = "browser")]
    {
        let audio_slot = StoredValue::new_local(Rc::clone(&audio_slot));
        on_cleanup(move || audio_slot.with_value(audio::stop));
    }

    let on_open_settings = Callback::new(move |()| show_voice_modal.set(true));
    let on_close_settings = Callback::new(move |()| show_voice_modal.set(false));
    let on_save_settings = Callback::new(move |()| {
        save_settings(&settings.get_untracked());
        show_voice_modal.set(false);
    });
    let on_back = Callback::new(move |()| summary.update(|s| s.page = SummaryPage::Input));
    let on_summarize = Callback::new(move |()| run_summarize.run(url_input.get_untracked()));

    let font_size_style = move || format!("font-size: {}px", settings.get().font_size_px);
    let zoom_style = move || {
        let level = settings.get().zoom_level;
        format!(
            "transform: scale({}); transform-origin: top left; width: {}%",
            zoom_scale(level),
            scaled_width_percent(level)
        )
    };

    view! {
        <div class="summarizer">
            <div style=font_size_style>
                <Header on_open_settings=on_open_settings />
                <div class="summarizer__scaled" style=zoom_style>
                    <main class="summarizer__main">
                        {move || match summary.get().page {
                            SummaryPage::Input => {
                                view! { <InputCard url=url_input on_summarize=on_summarize /> }
                                    .into_any()
                            }
                            SummaryPage::Result => {
                                view! { <ResultCard on_play=on_play_audio on_back=on_back /> }
                                    .into_any()
                            }
                        }}
                    </main>
                </div>
            </div>
            <Show when=move || show_voice_modal.get()>
                <VoiceSettingsModal on_save=on_save_settings on_close=on_close_settings />
            </Show>
        </div>
    }
}

/// Fetch a TTS clip for `text` with the current settings and play it.
/// Falls back to the local synthesizer when the fetch or playback fails.
#[cfg(feature = "browser")]
async fn start_playback(
    text: String,
    audio_slot: Rc<RefCell<Option<AudioPlayback>>>,
    settings: RwSignal<AccessibilitySettings>,
    playback: RwSignal<PlaybackState>,
) {
    let current = settings.get_untracked();

    match crate::net::tts::fetch_tts_audio(&text, &current.voice_settings, current.selected_lang)
        .await
    {
        Ok(bytes) => {
            playback.update(|p| p.playing = true);
            let on_settled = move || {
                playback.update(|p| {
                    p.playing = false;
                    p.auto_restarting = false;
                });
            };
            match audio::play_bytes(&bytes, &audio_slot, on_settled).await {
                Ok(()) => {
                    playback.update(|p| p.auto_restarting = false);
                }
                Err(message) => {
                    leptos::logging::warn!("audio playback failed: {message}");
                    audio::stop(&audio_slot);
                    playback.update(|p| {
                        p.playing = false;
                        p.auto_restarting = false;
                    });
                    speak_fallback(&text, &current);
                }
            }
        }
        Err(message) => {
            leptos::logging::warn!("speech request failed: {message}");
            playback.update(|p| {
                p.playing = false;
                p.auto_restarting = false;
            });
            speak_fallback(&text, &current);
        }
    }
}

/// Stop the current clip and schedule one restart with whatever settings
/// are in effect when the delay elapses.
#[cfg(feature = "browser")]
fn restart_playback_if_needed(
    audio_slot: &Rc<RefCell<Option<AudioPlayback>>>,
    settings: RwSignal<AccessibilitySettings>,
    summary: RwSignal<SummaryState>,
    playback: RwSignal<PlaybackState>,
) {
    let state = playback.get_untracked();
    let has_audio = audio_slot.borrow().is_some();
    let text = summary.get_untracked().summary;
    if !state.should_restart_on_change(has_audio, !text.is_empty()) {
        return;
    }

    playback.update(|p| p.auto_restarting = true);
    audio::stop(audio_slot);
    playback.update(|p| p.playing = false);

    let audio_slot = Rc::clone(audio_slot);
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(RESTART_DELAY_MS).await;
        start_playback(text, audio_slot, settings, playback).await;
    });
}

/// Browser speech synthesis fallback; surfaces its own failure as an alert.
#[cfg(feature = "browser")]
fn speak_fallback(text: &str, current: &AccessibilitySettings) {
    if let Err(message) = speech::speak(
        text,
        current.selected_lang.tag(),
        current.voice_settings.rate,
        current.voice_settings.pitch,
        &current.voice_settings.voice,
    ) {
        alert::show(&message);
    }
}
