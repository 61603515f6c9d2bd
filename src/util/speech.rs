//! Browser speech-synthesis fallback and voice matching.
//!
//! Used when the remote TTS endpoint fails. Voice matching is pure so
//! the selection order can be tested on the host.

#[cfg(test)]
#[path = "speech_test.rs"]
mod speech_test;

#[cfg(feature = "browser")]
use wasm_bindgen::JsCast;

/// A voice option surfaced by the platform synthesizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

/// Pick a voice for `lang_tag`: exact tag match first, then the language
/// family prefix. An explicit `preferred_name` other than "default"
/// overrides the language-based pick when present.
#[must_use]
pub(crate) fn choose_voice_index(
    voices: &[VoiceInfo],
    lang_tag: &str,
    preferred_name: &str,
) -> Option<usize> {
    let mut selected = voices.iter().position(|v| v.lang == lang_tag);
    if selected.is_none() {
        let family = lang_tag.split('-').next().unwrap_or(lang_tag);
        selected = voices.iter().position(|v| v.lang.starts_with(family));
    }
    if preferred_name != "default" {
        if let Some(by_name) = voices.iter().position(|v| v.name == preferred_name) {
            selected = Some(by_name);
        }
    }
    selected
}

/// Speak `text` with the browser's built-in synthesizer.
///
/// If the synthesizer is already speaking, this cancels it instead
/// (toggle behavior). Playback here is not tracked by the audio session.
///
/// # Errors
///
/// Returns an error string when speech synthesis is unavailable; callers
/// surface it to the user.
#[allow(clippy::cast_possible_truncation)]
pub fn speak(
    text: &str,
    lang_tag: &str,
    rate: f64,
    pitch: f64,
    preferred_voice: &str,
) -> Result<(), String> {
    #[cfg(feature = "browser")]
    {
        let synth = web_sys::window()
            .and_then(|w| w.speech_synthesis().ok())
            .ok_or_else(|| "Speech playback is not supported in this browser.".to_owned())?;
        if synth.speaking() {
            synth.cancel();
            return Ok(());
        }

        let utterance = web_sys::SpeechSynthesisUtterance::new_with_text(text)
            .map_err(|_| "Speech playback is not supported in this browser.".to_owned())?;
        utterance.set_lang(lang_tag);
        utterance.set_rate(rate as f32);
        utterance.set_pitch(pitch as f32);

        let voices: Vec<web_sys::SpeechSynthesisVoice> = synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into().ok())
            .collect();
        let infos: Vec<VoiceInfo> = voices
            .iter()
            .map(|v| VoiceInfo { name: v.name(), lang: v.lang() })
            .collect();
        if let Some(index) = choose_voice_index(&infos, lang_tag, preferred_voice) {
            utterance.set_voice(Some(&voices[index]));
        }

        synth.speak(&utterance);
        Ok(())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (text, lang_tag, rate, pitch, preferred_voice);
        Err("Speech playback is not supported in this browser.".to_owned())
    }
}
