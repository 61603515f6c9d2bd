use super::*;

fn voice(name: &str, lang: &str) -> VoiceInfo {
    VoiceInfo { name: name.to_owned(), lang: lang.to_owned() }
}

fn sample_voices() -> Vec<VoiceInfo> {
    vec![
        voice("Daniel", "en-GB"),
        voice("Samantha", "en-US"),
        voice("Yuna", "ko-KR"),
        voice("Kyoko", "ja-JP"),
    ]
}

// =============================================================
// Language-based selection
// =============================================================

#[test]
fn exact_language_tag_wins() {
    let voices = sample_voices();
    assert_eq!(choose_voice_index(&voices, "en-US", "default"), Some(1));
    assert_eq!(choose_voice_index(&voices, "ko-KR", "default"), Some(2));
}

#[test]
fn family_prefix_used_when_no_exact_tag() {
    let voices = vec![voice("Daniel", "en-GB"), voice("Yuna", "ko-KR")];
    // No en-US voice installed; the en-GB one matches the "en" family.
    assert_eq!(choose_voice_index(&voices, "en-US", "default"), Some(0));
}

#[test]
fn no_voice_for_language_returns_none() {
    let voices = vec![voice("Yuna", "ko-KR")];
    assert_eq!(choose_voice_index(&voices, "ja-JP", "default"), None);
}

#[test]
fn empty_voice_list_returns_none() {
    assert_eq!(choose_voice_index(&[], "ko-KR", "default"), None);
}

// =============================================================
// Explicit name override
// =============================================================

#[test]
fn preferred_name_overrides_language_pick() {
    let voices = sample_voices();
    assert_eq!(choose_voice_index(&voices, "en-US", "Kyoko"), Some(3));
}

#[test]
fn preferred_name_applies_even_without_language_match() {
    let voices = sample_voices();
    assert_eq!(choose_voice_index(&voices, "zh-CN", "Daniel"), Some(0));
}

#[test]
fn unknown_preferred_name_keeps_language_pick() {
    let voices = sample_voices();
    assert_eq!(choose_voice_index(&voices, "ja-JP", "NoSuchVoice"), Some(3));
}

#[test]
fn default_preferred_name_is_not_a_name_lookup() {
    // A synthesizer voice literally named "default" must not short-circuit
    // the language-based pick.
    let voices = vec![voice("default", "en-US"), voice("Yuna", "ko-KR")];
    assert_eq!(choose_voice_index(&voices, "ko-KR", "default"), Some(1));
}

// =============================================================
// Off-browser behavior
// =============================================================

#[cfg(not(feature = "browser"))]
#[test]
fn speak_reports_unsupported_off_browser() {
    let result = speak("hello", "en-US", 1.0, 1.0, "default");
    assert_eq!(
        result,
        Err("Speech playback is not supported in this browser.".to_owned())
    );
}
