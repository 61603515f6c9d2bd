use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn settings_default_values() {
    let settings = AccessibilitySettings::default();
    assert_eq!(settings.zoom_level, 100);
    assert_eq!(settings.font_size_px, 36);
    assert_eq!(settings.selected_lang, Language::Korean);
}

#[test]
fn voice_settings_default_values() {
    let voice = VoiceSettings::default();
    assert_eq!(voice.rate, 0.8);
    assert_eq!(voice.pitch, 1.0);
    assert_eq!(voice.voice, "default");
}

#[test]
fn load_settings_without_stored_record_is_default() {
    assert_eq!(load_settings(), AccessibilitySettings::default());
}

// =============================================================
// Zoom stepping
// =============================================================

#[test]
fn zoom_in_steps_by_25() {
    assert_eq!(zoom_in(100), 125);
}

#[test]
fn zoom_in_clamps_at_max() {
    assert_eq!(zoom_in(200), 200);
    assert_eq!(zoom_in(190), 200);
}

#[test]
fn zoom_out_steps_by_25() {
    assert_eq!(zoom_out(100), 75);
}

#[test]
fn zoom_out_clamps_at_min() {
    assert_eq!(zoom_out(75), 75);
    assert_eq!(zoom_out(80), 75);
}

#[test]
fn zoom_scale_maps_percent_to_factor() {
    assert_eq!(zoom_scale(100), 1.0);
    assert_eq!(zoom_scale(150), 1.5);
    assert_eq!(zoom_scale(75), 0.75);
}

#[test]
fn scaled_width_compensates_scale() {
    assert_eq!(scaled_width_percent(100), 100.0);
    assert_eq!(scaled_width_percent(200), 50.0);
}

// =============================================================
// Language mapping
// =============================================================

#[test]
fn language_default_is_korean() {
    assert_eq!(Language::default(), Language::Korean);
}

#[test]
fn language_backend_codes() {
    assert_eq!(Language::Korean.backend_code(), "KOREAN");
    assert_eq!(Language::English.backend_code(), "ENGLISH");
    assert_eq!(Language::Japanese.backend_code(), "JAPANESE");
    assert_eq!(Language::Chinese.backend_code(), "CHINESE");
}

#[test]
fn language_tags_round_trip_through_from_tag() {
    for lang in Language::ALL {
        assert_eq!(Language::from_tag(lang.tag()), lang);
    }
}

#[test]
fn language_from_unknown_tag_falls_back_to_korean() {
    assert_eq!(Language::from_tag("fr-FR"), Language::Korean);
    assert_eq!(Language::from_tag(""), Language::Korean);
}

// =============================================================
// Persisted record shape
// =============================================================

#[test]
fn settings_serialize_with_camel_case_keys() {
    let json = serde_json::to_value(AccessibilitySettings::default()).unwrap();
    assert_eq!(json["zoomLevel"], 100);
    assert_eq!(json["fontSizePx"], 36);
    assert_eq!(json["voiceSettings"]["rate"], 0.8);
    assert_eq!(json["voiceSettings"]["pitch"], 1.0);
    assert_eq!(json["voiceSettings"]["voice"], "default");
    assert_eq!(json["selectedLang"], "ko-KR");
}

#[test]
fn settings_round_trip_preserves_values() {
    let settings = AccessibilitySettings {
        zoom_level: 150,
        font_size_px: 48,
        voice_settings: VoiceSettings {
            rate: 1.2,
            pitch: 0.6,
            voice: "Yuna".to_owned(),
        },
        selected_lang: Language::Japanese,
    };
    let json = serde_json::to_string(&settings).unwrap();
    let loaded: AccessibilitySettings = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn partial_record_merges_with_defaults() {
    let loaded: AccessibilitySettings = serde_json::from_str(r#"{"zoomLevel":175}"#).unwrap();
    assert_eq!(loaded.zoom_level, 175);
    assert_eq!(loaded.font_size_px, 36);
    assert_eq!(loaded.voice_settings, VoiceSettings::default());
    assert_eq!(loaded.selected_lang, Language::Korean);
}

#[test]
fn partial_voice_record_merges_missing_fields() {
    let loaded: AccessibilitySettings =
        serde_json::from_str(r#"{"voiceSettings":{"rate":1.5}}"#).unwrap();
    assert_eq!(loaded.voice_settings.rate, 1.5);
    assert_eq!(loaded.voice_settings.pitch, 1.0);
    assert_eq!(loaded.voice_settings.voice, "default");
}

#[test]
fn garbage_record_fails_to_parse() {
    assert!(serde_json::from_str::<AccessibilitySettings>("not json").is_err());
}

#[test]
fn unknown_language_tag_fails_the_record() {
    // Loader falls back to defaults when the stored tag is unrecognized.
    assert!(serde_json::from_str::<AccessibilitySettings>(r#"{"selectedLang":"fr-FR"}"#).is_err());
}
