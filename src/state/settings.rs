//! Persisted accessibility preferences: zoom, font size, voice, language.
//!
//! DESIGN
//! ======
//! One JSON record under a single localStorage key, written wholesale on
//! save. Field names stay camelCase so records written by earlier builds
//! keep loading; missing fields fall back per field via serde defaults,
//! and an unreadable record falls back to defaults entirely.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// localStorage key holding the serialized [`AccessibilitySettings`].
pub const SETTINGS_STORAGE_KEY: &str = "accessibilitySettings";

pub const ZOOM_MIN: i32 = 75;
pub const ZOOM_MAX: i32 = 200;
pub const ZOOM_STEP: i32 = 25;
pub const ZOOM_DEFAULT: i32 = 100;

pub const FONT_SIZE_MIN: i32 = 24;
pub const FONT_SIZE_MAX: i32 = 60;
pub const FONT_SIZE_STEP: i32 = 2;

pub const VOICE_PARAM_MIN: f64 = 0.5;
pub const VOICE_PARAM_MAX: f64 = 2.0;
pub const VOICE_PARAM_STEP: f64 = 0.1;

/// Languages the summary and TTS backends understand.
///
/// Serialized as the BCP 47 tag so the persisted record matches what the
/// browser speech API expects for `lang`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ko-KR")]
    Korean,
    #[serde(rename = "en-US")]
    English,
    #[serde(rename = "ja-JP")]
    Japanese,
    #[serde(rename = "zh-CN")]
    Chinese,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Korean,
        Language::English,
        Language::Japanese,
        Language::Chinese,
    ];

    /// BCP 47 tag, used for persistence and speech-synthesis voices.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Language::Korean => "ko-KR",
            Language::English => "en-US",
            Language::Japanese => "ja-JP",
            Language::Chinese => "zh-CN",
        }
    }

    /// Code the summary/TTS backend expects in its `language` parameter.
    #[must_use]
    pub fn backend_code(self) -> &'static str {
        match self {
            Language::Korean => "KOREAN",
            Language::English => "ENGLISH",
            Language::Japanese => "JAPANESE",
            Language::Chinese => "CHINESE",
        }
    }

    /// Display label for the language selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::Korean => "Korean",
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese (Simplified)",
        }
    }

    /// Parse a BCP 47 tag; unknown tags map to the default language.
    #[must_use]
    pub fn from_tag(tag: &str) -> Language {
        match tag {
            "en-US" => Language::English,
            "ja-JP" => Language::Japanese,
            "zh-CN" => Language::Chinese,
            _ => Language::Korean,
        }
    }
}

/// Voice parameters for both the TTS backend and the local synthesizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    /// Reading speed, 0.5 to 2.0.
    pub rate: f64,
    /// Voice height, 0.5 to 2.0.
    pub pitch: f64,
    /// Explicit synthesizer voice name, or "default" for language-based pick.
    pub voice: String,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate: 0.8,
            pitch: 1.0,
            voice: "default".to_owned(),
        }
    }
}

/// The persisted accessibility record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
    /// Page zoom percent, 75 to 200.
    pub zoom_level: i32,
    /// Summary text size in px, 24 to 60.
    pub font_size_px: i32,
    pub voice_settings: VoiceSettings,
    pub selected_lang: Language,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            zoom_level: ZOOM_DEFAULT,
            font_size_px: 36,
            voice_settings: VoiceSettings::default(),
            selected_lang: Language::Korean,
        }
    }
}

/// Step the zoom level up, clamped to [`ZOOM_MAX`].
#[must_use]
pub fn zoom_in(level: i32) -> i32 {
    (level + ZOOM_STEP).min(ZOOM_MAX)
}

/// Step the zoom level down, clamped to [`ZOOM_MIN`].
#[must_use]
pub fn zoom_out(level: i32) -> i32 {
    (level - ZOOM_STEP).max(ZOOM_MIN)
}

/// CSS scale factor for a zoom percent.
#[must_use]
pub fn zoom_scale(level: i32) -> f64 {
    f64::from(level) / 100.0
}

/// Width percentage that compensates the scale transform so scaled
/// content still fills the viewport.
#[must_use]
pub fn scaled_width_percent(level: i32) -> f64 {
    10_000.0 / f64::from(level)
}

/// Load the persisted record, or defaults when absent or unreadable.
#[must_use]
pub fn load_settings() -> AccessibilitySettings {
    storage::load_json(SETTINGS_STORAGE_KEY).unwrap_or_default()
}

/// Overwrite the persisted record with `settings`.
pub fn save_settings(settings: &AccessibilitySettings) {
    storage::save_json(SETTINGS_STORAGE_KEY, settings);
}
