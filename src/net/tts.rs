//! Text-to-speech API client.
//!
//! Fetches synthesized MPEG audio for a block of text. Browser builds call
//! the endpoint via `gloo-net`; host builds get a stub.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "tts_test.rs"]
mod tts_test;

use crate::state::settings::{Language, VoiceSettings};

/// Always served through the `/api` proxy route, independent of the
/// summary base override.
#[cfg(any(test, feature = "browser"))]
const TTS_ENDPOINT: &str = "/api/tts";

#[cfg(any(test, feature = "browser"))]
fn tts_request_failed_message(status: u16) -> String {
    format!("speech request failed: {status}")
}

/// Query parameters for the speech endpoint.
///
/// The endpoint reads `speed` as voice height and `pitch` as reading
/// speed, so the two settings cross over here.
#[cfg(any(test, feature = "browser"))]
fn tts_query(text: &str, settings: &VoiceSettings, language: Language) -> Vec<(&'static str, String)> {
    vec![
        ("text", text.to_owned()),
        ("speed", settings.pitch.to_string()),
        ("pitch", settings.rate.to_string()),
        ("language", language.backend_code().to_owned()),
    ]
}

/// Fetch synthesized audio for `text` via `GET /api/tts`.
///
/// Returns the raw MPEG bytes on success.
///
/// # Errors
///
/// Returns a user-visible error string if the request cannot be sent or
/// the server responds with a non-OK status.
pub async fn fetch_tts_audio(
    text: &str,
    settings: &VoiceSettings,
    language: Language,
) -> Result<Vec<u8>, String> {
    #[cfg(feature = "browser")]
    {
        let pairs = tts_query(text, settings, language);
        let resp = gloo_net::http::Request::get(TTS_ENDPOINT)
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(tts_request_failed_message(resp.status()));
        }
        resp.binary().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (text, settings, language);
        Err("not available outside the browser".to_owned())
    }
}
