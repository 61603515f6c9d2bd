//! Summary API client.
//!
//! Browser builds issue the real HTTP call via `gloo-net`; host builds get
//! stubs so the request/response helpers stay unit-testable.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<String, String>` where the error side is already a
//! user-visible sentence. Nothing here panics and nothing retries; the page
//! decides what to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::state::settings::Language;

/// Base path for the backend. Overridable at compile time so a deployment
/// can target an absolute origin instead of the dev proxy.
#[cfg(any(test, feature = "browser"))]
fn api_base() -> &'static str {
    option_env!("PAGESPEAK_API_BASE").unwrap_or("/api")
}

#[cfg(any(test, feature = "browser"))]
fn summary_endpoint() -> String {
    format!("{}/summary", api_base())
}

#[cfg(any(test, feature = "browser"))]
fn summary_request_failed_message(status: u16) -> String {
    format!("summary request failed: {status}")
}

/// Form-encode the request body for the summary endpoint.
#[cfg(any(test, feature = "browser"))]
fn summary_form_body(link: &str, language: Language) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("link", link)
        .append_pair("language", language.backend_code())
        .finish()
}

/// Pull display text out of a summary response body.
///
/// The backend wraps responses inconsistently, so this walks the known
/// shapes in order: a `data` envelope, an OpenAI-style `choices` chain,
/// then `content`/`summary`/`text` fields, then a bare string payload.
/// Any other JSON is pretty-printed; a non-JSON body is shown as is.
#[cfg(any(test, feature = "browser"))]
fn extract_summary(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_owned();
    };
    let payload = parsed
        .get("data")
        .filter(|data| !data.is_null())
        .unwrap_or(&parsed);
    let from_choices = payload
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(serde_json::Value::as_str);
    if let Some(text) = from_choices {
        return text.to_owned();
    }
    for key in ["content", "summary", "text"] {
        if let Some(text) = payload.get(key).and_then(serde_json::Value::as_str) {
            return text.to_owned();
        }
    }
    if let Some(text) = payload.as_str() {
        return text.to_owned();
    }
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| body.to_owned())
}

/// Turn a non-OK response body into a user-visible error message.
///
/// Prefers a JSON `message` field, then the JSON itself, then the raw
/// body, then a generic status line.
#[cfg(any(test, feature = "browser"))]
fn error_text_from_body(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = parsed.get("message").and_then(serde_json::Value::as_str) {
            if !message.is_empty() {
                return message.to_owned();
            }
        }
        if let Some(text) = parsed.as_str() {
            if !text.is_empty() {
                return text.to_owned();
            }
        } else if !parsed.is_null() {
            return serde_json::to_string(&parsed).unwrap_or_else(|_| body.to_owned());
        }
        return summary_request_failed_message(status);
    }
    if body.trim().is_empty() {
        summary_request_failed_message(status)
    } else {
        body.to_owned()
    }
}

/// Substitute the placeholder shown when a response carries no usable text.
#[cfg(any(test, feature = "browser"))]
fn fallback_if_empty(text: String) -> String {
    if text.is_empty() {
        "No summary was returned.".to_owned()
    } else {
        text
    }
}

/// Request a summary for `link` via `POST {base}/summary`.
///
/// The body is form-encoded (`link`, `language`); a successful response
/// body is decoded with [`extract_summary`].
///
/// # Errors
///
/// Returns a user-visible error string if the request cannot be sent or
/// the server responds with a non-OK status.
pub async fn fetch_summary(link: &str, language: Language) -> Result<String, String> {
    #[cfg(feature = "browser")]
    {
        let body = summary_form_body(link, language);
        let resp = gloo_net::http::Request::post(&summary_endpoint())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(error_text_from_body(resp.status(), &text));
        }
        Ok(fallback_if_empty(extract_summary(&text)))
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (link, language);
        Err("not available outside the browser".to_owned())
    }
}
