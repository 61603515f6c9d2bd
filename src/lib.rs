//! # pagespeak
//!
//! Leptos + WASM frontend for the PageSpeak web summarizer.
//!
//! Browser-rendered SPA that posts a page address to a summary backend and
//! reads the result aloud through a TTS endpoint, with a local
//! speech-synthesis fallback and persisted accessibility settings (zoom,
//! font size, voice parameters, language).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
