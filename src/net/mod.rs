//! Networking modules for the summary and speech backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `summary` posts a page link and decodes the summary response;
//! `tts` fetches synthesized audio for a block of text.

pub mod summary;
pub mod tts;
