//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and controls while reading/writing shared
//! state from Leptos context providers.

pub mod header;
pub mod input_card;
pub mod language_select;
pub mod result_card;
pub mod voice_settings_modal;
