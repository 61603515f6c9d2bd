//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod alert;
#[cfg(feature = "browser")]
pub mod audio;
pub mod speech;
pub mod storage;
