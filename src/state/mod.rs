//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`settings`, `summary`, `playback`) so
//! components can depend on small focused models provided via context.

pub mod playback;
pub mod settings;
pub mod summary;
