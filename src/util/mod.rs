//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (dialogs, the clock)
//! and routing policy from page and component logic.

pub mod auth;
pub mod browser;
pub mod dates;
