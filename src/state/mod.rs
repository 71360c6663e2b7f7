//! Client-side state models.
//!
//! DESIGN
//! ======
//! `session` holds the only shared mutable state; the remaining modules are
//! per-page view models (`feed`, `post`, `profile`) plus the form and
//! `ViewState` helpers they share. Everything here is plain data and pure
//! transitions so it can be tested without a browser.

pub mod feed;
pub mod forms;
pub mod post;
pub mod profile;
pub mod session;
pub mod view;
