//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates browser/environment concerns from page and component logic so
//! the latter stay testable on the native target.

pub mod config;
