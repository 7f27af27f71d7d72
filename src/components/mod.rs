//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and feedback surfaces; pages own the
//! state they feed in.

pub mod nav_bar;
pub mod toast;
