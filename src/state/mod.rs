//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`catalog`, `upload`, `toast`) so each page owns a
//! small focused model; nothing here touches the network or the DOM, which
//! keeps every transition natively testable.

pub mod catalog;
pub mod toast;
pub mod upload;
