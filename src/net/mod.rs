//! Networking modules for the two external service endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `types` defines the consumed wire schema.
//! Both services are deployed separately from this UI; their base locations
//! come from `util::config` at request time.

pub mod api;
pub mod types;
