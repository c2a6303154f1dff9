//! Networking modules for the items REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, and
//! `error` classifies what can go wrong on the way.

pub mod api;
pub mod error;
pub mod types;
