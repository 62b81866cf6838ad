//! Networking modules for the auction REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` maps failures to user-facing
//! messages, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
