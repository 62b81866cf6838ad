//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `toast` are provided as `RwSignal` contexts by the root `App`.
//! `listing` holds the pure filtering used by the home page tabs.

pub mod auth;
pub mod listing;
pub mod toast;
