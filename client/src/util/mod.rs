//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and form/bid math
//! from page and component logic so they can be tested natively.

pub mod auth;
pub mod bid;
pub mod countdown;
pub mod files;
pub mod storage;
pub mod validation;
