//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render marketplace chrome and listing cards while reading
//! shared auth/toast state from Leptos context providers.

pub mod auction_card;
pub mod countdown;
pub mod filter_tabs;
pub mod form_field;
pub mod hero;
pub mod navbar;
pub mod primary_button;
pub mod toaster;
