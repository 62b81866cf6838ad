//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, submits) and
//! delegates rendering details to `components`.

pub mod auction_detail;
pub mod create_auction;
pub mod home;
pub mod login;
pub mod my_auctions;
pub mod register;
