//! Service layer for business logic
//!
//! Provides unified business logic shared by the HTTP handlers and any
//! future interfaces.

mod referral_service;

pub use referral_service::*;
