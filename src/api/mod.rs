//! HTTP API
//!
//! actix-web services, response envelopes, and error-code mapping.

pub mod error_code;
pub mod helpers;
pub mod referral_api;
pub mod types;

pub use error_code::ErrorCode;

use actix_web::web;

/// Referral API routes, mounted under `/api`.
///
/// `/referral/statuses` is registered before `/referral/{user_id}` so the
/// literal segment wins.
pub fn referral_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/status", web::get().to(referral_api::get_service_status))
        .route(
            "/referral/statuses",
            web::get().to(referral_api::get_referral_statuses),
        )
        .route(
            "/referral/{user_id}",
            web::get().to(referral_api::get_referrals),
        )
        .route(
            "/referral/{user_id}",
            web::post().to(referral_api::post_referral),
        )
        .route(
            "/referral/{referral_id}/status/{status}",
            web::patch().to(referral_api::patch_referral_status),
        )
        .route(
            "/referral/{referral_id}/claim/{claimant_user_id}",
            web::post().to(referral_api::post_claim),
        )
}
