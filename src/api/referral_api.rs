//! Referral API handlers
//!
//! HTTP surface over the referral lifecycle service. Maps service results
//! and errors to the JSON response envelope; holds no business logic.

use std::str::FromStr;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{Responder, Result as ActixResult, web};
use strum::IntoEnumIterator;
use tracing::trace;
use uuid::Uuid;

use crate::services::ReferralService;
use crate::storage::ReferralStatus;

use super::error_code::ErrorCode;
use super::helpers::{accepted_response, error_from_referral, error_response, success_response};
use super::types::{
    NewReferralResponse, ReferralListResponse, ReferralResponse, ReferralUpdatedResponse,
    ServiceStatusResponse, StatusItem,
};

/// 获取指定用户的所有推荐记录
pub async fn get_referrals(
    path: web::Path<Uuid>,
    service: web::Data<Arc<ReferralService>>,
) -> ActixResult<impl Responder> {
    let user_id = path.into_inner();
    trace!("API: request to list referrals for user {}", user_id);

    let response = match service.list_referrals(user_id).await {
        Ok(referrals) if referrals.is_empty() => error_response(
            StatusCode::NOT_FOUND,
            ErrorCode::NotFound,
            "No referrals found for this user.",
        ),
        Ok(referrals) => success_response(ReferralListResponse {
            total_count: referrals.len(),
            referrals: referrals.into_iter().map(ReferralResponse::from).collect(),
        }),
        Err(e) => error_from_referral(&e),
    };

    Ok(response)
}

/// 为指定用户创建新的推荐记录
pub async fn post_referral(
    path: web::Path<Uuid>,
    service: web::Data<Arc<ReferralService>>,
) -> ActixResult<impl Responder> {
    let user_id = path.into_inner();
    trace!("API: request to create referral for user {}", user_id);

    let response = match service.create_referral(user_id).await {
        Ok(referral) => success_response(NewReferralResponse::from(&referral)),
        Err(e) => error_from_referral(&e),
    };

    Ok(response)
}

/// 更新推荐记录状态
pub async fn patch_referral_status(
    path: web::Path<(Uuid, String)>,
    service: web::Data<Arc<ReferralService>>,
) -> ActixResult<impl Responder> {
    let (referral_id, status_raw) = path.into_inner();
    trace!(
        "API: request to update referral {} to status '{}'",
        referral_id, status_raw
    );

    let new_status = match ReferralStatus::from_str(&status_raw) {
        Ok(status) => status,
        Err(e) => {
            return Ok(error_response(
                StatusCode::BAD_REQUEST,
                ErrorCode::BadRequest,
                &e,
            ));
        }
    };

    let response = match service.update_status(referral_id, new_status).await {
        Ok(referral) => accepted_response(ReferralUpdatedResponse {
            message: "Referral status updated successfully.".to_string(),
            referral_id: referral.referral_id,
            new_status: referral.status.to_string(),
        }),
        Err(e) => error_from_referral(&e),
    };

    Ok(response)
}

/// 认领推荐记录
pub async fn post_claim(
    path: web::Path<(Uuid, Uuid)>,
    service: web::Data<Arc<ReferralService>>,
) -> ActixResult<impl Responder> {
    let (referral_id, claimant_user_id) = path.into_inner();
    trace!(
        "API: user {} requests to claim referral {}",
        claimant_user_id, referral_id
    );

    let response = match service.claim_referral(referral_id, claimant_user_id).await {
        Ok(referral) => accepted_response(ReferralUpdatedResponse {
            message: "Referral claimed successfully.".to_string(),
            referral_id: referral.referral_id,
            new_status: referral.status.to_string(),
        }),
        Err(e) => error_from_referral(&e),
    };

    Ok(response)
}

/// 枚举所有推荐状态
pub async fn get_referral_statuses() -> ActixResult<impl Responder> {
    let statuses: Vec<StatusItem> = ReferralStatus::iter()
        .map(|s| StatusItem {
            name: s.to_string(),
            value: s.value(),
        })
        .collect();

    Ok(success_response(statuses))
}

/// 服务存活检查
pub async fn get_service_status() -> ActixResult<impl Responder> {
    Ok(success_response(ServiceStatusResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
