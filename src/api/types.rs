//! API 类型定义

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::Referral;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReferralResponse {
    pub referral_id: Uuid,
    pub referring_user_id: Uuid,
    pub claimed_by_user_id: Option<Uuid>,
    pub claimed_by_name: Option<String>,
    pub share_link: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Referral> for ReferralResponse {
    fn from(referral: Referral) -> Self {
        Self {
            referral_id: referral.referral_id,
            referring_user_id: referral.referring_user_id,
            claimed_by_user_id: referral.claimed_by_user_id,
            claimed_by_name: referral.claimed_by_name,
            share_link: referral.share_link,
            status: referral.status.to_string(),
            created_at: referral.created_at.to_rfc3339(),
            updated_at: referral.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewReferralResponse {
    pub referral_id: Uuid,
    pub share_link: String,
}

impl From<&Referral> for NewReferralResponse {
    fn from(referral: &Referral) -> Self {
        Self {
            referral_id: referral.referral_id,
            share_link: referral.share_link.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReferralListResponse {
    pub total_count: usize,
    pub referrals: Vec<ReferralResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReferralUpdatedResponse {
    pub message: String,
    pub referral_id: Uuid,
    pub new_status: String,
}

/// 状态列表项
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatusItem {
    pub name: String,
    pub value: i32,
}

/// 服务状态响应
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ServiceStatusResponse {
    pub status: String,
    pub timestamp: String,
}
