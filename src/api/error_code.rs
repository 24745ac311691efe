//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::ReferralError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 推荐错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,

    // 推荐错误 3000-3099
    InvalidStatusTransition = 3000,
    ReferralNotClaimed = 3001,
    ReferralAlreadyClaimed = 3002,
    ReferralNotClaimable = 3003,
    SelfClaimRejected = 3004,
    DuplicateClaim = 3005,
}

impl From<ReferralError> for ErrorCode {
    fn from(err: ReferralError) -> Self {
        match err {
            ReferralError::Validation(_) => ErrorCode::BadRequest,
            ReferralError::NotFound(_) => ErrorCode::NotFound,
            ReferralError::InvalidTransition(_) => ErrorCode::InvalidStatusTransition,
            ReferralError::PreconditionFailed(_) => ErrorCode::ReferralNotClaimed,
            ReferralError::AlreadyClaimed(_) => ErrorCode::ReferralAlreadyClaimed,
            ReferralError::NotClaimable(_) => ErrorCode::ReferralNotClaimable,
            ReferralError::SelfClaim(_) => ErrorCode::SelfClaimRejected,
            ReferralError::DuplicateClaim(_) => ErrorCode::DuplicateClaim,
            ReferralError::StorageOperation(_)
            | ReferralError::FileOperation(_)
            | ReferralError::Serialization(_) => ErrorCode::InternalServerError,
        }
    }
}
