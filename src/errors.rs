use actix_web::http::StatusCode;
use std::fmt;

#[derive(Debug, Clone)]
pub enum ReferralError {
    Validation(String),
    NotFound(String),
    InvalidTransition(String),
    PreconditionFailed(String),
    AlreadyClaimed(String),
    NotClaimable(String),
    SelfClaim(String),
    DuplicateClaim(String),
    StorageOperation(String),
    FileOperation(String),
    Serialization(String),
}

impl ReferralError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ReferralError::Validation(_) => "E001",
            ReferralError::NotFound(_) => "E002",
            ReferralError::InvalidTransition(_) => "E003",
            ReferralError::PreconditionFailed(_) => "E004",
            ReferralError::AlreadyClaimed(_) => "E005",
            ReferralError::NotClaimable(_) => "E006",
            ReferralError::SelfClaim(_) => "E007",
            ReferralError::DuplicateClaim(_) => "E008",
            ReferralError::StorageOperation(_) => "E009",
            ReferralError::FileOperation(_) => "E010",
            ReferralError::Serialization(_) => "E011",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ReferralError::Validation(_) => "Validation Error",
            ReferralError::NotFound(_) => "Resource Not Found",
            ReferralError::InvalidTransition(_) => "Invalid Status Transition",
            ReferralError::PreconditionFailed(_) => "Precondition Failed",
            ReferralError::AlreadyClaimed(_) => "Referral Already Claimed",
            ReferralError::NotClaimable(_) => "Referral Not Claimable",
            ReferralError::SelfClaim(_) => "Self Claim Rejected",
            ReferralError::DuplicateClaim(_) => "Duplicate Claim",
            ReferralError::StorageOperation(_) => "Storage Operation Error",
            ReferralError::FileOperation(_) => "File Operation Error",
            ReferralError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ReferralError::Validation(msg) => msg,
            ReferralError::NotFound(msg) => msg,
            ReferralError::InvalidTransition(msg) => msg,
            ReferralError::PreconditionFailed(msg) => msg,
            ReferralError::AlreadyClaimed(msg) => msg,
            ReferralError::NotClaimable(msg) => msg,
            ReferralError::SelfClaim(msg) => msg,
            ReferralError::DuplicateClaim(msg) => msg,
            ReferralError::StorageOperation(msg) => msg,
            ReferralError::FileOperation(msg) => msg,
            ReferralError::Serialization(msg) => msg,
        }
    }

    /// HTTP 状态码映射（仅供传输层使用）
    pub fn http_status(&self) -> StatusCode {
        match self {
            ReferralError::Validation(_) => StatusCode::BAD_REQUEST,
            ReferralError::PreconditionFailed(_) => StatusCode::BAD_REQUEST,
            ReferralError::NotFound(_) => StatusCode::NOT_FOUND,
            ReferralError::InvalidTransition(_) => StatusCode::CONFLICT,
            ReferralError::AlreadyClaimed(_) => StatusCode::CONFLICT,
            ReferralError::NotClaimable(_) => StatusCode::CONFLICT,
            ReferralError::SelfClaim(_) => StatusCode::CONFLICT,
            ReferralError::DuplicateClaim(_) => StatusCode::CONFLICT,
            ReferralError::StorageOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ReferralError::FileOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ReferralError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ReferralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ReferralError {}

// 便捷的构造函数
impl ReferralError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ReferralError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ReferralError::NotFound(msg.into())
    }

    pub fn invalid_transition<T: Into<String>>(msg: T) -> Self {
        ReferralError::InvalidTransition(msg.into())
    }

    pub fn precondition_failed<T: Into<String>>(msg: T) -> Self {
        ReferralError::PreconditionFailed(msg.into())
    }

    pub fn already_claimed<T: Into<String>>(msg: T) -> Self {
        ReferralError::AlreadyClaimed(msg.into())
    }

    pub fn not_claimable<T: Into<String>>(msg: T) -> Self {
        ReferralError::NotClaimable(msg.into())
    }

    pub fn self_claim<T: Into<String>>(msg: T) -> Self {
        ReferralError::SelfClaim(msg.into())
    }

    pub fn duplicate_claim<T: Into<String>>(msg: T) -> Self {
        ReferralError::DuplicateClaim(msg.into())
    }

    pub fn storage_operation<T: Into<String>>(msg: T) -> Self {
        ReferralError::StorageOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ReferralError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ReferralError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for ReferralError {
    fn from(err: std::io::Error) -> Self {
        ReferralError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ReferralError {
    fn from(err: serde_json::Error) -> Self {
        ReferralError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReferralError>;
