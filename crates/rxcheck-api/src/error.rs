use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rxcheck_rules::RuleError;
use serde_json::json;
use std::fmt;
use tracing::error;

/// API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 规则未找到
    RuleNotFound(String),
    /// 组合或 ID 冲突
    Conflict(String),
    /// 验证错误
    ValidationError(String),
    /// 内部错误
    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RuleNotFound(msg) => write!(f, "{}", msg),
            ApiError::Conflict(msg) => write!(f, "{}", msg),
            ApiError::ValidationError(msg) => write!(f, "{}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::RuleNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(ref msg) => {
                error!(error = %msg, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

// 从 rxcheck_rules::RuleError 转换
impl From<RuleError> for ApiError {
    fn from(err: RuleError) -> Self {
        match err {
            RuleError::NotFound(_) => ApiError::RuleNotFound("Rule not found".to_string()),
            RuleError::PairExists(_) => {
                ApiError::Conflict("Pair already exists (order-independent)".to_string())
            }
            RuleError::Conflict(msg) => ApiError::Conflict(format!("Conflict: {}", msg)),
            RuleError::InvalidSeverity(_) => {
                ApiError::ValidationError("Invalid severity".to_string())
            }
            RuleError::ValidationError(msg) => ApiError::ValidationError(msg),
            RuleError::DatabaseError(e) => ApiError::InternalError(e.to_string()),
            RuleError::IoError(e) => ApiError::InternalError(e.to_string()),
            RuleError::SerializationError(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
