use thiserror::Error;

/// 规则库错误类型
#[derive(Error, Debug)]
pub enum RuleError {
    /// 规则未找到
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// 药物组合已存在（与顺序无关）
    #[error("Pair already exists (order-independent): {0}")]
    PairExists(String),

    /// 写入冲突（主键或唯一索引）
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 严重程度无效
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 数据库错误
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    /// 历史记录文件读写错误
    #[error("History I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// 规则库结果类型
pub type Result<T> = std::result::Result<T, RuleError>;

impl RuleError {
    /// 创建验证错误
    pub fn validation(msg: impl Into<String>) -> Self {
        RuleError::ValidationError(msg.into())
    }
}
