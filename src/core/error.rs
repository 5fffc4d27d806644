//! 错误处理体系 (Error Handling System)
//!
//! 定义抽取引擎的领域错误类型以及全局 Result 别名。

use thiserror::Error;

/// 全局错误定义 (Source Domain Errors)
#[derive(Error, Debug)]
pub enum SourceError {
    /// 底层请求失败（网络、非 2xx 状态、超时），原样上抛
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// 预期的 DOM 元素或属性不存在
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// 内嵌 JSON 或章节正文无法解析
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// JSON 解析成功但必需的嵌套路径缺失
    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Cannot resolve {input:?} to a site path: {reason}")]
    Resolution { input: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown site identifier: {0}")]
    UnknownSite(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 全局 Result 别名
pub type Result<T> = std::result::Result<T, SourceError>;

impl SourceError {
    pub fn resolution(input: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        SourceError::Resolution {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn schema(path: impl Into<String>) -> Self {
        SourceError::SchemaViolation(path.into())
    }

    /// 判定错误是否来源于传输层
    ///
    /// 中间件包装的 reqwest 错误同样视为传输失败。
    pub fn is_transport(&self) -> bool {
        match self {
            SourceError::Transport(_) => true,
            SourceError::Middleware(reqwest_middleware::Error::Reqwest(_)) => true,
            SourceError::Middleware(reqwest_middleware::Error::Middleware(inner)) => inner
                .downcast_ref::<SourceError>()
                .is_some_and(SourceError::is_transport),
            _ => false,
        }
    }

    /// HTTP 状态码（若错误由非 2xx 响应产生）
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            SourceError::Transport(e) => e.status(),
            SourceError::Middleware(reqwest_middleware::Error::Reqwest(e)) => e.status(),
            _ => None,
        }
    }
}
