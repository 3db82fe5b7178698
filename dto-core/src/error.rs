//! DTO 错误定义
//!
//! 填充引擎对输入保持宽容：未知键、失效别名、类型不匹配的值都会被静默跳过。
//! 只有以下情况会产生错误：
//! - 字段的覆写 setter 主动拒绝输入；
//! - 传入的原始载荷不是对象（或不是合法 JSON）。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DtoError {
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid attributes: expected object, found {found}")]
    InvalidAttributes { found: &'static str },
    #[error("invalid value: field={field}, reason={reason}")]
    InvalidValue { field: String, reason: String },
    #[error("setter failed: field={field}, reason={reason}")]
    Setter { field: String, reason: String },
}

impl DtoError {
    /// setter 拒绝某个值时使用
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DtoError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// setter 自身的处理过程失败时使用（如解析、换算出错）
    pub fn setter(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DtoError::Setter {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type DtoResult<T> = Result<T, DtoError>;
