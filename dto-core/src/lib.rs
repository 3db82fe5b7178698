//! 数据传输对象（DTO）基础库（dto-core）
//!
//! 为结构化的 DTO 提供从无类型属性集合（例如解码后的请求体、数据库行）填充自身字段的能力：
//! - 能力契约（`contract`）：`map` / `fill` / `to_object` / `to_array`
//! - 填充引擎（`engine`）：两轮填充、别名解析与键名归一化
//! - 别名表（`alias`）、键名风格转换（`case`）、导出选项（`options`）
//! - 字段模式（`schema`）：由 `#[dto]` 宏在编译期生成
//!
//! 典型用法：
//! 1. 使用 `#[dto]` 声明结构体，需要默认值/校验逻辑的字段标注 `#[dto(setter)]` 并实现 `set_<field>`；
//! 2. 可选地通过 `map` 指定“字段名 -> 外部键”的别名；
//! 3. 调用 `fill` 填充，再用 `to_array` 导出为属性集合。
//!
pub mod alias;
pub mod case;
pub mod contract;
pub mod engine;
pub mod error;
pub mod options;
pub mod schema;

#[doc(hidden)]
pub mod __private;

pub use alias::Aliases;
pub use case::KeyCase;
pub use contract::{Dto, Mapped};
pub use dto_macros::dto;
pub use error::{DtoError, DtoResult};
pub use options::ExportOptions;
pub use schema::{FieldDef, Schema};

/// 无类型属性集合（保持插入顺序）
pub type Attributes = serde_json::Map<String, serde_json::Value>;

// 允许在本 crate 内部通过 ::dto_core 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::dto_core 路径。
extern crate self as dto_core;
