//! DTO 能力契约
//!
//! 所有具体 DTO 对外暴露的统一接口：`map` / `fill` / `to_object` / `to_array`。
//! 方法均有默认实现，具体类型只需提供 `Schema`（通常由 `#[dto]` 宏生成）。
//!
use crate::Attributes;
use crate::alias::Aliases;
use crate::engine;
use crate::error::{DtoError, DtoResult};
use crate::options::ExportOptions;
use crate::schema::Schema;
use serde_json::Value;
use std::ops::Deref;

/// 数据传输对象（DTO）
///
/// ```
/// use dto_core::{Dto, dto};
/// use serde_json::json;
///
/// #[dto]
/// struct User {
///     first_name: Option<String>,
///     email: Option<String>,
/// }
///
/// let mut user = User::default();
/// user.map([("email", "email_address")])
///     .fill_value(json!({"first_name": "Jo", "email_address": "jo@example.com"}))
///     .unwrap();
///
/// assert_eq!(user.first_name.as_deref(), Some("Jo"));
/// assert_eq!(user.to_array()["email"], json!("jo@example.com"));
/// ```
pub trait Dto: Schema {
    /// 设置别名表（字段名 -> 外部键），返回的 `Mapped` 在下一次 fill 后失效
    fn map(&mut self, aliases: impl Into<Aliases>) -> Mapped<'_, Self> {
        Mapped {
            dto: self,
            aliases: aliases.into(),
        }
    }

    /// 不带别名的两轮填充
    fn fill(&mut self, attributes: Attributes) -> DtoResult<&mut Self> {
        self.fill_with(&Aliases::new(), attributes)
    }

    /// 使用给定别名表进行两轮填充
    fn fill_with(&mut self, aliases: &Aliases, attributes: Attributes) -> DtoResult<&mut Self> {
        engine::fill_with(self, aliases, attributes)?;
        Ok(self)
    }

    /// 从 JSON 值填充，值必须是对象
    fn fill_value(&mut self, value: Value) -> DtoResult<&mut Self> {
        self.fill(into_attributes(value)?)
    }

    /// 从 JSON 文本填充
    fn fill_json(&mut self, json: &str) -> DtoResult<&mut Self> {
        let value: Value = serde_json::from_str(json)?;
        self.fill_value(value)
    }

    /// 以结构体本身的形式访问字段
    fn to_object(&self) -> &Self {
        self
    }

    /// 导出全部字段，键名改写为 snake_case
    fn to_array(&self) -> Attributes {
        self.to_array_with(&ExportOptions::default())
    }

    fn to_array_with(&self, options: &ExportOptions) -> Attributes {
        engine::export(self, options)
    }

    /// 以属性集合构造；属性为空时不执行 fill
    fn from_attributes(attributes: Attributes) -> DtoResult<Self>
    where
        Self: Default,
    {
        Self::from_mapped(attributes, Aliases::new())
    }

    /// 以属性集合与别名表构造；属性为空时不执行 fill
    fn from_mapped(attributes: Attributes, aliases: impl Into<Aliases>) -> DtoResult<Self>
    where
        Self: Default,
    {
        let mut dto = Self::default();
        if !attributes.is_empty() {
            dto.fill_with(&aliases.into(), attributes)?;
        }
        Ok(dto)
    }
}

/// 已设置别名表、等待 fill 的 DTO
///
/// 别名表由本结构持有，`fill` 消费自身，因此别名只作用于紧随其后的一次 fill。
#[derive(Debug)]
pub struct Mapped<'a, T: Dto> {
    dto: &'a mut T,
    aliases: Aliases,
}

impl<'a, T: Dto> Mapped<'a, T> {
    /// 替换别名表
    pub fn map(mut self, aliases: impl Into<Aliases>) -> Self {
        self.aliases = aliases.into();
        self
    }

    pub fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    pub fn fill(self, attributes: Attributes) -> DtoResult<&'a mut T> {
        let Mapped { dto, aliases } = self;
        dto.fill_with(&aliases, attributes)
    }

    pub fn fill_value(self, value: Value) -> DtoResult<&'a mut T> {
        self.fill(into_attributes(value)?)
    }

    pub fn fill_json(self, json: &str) -> DtoResult<&'a mut T> {
        let value: Value = serde_json::from_str(json)?;
        self.fill_value(value)
    }
}

impl<T: Dto> Deref for Mapped<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.dto
    }
}

fn into_attributes(value: Value) -> DtoResult<Attributes> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(DtoError::InvalidAttributes { found: "null" }),
        Value::Bool(_) => Err(DtoError::InvalidAttributes { found: "bool" }),
        Value::Number(_) => Err(DtoError::InvalidAttributes { found: "number" }),
        Value::String(_) => Err(DtoError::InvalidAttributes { found: "string" }),
        Value::Array(_) => Err(DtoError::InvalidAttributes { found: "array" }),
    }
}
