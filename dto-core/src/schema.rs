//! 字段模式（Schema）
//!
//! 每个具体 DTO 在定义时声明一张静态字段表：字段的内部名称、读取函数、
//! 直接赋值函数，以及可选的覆写 setter。填充与导出都只通过这张表访问字段，
//! 不在运行时按名称反射查找方法。
//!
//! 通常由 `#[dto]` 宏生成，也可以手写实现。
//!
use crate::error::DtoResult;
use serde_json::Value;
use std::fmt;

/// 单个字段的定义
pub struct FieldDef<T> {
    /// 内部名称（camelCase）
    pub name: &'static str,
    /// 读取字段当前值
    pub read: fn(&T) -> Value,
    /// 将原始值直接写入字段；值无法转换为字段类型时返回错误，字段保持不变
    pub assign: fn(&mut T, Value) -> Result<(), serde_json::Error>,
    /// 覆写 setter：存在时代替直接赋值，由其全权处理原始值
    pub setter: Option<fn(&mut T, Value) -> DtoResult<()>>,
}

impl<T> FieldDef<T> {
    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }
}

impl<T> fmt::Debug for FieldDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("has_setter", &self.has_setter())
            .finish()
    }
}

/// 编译期已知的字段集合
pub trait Schema: Sized + 'static {
    /// 按声明顺序排列的字段表
    const FIELDS: &'static [FieldDef<Self>];

    /// 按内部名称查找字段
    fn field(name: &str) -> Option<&'static FieldDef<Self>> {
        Self::FIELDS.iter().find(|def| def.name == name)
    }

    fn field_names() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|def| def.name)
    }
}
