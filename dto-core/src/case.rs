//! 键名风格转换
//!
//! 字段的内部名称统一为 camelCase，外部属性集合通常使用 snake_case。
//! 两个方向的转换都是纯函数，对任意输入都有结果，不规则输入按“尽力而为”处理。
//!
use std::borrow::Cow;

/// 导出时键名使用的风格
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyCase {
    /// 改写为 snake_case（默认）
    #[default]
    Snake,
    /// 保持内部的 camelCase 名称
    Inner,
}

impl KeyCase {
    /// 按当前风格改写字段名
    pub fn apply<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            KeyCase::Snake => Cow::Owned(camel_to_snake(name)),
            KeyCase::Inner => Cow::Borrowed(name),
        }
    }
}

/// snake_case -> camelCase
///
/// 以 `_` 切分，除第一段外每段首字母大写，拼接后整体首字母小写。
/// 已是 camelCase 的输入保持不变。
///
/// ```
/// use dto_core::case::snake_to_camel;
///
/// assert_eq!(snake_to_camel("first_name"), "firstName");
/// assert_eq!(snake_to_camel("firstName"), "firstName");
/// ```
pub fn snake_to_camel(input: &str) -> String {
    let mut joined = String::with_capacity(input.len());
    for (idx, segment) in input.split('_').enumerate() {
        if idx == 0 {
            joined.push_str(segment);
        } else {
            joined.push_str(&upper_first(segment));
        }
    }
    lower_first(&joined)
}

/// camelCase -> snake_case
///
/// 在每个非首位的 ASCII 大写字母前插入 `_`，再整体转为小写。
///
/// ```
/// use dto_core::case::camel_to_snake;
///
/// assert_eq!(camel_to_snake("firstName"), "first_name");
/// assert_eq!(camel_to_snake("id"), "id");
/// ```
pub fn camel_to_snake(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for (idx, ch) in input.char_indices() {
        if idx > 0 && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

fn upper_first(s: &str) -> Cow<'_, str> {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            Cow::Owned(first.to_uppercase().chain(chars).collect())
        }
        _ => Cow::Borrowed(s),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
