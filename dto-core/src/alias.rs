//! 别名表
//!
//! 记录“内部字段名 -> 外部属性键”的映射，用于读取键名与字段名不一致的属性。
//! 构造时同时建立“外部键 -> 字段名”的反向索引，填充时按外部键直接查找。
//!
//! 多个字段指向同一个外部键时，按插入顺序第一个字段生效。
//! 指向不存在字段的别名不会产生任何效果。
//!
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aliases {
    // 按插入顺序保存 (字段名, 外部键)
    pairs: Vec<(String, String)>,
    // 外部键 -> pairs 下标
    by_key: HashMap<String, usize>,
}

impl Aliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条别名，便于链式构造
    ///
    /// ```
    /// use dto_core::Aliases;
    ///
    /// let aliases = Aliases::new().with("email", "email_address");
    /// assert_eq!(aliases.field_for("email_address"), Some("email"));
    /// ```
    pub fn with(mut self, field: impl Into<String>, key: impl Into<String>) -> Self {
        self.insert(field, key);
        self
    }

    /// 设置字段的外部键；字段已存在时覆盖其外部键并保留原有位置
    pub fn insert(&mut self, field: impl Into<String>, key: impl Into<String>) {
        let field = field.into();
        let key = key.into();

        if let Some(pos) = self.pairs.iter().position(|(f, _)| *f == field) {
            self.pairs[pos].1 = key;
            self.reindex();
            return;
        }

        self.pairs.push((field, key.clone()));
        self.by_key.entry(key).or_insert(self.pairs.len() - 1);
    }

    /// 根据外部键反查字段名
    pub fn field_for(&self, key: &str) -> Option<&str> {
        self.by_key
            .get(key)
            .map(|&idx| self.pairs[idx].0.as_str())
    }

    /// 根据字段名查外部键
    pub fn key_for(&self, field: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, k)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(f, k)| (f.as_str(), k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn reindex(&mut self) {
        self.by_key.clear();
        for (idx, (_, key)) in self.pairs.iter().enumerate() {
            self.by_key.entry(key.clone()).or_insert(idx);
        }
    }
}

impl<F, K> FromIterator<(F, K)> for Aliases
where
    F: Into<String>,
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, K)>>(iter: I) -> Self {
        let mut aliases = Aliases::new();
        for (field, key) in iter {
            aliases.insert(field, key);
        }
        aliases
    }
}

impl<F, K, const N: usize> From<[(F, K); N]> for Aliases
where
    F: Into<String>,
    K: Into<String>,
{
    fn from(pairs: [(F, K); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<F, K> From<Vec<(F, K)>> for Aliases
where
    F: Into<String>,
    K: Into<String>,
{
    fn from(pairs: Vec<(F, K)>) -> Self {
        pairs.into_iter().collect()
    }
}
