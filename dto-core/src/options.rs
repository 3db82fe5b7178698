use crate::case::KeyCase;
use bon::Builder;

/// 导出选项
///
/// - `key_case`：键名风格，默认 snake_case；
/// - `skip_empty`：是否略过空值字段（null / false / 0 / "" / "0" / 空数组 / 空对象），默认 false。
#[derive(Builder, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    #[builder(default)]
    key_case: KeyCase,
    #[builder(default)]
    skip_empty: bool,
}

impl ExportOptions {
    /// 保持内部字段名、不做过滤（填充引擎第二轮使用）
    pub const fn inner() -> Self {
        Self {
            key_case: KeyCase::Inner,
            skip_empty: false,
        }
    }

    pub fn key_case(&self) -> KeyCase {
        self.key_case
    }

    pub fn skip_empty(&self) -> bool {
        self.skip_empty
    }
}

impl From<KeyCase> for ExportOptions {
    fn from(key_case: KeyCase) -> Self {
        Self {
            key_case,
            skip_empty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let opts = ExportOptions::builder().build();
        assert_eq!(opts, ExportOptions::default());
        assert_eq!(opts.key_case(), KeyCase::Snake);
        assert!(!opts.skip_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let opts = ExportOptions::builder()
            .key_case(KeyCase::Inner)
            .skip_empty(true)
            .build();
        assert_eq!(opts.key_case(), KeyCase::Inner);
        assert!(opts.skip_empty());
        assert_eq!(ExportOptions::from(KeyCase::Inner), ExportOptions::inner());
    }
}
