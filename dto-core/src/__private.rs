// `#[dto]` 宏生成代码使用的辅助函数，不属于公开 API。

use serde::{Serialize, de::DeserializeOwned};

pub use serde_json::Error as JsonError;
pub use serde_json::Value;

/// 读取字段值；序列化失败时记录告警并以 null 导出
pub fn read_field<V: Serialize>(field: &'static str, value: &V) -> Value {
    match serde_json::to_value(value) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(field, error = %err, "field failed to serialize, exported as null");
            Value::Null
        }
    }
}

/// 将原始值反序列化后写入字段；失败时字段保持原值
pub fn assign_field<V: DeserializeOwned>(slot: &mut V, value: Value) -> Result<(), JsonError> {
    *slot = serde_json::from_value(value)?;
    Ok(())
}
