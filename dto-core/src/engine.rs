//! 填充引擎
//!
//! `fill_with` 分两轮执行，两轮都经由同一个 `populate`：
//! 1. 直接填充：处理调用方提供的属性集合；
//! 2. 触发覆写：取当前所有字段（内部名称），筛出仍为空值的字段，再以其自身的空值填充一次，
//!    保证每个带覆写 setter 的字段在一次 fill 中至少被调用一次（便于在 setter 中处理默认值）。
//!
//! 别名表以参数形式借入，fill 结束即失效，不会残留到下一次 fill。
//!
use crate::Attributes;
use crate::alias::Aliases;
use crate::case::snake_to_camel;
use crate::error::DtoResult;
use crate::options::ExportOptions;
use crate::schema::Schema;
use serde_json::Value;
use std::any::type_name;
use tracing::{debug, trace};

/// 两轮填充
pub fn fill_with<T: Schema>(
    dto: &mut T,
    aliases: &Aliases,
    attributes: Attributes,
) -> DtoResult<()> {
    populate(dto, aliases, attributes)?;

    let pending: Attributes = export(dto, &ExportOptions::inner())
        .into_iter()
        .filter(|(_, value)| is_empty(value))
        .collect();

    debug!(
        dto = type_name::<T>(),
        fields = pending.len(),
        "re-populating empty fields"
    );

    populate(dto, aliases, pending)
}

/// 单轮填充
///
/// 对每个键：别名反查 -> snake_to_camel 归一化 -> 查找字段；
/// 字段不存在则跳过；存在覆写 setter 则交给 setter，否则直接赋值。
pub fn populate<T: Schema>(
    dto: &mut T,
    aliases: &Aliases,
    attributes: Attributes,
) -> DtoResult<()> {
    for (key, value) in attributes {
        let source = match aliases.field_for(&key) {
            Some(field) => {
                trace!(key = %key, field, "attribute key resolved by alias");
                field
            }
            None => key.as_str(),
        };
        let name = snake_to_camel(source);

        let Some(def) = T::field(&name) else {
            trace!(
                dto = type_name::<T>(),
                key = %key,
                "attribute skipped: no matching field"
            );
            continue;
        };

        match def.setter {
            Some(setter) => setter(dto, value)?,
            None => {
                if let Err(err) = (def.assign)(dto, value) {
                    debug!(
                        dto = type_name::<T>(),
                        field = def.name,
                        error = %err,
                        "attribute skipped: value does not fit field type"
                    );
                }
            }
        }
    }
    Ok(())
}

/// 导出全部字段
///
/// 按字段声明顺序遍历；改写键名后若有重名，后写入者覆盖先写入者。
pub fn export<T: Schema>(dto: &T, options: &ExportOptions) -> Attributes {
    let mut out = Attributes::new();
    for def in T::FIELDS {
        let value = (def.read)(dto);
        if options.skip_empty() && is_empty(&value) {
            continue;
        }
        out.insert(options.key_case().apply(def.name).into_owned(), value);
    }
    out
}

/// 空值判定：null、false、数值 0、""、"0"、空数组、空对象
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
