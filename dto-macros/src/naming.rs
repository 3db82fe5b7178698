use syn::Ident;
use syn::ext::IdentExt;

/// 字段标识符 -> 内部名称（camelCase）
///
/// 与运行时 `dto_core::case::snake_to_camel` 规则一致：以 `_` 切分，
/// 除首段外首字母大写，最后整体首字母小写。原始标识符（`r#type`）去掉前缀。
pub(crate) fn inner_name(ident: &Ident) -> String {
    snake_to_camel(&ident.unraw().to_string())
}

/// `#[dto(rename = "...")]` 的值同样经过此函数归一化，与运行时查找字段时的键名处理一致
// 须与 dto_core::case::snake_to_camel 保持同步（宏 crate 无法依赖 dto-core）
pub(crate) fn snake_to_camel(input: &str) -> String {
    let mut joined = String::with_capacity(input.len());
    for (idx, segment) in input.split('_').enumerate() {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if idx > 0 => {
                joined.extend(first.to_uppercase());
                joined.push_str(chars.as_str());
            }
            _ => joined.push_str(segment),
        }
    }
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
