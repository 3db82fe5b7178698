use proc_macro::TokenStream;

mod derive_utils;
mod dto;
mod naming;

/// DTO 宏
/// - 为具名字段结构体生成编译期字段表（`::dto_core::schema::Schema`）并实现 `::dto_core::Dto`
/// - 字段内部名称为字段名的 camelCase 形式（`first_name` -> `firstName`），可用 `rename` 覆写
/// - 合并/追加派生：Debug（`#[dto(debug = false)]` 可关闭）, Default, Clone, Serialize, Deserialize
/// - 字段参数：
///   - `#[dto(setter)]`：填充时调用 `Self::set_<field>(&mut self, Value) -> DtoResult<()>` 代替直接赋值
///   - `#[dto(setter = path)]`：指定覆写函数
///   - `#[dto(rename = "...")]`：指定内部名称
///   - `#[dto(skip)]`：不参与填充与导出
#[proc_macro_attribute]
pub fn dto(attr: TokenStream, item: TokenStream) -> TokenStream {
    dto::expand(attr, item)
}
