use syn::punctuated::Punctuated;
use syn::{Attribute, Path, Result, Token};

/// 合并 derive：宏要求的派生在前，结构体上已有的派生在后，按末段名去重
/// （`Serialize` 与 `serde::Serialize` 视为同一项）。
/// 所有 derive 属性合并为一条，置于属性列表最前。
pub(crate) fn merge_derives(attrs: &mut Vec<Attribute>, required: Vec<Path>) -> Result<()> {
    let mut merged = required;
    let mut retained = Vec::with_capacity(attrs.len() + 1);

    for attr in attrs.drain(..) {
        if !attr.path().is_ident("derive") {
            retained.push(attr);
            continue;
        }
        let list = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
        for path in list {
            if !merged.iter().any(|p| same_derive(p, &path)) {
                merged.push(path);
            }
        }
    }

    retained.insert(0, syn::parse_quote!(#[derive(#(#merged),*)]));
    *attrs = retained;
    Ok(())
}

fn same_derive(a: &Path, b: &Path) -> bool {
    match (a.segments.last(), b.segments.last()) {
        (Some(x), Some(y)) => x.ident == y.ident,
        _ => false,
    }
}
