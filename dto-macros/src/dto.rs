use crate::derive_utils::merge_derives;
use crate::naming::{inner_name, snake_to_camel};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use std::collections::HashSet;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Attribute, Ident, Item, ItemStruct, LitStr, Result, Token, parse::Parse, parse::ParseStream,
    parse_macro_input,
};

/// #[dto] 宏实现
/// - 仅支持具名字段结构体
/// - 合并/追加派生：Debug（可关闭）, Default, Clone, Serialize, Deserialize
/// - 生成 `::dto_core::schema::Schema`（字段表）与 `::dto_core::Dto` 实现
/// - 字段参数：`#[dto(setter)]`、`#[dto(setter = path)]`、`#[dto(rename = "...")]`、`#[dto(skip)]`
/// - rename 的值按 snake_to_camel 归一化后作为内部名称
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as DtoAttrConfig);
    let input = parse_macro_input!(item as Item);

    let st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[dto] only on struct")
                .to_compile_error()
                .into();
        }
    };

    match expand_struct(cfg, st) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_struct(cfg: DtoAttrConfig, mut st: ItemStruct) -> Result<TokenStream2> {
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return Err(syn::Error::new(
                st.span(),
                "#[dto] only supports named-field struct",
            ));
        }
    };

    // 收集字段定义，同时剥离字段上的 #[dto(...)]
    let mut specs: Vec<FieldSpec> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for field in fields_named.named.iter_mut() {
        let field_cfg = take_field_config(&mut field.attrs)?;
        if field_cfg.skip {
            continue;
        }

        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(field.span(), "expected named field"))?;
        let name = match field_cfg.rename {
            Some(lit) => snake_to_camel(&lit.value()),
            None => inner_name(&ident),
        };
        if !seen.insert(name.clone()) {
            return Err(syn::Error::new(
                ident.span(),
                format!("duplicate dto field name '{name}'"),
            ));
        }

        let setter = match field_cfg.setter {
            Some(SetterConfig::Conventional) => {
                let method = format_ident!("set_{}", ident.unraw());
                Some(quote! { Self::#method })
            }
            Some(SetterConfig::Path(path)) => Some(quote! { #path }),
            None => None,
        };

        specs.push(FieldSpec {
            ident,
            name,
            setter,
        });
    }

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Default),
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }
    merge_derives(&mut st.attrs, required)?;

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let accessors = specs.iter().map(FieldSpec::accessors);
    let defs = specs.iter().map(FieldSpec::field_def);

    Ok(quote! {
        #st

        impl #impl_generics #ident #ty_generics #where_clause {
            #( #accessors )*
        }

        impl #impl_generics ::dto_core::schema::Schema for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::dto_core::schema::FieldDef<Self>] = &[
                #( #defs ),*
            ];
        }

        impl #impl_generics ::dto_core::Dto for #ident #ty_generics #where_clause {}
    })
}

struct FieldSpec {
    ident: Ident,
    name: String,
    setter: Option<TokenStream2>,
}

impl FieldSpec {
    fn read_fn(&self) -> Ident {
        format_ident!("__dto_read_{}", self.ident.unraw())
    }

    fn assign_fn(&self) -> Ident {
        format_ident!("__dto_assign_{}", self.ident.unraw())
    }

    fn accessors(&self) -> TokenStream2 {
        let ident = &self.ident;
        let name = &self.name;
        let read_fn = self.read_fn();
        let assign_fn = self.assign_fn();
        quote! {
            #[doc(hidden)]
            fn #read_fn(&self) -> ::dto_core::__private::Value {
                ::dto_core::__private::read_field(#name, &self.#ident)
            }

            #[doc(hidden)]
            fn #assign_fn(
                &mut self,
                value: ::dto_core::__private::Value,
            ) -> ::core::result::Result<(), ::dto_core::__private::JsonError> {
                ::dto_core::__private::assign_field(&mut self.#ident, value)
            }
        }
    }

    fn field_def(&self) -> TokenStream2 {
        let name = &self.name;
        let read_fn = self.read_fn();
        let assign_fn = self.assign_fn();
        let setter = match &self.setter {
            Some(path) => quote! { ::core::option::Option::Some(#path) },
            None => quote! { ::core::option::Option::None },
        };
        quote! {
            ::dto_core::schema::FieldDef {
                name: #name,
                read: Self::#read_fn,
                assign: Self::#assign_fn,
                setter: #setter,
            }
        }
    }
}

// -------- parsing --------

struct DtoAttrConfig {
    derive_debug: Option<bool>,
}

impl Parse for DtoAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut derive_debug: Option<bool> = None;
        if input.is_empty() {
            return Ok(Self { derive_debug });
        }

        let elems: Punctuated<DtoAttrElem, Token![,]> = Punctuated::parse_terminated(input)?;
        for elem in elems {
            match elem {
                DtoAttrElem::Debug(key, b) => {
                    if derive_debug.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    derive_debug = Some(b);
                }
            }
        }
        Ok(Self { derive_debug })
    }
}

enum DtoAttrElem {
    Debug(Ident, bool),
}

impl Parse for DtoAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        if key != "debug" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'debug'",
            ));
        }
        let _eq: Token![=] = input.parse()?;
        let lit: syn::LitBool = input.parse()?;
        Ok(DtoAttrElem::Debug(key, lit.value()))
    }
}

enum SetterConfig {
    // Self::set_<field>
    Conventional,
    Path(syn::Path),
}

#[derive(Default)]
struct FieldConfig {
    setter: Option<SetterConfig>,
    rename: Option<LitStr>,
    skip: bool,
}

enum FieldAttrElem {
    Setter(Ident, Option<syn::Path>),
    Rename(Ident, LitStr),
    Skip(Ident),
}

impl Parse for FieldAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        if key == "setter" {
            if input.peek(Token![=]) {
                let _eq: Token![=] = input.parse()?;
                let path: syn::Path = input.parse()?;
                Ok(FieldAttrElem::Setter(key, Some(path)))
            } else {
                Ok(FieldAttrElem::Setter(key, None))
            }
        } else if key == "rename" {
            let _eq: Token![=] = input.parse()?;
            let lit: LitStr = input.parse()?;
            Ok(FieldAttrElem::Rename(key, lit))
        } else if key == "skip" {
            Ok(FieldAttrElem::Skip(key))
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'setter' | 'rename' | 'skip'",
            ))
        }
    }
}

// 解析并移除字段上的 #[dto(...)]，其余属性原样保留
fn take_field_config(attrs: &mut Vec<Attribute>) -> Result<FieldConfig> {
    let mut cfg = FieldConfig::default();
    let mut retained = Vec::with_capacity(attrs.len());
    let mut last_key: Option<Ident> = None;

    for attr in attrs.drain(..) {
        if !attr.path().is_ident("dto") {
            retained.push(attr);
            continue;
        }
        let elems = attr.parse_args_with(Punctuated::<FieldAttrElem, Token![,]>::parse_terminated)?;
        for elem in elems {
            match elem {
                FieldAttrElem::Setter(key, path) => {
                    if cfg.setter.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'setter' in attribute",
                        ));
                    }
                    cfg.setter = Some(match path {
                        Some(p) => SetterConfig::Path(p),
                        None => SetterConfig::Conventional,
                    });
                    last_key = Some(key);
                }
                FieldAttrElem::Rename(key, lit) => {
                    if cfg.rename.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'rename' in attribute",
                        ));
                    }
                    cfg.rename = Some(lit);
                    last_key = Some(key);
                }
                FieldAttrElem::Skip(key) => {
                    cfg.skip = true;
                    last_key = Some(key);
                }
            }
        }
    }

    if cfg.skip && (cfg.setter.is_some() || cfg.rename.is_some()) {
        let span = last_key.map(|k| k.span()).unwrap_or_else(proc_macro2::Span::call_site);
        return Err(syn::Error::new(
            span,
            "'skip' cannot be combined with 'setter' or 'rename'",
        ));
    }

    *attrs = retained;
    Ok(cfg)
}
