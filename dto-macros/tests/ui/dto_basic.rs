use dto_core::schema::Schema;
use dto_core::Dto;
use dto_macros::dto;
use serde_json::json;

#[dto]
struct Address {
    street_name: Option<String>,
    postal_code: Option<String>,
    r#type: String,
}

fn main() {
    // 字段表按声明顺序，内部名称为 camelCase
    assert_eq!(
        Address::field_names().collect::<Vec<_>>(),
        vec!["streetName", "postalCode", "type"]
    );

    let mut addr = Address::default();
    addr.fill_value(json!({
        "street_name": "Main St",
        "postalCode": "12345",
        "type": "home",
        "unknown": true,
    }))
    .unwrap();

    assert_eq!(addr.street_name.as_deref(), Some("Main St"));
    assert_eq!(addr.postal_code.as_deref(), Some("12345"));
    assert_eq!(addr.r#type, "home");

    let exported = addr.to_array();
    assert_eq!(exported["street_name"], json!("Main St"));
    assert_eq!(exported["postal_code"], json!("12345"));
    assert!(!exported.contains_key("unknown"));

    // 默认派生可用
    let copy = addr.clone();
    let _ = format!("{:?}", copy);
    let _ = serde_json::to_string(&copy).unwrap();
}
