use dto_core::{Dto, DtoResult, ExportOptions, KeyCase};
use dto_macros::dto;
use serde_json::{Value, json};

#[dto]
struct Subscriber {
    #[dto(rename = "email_address")]
    email: Option<String>,
    #[dto(rename = "Code", setter)]
    code: String,
}

impl Subscriber {
    fn set_code(&mut self, value: Value) -> DtoResult<()> {
        self.code = match value {
            Value::String(s) if !s.is_empty() => s,
            _ => "DEFAULT".to_string(),
        };
        Ok(())
    }
}

fn main() {
    // 字段表中保存的是归一化后的内部名称
    let names: Vec<_> = <Subscriber as dto_core::Schema>::field_names().collect();
    assert_eq!(names, vec!["emailAddress", "code"]);

    let mut s = Subscriber::default();
    s.fill_value(json!({"email_address": "a@b.c", "Code": "X"}))
        .unwrap();
    assert_eq!(s.email.as_deref(), Some("a@b.c"));
    assert_eq!(s.code, "X");

    let inner = s.to_array_with(&ExportOptions::from(KeyCase::Inner));
    assert_eq!(inner["emailAddress"], json!("a@b.c"));
    assert_eq!(inner["code"], json!("X"));
    assert_eq!(s.to_array()["email_address"], json!("a@b.c"));

    // 未提供时第二轮仍会触发 setter
    let mut fresh = Subscriber::default();
    fresh.fill_value(json!({})).unwrap();
    assert_eq!(fresh.code, "DEFAULT");
    assert_eq!(fresh.email, None);
}
