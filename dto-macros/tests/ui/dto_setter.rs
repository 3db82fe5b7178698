use dto_core::{Dto, DtoError, DtoResult};
use dto_macros::dto;
use serde_json::{Value, json};

#[dto]
struct Signup {
    #[dto(setter)]
    country: String,
    #[dto(setter = normalize_email)]
    email: Option<String>,
    #[dto(skip)]
    audit_calls: u32,
}

impl Signup {
    fn set_country(&mut self, value: Value) -> DtoResult<()> {
        self.audit_calls += 1;
        self.country = match value {
            Value::String(s) if !s.is_empty() => s.to_uppercase(),
            _ => "GB".to_string(),
        };
        Ok(())
    }
}

fn normalize_email(dto: &mut Signup, value: Value) -> DtoResult<()> {
    match value {
        Value::String(s) if s.contains('@') => {
            dto.email = Some(s.to_lowercase());
            Ok(())
        }
        Value::Null => Ok(()),
        other => Err(DtoError::invalid_value("email", other.to_string())),
    }
}

fn main() {
    // 未提供 country，第二轮触发 setter 写入默认值
    let mut s = Signup::default();
    s.fill_value(json!({"email": "Jo@Example.com"})).unwrap();
    assert_eq!(s.country, "GB");
    assert_eq!(s.email.as_deref(), Some("jo@example.com"));
    assert_eq!(s.audit_calls, 1);

    // skip 字段既不导出也不填充
    let exported = s.to_array();
    assert!(!exported.contains_key("audit_calls"));
    let mut t = Signup::default();
    t.fill_value(json!({"audit_calls": 9, "country": "fr"})).unwrap();
    assert_eq!(t.audit_calls, 1);
    assert_eq!(t.country, "FR");

    // setter 的错误原样返回
    let mut u = Signup::default();
    let err = u.fill_value(json!({"email": "nope"})).unwrap_err();
    assert!(matches!(err, DtoError::InvalidValue { .. }));
}
