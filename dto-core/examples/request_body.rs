//! 从解码后的请求体填充 DTO，并导出为不同风格的属性集合。
//!
//! 运行：`RUST_LOG=dto_core=trace cargo run -p dto-core --example request_body`
use dto_core::{Dto, DtoError, DtoResult, ExportOptions, KeyCase, dto};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[dto]
struct CreateAccountRequest {
    display_name: Option<String>,
    email: Option<String>,
    #[dto(setter)]
    time_zone: String,
    marketing_opt_in: bool,
}

impl CreateAccountRequest {
    fn set_time_zone(&mut self, value: Value) -> DtoResult<()> {
        self.time_zone = match value {
            Value::String(s) if s.contains('/') => s,
            Value::String(s) if !s.is_empty() => {
                return Err(DtoError::invalid_value("timeZone", s));
            }
            _ => "UTC".to_string(),
        };
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let body = json!({
        "name": "Jo Bloggs",
        "email": "jo@example.com",
        "marketing_opt_in": true,
        "csrf_token": "ignored",
    });

    let mut request = CreateAccountRequest::default();
    request.map([("display_name", "name")]).fill_value(body)?;

    println!("object: {:?}", request.to_object());
    println!(
        "snake:  {}",
        serde_json::to_string(&request.to_array())?
    );
    println!(
        "inner:  {}",
        serde_json::to_string(&request.to_array_with(&ExportOptions::from(KeyCase::Inner)))?
    );

    let mut rejected = CreateAccountRequest::default();
    if let Err(err) = rejected.fill_value(json!({"time_zone": "Mars"})) {
        println!("rejected: {err}");
    }

    Ok(())
}
