use dto_core::{Dto, KeyCase, ExportOptions};
use dto_macros::dto;
use serde_json::json;
use std::fmt;

#[dto(debug = false)]
#[derive(PartialEq)]
struct Profile {
    #[dto(rename = "handle")]
    user_name: String,
    #[serde(default)]
    user_id: Option<uuid::Uuid>,
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Profile(..)")
    }
}

fn main() {
    let id = uuid::Uuid::new_v4();
    let mut p = Profile::default();
    p.fill_value(json!({"handle": "jo", "user_id": id.to_string()}))
        .unwrap();
    assert_eq!(p.user_name, "jo");
    assert_eq!(p.user_id, Some(id));

    // rename 后的内部名称参与导出
    let inner = p.to_array_with(&ExportOptions::from(KeyCase::Inner));
    assert_eq!(inner["handle"], json!("jo"));
    assert_eq!(inner["userId"], json!(id.to_string()));

    // 手写 Debug 可编译即说明未自动派生 Debug；用户派生的 PartialEq 保留
    assert_eq!(format!("{:?}", p), "Profile(..)");
    assert_eq!(p.clone(), p);
}
