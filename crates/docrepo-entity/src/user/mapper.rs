//! Public JSON view of users.

use serde_json::Value;

use docrepo_core::result::AppResult;
use docrepo_core::types::to_document;

use super::model::User;

/// Maps users to their outward JSON form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl UserMapper {
    /// Serialize a user with the password nulled out. The key stays so the
    /// shape matches the stored document.
    pub fn to_json(user: &User) -> AppResult<Value> {
        let mut document = to_document(user)?;
        document.insert("password".to_string(), Value::Null);
        Ok(Value::Object(document))
    }
}
