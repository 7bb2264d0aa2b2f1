pub mod api;
pub mod ui;

use contracts::domain::users::UserRecord;

use crate::shared::filter::{FieldAccess, FieldValue};

impl FieldAccess for UserRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "first_name" => Some(FieldValue::Text(self.first_name.clone())),
            "last_name" => Some(FieldValue::Text(self.last_name.clone())),
            "full_name" => Some(FieldValue::Text(self.full_name())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "role" => Some(FieldValue::Text(self.role.as_str().to_string())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "two_factor_enabled" => Some(FieldValue::Bool(self.two_factor_enabled)),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            "last_login_at" => self.last_login_at.map(FieldValue::Timestamp),
            // Free-text search spans name and email.
            "search" => Some(FieldValue::Text(format!(
                "{} {} {}",
                self.first_name, self.last_name, self.email
            ))),
            _ => None,
        }
    }
}
