pub mod api;
pub mod ui;

use contracts::system::activity::UserActivityRecord;

use crate::shared::filter::{FieldAccess, FieldValue};

impl FieldAccess for UserActivityRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "user_email" => Some(FieldValue::Text(self.user_email.clone())),
            "activity" => Some(FieldValue::Text(self.activity.clone())),
            "ip_address" => Some(FieldValue::Text(self.ip_address.clone())),
            "timestamp" => Some(FieldValue::Timestamp(self.timestamp)),
            "search" => Some(FieldValue::Text(format!(
                "{} {}",
                self.user_email, self.activity
            ))),
            _ => None,
        }
    }
}
