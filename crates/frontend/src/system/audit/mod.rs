pub mod api;
pub mod ui;

use contracts::system::audit::AuditLogRecord;

use crate::shared::filter::{FieldAccess, FieldValue};

impl FieldAccess for AuditLogRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "actor_email" => Some(FieldValue::Text(self.actor_email.clone())),
            "action" => Some(FieldValue::Text(self.action.as_str().to_string())),
            "resource" => Some(FieldValue::Text(self.resource.clone())),
            "details" => Some(FieldValue::Text(self.details.clone())),
            "ip_address" => Some(FieldValue::Text(self.ip_address.clone())),
            "timestamp" => Some(FieldValue::Timestamp(self.timestamp)),
            "search" => Some(FieldValue::Text(format!(
                "{} {} {}",
                self.actor_email, self.resource, self.details
            ))),
            _ => None,
        }
    }
}
