pub mod api;
pub mod ui;

use contracts::domain::companies::CompanyRecord;

use crate::shared::filter::{FieldAccess, FieldValue};

impl FieldAccess for CompanyRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "code" => Some(FieldValue::Text(self.code.clone())),
            "contact_email" => Some(FieldValue::Text(self.contact_email.clone())),
            "phone" => Some(FieldValue::Text(self.phone.clone())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "plan_count" => Some(FieldValue::Number(self.plan_count as f64)),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            // Combined haystack for the search box.
            "search" => Some(FieldValue::Text(format!(
                "{} {} {}",
                self.name, self.code, self.contact_email
            ))),
            _ => None,
        }
    }
}
