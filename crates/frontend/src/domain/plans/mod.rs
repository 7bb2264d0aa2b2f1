pub mod api;
pub mod ui;

use contracts::domain::plans::PlanRecord;

use crate::shared::filter::{FieldAccess, FieldValue};

impl FieldAccess for PlanRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "company_name" => Some(FieldValue::Text(self.company_name.clone())),
            "plan_type" => Some(FieldValue::Text(self.plan_type.as_str().to_string())),
            // Currency strings; the comparator normalizes the digits.
            "premium" => Some(FieldValue::Text(self.premium.clone())),
            "cover_amount" => Some(FieldValue::Text(self.cover_amount.clone())),
            "min_age" => Some(FieldValue::Number(self.min_age as f64)),
            "max_age" => Some(FieldValue::Number(self.max_age as f64)),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            "search" => Some(FieldValue::Text(format!(
                "{} {}",
                self.name, self.company_name
            ))),
            _ => None,
        }
    }
}
