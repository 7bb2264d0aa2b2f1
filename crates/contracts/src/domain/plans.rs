use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Medical,
    Life,
    Motor,
    Property,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Medical => "medical",
            PlanType::Life => "life",
            PlanType::Motor => "motor",
            PlanType::Property => "property",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanType::Medical => "Medical",
            PlanType::Life => "Life",
            PlanType::Motor => "Motor",
            PlanType::Property => "Property",
        }
    }

    pub const ALL: [PlanType; 4] = [
        PlanType::Medical,
        PlanType::Life,
        PlanType::Motor,
        PlanType::Property,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Active,
    Inactive,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanStatus::Active => "Active",
            PlanStatus::Inactive => "Inactive",
        }
    }

    pub const ALL: [PlanStatus; 2] = [PlanStatus::Active, PlanStatus::Inactive];
}

/// One insurance plan as returned by `GET /api/plans`.
///
/// `premium` and `cover_amount` arrive as display strings from the
/// backend (e.g. "KES 50,000"); the frontend normalizes them only for
/// sorting, never for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRecord {
    pub id: String,
    #[serde(rename = "companyId")]
    pub company_id: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub name: String,
    #[serde(rename = "planType")]
    pub plan_type: PlanType,
    pub premium: String,
    #[serde(rename = "coverAmount")]
    pub cover_amount: String,
    #[serde(rename = "minAge")]
    pub min_age: i32,
    #[serde(rename = "maxAge")]
    pub max_age: i32,
    pub status: PlanStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlanDto {
    #[serde(rename = "companyId")]
    pub company_id: String,
    pub name: String,
    #[serde(rename = "planType")]
    pub plan_type: String,
    pub premium: String,
    #[serde(rename = "coverAmount")]
    pub cover_amount: String,
    #[serde(rename = "minAge")]
    pub min_age: i32,
    #[serde(rename = "maxAge")]
    pub max_age: i32,
    pub status: String,
}
