use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    Active,
    Inactive,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "active",
            CompanyStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "Active",
            CompanyStatus::Inactive => "Inactive",
        }
    }

    pub const ALL: [CompanyStatus; 2] = [CompanyStatus::Active, CompanyStatus::Inactive];
}

/// One underwriting company as returned by `GET /api/companies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyRecord {
    pub id: String,
    pub name: String,
    /// Short registry code, e.g. "JUB" or "APA".
    pub code: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    pub phone: String,
    pub status: CompanyStatus,
    #[serde(rename = "planCount", default)]
    pub plan_count: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompanyDto {
    pub name: String,
    pub code: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    pub phone: String,
    pub status: String,
}
