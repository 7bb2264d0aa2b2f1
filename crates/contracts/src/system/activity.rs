use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user activity entry (security analytics feed),
/// as returned by `GET /api/user-activities`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserActivityRecord {
    pub id: String,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    pub activity: String,
    #[serde(rename = "ipAddress")]
    pub ip_address: String,
    #[serde(rename = "userAgent")]
    pub user_agent: Option<String>,
    pub timestamp: DateTime<Utc>,
}
