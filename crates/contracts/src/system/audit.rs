use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of action recorded in the audit trail. Filtered by exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Login,
    Logout,
    Create,
    Update,
    Delete,
    Export,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Login => "login",
            AuditAction::Logout => "logout",
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
            AuditAction::Export => "export",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuditAction::Login => "Login",
            AuditAction::Logout => "Logout",
            AuditAction::Create => "Create",
            AuditAction::Update => "Update",
            AuditAction::Delete => "Delete",
            AuditAction::Export => "Export",
        }
    }

    pub const ALL: [AuditAction; 6] = [
        AuditAction::Login,
        AuditAction::Logout,
        AuditAction::Create,
        AuditAction::Update,
        AuditAction::Delete,
        AuditAction::Export,
    ];
}

/// One audit trail entry as returned by `GET /api/audit-logs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLogRecord {
    pub id: String,
    #[serde(rename = "actorEmail")]
    pub actor_email: String,
    pub action: AuditAction,
    /// Resource the action targeted, e.g. "user" or "insurance_plan".
    pub resource: String,
    pub details: String,
    #[serde(rename = "ipAddress")]
    pub ip_address: String,
    pub timestamp: DateTime<Utc>,
}
