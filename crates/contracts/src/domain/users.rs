use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access level of a console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Agent,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Admin => "admin",
            UserRole::Agent => "agent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Admin => "Admin",
            UserRole::Agent => "Agent",
        }
    }

    pub const ALL: [UserRole; 3] = [UserRole::SuperAdmin, UserRole::Admin, UserRole::Agent];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Suspended => "Suspended",
        }
    }

    pub const ALL: [UserStatus; 3] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::Suspended,
    ];
}

/// One console user as returned by `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(rename = "twoFactorEnabled", default)]
    pub two_factor_enabled: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "lastLoginAt")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateUserDto {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUserDto {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_format_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::SuperAdmin).expect("serialize"),
            "\"super_admin\""
        );
        let role: UserRole = serde_json::from_str("\"agent\"").expect("parse");
        assert_eq!(role, UserRole::Agent);
    }

    #[test]
    fn user_record_parses_camel_case_payload() {
        let json = r#"{
            "id": "u-1",
            "firstName": "Jane",
            "lastName": "Wanjiku",
            "email": "jane@brokerage.co.ke",
            "role": "admin",
            "status": "active",
            "twoFactorEnabled": true,
            "createdAt": "2025-01-15T09:30:00Z",
            "lastLoginAt": null
        }"#;
        let user: UserRecord = serde_json::from_str(json).expect("parse");
        assert_eq!(user.full_name(), "Jane Wanjiku");
        assert!(user.two_factor_enabled);
        assert!(user.last_login_at.is_none());
    }
}
