use chrono::Utc;
use contracts::domain::users::{CreateUserDto, UpdateUserDto, UserRecord, UserRole, UserStatus};
use uuid::Uuid;

use crate::shared::api_client::{CollectionClient, FetchError};
use crate::shared::api_utils::mock_enabled;
use crate::shared::mock;

const CLIENT: CollectionClient = CollectionClient::new("/api/users");

fn parse_role(value: &str) -> UserRole {
    UserRole::ALL
        .into_iter()
        .find(|r| r.as_str() == value)
        .unwrap_or(UserRole::Agent)
}

fn parse_status(value: &str) -> UserStatus {
    UserStatus::ALL
        .into_iter()
        .find(|s| s.as_str() == value)
        .unwrap_or(UserStatus::Active)
}

/// Full user set; the screen filters and paginates in memory.
pub async fn fetch_users() -> Result<Vec<UserRecord>, FetchError> {
    if mock_enabled() {
        return Ok(mock::USERS.clone());
    }
    CLIENT.fetch_all().await
}

pub async fn create_user(dto: &CreateUserDto) -> Result<UserRecord, FetchError> {
    if mock_enabled() {
        return Ok(UserRecord {
            id: Uuid::new_v4().to_string(),
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            email: dto.email.clone(),
            role: parse_role(&dto.role),
            status: UserStatus::Active,
            two_factor_enabled: false,
            created_at: Utc::now(),
            last_login_at: None,
        });
    }
    CLIENT.create(dto).await
}

pub async fn update_user(id: &str, dto: &UpdateUserDto) -> Result<UserRecord, FetchError> {
    if mock_enabled() {
        let existing = mock::USERS.iter().find(|u| u.id == id);
        return Ok(UserRecord {
            id: id.to_string(),
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            email: dto.email.clone(),
            role: parse_role(&dto.role),
            status: parse_status(&dto.status),
            two_factor_enabled: existing.map(|u| u.two_factor_enabled).unwrap_or(false),
            created_at: existing.map(|u| u.created_at).unwrap_or_else(Utc::now),
            last_login_at: existing.and_then(|u| u.last_login_at),
        });
    }
    CLIENT.update(id, dto).await
}

pub async fn delete_user(id: &str) -> Result<(), FetchError> {
    if mock_enabled() {
        return Ok(());
    }
    CLIENT.remove(id).await
}
