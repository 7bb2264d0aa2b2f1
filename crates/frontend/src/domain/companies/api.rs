use chrono::Utc;
use contracts::domain::companies::{CompanyDto, CompanyRecord, CompanyStatus};
use uuid::Uuid;

use crate::shared::api_client::{CollectionClient, FetchError};
use crate::shared::api_utils::mock_enabled;
use crate::shared::mock;

const CLIENT: CollectionClient = CollectionClient::new("/api/companies");

fn parse_status(value: &str) -> CompanyStatus {
    CompanyStatus::ALL
        .into_iter()
        .find(|s| s.as_str() == value)
        .unwrap_or(CompanyStatus::Active)
}

pub async fn fetch_companies() -> Result<Vec<CompanyRecord>, FetchError> {
    if mock_enabled() {
        return Ok(mock::COMPANIES.clone());
    }
    CLIENT.fetch_all().await
}

pub async fn create_company(dto: &CompanyDto) -> Result<CompanyRecord, FetchError> {
    if mock_enabled() {
        return Ok(CompanyRecord {
            id: Uuid::new_v4().to_string(),
            name: dto.name.clone(),
            code: dto.code.clone(),
            contact_email: dto.contact_email.clone(),
            phone: dto.phone.clone(),
            status: parse_status(&dto.status),
            plan_count: 0,
            created_at: Utc::now(),
        });
    }
    CLIENT.create(dto).await
}

pub async fn update_company(id: &str, dto: &CompanyDto) -> Result<CompanyRecord, FetchError> {
    if mock_enabled() {
        let existing = mock::COMPANIES.iter().find(|c| c.id == id);
        return Ok(CompanyRecord {
            id: id.to_string(),
            name: dto.name.clone(),
            code: dto.code.clone(),
            contact_email: dto.contact_email.clone(),
            phone: dto.phone.clone(),
            status: parse_status(&dto.status),
            plan_count: existing.map(|c| c.plan_count).unwrap_or(0),
            created_at: existing.map(|c| c.created_at).unwrap_or_else(Utc::now),
        });
    }
    CLIENT.update(id, dto).await
}

pub async fn delete_company(id: &str) -> Result<(), FetchError> {
    if mock_enabled() {
        return Ok(());
    }
    CLIENT.remove(id).await
}
