use chrono::Utc;
use contracts::domain::plans::{PlanDto, PlanRecord, PlanStatus, PlanType};
use uuid::Uuid;

use crate::shared::api_client::{CollectionClient, FetchError};
use crate::shared::api_utils::mock_enabled;
use crate::shared::mock;

const CLIENT: CollectionClient = CollectionClient::new("/api/plans");

fn parse_type(value: &str) -> PlanType {
    PlanType::ALL
        .into_iter()
        .find(|t| t.as_str() == value)
        .unwrap_or(PlanType::Medical)
}

fn parse_status(value: &str) -> PlanStatus {
    PlanStatus::ALL
        .into_iter()
        .find(|s| s.as_str() == value)
        .unwrap_or(PlanStatus::Active)
}

fn company_name_for(company_id: &str) -> String {
    mock::COMPANIES
        .iter()
        .find(|c| c.id == company_id)
        .map(|c| c.name.clone())
        .unwrap_or_default()
}

pub async fn fetch_plans() -> Result<Vec<PlanRecord>, FetchError> {
    if mock_enabled() {
        return Ok(mock::PLANS.clone());
    }
    CLIENT.fetch_all().await
}

pub async fn create_plan(dto: &PlanDto) -> Result<PlanRecord, FetchError> {
    if mock_enabled() {
        return Ok(PlanRecord {
            id: Uuid::new_v4().to_string(),
            company_id: dto.company_id.clone(),
            company_name: company_name_for(&dto.company_id),
            name: dto.name.clone(),
            plan_type: parse_type(&dto.plan_type),
            premium: dto.premium.clone(),
            cover_amount: dto.cover_amount.clone(),
            min_age: dto.min_age,
            max_age: dto.max_age,
            status: parse_status(&dto.status),
            created_at: Utc::now(),
        });
    }
    CLIENT.create(dto).await
}

pub async fn update_plan(id: &str, dto: &PlanDto) -> Result<PlanRecord, FetchError> {
    if mock_enabled() {
        let existing = mock::PLANS.iter().find(|p| p.id == id);
        return Ok(PlanRecord {
            id: id.to_string(),
            company_id: dto.company_id.clone(),
            company_name: company_name_for(&dto.company_id),
            name: dto.name.clone(),
            plan_type: parse_type(&dto.plan_type),
            premium: dto.premium.clone(),
            cover_amount: dto.cover_amount.clone(),
            min_age: dto.min_age,
            max_age: dto.max_age,
            status: parse_status(&dto.status),
            created_at: existing.map(|p| p.created_at).unwrap_or_else(Utc::now),
        });
    }
    CLIENT.update(id, dto).await
}

pub async fn delete_plan(id: &str) -> Result<(), FetchError> {
    if mock_enabled() {
        return Ok(());
    }
    CLIENT.remove(id).await
}
