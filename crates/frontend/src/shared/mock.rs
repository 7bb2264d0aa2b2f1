//! Fixture data served when the build-time `USE_MOCK_DATA` flag is on.
//!
//! The per-resource API modules consult these instead of the backend,
//! applying the same query contract the backend documents: `search`
//! is a substring match, enumerated keys match exactly, `date_from` /
//! `date_to` bound the `timestamp` field inclusively.

use chrono::{DateTime, Duration, TimeZone, Utc};
use contracts::domain::companies::{CompanyRecord, CompanyStatus};
use contracts::domain::plans::{PlanRecord, PlanStatus, PlanType};
use contracts::domain::users::{UserRecord, UserRole, UserStatus};
use contracts::shared::list::{ListPage, ListQuery};
use contracts::system::activity::UserActivityRecord;
use contracts::system::audit::{AuditAction, AuditLogRecord};
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::shared::filter::{FieldAccess, FieldValue};

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn id() -> String {
    Uuid::new_v4().to_string()
}

/// Server-side semantics of one query pair, mirrored for fixtures.
fn accepts_pair<T: FieldAccess>(item: &T, key: &str, value: &str) -> bool {
    match key {
        "date_from" => {
            let Ok(bound) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
                return true;
            };
            match item.field("timestamp") {
                Some(FieldValue::Timestamp(at)) => at.date_naive() >= bound,
                _ => false,
            }
        }
        "date_to" => {
            let Ok(bound) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
                return true;
            };
            match item.field("timestamp") {
                Some(FieldValue::Timestamp(at)) => at.date_naive() <= bound,
                _ => false,
            }
        }
        "search" => match item.field("search") {
            Some(v) => v.as_text().to_lowercase().contains(&value.to_lowercase()),
            None => false,
        },
        field => match item.field(field) {
            Some(v) => v.as_text() == value,
            None => false,
        },
    }
}

/// Filter and slice a fixture set the way the backend would.
pub fn page_of<T: FieldAccess + Clone>(all: &[T], query: &ListQuery) -> ListPage<T> {
    let filtered: Vec<T> = all
        .iter()
        .filter(|item| {
            query
                .filters
                .iter()
                .all(|(key, value)| accepts_pair(*item, key, value))
        })
        .cloned()
        .collect();
    let start = (query.page * query.limit).min(filtered.len());
    let end = (start + query.limit.max(1)).min(filtered.len());
    ListPage {
        total_count: filtered.len(),
        items: filtered[start..end].to_vec(),
    }
}

pub static USERS: Lazy<Vec<UserRecord>> = Lazy::new(|| {
    let seed: [(&str, &str, UserRole, UserStatus, bool); 8] = [
        ("Jane", "Wanjiku", UserRole::SuperAdmin, UserStatus::Active, true),
        ("Peter", "Otieno", UserRole::Admin, UserStatus::Active, true),
        ("Mary", "Njoroge", UserRole::Agent, UserStatus::Active, false),
        ("Tom", "Odhiambo", UserRole::Agent, UserStatus::Inactive, false),
        ("Grace", "Achieng", UserRole::Agent, UserStatus::Active, true),
        ("Samuel", "Kiprop", UserRole::Admin, UserStatus::Suspended, false),
        ("Lucy", "Muthoni", UserRole::Agent, UserStatus::Active, false),
        ("David", "Mwangi", UserRole::Agent, UserStatus::Active, true),
    ];
    seed.iter()
        .enumerate()
        .map(|(i, (first, last, role, status, two_factor))| UserRecord {
            id: id(),
            first_name: (*first).to_string(),
            last_name: (*last).to_string(),
            email: format!("{}.{}@brokerage.co.ke", first.to_lowercase(), last.to_lowercase()),
            role: *role,
            status: *status,
            two_factor_enabled: *two_factor,
            created_at: ts(2024, 11, 3, 9, 0) + Duration::days(i as i64 * 7),
            last_login_at: if *status == UserStatus::Active {
                Some(ts(2025, 8, 20, 8, 30) + Duration::hours(i as i64))
            } else {
                None
            },
        })
        .collect()
});

pub static COMPANIES: Lazy<Vec<CompanyRecord>> = Lazy::new(|| {
    let seed: [(&str, &str, CompanyStatus, i64); 6] = [
        ("Jubilee Insurance", "JUB", CompanyStatus::Active, 4),
        ("APA Insurance", "APA", CompanyStatus::Active, 3),
        ("Britam General", "BRI", CompanyStatus::Active, 3),
        ("CIC Group", "CIC", CompanyStatus::Active, 2),
        ("Madison Insurance", "MAD", CompanyStatus::Inactive, 1),
        ("Heritage Insurance", "HER", CompanyStatus::Active, 1),
    ];
    seed.iter()
        .enumerate()
        .map(|(i, (name, code, status, plan_count))| CompanyRecord {
            id: id(),
            name: (*name).to_string(),
            code: (*code).to_string(),
            contact_email: format!("info@{}.co.ke", code.to_lowercase()),
            phone: format!("+254 20 27{}000", i + 1),
            status: *status,
            plan_count: *plan_count,
            created_at: ts(2024, 6, 1, 10, 0) + Duration::days(i as i64 * 11),
        })
        .collect()
});

pub static PLANS: Lazy<Vec<PlanRecord>> = Lazy::new(|| {
    let seed: [(&str, &str, PlanType, &str, &str, i32, i32, PlanStatus); 8] = [
        ("Jubilee Insurance", "J-Care Family", PlanType::Medical, "KES 48,500", "KES 3,000,000", 0, 65, PlanStatus::Active),
        ("Jubilee Insurance", "J-Life Secure", PlanType::Life, "KES 120,000", "KES 10,000,000", 18, 60, PlanStatus::Active),
        ("APA Insurance", "Afya Nafuu", PlanType::Medical, "KES 9,500", "KES 500,000", 0, 70, PlanStatus::Active),
        ("APA Insurance", "Motor Comprehensive", PlanType::Motor, "KES 65,000", "KES 2,500,000", 18, 75, PlanStatus::Active),
        ("Britam General", "Home Shield", PlanType::Property, "KES 15,750", "KES 8,000,000", 18, 99, PlanStatus::Active),
        ("Britam General", "Milele Life", PlanType::Life, "KES 36,000", "KES 5,000,000", 21, 55, PlanStatus::Inactive),
        ("CIC Group", "Seniors Mediplan", PlanType::Medical, "KES 82,000", "KES 2,000,000", 60, 80, PlanStatus::Active),
        ("Heritage Insurance", "Fleet Cover", PlanType::Motor, "KES 250,000", "KES 20,000,000", 21, 70, PlanStatus::Active),
    ];
    seed.iter()
        .enumerate()
        .map(
            |(i, (company, name, plan_type, premium, cover, min_age, max_age, status))| {
                let company_id = COMPANIES
                    .iter()
                    .find(|c| c.name == *company)
                    .map(|c| c.id.clone())
                    .unwrap_or_default();
                PlanRecord {
                    id: id(),
                    company_id,
                    company_name: (*company).to_string(),
                    name: (*name).to_string(),
                    plan_type: *plan_type,
                    premium: (*premium).to_string(),
                    cover_amount: (*cover).to_string(),
                    min_age: *min_age,
                    max_age: *max_age,
                    status: *status,
                    created_at: ts(2024, 9, 15, 14, 0) + Duration::days(i as i64 * 5),
                }
            },
        )
        .collect()
});

pub static AUDIT_LOGS: Lazy<Vec<AuditLogRecord>> = Lazy::new(|| {
    let actions = [
        (AuditAction::Login, "session", "Signed in"),
        (AuditAction::Create, "user", "Created agent account"),
        (AuditAction::Update, "insurance_plan", "Changed premium"),
        (AuditAction::Delete, "insurance_company", "Removed inactive company"),
        (AuditAction::Export, "audit_log", "Exported monthly report"),
        (AuditAction::Logout, "session", "Signed out"),
    ];
    (0..42)
        .map(|i| {
            let user = &USERS[i % USERS.len()];
            let (action, resource, details) = actions[i % actions.len()];
            AuditLogRecord {
                id: id(),
                actor_email: user.email.clone(),
                action,
                resource: resource.to_string(),
                details: details.to_string(),
                ip_address: format!("196.201.214.{}", 10 + (i % 40)),
                timestamp: ts(2025, 7, 1, 6, 0) + Duration::hours(i as i64 * 13),
            }
        })
        .collect()
});

pub static ACTIVITIES: Lazy<Vec<UserActivityRecord>> = Lazy::new(|| {
    let activities = [
        "Viewed user management",
        "Opened insurance plan list",
        "Failed login attempt",
        "Changed password",
        "Downloaded commission statement",
    ];
    (0..35)
        .map(|i| {
            let user = &USERS[(i * 3) % USERS.len()];
            UserActivityRecord {
                id: id(),
                user_email: user.email.clone(),
                activity: activities[i % activities.len()].to_string(),
                ip_address: format!("41.90.64.{}", 100 + (i % 50)),
                user_agent: if i % 4 == 0 {
                    None
                } else {
                    Some("Mozilla/5.0 (X11; Linux x86_64)".to_string())
                },
                timestamp: ts(2025, 8, 1, 7, 30) + Duration::hours(i as i64 * 9),
            }
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_consistent_shape() {
        assert!(!USERS.is_empty());
        assert!(PLANS.iter().all(|p| !p.company_id.is_empty()));
        assert!(PLANS.iter().all(|p| p.max_age > p.min_age));
        assert!(AUDIT_LOGS.len() > 25);
    }

    #[test]
    fn page_of_respects_limit_and_total() {
        let query = ListQuery::new(1, 10);
        let page = page_of(&AUDIT_LOGS, &query);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_count, AUDIT_LOGS.len());
    }

    #[test]
    fn page_of_filters_by_exact_action() {
        let query = ListQuery::new(0, 100)
            .with_filters(vec![("action".to_string(), "login".to_string())]);
        let page = page_of(&AUDIT_LOGS, &query);
        assert!(page.total_count > 0);
        assert!(page.items.iter().all(|l| l.action == AuditAction::Login));
    }
}
