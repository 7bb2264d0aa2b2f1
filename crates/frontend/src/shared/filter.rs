//! Field-level filtering over collection records.
//!
//! The same `FilterCriteria` value drives both paths: `matches` for
//! in-memory filtering of an already-fetched set, and `to_query_pairs`
//! when the backend does the filtering. Both must agree for the same
//! criteria and data.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Typed value of one record field, as exposed for filtering/sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Canonical text form used for substring/exact matching.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Bool(b) => {
                if *b {
                    "true".to_string()
                } else {
                    "false".to_string()
                }
            }
            FieldValue::Timestamp(ts) => ts.to_rfc3339(),
        }
    }
}

/// Access to record fields by name. Every listed resource implements
/// this once, next to its record type.
pub trait FieldAccess {
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// One constraint on one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Case-insensitive substring match (free-text search).
    Contains(String),
    /// Exact match (enumerated fields: role, status, action type).
    Equals(String),
    /// Inclusive date range over a timestamp field.
    /// A missing bound is unbounded on that side.
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl Criterion {
    /// An empty criterion places no constraint and is dropped on `set`.
    pub fn is_empty(&self) -> bool {
        match self {
            Criterion::Contains(s) | Criterion::Equals(s) => s.trim().is_empty(),
            Criterion::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }

    fn accepts(&self, value: Option<FieldValue>) -> bool {
        match self {
            Criterion::Contains(needle) => match value {
                Some(v) => v
                    .as_text()
                    .to_lowercase()
                    .contains(&needle.trim().to_lowercase()),
                None => false,
            },
            Criterion::Equals(want) => match value {
                Some(v) => v.as_text() == want.trim(),
                None => false,
            },
            Criterion::DateRange { from, to } => match value {
                Some(FieldValue::Timestamp(ts)) => {
                    let date = ts.date_naive();
                    if let Some(from) = from {
                        if date < *from {
                            return false;
                        }
                    }
                    if let Some(to) = to {
                        if date > *to {
                            return false;
                        }
                    }
                    true
                }
                _ => false,
            },
        }
    }
}

/// Active set of per-field constraints, ANDed together.
/// An empty set matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    fields: BTreeMap<String, Criterion>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the criterion for a field.
    /// Empty criteria clear the field instead.
    pub fn set(&mut self, field: &str, criterion: Criterion) {
        if criterion.is_empty() {
            self.fields.remove(field);
        } else {
            self.fields.insert(field.to_string(), criterion);
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.fields.clear();
    }

    pub fn get(&self, field: &str) -> Option<&Criterion> {
        self.fields.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.fields.len()
    }

    /// True when the record satisfies every active criterion.
    pub fn matches<T: FieldAccess>(&self, item: &T) -> bool {
        self.fields
            .iter()
            .all(|(field, criterion)| criterion.accepts(item.field(field)))
    }

    /// Serialize the criteria as query parameters for server-side
    /// filtering. Date ranges become `date_from` / `date_to`.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (field, criterion) in &self.fields {
            match criterion {
                Criterion::Contains(s) | Criterion::Equals(s) => {
                    pairs.push((field.clone(), s.trim().to_string()));
                }
                Criterion::DateRange { from, to } => {
                    if let Some(from) = from {
                        pairs.push(("date_from".to_string(), from.format("%Y-%m-%d").to_string()));
                    }
                    if let Some(to) = to {
                        pairs.push(("date_to".to_string(), to.format("%Y-%m-%d").to_string()));
                    }
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Row {
        name: String,
        role: String,
        at: DateTime<Utc>,
    }

    impl FieldAccess for Row {
        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "name" => Some(FieldValue::Text(self.name.clone())),
                "role" => Some(FieldValue::Text(self.role.clone())),
                "timestamp" => Some(FieldValue::Timestamp(self.at)),
                _ => None,
            }
        }
    }

    fn row(name: &str, role: &str, date: (i32, u32, u32)) -> Row {
        Row {
            name: name.to_string(),
            role: role.to_string(),
            at: Utc
                .with_ymd_and_hms(date.0, date.1, date.2, 12, 0, 0)
                .single()
                .expect("valid date"),
        }
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = FilterCriteria::new();
        assert!(criteria.matches(&row("Jane Wanjiku", "admin", (2025, 3, 1))));
    }

    #[test]
    fn empty_criterion_is_dropped_on_set() {
        let mut criteria = FilterCriteria::new();
        criteria.set("name", Criterion::Contains("  ".to_string()));
        criteria.set("timestamp", Criterion::DateRange { from: None, to: None });
        assert!(criteria.is_empty());
    }

    #[test]
    fn contains_is_case_insensitive() {
        let mut criteria = FilterCriteria::new();
        criteria.set("name", Criterion::Contains("WANJ".to_string()));
        assert!(criteria.matches(&row("Jane Wanjiku", "admin", (2025, 3, 1))));
        assert!(!criteria.matches(&row("Peter Otieno", "admin", (2025, 3, 1))));
    }

    #[test]
    fn equals_is_exact() {
        let mut criteria = FilterCriteria::new();
        criteria.set("role", Criterion::Equals("admin".to_string()));
        assert!(criteria.matches(&row("Jane", "admin", (2025, 3, 1))));
        assert!(!criteria.matches(&row("Jane", "super_admin", (2025, 3, 1))));
        assert!(!criteria.matches(&row("Jane", "Admin", (2025, 3, 1))));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let mut criteria = FilterCriteria::new();
        let from = NaiveDate::from_ymd_opt(2025, 3, 1).expect("date");
        let to = NaiveDate::from_ymd_opt(2025, 3, 31).expect("date");
        criteria.set(
            "timestamp",
            Criterion::DateRange {
                from: Some(from),
                to: Some(to),
            },
        );
        assert!(criteria.matches(&row("a", "x", (2025, 3, 1))));
        assert!(criteria.matches(&row("b", "x", (2025, 3, 31))));
        assert!(!criteria.matches(&row("c", "x", (2025, 2, 28))));
        assert!(!criteria.matches(&row("d", "x", (2025, 4, 1))));
    }

    #[test]
    fn half_open_date_range() {
        let mut criteria = FilterCriteria::new();
        criteria.set(
            "timestamp",
            Criterion::DateRange {
                from: Some(NaiveDate::from_ymd_opt(2025, 3, 1).expect("date")),
                to: None,
            },
        );
        assert!(criteria.matches(&row("a", "x", (2026, 1, 1))));
        assert!(!criteria.matches(&row("b", "x", (2025, 2, 1))));
    }

    #[test]
    fn criteria_are_anded() {
        let mut criteria = FilterCriteria::new();
        criteria.set("name", Criterion::Contains("jane".to_string()));
        criteria.set("role", Criterion::Equals("admin".to_string()));
        assert!(criteria.matches(&row("Jane Wanjiku", "admin", (2025, 3, 1))));
        assert!(!criteria.matches(&row("Jane Wanjiku", "agent", (2025, 3, 1))));
        assert!(!criteria.matches(&row("Peter Otieno", "admin", (2025, 3, 1))));
    }

    // Interprets serialized query pairs the way the backend would,
    // then checks the result equals the client-side `matches` path.
    #[test]
    fn client_and_server_paths_agree() {
        let mut criteria = FilterCriteria::new();
        criteria.set("name", Criterion::Contains("o".to_string()));
        criteria.set(
            "timestamp",
            Criterion::DateRange {
                from: Some(NaiveDate::from_ymd_opt(2025, 3, 1).expect("date")),
                to: Some(NaiveDate::from_ymd_opt(2025, 3, 15).expect("date")),
            },
        );

        let rows = vec![
            row("Peter Otieno", "agent", (2025, 3, 1)),
            row("Jane Wanjiku", "admin", (2025, 3, 10)),
            row("Mary Njoroge", "agent", (2025, 3, 20)),
            row("Tom Odhiambo", "admin", (2025, 2, 28)),
        ];

        let server_side: Vec<&Row> = {
            let pairs = criteria.to_query_pairs();
            rows.iter()
                .filter(|r| {
                    pairs.iter().all(|(key, value)| match key.as_str() {
                        "date_from" => {
                            let bound =
                                NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("date");
                            r.at.date_naive() >= bound
                        }
                        "date_to" => {
                            let bound =
                                NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("date");
                            r.at.date_naive() <= bound
                        }
                        field => match r.field(field) {
                            Some(v) => v
                                .as_text()
                                .to_lowercase()
                                .contains(&value.to_lowercase()),
                            None => false,
                        },
                    })
                })
                .collect()
        };
        let client_side: Vec<&Row> = rows.iter().filter(|r| criteria.matches(*r)).collect();

        let names = |set: &[&Row]| set.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&server_side), names(&client_side));
        assert_eq!(names(&client_side), vec!["Peter Otieno".to_string()]);
    }
}
