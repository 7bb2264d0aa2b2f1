//! Single-field ordering of collection records.
//!
//! One sort is active at a time (last header clicked wins); clicking
//! the active field toggles direction. Sorting uses the standard
//! library stable sort, so ties keep their previous relative order.

use crate::shared::filter::{FieldAccess, FieldValue};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Asc,
        }
    }

    /// Header-click semantics: same field flips direction, a new field
    /// starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.field = field.to_string();
            self.direction = SortDirection::Asc;
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Asc
    }
}

/// Numeric value of a currency-formatted string like "KES 50,000":
/// an optional alphabetic currency code followed by digits with
/// separators. Returns `None` for anything else so ordinary text keeps
/// lexicographic order.
pub fn currency_amount(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    let body = trimmed.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let body = body.trim_start();
    if body.is_empty() || !body.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ',' || c == '.' || c == ' ')
    {
        return None;
    }
    let digits: String = body.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        (FieldValue::Timestamp(x), FieldValue::Timestamp(y)) => x.cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => {
            match (currency_amount(x), currency_amount(y)) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => x.cmp(y),
            }
        }
        // Mixed types fall back to their canonical text form.
        _ => a.as_text().cmp(&b.as_text()),
    }
}

/// Three-way comparison under the given spec. Records missing the
/// field sort before records that have it.
pub fn compare<T: FieldAccess>(a: &T, b: &T, spec: &SortSpec) -> Ordering {
    let ordering = match (a.field(&spec.field), b.field(&spec.field)) {
        (Some(x), Some(y)) => compare_values(&x, &y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    match spec.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable in-place sort under the given spec.
pub fn sort_items<T: FieldAccess>(items: &mut [T], spec: &SortSpec) {
    items.sort_by(|a, b| compare(a, b, spec));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plan {
        name: String,
        premium: String,
        min_age: f64,
    }

    impl FieldAccess for Plan {
        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "name" => Some(FieldValue::Text(self.name.clone())),
                "premium" => Some(FieldValue::Text(self.premium.clone())),
                "min_age" => Some(FieldValue::Number(self.min_age)),
                _ => None,
            }
        }
    }

    fn plan(name: &str, premium: &str, min_age: f64) -> Plan {
        Plan {
            name: name.to_string(),
            premium: premium.to_string(),
            min_age,
        }
    }

    #[test]
    fn currency_strings_parse() {
        assert_eq!(currency_amount("KES 50,000"), Some(50_000));
        assert_eq!(currency_amount("KES 1,250,000"), Some(1_250_000));
        assert_eq!(currency_amount("120000"), Some(120_000));
        assert_eq!(currency_amount("Jubilee Health"), None);
        assert_eq!(currency_amount("2025-03-01"), None);
        assert_eq!(currency_amount(""), None);
    }

    #[test]
    fn currency_fields_compare_numerically() {
        let mut plans = vec![
            plan("a", "KES 120,000", 0.0),
            plan("b", "KES 9,500", 0.0),
            plan("c", "KES 50,000", 0.0),
        ];
        sort_items(&mut plans, &SortSpec::asc("premium"));
        let premiums: Vec<&str> = plans.iter().map(|p| p.premium.as_str()).collect();
        assert_eq!(premiums, vec!["KES 9,500", "KES 50,000", "KES 120,000"]);
    }

    #[test]
    fn toggle_same_field_flips_direction() {
        let mut spec = SortSpec::asc("name");
        spec.toggle("name");
        assert_eq!(spec.direction, SortDirection::Desc);
        spec.toggle("name");
        assert_eq!(spec.direction, SortDirection::Asc);
        spec.toggle("premium");
        assert_eq!(spec.field, "premium");
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn descending_reverses_ascending() {
        let mut plans = vec![plan("b", "", 1.0), plan("a", "", 2.0), plan("c", "", 3.0)];
        let mut spec = SortSpec::asc("name");
        spec.toggle("name");
        sort_items(&mut plans, &spec);
        let names: Vec<&str> = plans.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    // Sorting an already-sorted-by-min_age list by name keeps min_age
    // order among equal names.
    #[test]
    fn stable_sort_preserves_prior_order_of_ties() {
        let mut plans = vec![
            plan("dup", "", 1.0),
            plan("dup", "", 2.0),
            plan("aaa", "", 9.0),
            plan("dup", "", 3.0),
        ];
        sort_items(&mut plans, &SortSpec::asc("min_age"));
        sort_items(&mut plans, &SortSpec::asc("name"));
        let order: Vec<(String, f64)> = plans
            .iter()
            .map(|p| (p.name.clone(), p.min_age))
            .collect();
        assert_eq!(
            order,
            vec![
                ("aaa".to_string(), 9.0),
                ("dup".to_string(), 1.0),
                ("dup".to_string(), 2.0),
                ("dup".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn text_comparison_is_case_sensitive_lexicographic() {
        let mut plans = vec![plan("alpha", "", 0.0), plan("Beta", "", 0.0)];
        sort_items(&mut plans, &SortSpec::asc("name"));
        let names: Vec<&str> = plans.iter().map(|p| p.name.as_str()).collect();
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(names, vec!["Beta", "alpha"]);
    }
}
