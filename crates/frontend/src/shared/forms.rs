//! Field-level form validation.
//!
//! A dialog owns one `FormValues` for its lifetime; `validate` runs on
//! submit (and optionally on blur) and submission is blocked while the
//! returned map is non-empty. Server-side submit failures are merged
//! under the reserved `SUBMIT_KEY` and rendered like any other error.

use std::collections::BTreeMap;

/// Current field values of an open dialog, keyed by field name.
pub type FormValues = BTreeMap<String, String>;

/// Field name -> error message. Empty map means the form may submit.
pub type ErrorMap = BTreeMap<String, String>;

/// Reserved key for errors returned by the backend on submit
/// (e.g. duplicate email).
pub const SUBMIT_KEY: &str = "submit";

/// One validation rule applied to a single field.
#[derive(Debug, Clone)]
pub enum FieldRule {
    Required,
    /// Loose email shape: `\S+@\S+\.\S+`.
    EmailShape,
    MinLength(usize),
    NumericRange { min: f64, max: f64 },
}

/// A rule spanning several fields, e.g. max age must exceed min age.
/// `check` returns false when the rule is violated; the message lands
/// on `field`.
pub struct CrossField {
    pub field: &'static str,
    pub message: &'static str,
    pub check: fn(&FormValues) -> bool,
}

/// Validation rule set for one entity form.
pub struct RuleSet {
    pub fields: Vec<(&'static str, Vec<FieldRule>)>,
    pub cross: Vec<CrossField>,
}

impl RuleSet {
    pub fn new(fields: Vec<(&'static str, Vec<FieldRule>)>) -> Self {
        Self {
            fields,
            cross: Vec::new(),
        }
    }

    pub fn with_cross(mut self, cross: Vec<CrossField>) -> Self {
        self.cross = cross;
        self
    }
}

fn field_label(field: &str) -> String {
    let mut label = String::new();
    for (i, part) in field.split('_').enumerate() {
        if i > 0 {
            label.push(' ');
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                label.extend(first.to_uppercase());
            } else {
                label.push(first);
            }
            label.push_str(chars.as_str());
        }
    }
    label
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

fn check_rule(field: &str, value: &str, rule: &FieldRule) -> Option<String> {
    let trimmed = value.trim();
    match rule {
        FieldRule::Required => {
            if trimmed.is_empty() {
                return Some(format!("{} is required", field_label(field)));
            }
        }
        // Non-required fields left blank skip shape checks.
        FieldRule::EmailShape => {
            if !trimmed.is_empty() && !looks_like_email(trimmed) {
                return Some("Enter a valid email address".to_string());
            }
        }
        FieldRule::MinLength(min) => {
            if !trimmed.is_empty() && trimmed.chars().count() < *min {
                return Some(format!(
                    "{} must be at least {} characters",
                    field_label(field),
                    min
                ));
            }
        }
        FieldRule::NumericRange { min, max } => {
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n >= *min && n <= *max => {}
                Ok(_) => {
                    return Some(format!(
                        "{} must be between {} and {}",
                        field_label(field),
                        min,
                        max
                    ));
                }
                Err(_) => {
                    return Some(format!("{} must be a number", field_label(field)));
                }
            }
        }
    }
    None
}

/// Run every rule; first failing rule per field wins. Cross-field
/// rules run after and do not overwrite a field's own error.
pub fn validate(values: &FormValues, rules: &RuleSet) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for (field, field_rules) in &rules.fields {
        let value = values.get(*field).map(String::as_str).unwrap_or("");
        for rule in field_rules {
            if let Some(message) = check_rule(field, value, rule) {
                errors.insert((*field).to_string(), message);
                break;
            }
        }
    }
    for cross in &rules.cross {
        if !errors.contains_key(cross.field) && !(cross.check)(values) {
            errors.insert(cross.field.to_string(), cross.message.to_string());
        }
    }
    errors
}

/// Attach a server-side submit error under the reserved key.
pub fn merge_submit_error(errors: &mut ErrorMap, message: String) {
    errors.insert(SUBMIT_KEY.to_string(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn create_user_rules() -> RuleSet {
        RuleSet::new(vec![
            ("first_name", vec![FieldRule::Required]),
            ("last_name", vec![FieldRule::Required]),
            ("email", vec![FieldRule::Required, FieldRule::EmailShape]),
            (
                "password",
                vec![FieldRule::Required, FieldRule::MinLength(6)],
            ),
        ])
    }

    #[test]
    fn create_user_scenario_from_the_field_rules() {
        let errors = validate(
            &values(&[
                ("first_name", ""),
                ("last_name", "Doe"),
                ("email", "bad"),
                ("password", "12345"),
            ]),
            &create_user_rules(),
        );
        assert!(errors.contains_key("first_name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
        assert!(!errors.contains_key("last_name"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn valid_form_yields_empty_map() {
        let errors = validate(
            &values(&[
                ("first_name", "Jane"),
                ("last_name", "Wanjiku"),
                ("email", "jane@brokerage.co.ke"),
                ("password", "secret9"),
            ]),
            &create_user_rules(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn email_shape_matches_loose_pattern() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(!looks_like_email("bad"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a b@c.d"));
        assert!(!looks_like_email("@b.co"));
    }

    #[test]
    fn numeric_range_checks_bounds_and_shape() {
        let rules = RuleSet::new(vec![(
            "min_age",
            vec![FieldRule::NumericRange { min: 0.0, max: 120.0 }],
        )]);
        assert!(validate(&values(&[("min_age", "18")]), &rules).is_empty());
        assert!(validate(&values(&[("min_age", "121")]), &rules).contains_key("min_age"));
        assert!(validate(&values(&[("min_age", "abc")]), &rules).contains_key("min_age"));
    }

    #[test]
    fn cross_field_rule_reports_on_named_field() {
        fn max_exceeds_min(values: &FormValues) -> bool {
            let min = values
                .get("min_age")
                .and_then(|v| v.trim().parse::<f64>().ok());
            let max = values
                .get("max_age")
                .and_then(|v| v.trim().parse::<f64>().ok());
            match (min, max) {
                (Some(min), Some(max)) => max > min,
                _ => true,
            }
        }
        let rules = RuleSet::new(vec![]).with_cross(vec![CrossField {
            field: "max_age",
            message: "Maximum age must exceed minimum age",
            check: max_exceeds_min,
        }]);

        let errors = validate(&values(&[("min_age", "65"), ("max_age", "18")]), &rules);
        assert_eq!(
            errors.get("max_age").map(String::as_str),
            Some("Maximum age must exceed minimum age")
        );
        assert!(validate(&values(&[("min_age", "18"), ("max_age", "65")]), &rules).is_empty());
    }

    #[test]
    fn submit_error_merges_under_reserved_key() {
        let mut errors = ErrorMap::new();
        merge_submit_error(&mut errors, "Email already exists".to_string());
        assert_eq!(
            errors.get(SUBMIT_KEY).map(String::as_str),
            Some("Email already exists")
        );
    }
}
