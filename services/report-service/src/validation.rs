use serde_json::{Map, Value};
use std::fmt;

use crate::schema::{is_declared, required_params};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingParam(&'static str),
    UnrecognizedParam(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingParam(name) => {
                write!(f, "The required parameter \"{name}\" is missing")
            }
            Violation::UnrecognizedParam(key) => {
                write!(f, "The parameter {key} is not recognized by this API.")
            }
        }
    }
}

/// Every violation found in one report; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    first: Violation,
    rest: Vec<Violation>,
}

impl ValidationErrors {
    fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        let mut violations = violations.into_iter();
        let first = violations.next()?;
        Some(Self {
            first,
            rest: violations.collect(),
        })
    }

    /// The violation reported back to the caller.
    pub fn first(&self) -> &Violation {
        &self.first
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)
    }
}

/// Checks key presence only: a required key holding `null` still counts as present.
pub fn validate(report: &Map<String, Value>) -> Result<(), ValidationErrors> {
    let missing = required_params()
        .filter(|name| !report.contains_key(*name))
        .map(Violation::MissingParam);
    let unrecognized = report
        .keys()
        .filter(|key| !is_declared(key))
        .map(|key| Violation::UnrecognizedParam(key.clone()));

    match ValidationErrors::from_violations(missing.chain(unrecognized).collect()) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn minimal() -> Value {
        json!({
            "source": "foo",
            "document_id": "huh",
            "font_name": "Padauk",
            "language_tag": "my-MY",
            "event_type": "configure_project"
        })
    }

    #[test]
    fn accepts_required_only() {
        assert!(validate(&report(minimal())).is_ok());
    }

    #[test]
    fn null_value_counts_as_present() {
        let mut body = report(minimal());
        body.insert("document_id".to_string(), Value::Null);
        body.insert("ip_address".to_string(), Value::Null);
        assert!(validate(&body).is_ok());
    }

    #[test]
    fn reports_first_missing_in_schema_order() {
        let body = report(json!({
            "font_name": "Padauk",
            "language_tag": "my-MY",
            "event_type": "configure_project"
        }));
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors.first(), &Violation::MissingParam("source"));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "The required parameter \"source\" is missing"
        );
    }

    #[test]
    fn missing_params_outrank_unrecognized_ones() {
        let body = report(json!({ "color": "red", "size": 3 }));
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.first(), &Violation::MissingParam("source"));
        let unrecognized: Vec<_> = errors
            .iter()
            .filter_map(|violation| match violation {
                Violation::UnrecognizedParam(key) => Some(key.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(unrecognized, ["color", "size"]);
    }

    #[test]
    fn unrecognized_keys_follow_body_order() {
        let mut body = report(json!({ "zeta": 1 }));
        body.extend(report(minimal()));
        body.insert("alpha".to_string(), json!(2));
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors.first(), &Violation::UnrecognizedParam("zeta".to_string()));
        assert_eq!(
            errors.to_string(),
            "The parameter zeta is not recognized by this API."
        );
    }
}
