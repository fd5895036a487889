//! Field validation against the schema rules.

use crate::config::{FieldSpec, FieldType};
use crate::form::FormValue;
use std::fmt;

/// One failed constraint, attributed to its field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All validation failures of one submission, in schema order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl std::error::Error for FieldErrors {}

impl FieldErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Validate one field value against its spec. Required is checked first;
/// format checks apply only to non-empty values, mirroring the dashboard
/// forms.
pub(crate) fn validate_field(spec: &FieldSpec, value: &FormValue) -> Option<FieldError> {
    match (spec.ty, value) {
        (FieldType::TextList, FormValue::List(items)) => validate_list(spec, items),
        (FieldType::TextList, FormValue::Text(_)) => Some(FieldError {
            field: spec.name,
            message: format!("{} must be a list", spec.label),
        }),
        (_, FormValue::List(_)) => Some(FieldError {
            field: spec.name,
            message: format!("{} must be a single value", spec.label),
        }),
        (_, FormValue::Text(text)) => validate_text(spec, text.trim()),
    }
}

fn validate_text(spec: &FieldSpec, text: &str) -> Option<FieldError> {
    if text.is_empty() {
        if spec.required {
            return Some(FieldError {
                field: spec.name,
                message: format!("{} is required", spec.label),
            });
        }
        return None;
    }
    match spec.ty {
        FieldType::Email => {
            if !text.contains('@') || text.len() < 3 {
                return Some(FieldError {
                    field: spec.name,
                    message: "Invalid email address".to_string(),
                });
            }
        }
        FieldType::Reference(kind) => {
            if uuid::Uuid::parse_str(text).is_err() {
                return Some(FieldError {
                    field: spec.name,
                    message: format!("Invalid {} ID", kind.path_segment().replace('-', " ")),
                });
            }
        }
        FieldType::Choice(options) => {
            if !options.contains(&text) {
                return Some(FieldError {
                    field: spec.name,
                    message: format!("{} must be one of {}", spec.label, options.join(", ")),
                });
            }
        }
        _ => {}
    }
    None
}

fn validate_list(spec: &FieldSpec, items: &[String]) -> Option<FieldError> {
    let filled = items.iter().filter(|i| !i.trim().is_empty()).count();
    if filled < spec.min_items {
        let message = if spec.min_items == 1 {
            format!("At least one {} is required", spec.label.to_lowercase())
        } else {
            format!(
                "At least {} {} are required",
                spec.min_items,
                spec.label.to_lowercase()
            )
        };
        return Some(FieldError {
            field: spec.name,
            message,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceKind;

    #[test]
    fn required_text_rejects_whitespace_only() {
        let spec = FieldSpec::text("name", "Name");
        let err = validate_field(&spec, &FormValue::Text("   ".into())).unwrap();
        assert_eq!(err.message, "Name is required");
    }

    #[test]
    fn optional_text_allows_empty() {
        let spec = FieldSpec::text("liveDemoLink", "Live demo link").optional();
        assert!(validate_field(&spec, &FormValue::Text(String::new())).is_none());
    }

    #[test]
    fn email_format_checked_only_when_filled() {
        let spec = FieldSpec::email("email", "Email").optional();
        assert!(validate_field(&spec, &FormValue::Text(String::new())).is_none());
        let err = validate_field(&spec, &FormValue::Text("nope".into())).unwrap();
        assert_eq!(err.message, "Invalid email address");
        assert!(validate_field(&spec, &FormValue::Text("a@b.dev".into())).is_none());
    }

    #[test]
    fn reference_requires_a_uuid() {
        let spec = FieldSpec::reference("aboutId", "About ID", ResourceKind::About);
        let err = validate_field(&spec, &FormValue::Text("123".into())).unwrap();
        assert_eq!(err.message, "Invalid about ID");
    }

    #[test]
    fn list_counts_only_non_empty_items() {
        let spec = FieldSpec::list("frontendTech", "Frontend technology", 1);
        let err = validate_field(&spec, &FormValue::List(vec![" ".into()])).unwrap();
        assert_eq!(err.message, "At least one frontend technology is required");
        assert!(validate_field(&spec, &FormValue::List(vec!["React".into()])).is_none());
    }
}
