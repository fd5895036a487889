//! Generic resource form: schema-driven field values, validation on submit.

mod validation;

pub use validation::{FieldError, FieldErrors};

use crate::config::{FieldType, ResourceDescriptor};
use crate::error::AppError;
use serde_json::{Map, Value};

/// A field's editable value: single text or list of strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    List(Vec<String>),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            FormValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FormValue::List(items) => Some(items),
            FormValue::Text(_) => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(items: Vec<String>) -> Self {
        FormValue::List(items)
    }
}

/// Editable form for one resource, in create mode (blank) or edit mode
/// (seeded from an existing record). `submit` validates every field and
/// yields the JSON request body, or per-field errors that block submission.
#[derive(Clone, Debug)]
pub struct ResourceForm {
    descriptor: ResourceDescriptor,
    values: Vec<(&'static str, FormValue)>,
}

impl ResourceForm {
    /// Create-mode form: empty texts, empty lists, choice fields preset to
    /// their first option (the dashboard's select default).
    pub fn blank(descriptor: &ResourceDescriptor) -> Self {
        let values = descriptor
            .fields
            .iter()
            .map(|field| {
                let value = match field.ty {
                    FieldType::TextList => FormValue::List(Vec::new()),
                    FieldType::Choice(options) => {
                        FormValue::Text(options.first().copied().unwrap_or_default().to_string())
                    }
                    _ => FormValue::Text(String::new()),
                };
                (field.name, value)
            })
            .collect();
        Self {
            descriptor: descriptor.clone(),
            values,
        }
    }

    /// Edit-mode form seeded field-for-field from a record's JSON object.
    /// Server-assigned fields (id, timestamps) are ignored; missing or null
    /// fields fall back to the blank default.
    pub fn seeded(descriptor: &ResourceDescriptor, record: &Value) -> Result<Self, AppError> {
        let object = record
            .as_object()
            .ok_or_else(|| AppError::Decode(format!("{} record is not an object", descriptor.kind)))?;
        let mut form = Self::blank(descriptor);
        for field in &descriptor.fields {
            let seeded = match object.get(field.name) {
                None | Some(Value::Null) => continue,
                Some(Value::String(s)) => FormValue::Text(s.clone()),
                Some(Value::Array(items)) => {
                    let mut list = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::String(s) => list.push(s.clone()),
                            other => {
                                return Err(AppError::Decode(format!(
                                    "{}.{} has a non-string item: {other}",
                                    descriptor.kind, field.name
                                )))
                            }
                        }
                    }
                    FormValue::List(list)
                }
                Some(other) => {
                    return Err(AppError::Decode(format!(
                        "{}.{} has unexpected shape: {other}",
                        descriptor.kind, field.name
                    )))
                }
            };
            form.set(field.name, seeded)?;
        }
        Ok(form)
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn get(&self, field: &str) -> Option<&FormValue> {
        self.values
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    /// Set a field's value. Unknown fields and shape mismatches (text into a
    /// list field or the reverse) are rejected.
    pub fn set(&mut self, field: &str, value: impl Into<FormValue>) -> Result<(), AppError> {
        let value = value.into();
        let spec = self
            .descriptor
            .field(field)
            .ok_or_else(|| AppError::Validation(format!("unknown field: {field}")))?;
        match (&value, spec.is_list()) {
            (FormValue::List(_), false) => {
                return Err(AppError::Validation(format!(
                    "{field} expects a single value"
                )))
            }
            (FormValue::Text(_), true) => {
                return Err(AppError::Validation(format!("{field} expects a list")))
            }
            _ => {}
        }
        if let Some(slot) = self
            .values
            .iter_mut()
            .find(|(name, _)| *name == field)
        {
            slot.1 = value;
        }
        Ok(())
    }

    /// Validate every field and build the JSON request body. Empty optional
    /// fields are omitted. Returns all failures at once so each one can be
    /// surfaced next to its field.
    pub fn submit(&self) -> Result<Map<String, Value>, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in &self.descriptor.fields {
            if let Some(value) = self.get(field.name) {
                if let Some(error) = validation::validate_field(field, value) {
                    errors.push(error);
                }
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut body = Map::new();
        for field in &self.descriptor.fields {
            match self.get(field.name) {
                Some(FormValue::Text(text)) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        body.insert(field.name.to_string(), Value::String(trimmed.to_string()));
                    }
                }
                Some(FormValue::List(items)) => {
                    let filled: Vec<Value> = items
                        .iter()
                        .map(|i| i.trim())
                        .filter(|i| !i.is_empty())
                        .map(|i| Value::String(i.to_string()))
                        .collect();
                    if !filled.is_empty() || field.required {
                        body.insert(field.name.to_string(), Value::Array(filled));
                    }
                }
                None => {}
            }
        }
        Ok(body)
    }
}
