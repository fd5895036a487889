//! Field schema types driving forms, validation, and table columns.

use crate::config::ResourceKind;

/// Value shape and format constraint for a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Single-line text.
    Text,
    /// Multi-line text (bio, overview, post content).
    LongText,
    /// Text that must look like an email address.
    Email,
    /// UUID foreign key to another resource kind.
    Reference(ResourceKind),
    /// One of a fixed set of values.
    Choice(&'static [&'static str]),
    /// Array of strings.
    TextList,
}

/// One field of a resource schema. `name` is the wire name (camelCase,
/// matching the backend JSON); `label` is the human form label used in
/// validation messages and table headers.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub ty: FieldType,
    pub required: bool,
    /// Minimum number of non-empty items for `TextList` fields.
    pub min_items: usize,
    /// Whether the field appears as a column in list tables.
    pub in_table: bool,
    /// Never rendered in tables (passwords).
    pub sensitive: bool,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            label,
            ty,
            required: true,
            min_items: 0,
            in_table: false,
            sensitive: false,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    pub fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::LongText)
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Email)
    }

    pub fn reference(name: &'static str, label: &'static str, kind: ResourceKind) -> Self {
        Self::new(name, label, FieldType::Reference(kind))
    }

    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(name, label, FieldType::Choice(options))
    }

    pub fn list(name: &'static str, label: &'static str, min_items: usize) -> Self {
        let mut spec = Self::new(name, label, FieldType::TextList);
        spec.min_items = min_items;
        spec.required = min_items > 0;
        spec
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn shown(mut self) -> Self {
        self.in_table = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn is_list(&self) -> bool {
        matches!(self.ty, FieldType::TextList)
    }
}
