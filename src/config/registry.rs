//! Resource descriptors and the portfolio registry.
//!
//! The eight dashboard resources are pure configuration data: field lists,
//! validation rules, and endpoint paths. Everything generic (forms, pages,
//! tables) is driven from here.

use crate::config::{FieldSpec, FieldType};
use crate::error::ConfigError;
use crate::model::SKILL_DOMAINS;
use std::collections::{HashMap, HashSet};
use std::fmt;
use uuid::Uuid;

/// The eight managed record kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    About,
    Blog,
    Education,
    Project,
    ProjectFeature,
    ProjectCredential,
    Skill,
    SkillCategory,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::About,
        ResourceKind::Blog,
        ResourceKind::Education,
        ResourceKind::Project,
        ResourceKind::ProjectFeature,
        ResourceKind::ProjectCredential,
        ResourceKind::Skill,
        ResourceKind::SkillCategory,
    ];

    /// URL path segment under `/api`.
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::About => "about",
            ResourceKind::Blog => "blog",
            ResourceKind::Education => "education",
            ResourceKind::Project => "project",
            ResourceKind::ProjectFeature => "project-feature",
            ResourceKind::ProjectCredential => "project-credential",
            ResourceKind::Skill => "skill",
            ResourceKind::SkillCategory => "skill-category",
        }
    }

    /// Lowercase name used in notification texts.
    pub fn display_name(self) -> &'static str {
        match self {
            ResourceKind::About => "about information",
            ResourceKind::Blog => "blog",
            ResourceKind::Education => "education",
            ResourceKind::Project => "project",
            ResourceKind::ProjectFeature => "project feature",
            ResourceKind::ProjectCredential => "project credential",
            ResourceKind::Skill => "skill",
            ResourceKind::SkillCategory => "skill category",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Everything the generic form/page machinery needs to know about one kind.
#[derive(Clone, Debug)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    pub fields: Vec<FieldSpec>,
    /// Whether the backend wraps the list response in a `{"data": [...]}`
    /// envelope. The API is inconsistent about this per endpoint.
    pub list_envelope: bool,
}

impl ResourceDescriptor {
    fn new(kind: ResourceKind, list_envelope: bool, fields: Vec<FieldSpec>) -> Self {
        Self {
            kind,
            fields,
            list_envelope,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn table_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.in_table && !f.sensitive)
    }

    /// GET path for the full list.
    pub fn list_path(&self) -> String {
        format!("/api/{}", self.kind.path_segment())
    }

    /// POST path for creation. The backend uses a `create-<segment>` action
    /// route rather than posting to the collection.
    pub fn create_path(&self) -> String {
        let seg = self.kind.path_segment();
        format!("/api/{seg}/create-{seg}")
    }

    /// PATCH/DELETE path for one record.
    pub fn item_path(&self, id: Uuid) -> String {
        format!("/api/{}/{}", self.kind.path_segment(), id)
    }

    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }

    /// Display name with the first letter capitalized, for toast messages.
    pub fn title_name(&self) -> String {
        let name = self.kind.display_name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// All registered descriptors, looked up by kind.
#[derive(Clone, Debug)]
pub struct Registry {
    descriptors: HashMap<ResourceKind, ResourceDescriptor>,
}

impl Registry {
    /// The portfolio dashboard's eight resources.
    pub fn portfolio() -> Self {
        let mut descriptors = HashMap::new();
        for descriptor in [
            about(),
            blog(),
            education(),
            project(),
            project_feature(),
            project_credential(),
            skill(),
            skill_category(),
        ] {
            descriptors.insert(descriptor.kind, descriptor);
        }
        Self { descriptors }
    }

    pub fn descriptor(&self, kind: ResourceKind) -> Option<&ResourceDescriptor> {
        self.descriptors.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceDescriptor> {
        self.descriptors.values()
    }

    /// Registry consistency: unique path segments, references resolve to
    /// registered kinds, choice fields have at least one option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut segments = HashSet::new();
        for descriptor in self.descriptors.values() {
            if !segments.insert(descriptor.kind.path_segment()) {
                return Err(ConfigError::DuplicatePathSegment(
                    descriptor.kind.path_segment().to_string(),
                ));
            }
            for field in &descriptor.fields {
                match field.ty {
                    FieldType::Reference(kind) => {
                        if !self.descriptors.contains_key(&kind) {
                            return Err(ConfigError::MissingReference {
                                field: field.name,
                                kind: kind.to_string(),
                            });
                        }
                    }
                    FieldType::Choice(options) => {
                        if options.is_empty() {
                            return Err(ConfigError::EmptyChoice(field.name));
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::portfolio()
    }
}

fn about() -> ResourceDescriptor {
    ResourceDescriptor::new(
        ResourceKind::About,
        false,
        vec![
            FieldSpec::text("name", "Name").shown(),
            FieldSpec::text("role", "Role").shown(),
            FieldSpec::long_text("bio", "Bio"),
            FieldSpec::text("experience", "Experience"),
            FieldSpec::text("location", "Location").shown(),
            FieldSpec::email("email", "Email").shown(),
            FieldSpec::list("interests", "Interests", 0).shown(),
        ],
    )
}

fn blog() -> ResourceDescriptor {
    ResourceDescriptor::new(
        ResourceKind::Blog,
        true,
        vec![
            FieldSpec::text("title", "Title").shown(),
            FieldSpec::text("image", "Image URL"),
            FieldSpec::text("excerpt", "Excerpt").shown(),
            FieldSpec::long_text("content", "Content"),
        ],
    )
}

fn education() -> ResourceDescriptor {
    ResourceDescriptor::new(
        ResourceKind::Education,
        false,
        vec![
            FieldSpec::text("degree", "Degree").shown(),
            FieldSpec::text("institution", "Institution").shown(),
            FieldSpec::text("year", "Year").shown(),
            FieldSpec::reference("aboutId", "About ID", ResourceKind::About),
        ],
    )
}

fn project() -> ResourceDescriptor {
    ResourceDescriptor::new(
        ResourceKind::Project,
        true,
        vec![
            FieldSpec::text("title", "Title").shown(),
            FieldSpec::text("image", "Image URL"),
            FieldSpec::long_text("overview", "Overview"),
            FieldSpec::list("frontendTech", "Frontend technology", 1).shown(),
            FieldSpec::list("backendTech", "Backend technology", 1).shown(),
            FieldSpec::text("databaseTech", "Database technology").shown(),
            FieldSpec::text("liveDemoLink", "Live demo link").optional(),
            FieldSpec::text("clientRepoLink", "Client repo link").optional(),
            FieldSpec::text("serverRepoLink", "Server repo link").optional(),
        ],
    )
}

fn project_feature() -> ResourceDescriptor {
    ResourceDescriptor::new(
        ResourceKind::ProjectFeature,
        false,
        vec![
            FieldSpec::text("icon", "Icon").shown(),
            FieldSpec::text("label", "Label").shown(),
            FieldSpec::text("gradient", "Gradient").shown(),
            FieldSpec::reference("projectId", "Project ID", ResourceKind::Project),
        ],
    )
}

fn project_credential() -> ResourceDescriptor {
    ResourceDescriptor::new(
        ResourceKind::ProjectCredential,
        false,
        vec![
            FieldSpec::email("email", "Email").shown(),
            FieldSpec::text("password", "Password").sensitive(),
            FieldSpec::reference("projectId", "Project ID", ResourceKind::Project),
        ],
    )
}

fn skill() -> ResourceDescriptor {
    ResourceDescriptor::new(
        ResourceKind::Skill,
        true,
        vec![
            FieldSpec::text("name", "Name").shown(),
            FieldSpec::choice("category", "Category", SKILL_DOMAINS).shown(),
        ],
    )
}

fn skill_category() -> ResourceDescriptor {
    ResourceDescriptor::new(
        ResourceKind::SkillCategory,
        false,
        vec![
            FieldSpec::text("title", "Title").shown(),
            FieldSpec::text("description", "Description").shown(),
        ],
    )
}
