//! Template catalog: lookup, validation, and YAML load/export.

use super::builtin;
use super::expand::PLACEHOLDER;
use super::model::{Template, TemplateGroup};
use crate::error::{PromptpadError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

static TEMPLATE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("Invalid template ID regex"));

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    groups: builtin::template_groups(),
});

/// An ordered list of template groups.
///
/// Serializes as a bare list of groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    groups: Vec<TemplateGroup>,
}

impl Catalog {
    /// The catalog shipped with promptpad. Built on first use, never mutated.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Build a catalog from groups, validating it.
    pub fn new(groups: Vec<TemplateGroup>) -> Result<Self> {
        let catalog = Self { groups };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptpadError::IoError(format!(
                "failed to read template catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(yaml)
            .map_err(|e| PromptpadError::CatalogError(format!("failed to parse YAML: {}", e)))?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize the catalog to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptpadError::CatalogError(format!("failed to serialize to YAML: {}", e))
        })
    }

    /// Validate catalog contents.
    ///
    /// Validation rules:
    /// - template ids are lowercase slugs and unique across all groups
    /// - group and template names are non-empty
    /// - a prompt pattern contains at most one `{example}` placeholder
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(PromptpadError::CatalogError(
                    "template group names must be non-empty".to_string(),
                ));
            }

            for template in &group.templates {
                if !TEMPLATE_ID_REGEX.is_match(&template.id) {
                    return Err(PromptpadError::CatalogError(format!(
                        "invalid template id '{}' (expected lowercase letters, digits, '-' or '_')",
                        template.id
                    )));
                }
                if !seen.insert(template.id.as_str()) {
                    return Err(PromptpadError::CatalogError(format!(
                        "duplicate template id '{}'",
                        template.id
                    )));
                }
                if template.name.trim().is_empty() {
                    return Err(PromptpadError::CatalogError(format!(
                        "template '{}' has an empty name",
                        template.id
                    )));
                }
                let placeholders = template.action_payload.prompt.matches(PLACEHOLDER).count();
                if placeholders > 1 {
                    return Err(PromptpadError::CatalogError(format!(
                        "template '{}' has {} '{}' placeholders (at most one allowed)",
                        template.id, placeholders, PLACEHOLDER
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn groups(&self) -> &[TemplateGroup] {
        &self.groups
    }

    /// All templates, flattened in display order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.groups.iter().flat_map(|group| group.templates.iter())
    }

    /// Look up a template by id.
    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates().find(|template| template.id == id)
    }

    /// Look up a template by id, failing with a user error naming the
    /// available ids.
    pub fn require(&self, id: &str) -> Result<&Template> {
        self.find(id).ok_or_else(|| {
            let known: Vec<&str> = self.templates().map(|t| t.id.as_str()).collect();
            PromptpadError::UserError(format!(
                "unknown template '{}'. Known templates: {}",
                id,
                known.join(", ")
            ))
        })
    }
}
