//! Resource type override parsing.

use crate::{ConfigError, ConfigResult};
use kdl::{KdlDocument, KdlNode};
use resdecl_core::{ResourceTypeDescriptor, ResourceTypeId};
use std::path::Path;
use tracing::{debug, info};

/// Image override for one resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTypeOverride {
    pub id: ResourceTypeId,
    pub repository: String,
}

/// Parsed `resource-types.kdl` contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTypesConfig {
    pub overrides: Vec<ResourceTypeOverride>,
}

impl ResourceTypesConfig {
    /// The image for `id`, falling back to its built-in default.
    pub fn repository_for(&self, id: ResourceTypeId) -> &str {
        self.overrides
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.repository.as_str())
            .unwrap_or_else(|| id.default_repository())
    }

    /// Build one descriptor per known resource type, in identifier order.
    pub fn resolve(&self) -> ConfigResult<Vec<ResourceTypeDescriptor>> {
        ResourceTypeId::ALL
            .iter()
            .map(|&id| {
                ResourceTypeDescriptor::docker_image(id, self.repository_for(id))
                    .map_err(ConfigError::from)
            })
            .collect()
    }
}

/// Parse resource type overrides from KDL text.
pub fn parse_resource_types(kdl: &str) -> ConfigResult<ResourceTypesConfig> {
    let doc: KdlDocument = kdl.parse()?;

    let mut overrides: Vec<ResourceTypeOverride> = Vec::new();

    for node in doc.nodes() {
        // Ignore unknown nodes
        if !matches!(node.name().value(), "resource-type" | "resource_type") {
            continue;
        }

        let entry = parse_override(node)?;
        if overrides.iter().any(|o| o.id == entry.id) {
            return Err(ConfigError::Duplicate(format!(
                "resource type '{}'",
                entry.id
            )));
        }
        overrides.push(entry);
    }

    debug!(count = overrides.len(), "parsed resource type overrides");

    Ok(ResourceTypesConfig { overrides })
}

/// Read and parse a resource type override file.
pub fn load_resource_types(path: impl AsRef<Path>) -> ConfigResult<ResourceTypesConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let config = parse_resource_types(&content)?;
    info!(path = %path.display(), overrides = config.overrides.len(), "loaded resource type config");
    Ok(config)
}

fn parse_override(node: &KdlNode) -> ConfigResult<ResourceTypeOverride> {
    let name = get_first_string_arg(node)
        .ok_or_else(|| ConfigError::MissingField("resource type name".to_string()))?;

    let id: ResourceTypeId = name.parse().map_err(|_| ConfigError::InvalidValue {
        field: "resource type".to_string(),
        message: format!("unknown resource type: {}", name),
    })?;

    // Exactly one of `repository="..."` on the node or a `repository "..."` child.
    let properties = node
        .entries()
        .iter()
        .filter(|e| e.name().is_some_and(|n| n.value() == "repository"))
        .map(|e| e.value().as_string().unwrap_or_default().to_string());
    let children = node
        .children()
        .into_iter()
        .flat_map(|doc| doc.nodes())
        .filter(|child| child.name().value() == "repository")
        .map(|child| get_first_string_arg(child).unwrap_or_default());

    let mut repository: Option<String> = None;
    for value in properties.chain(children) {
        if repository.is_some() {
            return Err(ConfigError::Duplicate(format!(
                "repository for resource type '{}'",
                id
            )));
        }
        repository = Some(value);
    }
    let repository = repository.unwrap_or_default();

    if repository.trim().is_empty() {
        return Err(ConfigError::MissingField(format!(
            "repository for resource type '{}'",
            id
        )));
    }

    if repository.trim() != repository {
        return Err(ConfigError::InvalidValue {
            field: format!("repository for resource type '{}'", id),
            message: format!("surrounding whitespace in '{}'", repository),
        });
    }

    Ok(ResourceTypeOverride { id, repository })
}

// Helper functions for extracting values from KDL nodes

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}
