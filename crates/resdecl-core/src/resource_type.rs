//! Resource type identifiers and descriptors.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Implementation kind of every resource type we declare.
pub const DOCKER_IMAGE: &str = "docker-image";

/// Container image implementing the pull-request resource.
pub const PR_RESOURCE_REPOSITORY: &str = "eu.gcr.io/gardener-project/cc/pr-resource";

/// Symbolic identifier of a resource type.
///
/// The string form is used verbatim as the descriptor's `name`, so it must be
/// unique within a pipeline's `resource_types` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceTypeId {
    /// Watches a repository for pull requests.
    #[display("pull-request")]
    PullRequest,
}

impl ResourceTypeId {
    /// Every known identifier, in emission order.
    pub const ALL: &'static [ResourceTypeId] = &[ResourceTypeId::PullRequest];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceTypeId::PullRequest => "pull-request",
        }
    }

    /// The image reference used when nothing overrides it.
    pub fn default_repository(&self) -> &'static str {
        match self {
            ResourceTypeId::PullRequest => PR_RESOURCE_REPOSITORY,
        }
    }

    /// Build the descriptor for this identifier with its default image.
    pub fn descriptor(&self) -> Result<ResourceTypeDescriptor> {
        ResourceTypeDescriptor::docker_image(*self, self.default_repository())
    }
}

impl std::str::FromStr for ResourceTypeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ResourceTypeId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownResourceType(s.to_string()))
    }
}

/// Where a docker-image resource type pulls its implementation from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSource {
    repository: String,
}

impl ResourceSource {
    pub fn repository(&self) -> &str {
        &self.repository
    }
}

/// A resource type declaration as it appears in a pipeline document.
///
/// Field order is the serialization order: `name`, `type`, `source`.
/// Every field is non-empty; the only way to build one is through the
/// validating constructors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceTypeDescriptor {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    source: ResourceSource,
}

impl ResourceTypeDescriptor {
    /// Create a docker-image descriptor from a raw name and image reference.
    ///
    /// Surrounding whitespace is stripped from both values.
    pub fn new(name: impl AsRef<str>, repository: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim().to_string();
        let repository = repository.as_ref().trim().to_string();

        if name.is_empty() {
            return Err(Error::Configuration("resource type name".to_string()));
        }
        if repository.is_empty() {
            return Err(Error::Configuration(format!(
                "source repository for resource type '{}'",
                name
            )));
        }

        Ok(Self {
            name,
            kind: DOCKER_IMAGE.to_string(),
            source: ResourceSource { repository },
        })
    }

    /// Create a docker-image descriptor for a known identifier.
    pub fn docker_image(id: ResourceTypeId, repository: impl AsRef<str>) -> Result<Self> {
        Self::new(id.as_str(), repository)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `type` field.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn source(&self) -> &ResourceSource {
        &self.source
    }

    pub fn repository(&self) -> &str {
        self.source.repository()
    }
}

/// Produce the pull-request resource type descriptor.
pub fn render() -> Result<ResourceTypeDescriptor> {
    let descriptor = ResourceTypeId::PullRequest.descriptor()?;
    debug!(
        name = descriptor.name(),
        repository = descriptor.repository(),
        "rendered resource type descriptor"
    );
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pull_request() {
        let descriptor = render().unwrap();
        assert_eq!(descriptor.name(), "pull-request");
        assert_eq!(descriptor.kind(), "docker-image");
        assert_eq!(
            descriptor.repository(),
            "eu.gcr.io/gardener-project/cc/pr-resource"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        assert_eq!(render().unwrap(), render().unwrap());
    }

    #[test]
    fn test_identifier_string_forms() {
        let id = ResourceTypeId::PullRequest;
        assert_eq!(id.as_str(), "pull-request");
        assert_eq!(id.to_string(), "pull-request");
        assert_eq!("pull-request".parse::<ResourceTypeId>().unwrap(), id);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"pull-request\"");
    }

    #[test]
    fn test_unknown_identifier() {
        let result = "git".parse::<ResourceTypeId>();
        assert!(matches!(result, Err(Error::UnknownResourceType(ref s)) if s == "git"));
    }

    #[test]
    fn test_empty_name_is_configuration_error() {
        let result = ResourceTypeDescriptor::new("", PR_RESOURCE_REPOSITORY);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_blank_repository_is_configuration_error() {
        let result = ResourceTypeDescriptor::docker_image(ResourceTypeId::PullRequest, "  ");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_padded_values_are_trimmed() {
        let descriptor = ResourceTypeDescriptor::new(" pull-request ", " x.example/pr ").unwrap();
        assert_eq!(descriptor.name(), "pull-request");
        assert_eq!(descriptor.repository(), "x.example/pr");
    }

    #[test]
    fn test_custom_repository() {
        let descriptor =
            ResourceTypeDescriptor::docker_image(ResourceTypeId::PullRequest, "example.com/pr")
                .unwrap();
        assert_eq!(descriptor.name(), "pull-request");
        assert_eq!(descriptor.kind(), DOCKER_IMAGE);
        assert_eq!(descriptor.source().repository(), "example.com/pr");
    }
}
