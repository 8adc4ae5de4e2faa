//! Fragment emission for host pipeline documents.
//!
//! A fragment is the block sequence that goes under a pipeline's
//! `resource_types:` key. The host assembler concatenates fragments, so the
//! output carries no document markers.

use serde::Serialize;
use tracing::debug;

use crate::{ResourceTypeDescriptor, Result, render};

/// A standalone document holding a `resource_types` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceTypesDocument {
    pub resource_types: Vec<ResourceTypeDescriptor>,
}

impl ResourceTypesDocument {
    pub fn new(resource_types: Vec<ResourceTypeDescriptor>) -> Self {
        Self { resource_types }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render descriptors as a YAML block sequence.
pub fn to_yaml_fragment(descriptors: &[ResourceTypeDescriptor]) -> Result<String> {
    let yaml = serde_yaml::to_string(descriptors)?;
    debug!(count = descriptors.len(), "emitted YAML fragment");
    Ok(yaml)
}

/// Render descriptors as a pretty-printed JSON array.
pub fn to_json_fragment(descriptors: &[ResourceTypeDescriptor]) -> Result<String> {
    Ok(serde_json::to_string_pretty(descriptors)?)
}

/// The YAML fragment declaring the pull-request resource type.
pub fn render_yaml() -> Result<String> {
    to_yaml_fragment(&[render()?])
}
