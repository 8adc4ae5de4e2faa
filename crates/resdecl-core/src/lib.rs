//! Resource type descriptors for CI pipeline definitions.
//!
//! This crate contains:
//! - Resource type identifiers
//! - The descriptor record and its `render()` entry point
//! - YAML/JSON fragment emission for host pipeline documents

pub mod error;
pub mod fragment;
pub mod resource_type;

pub use error::{Error, Result};
pub use fragment::{ResourceTypesDocument, render_yaml, to_json_fragment, to_yaml_fragment};
pub use resource_type::{
    DOCKER_IMAGE, PR_RESOURCE_REPOSITORY, ResourceSource, ResourceTypeDescriptor, ResourceTypeId,
    render,
};
