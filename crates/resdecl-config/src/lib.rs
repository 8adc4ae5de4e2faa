//! KDL configuration parsing for resdecl.
//!
//! An optional `resource-types.kdl` file can restate or override the image
//! backing each known resource type.

pub mod error;
pub mod resource_types;

pub use error::{ConfigError, ConfigResult};
pub use resource_types::{
    ResourceTypeOverride, ResourceTypesConfig, load_resource_types, parse_resource_types,
};
