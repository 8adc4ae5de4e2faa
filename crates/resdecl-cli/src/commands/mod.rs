//! CLI command implementations.

use anyhow::{Context, Result};
use resdecl_config::{ResourceTypesConfig, load_resource_types};
use resdecl_core::{ResourceTypeDescriptor, ResourceTypeId, ResourceTypesDocument};
use std::path::Path;
use tracing::info;

use crate::Format;

fn load_config(path: Option<&Path>) -> Result<ResourceTypesConfig> {
    match path {
        Some(path) => load_resource_types(path)
            .with_context(|| format!("Failed to load config file: {}", path.display())),
        None => Ok(ResourceTypesConfig::default()),
    }
}

fn descriptors(config: Option<&Path>) -> Result<Vec<ResourceTypeDescriptor>> {
    load_config(config)?
        .resolve()
        .context("Failed to resolve resource types")
}

/// Rendered output, always newline-terminated.
fn render_output(config: Option<&Path>, format: Format, document: bool) -> Result<String> {
    let descriptors = descriptors(config)?;
    info!(count = descriptors.len(), ?format, "rendering resource types");

    let mut output = match (format, document) {
        (Format::Yaml, false) => resdecl_core::to_yaml_fragment(&descriptors)?,
        (Format::Json, false) => resdecl_core::to_json_fragment(&descriptors)?,
        (Format::Yaml, true) => ResourceTypesDocument::new(descriptors).to_yaml()?,
        (Format::Json, true) => ResourceTypesDocument::new(descriptors).to_json()?,
    };

    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

pub fn render(config: Option<&Path>, format: Format, document: bool) -> Result<()> {
    print!("{}", render_output(config, format, document)?);
    Ok(())
}

pub fn validate(path: &Path) -> Result<()> {
    let result = load_resource_types(path)
        .map_err(anyhow::Error::from)
        .and_then(|config| config.resolve().map_err(anyhow::Error::from));

    match result {
        Ok(_descriptors) => {
            println!("Configuration is valid");
            Ok(())
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

fn list_output(config: Option<&Path>) -> Result<String> {
    let config = load_config(config)?;
    let mut output = String::new();
    for &id in ResourceTypeId::ALL {
        output.push_str(&format!("{:<16} {}\n", id.as_str(), config.repository_for(id)));
    }
    Ok(output)
}

pub fn list(config: Option<&Path>) -> Result<()> {
    print!("{}", list_output(config)?);
    Ok(())
}
