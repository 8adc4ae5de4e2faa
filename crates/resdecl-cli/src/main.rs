//! resdecl CLI tool.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "resdecl")]
#[command(about = "Emit resource type declarations for CI pipelines", long_about = None)]
struct Cli {
    /// Resource type override file
    #[arg(long, global = true, env = "RESDECL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resource_types fragment
    Render {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
        /// Wrap the fragment under a top-level `resource_types` key
        #[arg(long)]
        document: bool,
    },
    /// Validate a resource type override file
    Validate {
        /// Path to the configuration file (defaults to --config, then resource-types.kdl)
        path: Option<PathBuf>,
    },
    /// List known resource types
    List,
}

const DEFAULT_CONFIG_PATH: &str = "resource-types.kdl";

/// File checked by `validate`: the positional path, then `--config`, then the default.
fn validate_target(path: Option<PathBuf>, config: Option<PathBuf>) -> PathBuf {
    path.or(config)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the rendered fragment.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { format, document } => {
            commands::render(cli.config.as_deref(), format, document)?;
        }
        Commands::Validate { path } => {
            commands::validate(&validate_target(path, cli.config))?;
        }
        Commands::List => {
            commands::list(cli.config.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults_to_yaml_fragment() {
        let cli = Cli::try_parse_from(["resdecl", "render"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Render {
                format: Format::Yaml,
                document: false
            }
        ));
    }

    #[test]
    fn test_render_json_document_with_config() {
        let cli = Cli::try_parse_from([
            "resdecl",
            "render",
            "--format",
            "json",
            "--document",
            "--config",
            "types.kdl",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("types.kdl")));
        assert!(matches!(
            cli.command,
            Commands::Render {
                format: Format::Json,
                document: true
            }
        ));
    }

    fn parse_validate_target(args: &[&str]) -> PathBuf {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        match cli.command {
            Commands::Validate { path } => validate_target(path, cli.config),
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_validate_uses_global_config() {
        assert_eq!(
            parse_validate_target(&["resdecl", "--config", "x.kdl", "validate"]),
            PathBuf::from("x.kdl")
        );
    }

    #[test]
    fn test_validate_path_overrides_global_config() {
        assert_eq!(
            parse_validate_target(&["resdecl", "--config", "x.kdl", "validate", "y.kdl"]),
            PathBuf::from("y.kdl")
        );
    }

    #[test]
    fn test_validate_default_path() {
        assert_eq!(validate_target(None, None), PathBuf::from("resource-types.kdl"));
        assert_eq!(
            validate_target(None, Some(PathBuf::from("x.kdl"))),
            PathBuf::from("x.kdl")
        );
    }
}
