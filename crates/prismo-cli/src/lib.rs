//! # prismo-cli: CLI Tool for Prismo
//!
//! Provides the `prismo` command-line interface.
//!
//! ## Subcommands
//!
//! - `prismo validate`: check a post file against its target platforms.
//! - `prismo constraints`: print the effective constraint table.
//!
//! ```bash
//! prismo validate drafts/launch.yaml
//! prismo validate caption.json --platform instagram --platform tiktok
//! prismo constraints --constraints ops/constraints.yaml --format json
//! ```
//!
//! Both subcommands accept `--constraints FILE` to merge an override file
//! onto the built-in table.

pub mod constraints;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;

/// Report rendering for subcommand output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Read and deserialize a JSON or YAML document.
///
/// Files ending in `.yaml` or `.yml` are parsed as YAML, everything else as JSON.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&raw).with_context(|| format!("parsing YAML {}", path.display()))
    } else {
        serde_json::from_str(&raw).with_context(|| format!("parsing JSON {}", path.display()))
    }
}
