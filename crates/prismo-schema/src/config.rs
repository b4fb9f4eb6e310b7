//! # Constraint Override Loading
//!
//! Deployments can adjust platform limits without a rebuild by pointing at
//! an override file. The file maps platform identifiers to partial
//! constraint records; every field left out keeps its built-in value:
//!
//! ```yaml
//! TWITTER:
//!   max_text_length: 25000
//! LINKEDIN:
//!   max_media_count: 20
//!   allowed_media_kinds: [image, video, gif]
//! ```
//!
//! The format is chosen from the extension: `.yaml`/`.yml` for YAML,
//! anything else for JSON.

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use prismo_core::{ConfigurationError, ConstraintOverride, ConstraintTable, SocialPlatform};

/// Error loading a constraint override file.
#[derive(Error, Debug)]
pub enum ConstraintLoadError {
    /// The file could not be read.
    #[error("cannot read constraint file '{path}': {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML/JSON or does not have the expected shape.
    #[error("invalid constraint file '{path}': {reason}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// The merged table violates the table invariants.
    #[error("constraint file '{path}' produces an invalid table: {source}")]
    Invalid {
        /// Path whose overrides were rejected.
        path: String,
        /// The configuration defect.
        #[source]
        source: ConfigurationError,
    },
}

/// Parse override records from YAML text.
///
/// # Errors
///
/// The YAML error when the text does not describe an override map.
pub fn parse_overrides_yaml(
    text: &str,
) -> Result<BTreeMap<SocialPlatform, ConstraintOverride>, serde_yaml::Error> {
    serde_yaml::from_str(text)
}

/// Parse override records from JSON text.
///
/// # Errors
///
/// The JSON error when the text does not describe an override map.
pub fn parse_overrides_json(
    text: &str,
) -> Result<BTreeMap<SocialPlatform, ConstraintOverride>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Build the effective constraint table: the built-in table with the
/// overrides in `path` merged on top.
///
/// # Errors
///
/// See [`ConstraintLoadError`].
pub fn load_constraint_table(path: &Path) -> Result<ConstraintTable, ConstraintLoadError> {
    let source_path = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ConstraintLoadError::Io {
        path: source_path.clone(),
        source,
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parsed = match ext {
        "yaml" | "yml" => parse_overrides_yaml(&text).map_err(|e| e.to_string()),
        _ => parse_overrides_json(&text).map_err(|e| e.to_string()),
    };
    let overrides = parsed.map_err(|reason| ConstraintLoadError::Parse {
        path: source_path.clone(),
        reason,
    })?;

    let table = ConstraintTable::standard()
        .with_overrides(&overrides)
        .map_err(|source| ConstraintLoadError::Invalid {
            path: source_path,
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        overridden = overrides.len(),
        "loaded platform constraint overrides"
    );
    Ok(table)
}

/// Effective table for an optional override path.
///
/// # Errors
///
/// See [`load_constraint_table`].
pub fn resolve_constraint_table(path: Option<&Path>) -> Result<ConstraintTable, ConstraintLoadError> {
    match path {
        Some(p) => load_constraint_table(p),
        None => Ok(ConstraintTable::standard()),
    }
}
