//! # Validate Subcommand
//!
//! Checks a post file against the constraint record of each target platform.
//!
//! The file holds either a full `CreatePostRequest` (content plus
//! `platforms`) or, when `--platform` is given, bare post content. Request
//! value rules run first, then platform validation. The exit code is 1 when
//! either reports a problem.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use prismo_core::{PostContent, SocialPlatform};
use prismo_schema::{
    resolve_constraint_table, validate_fields, ContentValidator, CreatePostRequest,
    ValidationOutcome, Violation,
};

use crate::{read_document, OutputFormat};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Post file (JSON, or YAML with a .yaml/.yml extension).
    pub file: PathBuf,

    /// Target platform. Repeatable. When given, the file holds bare post content.
    #[arg(long = "platform", short = 'p')]
    pub platforms: Vec<SocialPlatform>,

    /// Constraint override file merged onto the built-in table.
    #[arg(long)]
    pub constraints: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Combined result of request and platform validation for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub file: String,
    pub valid: bool,
    pub request_violations: Vec<Violation>,
    pub outcomes: Vec<ValidationOutcome>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let table = resolve_constraint_table(args.constraints.as_deref())?;
    let validator = ContentValidator::new(table);
    let report = build_report(&validator, &args.file, &args.platforms)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }

    Ok(if report.valid { 0 } else { 1 })
}

/// Load `file` and validate it.
///
/// With a non-empty `platforms` list the file is read as bare post content
/// and checked against those platforms; otherwise it must be a full
/// create-post request naming its own platforms.
pub fn build_report(
    validator: &ContentValidator,
    file: &Path,
    platforms: &[SocialPlatform],
) -> Result<ValidationReport> {
    let (content, platforms, request_check) = if platforms.is_empty() {
        let request: CreatePostRequest = read_document(file)?;
        let check = validate_fields(&request);
        (request.content, request.platforms, check)
    } else {
        let content: PostContent = read_document(file)?;
        let check = validate_fields(&content);
        (content, platforms.to_vec(), check)
    };

    let request_violations = request_check
        .err()
        .map(|v| v.into_inner())
        .unwrap_or_default();
    let outcomes = validator.validate(&content, &platforms)?;

    tracing::debug!(
        file = %file.display(),
        platforms = platforms.len(),
        request_violations = request_violations.len(),
        rejected = outcomes.len(),
        "validated post file"
    );

    Ok(ValidationReport {
        file: file.display().to_string(),
        valid: request_violations.is_empty() && outcomes.is_empty(),
        request_violations,
        outcomes,
    })
}

fn print_text(report: &ValidationReport) {
    println!("{}", report.file);
    if report.valid {
        println!("  VALID");
        return;
    }
    for violation in &report.request_violations {
        println!("{violation}");
    }
    for outcome in &report.outcomes {
        println!("  {}:", outcome.platform.display_name());
        for error in &outcome.errors {
            println!("    - {error}");
        }
    }
}
