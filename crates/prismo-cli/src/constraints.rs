//! # Constraints Subcommand
//!
//! Prints the effective constraint table: the built-in records with any
//! override file merged in.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use prismo_core::ConstraintTable;
use prismo_schema::resolve_constraint_table;

use crate::OutputFormat;

/// Arguments for the constraints subcommand.
#[derive(Args, Debug)]
pub struct ConstraintsArgs {
    /// Constraint override file merged onto the built-in table.
    #[arg(long)]
    pub constraints: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the constraints subcommand.
pub fn run_constraints(args: &ConstraintsArgs) -> Result<u8> {
    let table = resolve_constraint_table(args.constraints.as_deref())?;
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
        OutputFormat::Text => print!("{}", render_text(&table)),
    }
    Ok(0)
}

/// Render the table as one block per platform.
pub fn render_text(table: &ConstraintTable) -> String {
    let mut out = String::new();
    for (platform, record) in table.iter() {
        let kinds: Vec<&str> = record.allowed_media_kinds.iter().map(|k| k.as_str()).collect();
        out.push_str(&format!("{} ({platform})\n", platform.display_name()));
        out.push_str(&format!("  max text length: {}\n", record.max_text_length));
        out.push_str(&format!("  max media count: {}\n", record.max_media_count));
        out.push_str(&format!("  media kinds:     {}\n", kinds.join(", ")));
        out.push_str(&format!("  requires media:  {}\n", record.requires_media));
        out.push_str(&format!("  polls:           {}\n", record.supports_polls));
        out.push_str(&format!("  links:           {}\n", record.supports_links));
    }
    out
}
