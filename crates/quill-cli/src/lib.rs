//! CLI logic for the Quill markup tool.
//!
//! This module contains the core CLI logic: loading configuration, reading
//! a markup source, rendering it and writing the output document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use quill::{DocumentBuilder, QuillError};

/// Run the Quill CLI application
///
/// This function processes the input file through the Quill pipeline
/// and writes the rendered document to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `QuillError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Markup source errors
pub fn run(args: &Args) -> Result<(), QuillError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing markup source"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let mut builder = DocumentBuilder::new(app_config);
    if let Some(indentation) = args.indentation {
        builder = builder.with_indentation(indentation);
    }
    let document = builder.parse(&source)?;
    let output = builder.render(&document)?;

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Document exported successfully");

    Ok(())
}
