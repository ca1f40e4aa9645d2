//! CLI logic for the stacktree dependency viewer.
//!
//! This module contains the core CLI logic: configuration loading, merging
//! command-line flags over it, and writing the rendered dependencies.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write as _},
};

use log::info;

use stacktree::{DependencyBuilder, StacktreeError, config::OutputFormat};

/// Run the stacktree CLI application
///
/// Reads the input template, renders its dependencies in the selected format
/// and writes them to the output file, or to stdout when none is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StacktreeError` for:
/// - Configuration loading errors
/// - Template read errors
/// - Parsing errors
/// - Output I/O errors
pub fn run(args: &Args) -> Result<(), StacktreeError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing template"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;

    // Flags only ever switch options on.
    let render = app_config.render_mut();
    if args.show_all {
        render.set_show_all(true);
    }
    if args.two_way {
        render.set_two_way(true);
    }
    if args.dot {
        render.set_format(OutputFormat::Dot);
    }

    let builder = DependencyBuilder::new(app_config);
    let template = builder.parse_file(&args.input)?;
    let output = builder.render(&template);

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path; "Dependencies written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
