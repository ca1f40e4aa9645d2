//! stacktree - dependency views of CloudFormation templates.
//!
//! Parses a template, records which parameters, resources and outputs each
//! element references, and renders those direct dependencies either as an
//! indented tree or as a GraphViz DOT graph.

pub mod config;
pub mod export;

mod error;

pub use stacktree_core::{Category, DependencyGraph, Element, filter, identifier};
pub use stacktree_parser::Template;

pub use error::StacktreeError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use config::{AppConfig, OutputFormat};
use export::{Exporter, dot::DotExporter, tree::TreeExporter};

/// Builder for parsing and rendering template dependencies.
///
/// # Examples
///
/// ```rust
/// use stacktree::{DependencyBuilder, config::AppConfig};
///
/// let source = r#"
/// Resources:
///   Topic:
///     Type: AWS::SNS::Topic
///   Queue:
///     Type: AWS::SQS::Queue
///     DependsOn: Topic
/// "#;
///
/// let builder = DependencyBuilder::new(AppConfig::default());
/// let template = builder.parse(source).expect("Failed to parse");
///
/// let tree = builder.render(&template);
/// assert!(tree.starts_with("Resources:\n  Queue:\n"));
///
/// // Or use default config
/// let builder = DependencyBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DependencyBuilder {
    config: AppConfig,
}

impl DependencyBuilder {
    /// Create a new dependency builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse template source into a [`Template`].
    ///
    /// # Errors
    ///
    /// Returns [`StacktreeError::Parse`] for malformed documents or documents
    /// that are not shaped like a template.
    pub fn parse(&self, source: &str) -> Result<Template, StacktreeError> {
        self.parse_named(source, "<input>")
    }

    /// Read and parse a template file.
    ///
    /// # Errors
    ///
    /// Returns [`StacktreeError::Read`] if the file cannot be read, or
    /// [`StacktreeError::Parse`] with the file name attached if it does not
    /// parse.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Template, StacktreeError> {
        let path = path.as_ref();
        info!(path:? = path; "Reading template");

        let source = fs::read_to_string(path).map_err(|source| StacktreeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse_named(&source, &path.display().to_string())
    }

    fn parse_named(&self, source: &str, name: &str) -> Result<Template, StacktreeError> {
        info!(name; "Parsing template");

        let template = stacktree_parser::parse(source)
            .map_err(|err| StacktreeError::new_parse_error(err, source, name))?;

        debug!("Template parsed successfully");
        trace!(template:?; "Parsed template");

        Ok(template)
    }

    /// Render a template in the configured [`OutputFormat`].
    pub fn render(&self, template: &Template) -> String {
        let render = self.config.render();
        info!(format:? = render.format(); "Rendering dependencies");

        match render.format() {
            OutputFormat::Tree => TreeExporter::new(render.tree_options()).export(template.graph()),
            OutputFormat::Dot => DotExporter.export(template.graph()),
        }
    }

    /// Render a template as an indented tree, using the configured
    /// visibility options.
    pub fn render_tree(&self, template: &Template) -> String {
        export::tree::render(template.graph(), &self.config.render().tree_options())
    }

    /// Render a template as a GraphViz DOT document.
    pub fn render_dot(&self, template: &Template) -> String {
        export::dot::render(template.graph())
    }
}
