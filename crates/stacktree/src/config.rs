//! Configuration types for stacktree rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field is optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`RenderConfig`] - Output format and tree visibility options.
//! - [`OutputFormat`] - Indented tree or GraphViz DOT.
//!
//! # Example
//!
//! ```
//! # use stacktree::config::{AppConfig, OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.render().format(), OutputFormat::Tree);
//! assert!(!config.render().show_all());
//! ```

use serde::Deserialize;

use crate::export::tree::TreeOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render configuration.
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the render configuration for modification.
    pub fn render_mut(&mut self) -> &mut RenderConfig {
        &mut self.render
    }
}

/// Output format of the rendered dependencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented `DependsOn`/`UsedBy` tree.
    #[default]
    Tree,
    /// GraphViz DOT document.
    Dot,
}

/// Controls what is rendered and how.
///
/// `show_all` and `two_way` only affect the tree format; the DOT format
/// always lists every element and edge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    format: OutputFormat,

    /// Show elements without any dependencies.
    #[serde(default)]
    show_all: bool,

    /// Show dependents (`UsedBy`) as well as dependencies.
    #[serde(default)]
    two_way: bool,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `format` - Output format.
    /// * `show_all` - Show elements without any links.
    /// * `two_way` - Show reverse links.
    pub fn new(format: OutputFormat, show_all: bool, two_way: bool) -> Self {
        Self {
            format,
            show_all,
            two_way,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn two_way(&self) -> bool {
        self.two_way
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    pub fn set_two_way(&mut self, two_way: bool) {
        self.two_way = two_way;
    }

    /// Returns the tree renderer options carried by this configuration.
    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions::new(self.show_all, self.two_way)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.render().format(), OutputFormat::Tree);
        assert!(!config.render().show_all());
        assert!(!config.render().two_way());
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
[render]
format = "dot"
two_way = true
"#,
        )
        .unwrap();

        assert_eq!(config.render().format(), OutputFormat::Dot);
        assert!(!config.render().show_all());
        assert!(config.render().two_way());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[render]\nformat = \"svg\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn test_tree_options() {
        let options = RenderConfig::new(OutputFormat::Tree, true, false).tree_options();

        assert!(options.show_all());
        assert!(!options.two_way());
    }
}
