//! The core diagnostic type.
//!
//! A [`Diagnostic`] represents a single error with optional error code,
//! labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with optional source location information.
///
/// # Example
///
/// ```text
/// error[E001]: did not find expected key at line 3 column 5
///   --> template.yaml:3:5
///    |
///  3 |     Type AWS::S3::Bucket
///    |     ^ invalid syntax
///    |
///    = help: templates must be valid YAML or JSON
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use stacktree_parser::{Span, error::{Diagnostic, ErrorCode}};
    /// let diag = Diagnostic::error("unexpected end of stream")
    ///     .with_code(ErrorCode::E001)
    ///     .with_label(Span::new(0..1), "here");
    /// assert_eq!(diag.labels().len(), 1);
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_with_label() {
        let diag = Diagnostic::error("bad indentation").with_label(Span::new(10..11), "here");

        assert_eq!(diag.labels().len(), 1);
        assert_eq!(diag.labels()[0].message(), "here");
        assert_eq!(diag.labels()[0].span(), Span::new(10..11));
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("template is a list").with_code(ErrorCode::E100);

        assert_eq!(diag.to_string(), "error[E100]: template is a list");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::error("empty section");

        assert_eq!(diag.to_string(), "error: empty section");
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("`Outputs` section is not a mapping")
            .with_code(ErrorCode::E101)
            .with_help("declare each output as `Name: definition`");

        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(
            diag.help(),
            Some("declare each output as `Name: definition`")
        );
    }
}
