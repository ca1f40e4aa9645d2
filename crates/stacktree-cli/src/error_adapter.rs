//! Error adapter for converting StacktreeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a [`stacktree_parser::error::ParseError`] contains multiple
//! diagnostics, each diagnostic is rendered independently, against the same
//! named template source. Structural diagnostics carry no source location,
//! so their message names the template file instead.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, NamedSource, SourceSpan};

use stacktree::StacktreeError;
use stacktree_parser::error::Diagnostic;

/// Adapter for a single parser diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// Template source, named after the template file
    src: NamedSource<String>,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, name: &str, src: &str) -> Self {
        Self {
            diag,
            src: NamedSource::new(name, src.to_string()),
        }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .field("name", &self.src.name())
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.diag.labels().is_empty() {
            write!(
                f,
                "Unable to parse template '{}': {}",
                self.src.name(),
                self.diag.message()
            )
        } else {
            write!(f, "{}", self.diag.message())
        }
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            LabeledSpan::new_primary_with_span(
                Some(label.message().to_string()),
                span_to_miette(label.span()),
            )
        })))
    }
}

/// Adapter for non-diagnostic [`StacktreeError`] variants.
pub struct ErrorAdapter<'a>(pub &'a StacktreeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            StacktreeError::Io(_) => "stacktree::io",
            StacktreeError::Read { .. } => "stacktree::read",
            StacktreeError::Parse { .. } => return None,
            StacktreeError::Config(_) => "stacktree::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            StacktreeError::Config(_) => Some(Box::new(
                "see `[render]` options: format = \"tree\" | \"dot\", show_all, two_way",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(_) => None,
        }
    }
}

/// Convert a parser [`Span`](stacktree_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: stacktree_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`StacktreeError`] into a list of reportable errors.
///
/// For [`StacktreeError::Parse`], this returns one [`Reportable`] for
/// each diagnostic in the error. For other error variants, this returns a
/// single [`Reportable`].
pub fn to_reportables(err: &StacktreeError) -> Vec<Reportable<'_>> {
    match err {
        StacktreeError::Parse {
            err: parse_err,
            src,
            name,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, name, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use miette::{GraphicalReportHandler, GraphicalTheme};
    use stacktree_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("malformed document")
            .with_code(ErrorCode::E001)
            .with_label(Span::new(0..5), "here")
            .with_help("templates must be valid YAML or JSON");
        let err = StacktreeError::new_parse_error(ParseError::from(diag), "a: [b", "stack.yaml");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "malformed document");
                assert_eq!(d.code().unwrap().to_string(), "E001");
                assert!(d.source_code().is_some());
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error("`Parameters` section is not a mapping").with_code(ErrorCode::E101),
            Diagnostic::error("element name `1` in `Resources` is not a string")
                .with_code(ErrorCode::E102),
        ];
        let err = StacktreeError::new_parse_error(ParseError::from(diags), "...", "stack.yaml");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(
            reportables[0].to_string(),
            "Unable to parse template 'stack.yaml': `Parameters` section is not a mapping"
        );
        assert_eq!(
            reportables[1].to_string(),
            "Unable to parse template 'stack.yaml': element name `1` in `Resources` is not a string"
        );
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_non_parse_error() {
        let err = StacktreeError::Config("Missing configuration file: x.toml".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.to_string(),
                    "Configuration error: Missing configuration file: x.toml"
                );
                assert_eq!(e.code().unwrap().to_string(), "stacktree::config");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_labels_are_primary() {
        let diag = Diagnostic::error("error with label").with_label(Span::new(0..5), "here");

        let adapter = DiagnosticAdapter::new(&diag, "stack.yaml", "some source code");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].label(), Some("here"));
        assert!(labels[0].primary());
    }

    #[test]
    fn test_unlabeled_diagnostic_report_names_file() {
        let diag = Diagnostic::error("template root is not a mapping").with_code(ErrorCode::E100);
        let err = StacktreeError::new_parse_error(
            ParseError::from(diag),
            "- a\n",
            "demos/errors/root_list.yaml",
        );

        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        for reportable in to_reportables(&err) {
            let mut out = String::new();
            handler.render_report(&mut out, &reportable).unwrap();

            assert!(out.contains("root_list.yaml"), "report lacks file name:\n{out}");
            assert!(out.contains("template root is not a mapping"));
        }
    }
}
