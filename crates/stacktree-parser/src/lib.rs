//! CloudFormation template parser for stacktree.
//!
//! Templates are read as YAML (JSON is accepted as a YAML subset), including
//! the short-form intrinsic tags such as `!Ref` and `!GetAtt`. Parsing yields
//! a [`Template`] whose dependency graph records, for every element in the
//! `Parameters`, `Resources` and `Outputs` sections, the elements it
//! references.
//!
//! # Example
//!
//! ```
//! use stacktree_core::Element;
//!
//! let source = r#"
//! Parameters:
//!   Env: {Type: String}
//! Resources:
//!   Bucket:
//!     Type: AWS::S3::Bucket
//!     Properties:
//!       BucketName: !Sub "data-${Env}"
//! "#;
//!
//! let template = stacktree_parser::parse(source).unwrap();
//! let deps: Vec<_> = template.graph().get(Element::resource("Bucket")).collect();
//! assert_eq!(deps, vec![Element::parameter("Env")]);
//! ```

pub mod error;

mod refs;
mod span;
mod sub;
mod template;

use log::{debug, info, trace};
use serde_yaml::Value;

pub use span::Span;
pub use template::Template;

use error::{Diagnostic, ErrorCode, ParseError};

/// Parses template source text into a [`Template`].
///
/// # Errors
///
/// Returns a [`ParseError`] when the source is not valid YAML/JSON (`E001`),
/// or when its structure is not that of a template (`E100`-`E102`). All
/// structural problems found in one pass are reported together.
pub fn parse(source: &str) -> Result<Template, ParseError> {
    info!(source_len = source.len(); "Parsing template");

    let root: Value = serde_yaml::from_str(source).map_err(|err| syntax_error(&err, source))?;
    trace!(root:?; "Parsed document");

    let template = template::build(&root)?;
    debug!(
        nodes_count = template.graph().nodes_count(),
        edges_count = template.graph().edges_count();
        "Template parsed successfully"
    );

    Ok(template)
}

fn syntax_error(err: &serde_yaml::Error, source: &str) -> ParseError {
    let mut diagnostic = Diagnostic::error(err.to_string())
        .with_code(ErrorCode::E001)
        .with_help("templates must be valid YAML or JSON");

    if let Some(location) = err.location() {
        diagnostic = diagnostic.with_label(Span::at(location.index(), source.len()), "here");
    }

    diagnostic.into()
}
