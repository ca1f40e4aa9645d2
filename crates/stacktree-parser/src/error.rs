//! Error and diagnostic system for the template parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the template source
//! - Diagnostic collector for accumulating multiple structural errors
//!
//! Every failure is reported as a [`ParseError`] wrapping one or more
//! [`Diagnostic`]s.
//!
//! # Example
//!
//! ```
//! # use stacktree_parser::error::{Diagnostic, ErrorCode};
//! let diag = Diagnostic::error("`Resources` section is not a mapping")
//!     .with_code(ErrorCode::E101)
//!     .with_help("declare each element as `Name: definition`");
//!
//! assert_eq!(diag.to_string(), "error[E101]: `Resources` section is not a mapping");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
