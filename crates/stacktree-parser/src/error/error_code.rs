//! Error codes for the template parser.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document syntax errors
//! - `E1xx` - Template structure errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E0xx)
    // =========================================================================
    /// Malformed document.
    ///
    /// The source is neither valid YAML nor valid JSON.
    E001,

    // =========================================================================
    // Structure Errors (E1xx)
    // =========================================================================
    /// Template root is not a mapping.
    E100,

    /// Section is not a mapping.
    ///
    /// `Parameters`, `Resources` and `Outputs` must map element names to
    /// their definitions.
    E101,

    /// Element name is not a string.
    E102,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
