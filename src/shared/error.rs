use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish between a clean run, a run where
/// some lookups did not produce a product, and a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested lookup found a product
    Success = 0,
    /// At least one lookup failed or the product is not in the catalog
    LookupIncomplete = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad config file, HTTP client construction, I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LookupIncomplete => write!(f, "Lookup Incomplete (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Coarse classification of a lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    Http,
    Network,
    Parse,
}

impl fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupErrorKind::Http => write!(f, "http"),
            LookupErrorKind::Network => write!(f, "network"),
            LookupErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Transport-level failures of a product lookup.
///
/// A barcode that the catalog does not know is *not* an error: it is reported
/// as a `NotFound` lookup result. Only failures to obtain or understand an
/// answer end up here.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("Product API returned HTTP {status}: {detail}\n\n💡 Hint: The service may be unavailable, try scanning again later")]
    Http { status: u16, detail: String },

    #[error("Failed to reach the product API\nDetails: {detail}\n\n💡 Hint: Please check your internet connection")]
    Network { detail: String },

    #[error("Failed to parse the product API response\nDetails: {detail}")]
    Parse { detail: String },
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Http { .. } => LookupErrorKind::Http,
            LookupError::Network { .. } => LookupErrorKind::Network,
            LookupError::Parse { .. } => LookupErrorKind::Parse,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            LookupError::Http { detail, .. }
            | LookupError::Network { detail }
            | LookupError::Parse { detail } => detail,
        }
    }
}
