//! The one fatal error kind. Resource-bound-hit, allocation-failure, and
//! bounds-rejected conditions are all recovered locally -- logged or folded
//! into a neutral return value -- rather than propagated, so none of them
//! has a variant here.

use thiserror::Error;

/// Fatal, propagated errors. Only parsing of the top-level parameters
/// (`n`, `m`, `h`) produces one of these; internal queries never do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A parameter was unparsable or out of the allowed range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
