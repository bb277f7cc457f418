use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TalError {
    #[error("Invalid char 0x{0:02x}")]
    InvalidChar(u8),

    #[error("Incomplete annotation")]
    IncompleteAnnotation,

    #[error("Invalid number {text:?}")]
    NumberFormat {
        text: String,
        #[source]
        source: Option<ParseIntError>,
    },
}

/// Error returned by [`parse`](crate::parse).
///
/// Parsing stops at the first malformed byte, but everything decoded up to
/// that point is kept in [`records`](ParseError::records) rather than
/// discarded.
#[derive(Debug, Error)]
#[error("TAL parse failed after {} record(s)", records.len())]
pub struct ParseError {
    pub records: Vec<crate::types::Tal>,
    #[source]
    pub kind: TalError,
}

pub type Result<T> = std::result::Result<T, TalError>;
