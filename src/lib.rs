//! # TAL parser for Rust
//!
//! A pure Rust parser for Time-stamped Annotation Lists (TAL), the byte
//! format EDF+ files use to store events, markers and metadata inside
//! their annotation signals. The format is described in the EDF+
//! specification: <https://www.edfplus.info/specs/edfplus.html#tal>
//!
//! This crate handles only the TAL layer. Reading the EDF+ container,
//! locating the annotation signal and slicing out its raw bytes is the
//! caller's responsibility, as is any charset interpretation of the
//! annotation text.
//!
//! ## Quick Start
//!
//! ```rust
//! use edf_tal::parse;
//!
//! // One timestamp, two annotations sharing it.
//! let sample = b"+120\x14Sleep stage W\x14Arousal\x14\x00";
//!
//! let tals = parse(sample)?;
//! assert_eq!(tals.len(), 2);
//!
//! for tal in &tals {
//!     println!(
//!         "{:.2}s (+{:.2}s): {}",
//!         tal.stamp.onset_seconds(),
//!         tal.stamp.duration_seconds(),
//!         tal.annotation_text()
//!     );
//! }
//!
//! assert_eq!(tals[0].annotation, b"Sleep stage W");
//! assert_eq!(tals[1].annotation, b"Arousal");
//! assert_eq!(tals[1].stamp.onset_seconds(), 120.0);
//! # Ok::<(), edf_tal::ParseError>(())
//! ```
//!
//! ## The TAL byte format
//!
//! A TAL is a sequence of timestamped annotation blocks packed
//! back-to-back. Three sentinel bytes do all the framing:
//!
//! - `0x15` ([`TOKEN_ONSET`]) separates the onset from an optional
//!   duration inside the timestamp
//! - `0x14` ([`TOKEN_ANNOTATION`]) ends the timestamp and each
//!   annotation text
//! - `0x00` ([`TOKEN_END`]) pads out a block after its last annotation
//!
//! So `+120.3\x150.5\x14apnea\x14\x00` reads as "at 120.3s, for 0.5s:
//! apnea". The onset always carries an explicit `+` or `-` sign; the
//! duration block is optional and defaults to zero.
//!
//! ```rust
//! use edf_tal::parse;
//!
//! let tals = parse(b"+120.3\x150.5\x14apnea\x14\x00")?;
//! assert_eq!(tals[0].stamp.onset, 1_203_000_000);
//! assert_eq!(tals[0].stamp.duration, 5_000_000);
//! # Ok::<(), edf_tal::ParseError>(())
//! ```
//!
//! ## Time units
//!
//! Onsets and durations are stored as `i64` counts of 100-nanosecond
//! units ([`TIME_DIMENSION`] per second), the resolution used across the
//! EDF+ ecosystem. [`TimeStamp::onset_seconds`] and
//! [`TimeStamp::duration_seconds`] convert back to seconds.
//!
//! ## Error handling
//!
//! Malformed input aborts the parse at the first bad byte. The error
//! keeps everything parsed up to that point:
//!
//! ```rust
//! use edf_tal::{parse, TalError};
//!
//! // The second block is truncated mid-duration.
//! let err = parse(b"+1\x14ok\x14\x00+8\x15").unwrap_err();
//!
//! assert_eq!(err.records.len(), 1);
//! assert!(matches!(err.kind, TalError::IncompleteAnnotation));
//! ```

pub mod error;
pub mod parser;
pub mod scanner;
pub mod types;
pub mod utils;

// Re-export the public surface for convenience
pub use error::{ParseError, Result, TalError};
pub use parser::parse;
pub use scanner::{TOKEN_ANNOTATION, TOKEN_END, TOKEN_ONSET};
pub use types::{Tal, TimeStamp};

/// 100-nanosecond units per second, the timestamp resolution.
pub const TIME_DIMENSION: i64 = 10_000_000;

/// Library version
///
/// Returns the current version of the edf-tal library.
///
/// # Examples
///
/// ```rust
/// let version = edf_tal::version();
/// assert!(!version.is_empty());
/// assert!(version.contains('.'));
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
