//! TAL parsing proper: timestamp parser, annotation parser, and the
//! driving loop over a whole annotation sample.

use crate::error::{ParseError, Result, TalError};
use crate::scanner::{Scanner, TOKEN_ANNOTATION, TOKEN_END, TOKEN_ONSET};
use crate::types::{Tal, TimeStamp};
use crate::utils::parse_tal_seconds;

/// Parses a raw TAL byte buffer into a flat list of annotations.
///
/// `sample` is expected to hold the complete raw bytes of an EDF+
/// annotation signal; extracting that range from the containing file is
/// the caller's job. Records come back in buffer order, one per
/// annotation text, with timestamps repeated across annotations that
/// share them.
///
/// The first malformed byte aborts the parse. The records decoded before
/// that point are returned inside the error rather than thrown away:
///
/// ```rust
/// use edf_tal::{parse, TalError};
///
/// let err = parse(b"+120\x14ok\x14\x00not a stamp").unwrap_err();
/// assert_eq!(err.records.len(), 1);
/// assert_eq!(err.records[0].annotation, b"ok");
/// assert!(matches!(err.kind, TalError::InvalidChar(b'n')));
/// ```
///
/// A well-formed buffer parses cleanly:
///
/// ```rust
/// use edf_tal::parse;
///
/// let tals = parse(b"+120.5\x151\x14apnea\x14\x00").unwrap();
/// assert_eq!(tals.len(), 1);
/// assert_eq!(tals[0].stamp.onset_seconds(), 120.5);
/// assert_eq!(tals[0].stamp.duration_seconds(), 1.0);
/// assert_eq!(tals[0].annotation_text(), "apnea");
/// ```
pub fn parse(sample: &[u8]) -> std::result::Result<Vec<Tal>, ParseError> {
    let mut result = Vec::new();
    let mut i = 0;

    while i < sample.len() {
        let (stamp, used) = match parse_stamp(&sample[i..]) {
            Ok(parsed) => parsed,
            Err(kind) => return Err(ParseError { records: result, kind }),
        };
        i += used;

        loop {
            let (annotation, used) = match parse_annotation(&sample[i..]) {
                Ok(parsed) => parsed,
                Err(kind) => return Err(ParseError { records: result, kind }),
            };
            i += used;

            // More bytes than the text plus its terminator means END
            // padding was swallowed, so the annotation list of this
            // stamp is closed and a new stamp (or the end of the
            // buffer) comes next.
            let closed = used > annotation.len() + 1;

            result.push(Tal {
                stamp,
                annotation: annotation.to_vec(),
            });

            if closed {
                break;
            }
        }
    }

    Ok(result)
}

/// Parses the timestamp opening a TAL: a mandatory signed onset,
/// optionally followed by `0x15` and a duration, terminated by `0x14`.
///
/// Returns the stamp and the number of bytes consumed, cursor left just
/// past the terminating `0x14`.
fn parse_stamp(sample: &[u8]) -> Result<(TimeStamp, usize)> {
    match sample.first() {
        Some(&byte) if byte == b'+' || byte == b'-' => {}
        Some(&byte) => return Err(TalError::InvalidChar(byte)),
        None => return Err(TalError::IncompleteAnnotation),
    }

    let mut scanner = Scanner::new(sample);
    let (run, token) = scanner.next_sentinel();
    let token = token.ok_or(TalError::IncompleteAnnotation)?;

    // Padding directly after the onset digits has no meaning.
    if token == TOKEN_END {
        return Err(TalError::InvalidChar(token));
    }

    let onset = parse_tal_seconds(run)?;

    let mut duration = 0;
    if token == TOKEN_ONSET {
        scanner.bump();
        let (run, token) = scanner.next_sentinel();
        match token {
            Some(TOKEN_ANNOTATION) => {}
            Some(other) => return Err(TalError::InvalidChar(other)),
            None => return Err(TalError::IncompleteAnnotation),
        }
        duration = parse_tal_seconds(run)?;
    }

    scanner.bump();
    Ok((TimeStamp { onset, duration }, scanner.pos()))
}

/// Parses one annotation text terminated by `0x14`, then eats any END
/// padding that follows it.
///
/// Returns the text and the number of bytes consumed; a consumed count
/// larger than `text.len() + 1` tells the caller padding was present.
fn parse_annotation(sample: &[u8]) -> Result<(&[u8], usize)> {
    let mut scanner = Scanner::new(sample);

    let (annotation, token) = scanner.next_sentinel();
    match token {
        Some(TOKEN_ANNOTATION) => {}
        Some(other) => return Err(TalError::InvalidChar(other)),
        None => return Err(TalError::IncompleteAnnotation),
    }

    scanner.bump();
    scanner.eat_end_padding();

    Ok((annotation, scanner.pos()))
}
