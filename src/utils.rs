use crate::error::{Result, TalError};
use crate::TIME_DIMENSION;

/// Converts TAL numeric text (optional sign, decimal digits, optional
/// single `.`) into 100-nanosecond units.
///
/// The decimal string is scaled exactly, so `120.3` becomes
/// 1_203_000_000 with no float rounding. Fractional digits past the
/// seventh are truncated. Exponent notation, thousands separators and
/// redundant signs are rejected.
pub fn parse_tal_seconds(raw: &[u8]) -> Result<i64> {
    // Digits are ASCII, so non-UTF-8 input can only be malformed.
    let text = match std::str::from_utf8(raw) {
        Ok(text) => text,
        Err(_) => return Err(out_of_syntax(&String::from_utf8_lossy(raw))),
    };

    let negative = text.starts_with('-');
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let (int_digits, frac_digits) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    // ".5" is a valid TAL number, "." and "" are not.
    let mut value = if int_digits.is_empty() && frac_digits.is_some_and(|f| !f.is_empty()) {
        0
    } else {
        parse_digit_run(text, int_digits)?
            .checked_mul(TIME_DIMENSION)
            .ok_or_else(|| out_of_syntax(text))?
    };

    if let Some(frac) = frac_digits {
        if !frac.is_empty() {
            let frac = if frac.len() > 7 && frac.bytes().all(|b| b.is_ascii_digit()) {
                &frac[..7]
            } else {
                frac
            };
            let scaled = parse_digit_run(text, frac)? * 10i64.pow(7 - frac.len().min(7) as u32);
            value = value
                .checked_add(scaled)
                .ok_or_else(|| out_of_syntax(text))?;
        }
    }

    Ok(if negative { -value } else { value })
}

/// Rejection with no underlying std parse error to wrap: bad UTF-8,
/// redundant signs, or a value past the 100-ns representable range.
fn out_of_syntax(text: &str) -> TalError {
    TalError::NumberFormat {
        text: text.to_owned(),
        source: None,
    }
}

/// Parses an unsigned run of ASCII digits, reporting the whole numeric
/// text on failure. `i64::from_str` tolerates a leading sign, which would
/// let a doubled sign through, so digit-only input is enforced on top.
fn parse_digit_run(text: &str, digits: &str) -> Result<i64> {
    match digits.parse::<i64>() {
        Ok(value) if digits.bytes().all(|b| b.is_ascii_digit()) => Ok(value),
        Ok(_) => Err(TalError::NumberFormat {
            text: text.to_owned(),
            source: None,
        }),
        Err(source) => Err(TalError::NumberFormat {
            text: text.to_owned(),
            source: Some(source),
        }),
    }
}
