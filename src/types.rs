use std::borrow::Cow;

use crate::TIME_DIMENSION;

/// Timestamp shared by every annotation in one TAL record.
///
/// Both fields are stored in 100-nanosecond units, the same resolution the
/// EDF+ ecosystem uses for onsets and durations. `onset` is relative to the
/// start of the recording and may be negative; `duration` is zero when the
/// TAL carried no duration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStamp {
    pub onset: i64,
    pub duration: i64,
}

impl TimeStamp {
    /// Builds a timestamp from second values.
    ///
    /// ```rust
    /// use edf_tal::TimeStamp;
    ///
    /// let stamp = TimeStamp::from_seconds(120.3, 0.5);
    /// assert_eq!(stamp.onset, 1_203_000_000);
    /// assert_eq!(stamp.duration, 5_000_000);
    /// ```
    pub fn from_seconds(onset: f64, duration: f64) -> Self {
        TimeStamp {
            onset: (onset * TIME_DIMENSION as f64).round() as i64,
            duration: (duration * TIME_DIMENSION as f64).round() as i64,
        }
    }

    /// Onset in seconds relative to recording start.
    pub fn onset_seconds(&self) -> f64 {
        self.onset as f64 / TIME_DIMENSION as f64
    }

    /// Duration in seconds, 0.0 for instantaneous events.
    pub fn duration_seconds(&self) -> f64 {
        self.duration as f64 / TIME_DIMENSION as f64
    }
}

/// One annotation together with its timestamp.
///
/// A single timestamp in the input may fan out into several `Tal` values,
/// one per annotation text that shares it. The annotation is kept as raw
/// bytes: the TAL layer does not interpret any charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tal {
    pub stamp: TimeStamp,
    pub annotation: Vec<u8>,
}

impl Tal {
    /// The annotation bytes decoded as UTF-8, with invalid sequences
    /// replaced. Most real-world TALs hold plain text.
    pub fn annotation_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_round_trip() {
        let stamp = TimeStamp::from_seconds(1.5, 2.0);
        assert_eq!(stamp.onset, 15_000_000);
        assert_eq!(stamp.duration, 20_000_000);
        assert!((stamp.onset_seconds() - 1.5).abs() < 1e-9);
        assert!((stamp.duration_seconds() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_onset() {
        let stamp = TimeStamp::from_seconds(-2.5, 0.0);
        assert_eq!(stamp.onset, -25_000_000);
        assert_eq!(stamp.duration_seconds(), 0.0);
    }

    #[test]
    fn test_annotation_text_lossy() {
        let tal = Tal {
            stamp: TimeStamp::from_seconds(0.0, 0.0),
            annotation: vec![b'o', b'k', 0xff],
        };
        assert_eq!(tal.annotation_text(), "ok\u{fffd}");
    }
}
