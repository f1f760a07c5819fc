//! Text encoding of the per-trial elapsed time.
//!
//! `Compat` writes whole seconds, a dot, then the millisecond remainder with
//! no padding: 1005 ms is `1.5`, the same text a decimal reader would take
//! for 1500 ms. The writer and [`parse_elapsed`] agree with each other, so the
//! value survives a round trip through this crate, but spreadsheet-style
//! decimal parsing of the column is lossy. `Padded` always writes three
//! millisecond digits (`1.005`).

use crate::error::{ExportError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    Compat,
    Padded,
}

pub fn format_elapsed(elapsed_ms: u64, format: TimeFormat) -> String {
    let seconds = elapsed_ms / 1000;
    let millis = elapsed_ms % 1000;
    match format {
        TimeFormat::Compat => format!("{seconds}.{millis}"),
        TimeFormat::Padded => format!("{seconds}.{millis:03}"),
    }
}

/// Inverse of [`format_elapsed`] for the same format
pub fn parse_elapsed(text: &str, format: TimeFormat) -> Result<u64> {
    let invalid = || ExportError::InvalidTime(text.to_string());

    let (secs, millis) = text.trim().split_once('.').ok_or_else(invalid)?;
    if secs.is_empty() || millis.is_empty() {
        return Err(invalid());
    }
    if format == TimeFormat::Padded && millis.len() != 3 {
        return Err(invalid());
    }
    let secs: u64 = secs.parse().map_err(|_| invalid())?;
    let millis: u64 = millis.parse().map_err(|_| invalid())?;
    if millis >= 1000 {
        return Err(invalid());
    }
    secs.checked_mul(1000)
        .and_then(|ms| ms.checked_add(millis))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compat_is_not_zero_padded() {
        assert_eq!(format_elapsed(0, TimeFormat::Compat), "0.0");
        assert_eq!(format_elapsed(5, TimeFormat::Compat), "0.5");
        assert_eq!(format_elapsed(500, TimeFormat::Compat), "0.500");
        assert_eq!(format_elapsed(1005, TimeFormat::Compat), "1.5");
        assert_eq!(format_elapsed(12_340, TimeFormat::Compat), "12.340");
    }

    #[test]
    fn test_padded_has_three_digits() {
        assert_eq!(format_elapsed(0, TimeFormat::Padded), "0.000");
        assert_eq!(format_elapsed(5, TimeFormat::Padded), "0.005");
        assert_eq!(format_elapsed(1050, TimeFormat::Padded), "1.050");
    }

    #[test]
    fn test_parse_inverts_format() {
        for ms in [0, 5, 50, 500, 999, 1000, 1005, 61_234] {
            for format in [TimeFormat::Compat, TimeFormat::Padded] {
                let text = format_elapsed(ms, format);
                assert_eq!(parse_elapsed(&text, format).unwrap(), ms, "{text}");
            }
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "12", ".5", "1.", "a.b", "1.1000", "-1.5"] {
            assert!(
                matches!(
                    parse_elapsed(text, TimeFormat::Compat),
                    Err(ExportError::InvalidTime(_))
                ),
                "{text:?} should be rejected"
            );
        }
        assert!(parse_elapsed("1.5", TimeFormat::Padded).is_err());
    }
}
