// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — Input Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parsing and validation of starting-colatitude input.
//!
//! Validation is all-or-nothing: a single bad value aborts the whole
//! render, there is never a partial plot with only the valid lines.

use multipole_types::error::{TracerError, TracerResult};

/// Parse a comma-separated list of colatitudes in degrees.
///
/// Whitespace around each entry is ignored and empty entries (trailing
/// commas, doubled commas) are skipped. Any other unparsable token
/// fails the whole list.
pub fn parse_colatitudes(input: &str) -> TracerResult<Vec<f64>> {
    let mut values = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| TracerError::ParseError {
            token: token.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Check that every starting colatitude lies within [0, 90] degrees.
///
/// Returns all offending values at once so the message names each of
/// them. NaN and infinite inputs fail the range check as well.
pub fn validate_colatitudes(values: &[f64]) -> TracerResult<()> {
    let offending: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| !(0.0..=90.0).contains(v))
        .collect();
    if offending.is_empty() {
        Ok(())
    } else {
        Err(TracerError::ColatitudeOutOfRange { values: offending })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_input() {
        let values = parse_colatitudes("5, 10, 15, 20, 30, 40").unwrap();
        assert_eq!(values, vec![5.0, 10.0, 15.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_parse_skips_empty_entries() {
        let values = parse_colatitudes(" 5,, 10 , ").unwrap();
        assert_eq!(values, vec![5.0, 10.0]);
        assert!(parse_colatitudes("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_colatitudes("abc").unwrap_err();
        match err {
            TracerError::ParseError { token } => assert_eq!(token, "abc"),
            other => panic!("expected ParseError, got {other:?}"),
        }
        assert!(parse_colatitudes("5, 10, x, 20").is_err());
    }

    #[test]
    fn test_validate_accepts_inclusive_bounds() {
        assert!(validate_colatitudes(&[0.0, 45.0, 90.0]).is_ok());
        assert!(validate_colatitudes(&[]).is_ok());
    }

    #[test]
    fn test_validate_reports_every_offender() {
        let err = validate_colatitudes(&[5.0, 10.0, -3.0, 95.0]).unwrap_err();
        match err {
            TracerError::ColatitudeOutOfRange { values } => {
                assert_eq!(values, vec![-3.0, 95.0]);
            }
            other => panic!("expected ColatitudeOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(validate_colatitudes(&[f64::NAN]).is_err());
        assert!(validate_colatitudes(&[f64::INFINITY]).is_err());
    }
}
