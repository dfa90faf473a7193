// src/services/normalizer.rs

//! Affair number normalization.
//!
//! Accepts the short form `YY.NNNN` / `YY.NNN` and the canonical 8-digit
//! form `20YYNNNN`.

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::AffairId;

/// Converts one textual affair reference into an `AffairId`.
#[derive(Debug, Clone)]
pub struct IdentifierNormalizer {
    short_form: Regex,
    canonical_form: Regex,
}

impl IdentifierNormalizer {
    /// Create a normalizer with the compiled patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            // ASCII digits only; `\d` is Unicode-aware.
            short_form: compile(r"^([0-9]{2})\.([0-9]{3,4})$")?,
            canonical_form: compile(r"^20[0-9]{6}$")?,
        })
    }

    /// Normalize a single (already trimmed) line.
    ///
    /// Fails with `AppError::InvalidIdentifier` for anything that is neither form.
    pub fn normalize(&self, line: &str) -> Result<AffairId> {
        if let Some(caps) = self.short_form.captures(line) {
            let year = &caps[1];
            let sequence = &caps[2];
            return Ok(AffairId::from_canonical(format!("20{year}{sequence:0>4}")));
        }

        if self.canonical_form.is_match(line) {
            return Ok(AffairId::from_canonical(line.to_string()));
        }

        Err(AppError::InvalidIdentifier(line.to_string()))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| AppError::config(format!("bad pattern {pattern}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> IdentifierNormalizer {
        IdentifierNormalizer::new().unwrap()
    }

    #[test]
    fn test_short_form_four_digit_sequence() {
        assert_eq!(normalizer().normalize("21.2355").unwrap().as_str(), "20212355");
    }

    #[test]
    fn test_short_form_three_digit_sequence_inserts_zero() {
        assert_eq!(normalizer().normalize("21.355").unwrap().as_str(), "20210355");
    }

    #[test]
    fn test_canonical_form_is_kept() {
        assert_eq!(normalizer().normalize("20220001").unwrap().as_str(), "20220001");
    }

    #[test]
    fn test_idempotent_on_canonical_output() {
        let n = normalizer();
        for input in ["21.2355", "21.355", "20190042"] {
            let once = n.normalize(input).unwrap();
            let twice = n.normalize(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let n = normalizer();
        for input in [
            "abc",
            "",
            "21.23",
            "21.23555",
            "2021235",
            "202123555",
            "12345678",
            "21-2355",
            "٢١.٢٣٥٥",
            "20١٢٣٤٥٦",
            "21.２３５５",
        ] {
            match n.normalize(input) {
                Err(AppError::InvalidIdentifier(s)) => assert_eq!(s, input),
                other => panic!("expected InvalidIdentifier for {input:?}, got {other:?}"),
            }
        }
    }
}
