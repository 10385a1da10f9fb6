//! Decoding pipeline: format detection, tokenizer dispatch, public API

pub mod bracket;
pub mod fields;
pub mod raw;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::DecoderConfig;
use crate::normalize::InputNormalizer;
use crate::registry;
use crate::types::{DecodedElement, DecodedRecord};

pub use bracket::BracketTokenizer;
pub use raw::RawTokenizer;

/// Input encodings a scan can arrive in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFormat {
    /// Human-annotated `(AI)value` notation, unambiguous by construction
    Bracketed,
    /// Concatenated wire-format element stream
    Raw,
}

static BRACKET_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(\d{2,4}\)").unwrap());

/// Classify a normalized scan. A string is bracketed iff it opens with a
/// `(`, 2-4 digits, `)` group; everything else goes through the raw
/// tokenizer. A barcode uses one format consistently, so classification
/// happens once per parse.
pub fn detect(normalized: &str) -> ScanFormat {
    if BRACKET_HEAD.is_match(normalized) {
        ScanFormat::Bracketed
    } else {
        ScanFormat::Raw
    }
}

/// Tokenizes a normalized scan into (AI, value) elements
pub trait Tokenizer {
    fn tokenize(&self, input: &str) -> Vec<DecodedElement>;
}

/// The GS1 Application Identifier decoder.
///
/// Pure and synchronous; a single instance can be shared freely across
/// threads since the AI registry is read-only static data and all other
/// state is local to the call.
pub struct Gs1Decoder {
    normalizer: InputNormalizer,
}

impl Gs1Decoder {
    pub fn new() -> Self {
        Self::with_config(&DecoderConfig::default())
    }

    pub fn with_config(config: &DecoderConfig) -> Self {
        Self {
            normalizer: InputNormalizer::from_config(config),
        }
    }

    /// Decode one scanned string into a structured record.
    ///
    /// Total: never fails and never panics on barcode data. Soft failures
    /// (unknown AI, malformed date, stray separators) degrade to a partial
    /// record; the worst case is a record with only `raw` populated.
    pub fn parse(&self, barcode: &str) -> DecodedRecord {
        let normalized = self.normalizer.canonicalize(barcode);
        let format = detect(&normalized);
        debug!(
            "Gs1Decoder: format={:?} normalized_len={}",
            format,
            normalized.len()
        );
        let elements = match format {
            ScanFormat::Bracketed => BracketTokenizer.tokenize(&normalized),
            ScanFormat::Raw => RawTokenizer.tokenize(&normalized),
        };
        fields::map_elements(barcode, elements)
    }

    /// Lightweight pre-check used by scan UIs to decide whether a value is
    /// worth a full parse or should be treated as a plain non-GS1 code.
    /// Advisory only; `parse` is safe to call regardless of the verdict.
    pub fn is_valid(&self, barcode: &str) -> bool {
        let normalized = self.normalizer.canonicalize(barcode);
        BRACKET_HEAD.is_match(&normalized) || registry::lookup_at(&normalized, 0).is_some()
    }
}

impl Default for Gs1Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot decode with the stock configuration.
pub fn parse(barcode: &str) -> DecodedRecord {
    Gs1Decoder::new().parse(barcode)
}

/// One-shot validity pre-check with the stock configuration.
pub fn is_valid(barcode: &str) -> bool {
    Gs1Decoder::new().is_valid(barcode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_bracketed() {
        assert_eq!(detect("(01)04012345678901"), ScanFormat::Bracketed);
        assert_eq!(detect("(8200)http://x"), ScanFormat::Bracketed);
    }

    #[test]
    fn test_detect_raw() {
        assert_eq!(detect("0104012345678901"), ScanFormat::Raw);
        assert_eq!(detect("(1)short"), ScanFormat::Raw);
        assert_eq!(detect("(12345)too-long"), ScanFormat::Raw);
        assert_eq!(detect(""), ScanFormat::Raw);
    }

    #[test]
    fn test_is_valid_accepts_both_formats() {
        assert!(is_valid("(01)04012345678901"));
        assert!(is_valid("0104012345678901"));
        assert!(is_valid("]C10104012345678901"));
    }

    #[test]
    fn test_is_valid_rejects_plain_codes() {
        assert!(!is_valid("A123456"));
        assert!(!is_valid("991234"));
        assert!(!is_valid(""));
    }
}
