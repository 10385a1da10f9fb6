//! Bracket-mode tokenizer for human-annotated `(AI)value` notation
//!
//! Every field boundary is explicit here, so this is the straightforward
//! case: no lookahead, no ambiguity. The explicit markers are trusted even
//! for AI codes the registry does not know; those are recorded as opaque
//! elements rather than dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::decode::Tokenizer;
use crate::normalize::FNC1;
use crate::registry;
use crate::types::DecodedElement;

static AI_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{2,4})\)").unwrap());

pub struct BracketTokenizer;

impl Tokenizer for BracketTokenizer {
    fn tokenize(&self, input: &str) -> Vec<DecodedElement> {
        debug!("BracketTokenizer: start len={}", input.len());

        let groups: Vec<(usize, usize, &str)> = AI_GROUP
            .captures_iter(input)
            .map(|caps| {
                let whole = caps.get(0).unwrap();
                (whole.start(), whole.end(), caps.get(1).unwrap().as_str())
            })
            .collect();

        if groups.is_empty() {
            warn!("BracketTokenizer: no (AI) group found; nothing to tokenize");
            return Vec::new();
        }
        if groups[0].0 > 0 {
            warn!(
                "BracketTokenizer: ignoring {} leading characters before first (AI) group",
                groups[0].0
            );
        }

        let mut out = Vec::with_capacity(groups.len());
        for (i, (_, value_start, code)) in groups.iter().enumerate() {
            let value_end = groups.get(i + 1).map(|g| g.0).unwrap_or(input.len());
            // Stray separators inside annotated values are scanner noise.
            let value: String = input[*value_start..value_end]
                .chars()
                .filter(|&c| c != FNC1)
                .collect();

            if registry::lookup(code).is_none() {
                debug!("BracketTokenizer: unregistered AI ({}), recording as opaque", code);
            }
            out.push(DecodedElement::new(*code, value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<DecodedElement> {
        BracketTokenizer.tokenize(input)
    }

    #[test]
    fn test_tokenizes_annotated_fields() {
        let elements = tokenize("(01)04012345678901(17)251231(10)ABC123");
        assert_eq!(
            elements,
            vec![
                DecodedElement::new("01", "04012345678901"),
                DecodedElement::new("17", "251231"),
                DecodedElement::new("10", "ABC123"),
            ]
        );
    }

    #[test]
    fn test_value_runs_to_next_group_or_end() {
        let elements = tokenize("(10)LOT-1(21)S2");
        assert_eq!(elements[0].value, "LOT-1");
        assert_eq!(elements[1].value, "S2");
    }

    #[test]
    fn test_unregistered_ai_recorded_as_opaque() {
        let elements = tokenize("(99)SOMETHING(01)04012345678901");
        assert_eq!(elements[0], DecodedElement::new("99", "SOMETHING"));
        assert_eq!(elements[1].ai, "01");
    }

    #[test]
    fn test_empty_value_allowed() {
        let elements = tokenize("(10)(21)SER");
        assert_eq!(elements[0], DecodedElement::new("10", ""));
        assert_eq!(elements[1], DecodedElement::new("21", "SER"));
    }

    #[test]
    fn test_stray_separator_inside_value_is_dropped() {
        let input = format!("(10)AB{}C", FNC1);
        let elements = tokenize(&input);
        assert_eq!(elements[0].value, "ABC");
    }

    #[test]
    fn test_no_group_yields_nothing() {
        assert!(tokenize("just text").is_empty());
        assert!(tokenize("").is_empty());
    }
}
