//! Raw-mode tokenizer for concatenated wire-format element streams
//!
//! The hard case: an unannotated character stream where fixed-length fields
//! carry their own length and variable-length fields end at a separator, at
//! the end of input, or where the next field's AI can plausibly begin. The
//! boundary search is a greedy longest-prefix-first walk with a finite
//! lookahead admissibility check; it resolves every layout the producing
//! systems actually emit, but two variable-length fields packed back to back
//! with neither a separator nor a recognizable AI between them cannot be
//! split correctly. That ambiguity is inherent to raw GS1 and is not
//! second-guessed here.

use tracing::{debug, warn};

use crate::decode::Tokenizer;
use crate::normalize::FNC1;
use crate::registry::{self, AiDescriptor, AiLength};
use crate::types::DecodedElement;

pub struct RawTokenizer;

impl Tokenizer for RawTokenizer {
    fn tokenize(&self, input: &str) -> Vec<DecodedElement> {
        debug!("RawTokenizer: start len={}", input.len());
        let mut out = Vec::new();
        let mut cursor = 0usize;

        while cursor < input.len() {
            // Stray separators between elements are scanner noise.
            if input[cursor..].starts_with(FNC1) {
                cursor += FNC1.len_utf8();
                continue;
            }

            let Some(ai) = registry::lookup_at(input, cursor) else {
                warn!(
                    "RawTokenizer: no registered AI at position {}; returning partial result ({} elements, {} bytes unconsumed)",
                    cursor,
                    out.len(),
                    input.len() - cursor
                );
                break;
            };
            cursor += ai.code.len();

            let (value_end, separator_terminated) = match ai.length {
                AiLength::Fixed(n) => (advance_chars(input, cursor, n), false),
                AiLength::Variable { max } => {
                    let (end, sep) = find_variable_end(input, cursor);
                    let len = input[cursor..end].chars().count();
                    if len > max {
                        warn!(
                            "RawTokenizer: AI {} value length {} exceeds GS1 maximum {}",
                            ai.code, len, max
                        );
                    }
                    (end, sep)
                }
            };

            let value = &input[cursor..value_end];
            debug!("RawTokenizer: AI {} ({}) value='{}'", ai.code, ai.name, value);
            out.push(DecodedElement::new(ai.code, value));

            cursor = value_end;
            if separator_terminated {
                // The separator ends the field but is not part of it.
                cursor += FNC1.len_utf8();
            }
        }
        out
    }
}

/// Byte index after consuming up to `n` characters from `from`. A short
/// tail consumes what is available rather than failing.
fn advance_chars(s: &str, from: usize, n: usize) -> usize {
    s[from..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| from + i)
        .unwrap_or(s.len())
}

/// Scan a variable-length value starting at `start`. Returns the end of the
/// value and whether it was terminated by a separator (which the caller
/// consumes separately).
///
/// The first character always belongs to the value: a producer never emits
/// an AI with nothing behind it, so an empty value can only come from an
/// explicit separator, and serials that merely open with digits resembling
/// a registered code are not hollowed out.
fn find_variable_end(input: &str, start: usize) -> (usize, bool) {
    for (i, ch) in input[start..].char_indices() {
        let pos = start + i;
        if ch == FNC1 {
            return (pos, true);
        }
        if pos > start {
            if let Some(candidate) = registry::lookup_at(input, pos) {
                if is_admissible_boundary(input, pos, candidate) {
                    return (pos, false);
                }
            }
        }
    }
    (input.len(), false)
}

/// A candidate AI found inside a variable-length value only counts as a
/// field boundary if enough characters follow its code to satisfy its
/// length class; characters past the next separator cannot belong to it.
/// Without this check a lot number that happens to end in digits matching a
/// registered code would be truncated.
fn is_admissible_boundary(input: &str, pos: usize, candidate: &AiDescriptor) -> bool {
    let after_code = pos + candidate.code.len();
    let available = input[after_code..]
        .chars()
        .take_while(|&c| c != FNC1)
        .count();
    match candidate.length {
        AiLength::Fixed(n) => available >= n,
        AiLength::Variable { .. } => available >= 1,
    }
}
