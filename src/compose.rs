//! Element-string composition — the label-printing direction
//!
//! Protocol reports and label printing build GS1 strings from the same AI
//! table the decoder reads. Composition is plain concatenation: elements
//! are emitted in the order given, and in the raw form a variable-length
//! element is followed by the FNC1 separator whenever another element
//! comes after it (fixed-length elements terminate by position).

use crate::normalize::FNC1;
use crate::registry::{self, AiLength};
use crate::types::DecodedElement;

/// Render elements in human-readable `(AI)value` notation.
pub fn to_bracket_notation(elements: &[DecodedElement]) -> String {
    let mut out = String::new();
    for element in elements {
        out.push('(');
        out.push_str(&element.ai);
        out.push(')');
        out.push_str(&element.value);
    }
    out
}

/// Render elements as a raw concatenated element string with separators
/// where position alone cannot terminate a field. AIs the registry does
/// not know are treated as variable-length; a needless separator is
/// harmless, a missing one loses a field boundary.
pub fn to_element_string(elements: &[DecodedElement]) -> String {
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        out.push_str(&element.ai);
        out.push_str(&element.value);

        let is_last = i + 1 == elements.len();
        let needs_separator = match registry::lookup(&element.ai).map(|ai| ai.length) {
            Some(AiLength::Fixed(_)) => false,
            Some(AiLength::Variable { .. }) | None => !is_last,
        };
        if needs_separator {
            out.push(FNC1);
        }
    }
    out
}
