//! Input normalization for scanned barcode strings
//!
//! Scanner hardware and camera decoders disagree about how the FNC1 field
//! separator and the AIM symbology identifier reach the application. The
//! normalizer rewrites every known representation into one canonical form so
//! the tokenizers only ever reason about a single separator.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::config::DecoderConfig;

/// Canonical FNC1 separator: the ASCII GS control byte that GS1-128
/// actually transmits. Input that already carries the real byte passes
/// through unchanged.
pub const FNC1: char = '\u{1D}';

/// Textual stand-ins emitted by various scanner firmwares instead of the GS
/// byte: the separator's name with or without the escape backslash, the
/// tilde used by older keyboard wedges, and the visual placeholder glyph
/// some on-screen keyboards render for the control character.
static FNC1_STANDINS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\\x1d|x1d|~|\u{241D}").unwrap()
});

/// Canonicalizes raw scanner input before tokenization.
pub struct InputNormalizer {
    strip_aim_prefix: bool,
    extra_standins: Option<Regex>,
}

impl InputNormalizer {
    pub fn new() -> Self {
        Self::from_config(&DecoderConfig::default())
    }

    /// Build a normalizer honoring site-specific scanner quirks.
    pub fn from_config(config: &DecoderConfig) -> Self {
        let extra_standins = if config.separator_aliases.is_empty() {
            None
        } else {
            let alternatives = config
                .separator_aliases
                .iter()
                .map(|alias| regex::escape(alias))
                .collect::<Vec<_>>()
                .join("|");
            match Regex::new(&format!("(?i){}", alternatives)) {
                Ok(re) => Some(re),
                Err(e) => {
                    // A bad alias must not take the decoder down; scanning
                    // continues with the built-in stand-ins only.
                    warn!("InputNormalizer: ignoring separator aliases: {}", e);
                    None
                }
            }
        };
        Self {
            strip_aim_prefix: config.strip_aim_prefix,
            extra_standins,
        }
    }

    /// Rewrite `raw` into canonical form: no whitespace, no AIM symbology
    /// identifier, every FNC1 stand-in replaced by the GS byte.
    ///
    /// Canonicalization is idempotent; running it twice yields the same
    /// string. The validity pre-check relies on this.
    pub fn canonicalize(&self, raw: &str) -> String {
        // Scanners occasionally split output with spaces or a trailing
        // newline from the keyboard wedge.
        let mut s: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if self.strip_aim_prefix {
            s = strip_aim_prefixes(s);
        }

        let sep = FNC1.to_string();
        let mut s = FNC1_STANDINS.replace_all(&s, sep.as_str()).into_owned();
        if let Some(extra) = &self.extra_standins {
            s = extra.replace_all(&s, sep.as_str()).into_owned();
        }
        s
    }
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip leading AIM symbology identifiers: a `]` followed by exactly two
/// more characters (e.g. "]C1" for GS1-128, "]e0" for GS1 DataBar). These
/// identify the symbol type to the reader and are never part of GS1 data.
/// Stripping repeats so stacked prefixes from a misbehaving wedge cannot
/// survive a single pass.
fn strip_aim_prefixes(mut s: String) -> String {
    // ']' plus exactly two more characters, of any kind
    while s.starts_with(']') && s.chars().count() >= 3 {
        let offset = s
            .char_indices()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        debug!("InputNormalizer: stripped AIM symbology identifier '{}'", &s[..offset]);
        s = s.split_off(offset);
    }
    s
}
