//! Decoder configuration and validation.
//!
//! Provides the settings shared by the text and binary decoders: how fixed-width
//! strings are decoded, how cut chains end, and whether a cut pool may be grouped
//! without an authoritative chain-head index.

use crate::constants::cuts::DEFAULT_TERMINATOR;
use crate::{Error, Result};
use encoding_rs::{UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Character encoding of fixed-width string fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    /// ISO-8859-1: every byte is the code point of the same value
    #[default]
    Latin1,
    /// Windows-1252, which maps 0x80-0x9F to printable glyphs
    Windows1252,
    /// UTF-8, for regenerated files
    Utf8,
}

impl TextEncoding {
    /// Decode `bytes`, reporting whether any sequence had to be replaced
    ///
    /// Latin-1 and Windows-1252 decoding never fails.
    pub fn decode<'b>(&self, bytes: &'b [u8]) -> (Cow<'b, str>, bool) {
        match self {
            TextEncoding::Latin1 => {
                if bytes.is_ascii() {
                    // ASCII is valid UTF-8 as is
                    (String::from_utf8_lossy(bytes), false)
                } else {
                    (Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()), false)
                }
            }
            TextEncoding::Windows1252 => WINDOWS_1252.decode_without_bom_handling(bytes),
            TextEncoding::Utf8 => UTF_8.decode_without_bom_handling(bytes),
        }
    }
}

/// What to do when a cut pool is decoded without a chain-head index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeadPolicy {
    /// Treat every record that no other record points at as a chain head
    #[default]
    FallbackToUnreferenced,
    /// Refuse to group chains without an authoritative index
    RequireIndex,
}

/// Configuration for all decoders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Encoding of fixed-width string fields
    pub text_encoding: TextEncoding,

    /// Strip trailing spaces and NULs from fixed-width strings
    pub trim_padding: bool,

    /// Next-index value that terminates a cut chain
    pub terminator_sentinel: i32,

    /// Chain-head policy when no index is supplied
    pub head_policy: HeadPolicy,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            text_encoding: TextEncoding::Latin1,
            trim_padding: true,
            terminator_sentinel: DEFAULT_TERMINATOR,
            head_policy: HeadPolicy::FallbackToUnreferenced,
        }
    }
}

impl DecoderConfig {
    /// Use a different string encoding
    pub fn with_text_encoding(mut self, encoding: TextEncoding) -> Self {
        self.text_encoding = encoding;
        self
    }

    /// Keep string padding instead of trimming it
    pub fn without_padding_trim(mut self) -> Self {
        self.trim_padding = false;
        self
    }

    /// Use a different chain terminator
    pub fn with_terminator(mut self, terminator: i32) -> Self {
        self.terminator_sentinel = terminator;
        self
    }

    /// Require an authoritative chain-head index for cut pools
    pub fn requiring_head_index(mut self) -> Self {
        self.head_policy = HeadPolicy::RequireIndex;
        self
    }

    /// Validate configuration values
    ///
    /// The terminator must not be a positive record position, otherwise it would
    /// shadow a real record.
    pub fn validate(&self) -> Result<()> {
        if self.terminator_sentinel > 0 {
            return Err(Error::configuration(format!(
                "terminator sentinel {} would shadow record {}; it must be 0 or negative",
                self.terminator_sentinel, self.terminator_sentinel
            )));
        }

        debug!("Decoder configuration validated: {:?}", self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DecoderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.terminator_sentinel, 0);
        assert_eq!(config.head_policy, HeadPolicy::FallbackToUnreferenced);
        assert!(config.trim_padding);
    }

    #[test]
    fn test_builder_methods() {
        let config = DecoderConfig::default()
            .with_text_encoding(TextEncoding::Utf8)
            .without_padding_trim()
            .with_terminator(-1)
            .requiring_head_index();

        assert_eq!(config.text_encoding, TextEncoding::Utf8);
        assert!(!config.trim_padding);
        assert_eq!(config.terminator_sentinel, -1);
        assert_eq!(config.head_policy, HeadPolicy::RequireIndex);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_positive_terminator_is_rejected() {
        let config = DecoderConfig::default().with_terminator(3);
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_latin1_decodes_accents() {
        let (text, had_errors) = TextEncoding::Latin1.decode(b"S\xc3O SIM\xc3O");
        assert!(!had_errors);
        assert_eq!(text, "SÃO SIMÃO");
    }

    #[test]
    fn test_latin1_maps_control_range_to_code_points() {
        let (latin1, _) = TextEncoding::Latin1.decode(b"\x80\x9f");
        assert_eq!(latin1, "\u{80}\u{9f}");

        let (cp1252, had_errors) = TextEncoding::Windows1252.decode(b"\x80");
        assert!(!had_errors);
        assert_eq!(cp1252, "€");
    }

    #[test]
    fn test_utf8_reports_invalid_sequences() {
        let (text, had_errors) = TextEncoding::Utf8.decode(b"ok\xff");
        assert!(had_errors);
        assert_eq!(text, "ok\u{fffd}");
    }
}
