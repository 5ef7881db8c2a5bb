//! Text ⇄ Morse translation
//!
//! Both directions are total: anything the table does not know becomes an
//! `Unknown` token, rendered as [`UNKNOWN_MARKER`] in string output.

use std::fmt;

use crate::codec::table::{SymbolTable, WORD_SEPARATOR};

/// Marker written in place of anything that cannot be translated
pub const UNKNOWN_MARKER: char = '\u{FFFD}';

/// Separator between words in encoded text, spaces included
const WORD_GAP: &str = " / ";

/// One encoded character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorseToken {
    /// A pattern from the symbol table (or the word separator)
    Pattern(&'static str),
    /// A character with no Morse pattern
    Unknown(char),
}

impl fmt::Display for MorseToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorseToken::Pattern(p) => f.write_str(p),
            MorseToken::Unknown(_) => write!(f, "{UNKNOWN_MARKER}"),
        }
    }
}

/// One decoded Morse symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph {
    Char(char),
    /// A token that matches no pattern, kept verbatim
    Unknown(String),
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Char(c) => write!(f, "{c}"),
            Glyph::Unknown(_) => write!(f, "{UNKNOWN_MARKER}"),
        }
    }
}

/// Encode text into tokens, one per character of the uppercased text.
///
/// Newlines become the word separator.
pub fn encode_tokens(text: &str) -> Vec<MorseToken> {
    text.to_uppercase()
        .chars()
        .map(|ch| match SymbolTable::encode(ch) {
            Some(pattern) => MorseToken::Pattern(pattern),
            None if ch == '\n' => MorseToken::Pattern(WORD_SEPARATOR),
            None => MorseToken::Unknown(ch),
        })
        .collect()
}

/// Encode text to a Morse string with patterns separated by single spaces
pub fn encode(text: &str) -> String {
    encode_tokens(text)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode a Morse string into words of glyphs.
///
/// Words are split on `" / "`, symbols within a word on any whitespace.
pub fn decode_glyphs(morse: &str) -> Vec<Vec<Glyph>> {
    morse
        .split(WORD_GAP)
        .map(|word| {
            word.split_whitespace()
                .map(|symbol| match SymbolTable::decode(symbol) {
                    Some(ch) => Glyph::Char(ch),
                    None => Glyph::Unknown(symbol.to_string()),
                })
                .collect()
        })
        .collect()
}

/// Decode a Morse string to text, words joined by a single space
pub fn decode(morse: &str) -> String {
    decode_glyphs(morse)
        .iter()
        .map(|word| word.iter().map(ToString::to_string).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sos() {
        assert_eq!(encode("SOS"), "... --- ...");
    }

    #[test]
    fn test_encode_mixed_case_and_digits() {
        assert_eq!(encode("Hello 123"), ".... . .-.. .-.. --- / .---- ..--- ...--");
    }

    #[test]
    fn test_encode_newline_is_word_separator() {
        assert_eq!(encode("A\nB"), ".- / -...");
    }

    #[test]
    fn test_encode_unknown_character() {
        assert_eq!(encode("π"), "\u{FFFD}");
        assert_eq!(encode("A#B"), ".- \u{FFFD} -...");
        assert_eq!(encode_tokens("#"), vec![MorseToken::Unknown('#')]);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(""), "");
        assert!(encode_tokens("").is_empty());
    }

    #[test]
    fn test_encode_sharp_s_uppercases_to_ss() {
        assert_eq!(encode("ß"), "... ...");
    }

    #[test]
    fn test_decode_sos() {
        assert_eq!(decode("... --- ..."), "SOS");
    }

    #[test]
    fn test_decode_words() {
        assert_eq!(decode(".... . .-.. .-.. --- / .---- ..--- ...--"), "HELLO 123");
    }

    #[test]
    fn test_decode_unknown_symbol() {
        assert_eq!(decode("........"), "\u{FFFD}");
        assert_eq!(decode("... ........ ..."), "S\u{FFFD}S");
        assert_eq!(
            decode_glyphs("........"),
            vec![vec![Glyph::Unknown("........".to_string())]]
        );
    }

    #[test]
    fn test_decode_tolerates_extra_whitespace() {
        assert_eq!(decode("  ...   ---\t... "), "SOS");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_roundtrip_full_alphabet() {
        let text: String = SymbolTable::characters().filter(|c| *c != ' ' && *c != 'ß').collect();
        assert_eq!(decode(&encode(&text)), text.to_uppercase());
    }

    #[test]
    fn test_roundtrip_sentence() {
        let text = "The quick brown fox, 42 times!";
        assert_eq!(decode(&encode(text)), "THE QUICK BROWN FOX, 42 TIMES!");
    }
}
