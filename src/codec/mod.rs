//! Morse codec
//!
//! Symbol table lookups and whole-string translation in both directions.

pub mod morse;
pub mod reference;
pub mod table;

pub use morse::{decode, decode_glyphs, encode, encode_tokens, Glyph, MorseToken, UNKNOWN_MARKER};
pub use reference::SymbolGroup;
pub use table::{SymbolTable, WORD_SEPARATOR};
