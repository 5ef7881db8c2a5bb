//! The Morse symbol table
//!
//! International Morse for letters, digits and punctuation, plus a handful of
//! extended symbols (Æ Ø Å ß Ç Ñ § ¿ ¡). Space maps to the word separator.
//! Every pattern is distinct, so the table can be read in both directions.

/// Pattern used between words in encoded text
pub const WORD_SEPARATOR: &str = "/";

const SYMBOLS: [(char, &str); 64] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    (' ', WORD_SEPARATOR),
    ('Æ', ".-.-"),
    ('Ø', "---."),
    ('Å', ".--.-"),
    ('ß', "...--.."),
    ('Ç', "-.-.."),
    ('Ñ', "--.--"),
    ('§', "-.-.-"),
    ('¿', "..-.-"),
    ('¡', "--...-"),
];

/// Morse symbol table lookups
pub struct SymbolTable;

impl SymbolTable {
    /// Pattern for a character. Lookup is exact: callers uppercase first.
    /// Returns None for unsupported characters.
    pub fn encode(ch: char) -> Option<&'static str> {
        SYMBOLS
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, pattern)| *pattern)
    }

    /// Character for a pattern, None if no character uses it
    pub fn decode(pattern: &str) -> Option<char> {
        SYMBOLS
            .iter()
            .find(|(_, p)| *p == pattern)
            .map(|(c, _)| *c)
    }

    /// Every character the table knows, in table order
    pub fn characters() -> impl Iterator<Item = char> {
        SYMBOLS.iter().map(|(c, _)| *c)
    }
}
