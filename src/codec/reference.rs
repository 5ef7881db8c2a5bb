//! Reference chart of the symbol table
//!
//! Letters (including the accented ones) sorted by character, digits 0-9,
//! then every other symbol in table order. The word separator is left out.

use super::table::SymbolTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolGroup {
    Letters,
    Numbers,
    Punctuation,
}

impl SymbolGroup {
    pub const ALL: [SymbolGroup; 3] = [
        SymbolGroup::Letters,
        SymbolGroup::Numbers,
        SymbolGroup::Punctuation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SymbolGroup::Letters => "Letters",
            SymbolGroup::Numbers => "Numbers",
            SymbolGroup::Punctuation => "Punctuation",
        }
    }

    fn of(ch: char) -> Option<Self> {
        if ch.is_alphabetic() {
            Some(SymbolGroup::Letters)
        } else if ch.is_numeric() {
            Some(SymbolGroup::Numbers)
        } else if ch == ' ' {
            None
        } else {
            Some(SymbolGroup::Punctuation)
        }
    }

    /// Characters of this group with their patterns
    pub fn entries(&self) -> Vec<(char, &'static str)> {
        let mut entries: Vec<(char, &'static str)> = SymbolTable::characters()
            .filter(|&ch| Self::of(ch) == Some(*self))
            .filter_map(|ch| SymbolTable::encode(ch).map(|pattern| (ch, pattern)))
            .collect();
        if *self != SymbolGroup::Punctuation {
            entries.sort_by_key(|(ch, _)| *ch);
        }
        entries
    }
}
