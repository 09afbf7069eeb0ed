// Character classification for password scoring and case handling

// ---------------------------------------------------------------------------
// Symbol set
// ---------------------------------------------------------------------------

/// Punctuation characters that count toward the symbol class.
///
/// The class is charged as 32 characters wide even though the set itself
/// lists 29; the width is a fixed constant of the entropy model.
pub const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', '|',
    ';', ':', '\'', '"', ',', '.', '<', '>', '/', '?',
];

/// Width charged for the lowercase class.
pub const LOWERCASE_WIDTH: u32 = 26;

/// Width charged for the uppercase class.
pub const UPPERCASE_WIDTH: u32 = 26;

/// Width charged for the digit class.
pub const DIGIT_WIDTH: u32 = 10;

/// Width charged for the symbol class.
pub const SYMBOL_WIDTH: u32 = 32;

// ---------------------------------------------------------------------------
// Per-character classification
// ---------------------------------------------------------------------------

/// Character class used by the entropy model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
    /// Anything the model does not recognize (whitespace, other scripts'
    /// punctuation, emoji, ...). Contributes nothing to the charset.
    Other,
}

/// Classify a single character.
pub fn char_class(c: char) -> CharClass {
    if c.is_lowercase() {
        CharClass::Lowercase
    } else if c.is_uppercase() {
        CharClass::Uppercase
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if is_symbol(c) {
        CharClass::Symbol
    } else {
        CharClass::Other
    }
}

/// Check whether a character belongs to the fixed symbol set.
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// Check whether a character has case: an uppercase, lowercase or
/// titlecase letter.
pub fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase_digraph(c)
}

fn is_titlecase_digraph(c: char) -> bool {
    matches!(c, '\u{01C5}' | '\u{01C8}' | '\u{01CB}' | '\u{01F2}')
}

// ---------------------------------------------------------------------------
// Whole-string classification
// ---------------------------------------------------------------------------

/// The set of character classes present in a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharClasses {
    /// Scan a string and record which classes occur in it.
    pub fn of(text: &str) -> Self {
        let mut classes = Self::default();
        for c in text.chars() {
            match char_class(c) {
                CharClass::Lowercase => classes.lowercase = true,
                CharClass::Uppercase => classes.uppercase = true,
                CharClass::Digit => classes.digit = true,
                CharClass::Symbol => classes.symbol = true,
                CharClass::Other => {}
            }
        }
        classes
    }

    /// Size of the alphabet an attacker would have to search, given the
    /// classes present. Zero when no recognized class occurs.
    pub fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.lowercase {
            size += LOWERCASE_WIDTH;
        }
        if self.uppercase {
            size += UPPERCASE_WIDTH;
        }
        if self.digit {
            size += DIGIT_WIDTH;
        }
        if self.symbol {
            size += SYMBOL_WIDTH;
        }
        size
    }
}
