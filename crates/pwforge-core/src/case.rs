// Case forms and case variant expansion for seed words

use crate::character::is_cased;

/// A surface form a seed word can be rewritten into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseForm {
    /// The word exactly as supplied: "mAx".
    Original,
    /// Every letter lowercased: "max".
    AllLower,
    /// First letter of each run of letters uppercased, the rest lowercased: "Max".
    Title,
    /// Every letter uppercased: "MAX".
    AllUpper,
}

/// All case forms, in the order variants are produced.
pub const CASE_FORMS: [CaseForm; 4] = [
    CaseForm::Original,
    CaseForm::AllLower,
    CaseForm::Title,
    CaseForm::AllUpper,
];

impl CaseForm {
    /// Rewrite `word` into this case form.
    ///
    /// Uses full Unicode case mapping, so the result may differ in length
    /// from the input (e.g. "ß" uppercases to "SS").
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Original => word.to_string(),
            Self::AllLower => word.to_lowercase(),
            Self::AllUpper => word.to_uppercase(),
            Self::Title => title_case(word),
        }
    }
}

/// Title-case a word.
///
/// A cased character is titlecased when the character before it is not
/// cased (or it starts the string), and lowercased otherwise. Digits and
/// punctuation therefore start a new run: "o'neil" -> "O'Neil",
/// "2020max" -> "2020Max", "max power" -> "Max Power".
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_cased = false;
    for c in word.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        prev_cased = is_cased(c);
    }
    out
}

/// Push the titlecase mapping of `c`.
///
/// The Latin digraphs have dedicated titlecase letters ("ǆ" -> "ǅ").
/// Otherwise a multi-character uppercase expansion keeps only its first
/// character uppercase ("ß" -> "Ss", "ﬁ" -> "Fi").
fn push_titlecase(out: &mut String, c: char) {
    match c {
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        '\u{0149}' => out.push_str("\u{02BC}N"),
        _ => {
            let mut upper = c.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
        }
    }
}

/// Expand a seed into its distinct case variants.
///
/// Returns the original, lowercase, title case and uppercase forms with
/// duplicates removed (first occurrence wins), so the result holds between
/// one and four strings. Digit-only seeds collapse to a single variant.
pub fn case_variants(seed: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::with_capacity(CASE_FORMS.len());
    for form in CASE_FORMS {
        let variant = form.apply(seed);
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    variants
}
