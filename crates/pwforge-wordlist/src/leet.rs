// Leetspeak expansion: every combination of per-character substitutions

use hashbrown::HashSet;

/// Substitution table. Lookup is case-insensitive; the identity alternative
/// is always the lowercase letter.
const LEET_TABLE: &[(char, &[char])] = &[
    ('a', &['a', '@', '4']),
    ('e', &['e', '3']),
    ('i', &['i', '1', '!']),
    ('o', &['o', '0']),
    ('s', &['s', '$', '5']),
    ('t', &['t', '7']),
];

/// Alternatives for `c`, or `None` if the character is not substitutable.
pub fn alternatives(c: char) -> Option<&'static [char]> {
    let key = c.to_ascii_lowercase();
    LEET_TABLE
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

/// Number of strings [`leet_variants`] would produce for `word`.
///
/// This is the product of each character's alternative count, saturating
/// at `usize::MAX`. Cheap to compute, so callers can refuse an expansion
/// before paying for it.
pub fn leet_variant_count(word: &str) -> usize {
    word.chars()
        .map(|c| alternatives(c).map_or(1, <[char]>::len))
        .fold(1usize, usize::saturating_mul)
}

/// Expand `word` into all of its leetspeak variants.
///
/// Builds the Cartesian product position by position: starting from the
/// single empty prefix, every prefix is extended by every alternative of
/// the next character. Unmapped characters extend every prefix by
/// themselves. The empty word yields `{""}`.
pub fn leet_variants(word: &str) -> HashSet<String> {
    let mut prefixes = vec![String::with_capacity(word.len())];

    for c in word.chars() {
        match alternatives(c) {
            None => {
                for prefix in &mut prefixes {
                    prefix.push(c);
                }
            }
            Some(choices) => {
                let mut extended = Vec::with_capacity(prefixes.len() * choices.len());
                for prefix in &prefixes {
                    for &choice in choices {
                        let mut next = String::with_capacity(word.len());
                        next.push_str(prefix);
                        next.push(choice);
                        extended.push(next);
                    }
                }
                prefixes = extended;
            }
        }
    }

    prefixes.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // -- alternatives tests --

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(alternatives('a'), Some(&['a', '@', '4'][..]));
        assert_eq!(alternatives('A'), alternatives('a'));
        assert_eq!(alternatives('T'), Some(&['t', '7'][..]));
    }

    #[test]
    fn unmapped_characters() {
        assert_eq!(alternatives('x'), None);
        assert_eq!(alternatives('4'), None);
        assert_eq!(alternatives('\u{00E4}'), None); // ä
    }

    // -- leet_variants tests --

    #[test]
    fn empty_word() {
        assert_eq!(leet_variants(""), set(&[""]));
    }

    #[test]
    fn no_substitutable_characters() {
        assert_eq!(leet_variants("xyz"), set(&["xyz"]));
    }

    #[test]
    fn single_position() {
        assert_eq!(leet_variants("max"), set(&["max", "m@x", "m4x"]));
    }

    #[test]
    fn uppercase_letter_is_replaced_by_table_alternatives() {
        assert_eq!(leet_variants("MAX"), set(&["MaX", "M@X", "M4X"]));
    }

    #[test]
    fn two_positions() {
        assert_eq!(leet_variants("to"), set(&["to", "t0", "7o", "70"]));
    }

    #[rstest]
    #[case("", 1)]
    #[case("buddy", 1)]
    #[case("rex", 2)]
    #[case("max", 3)]
    #[case("test", 24)] // t:2 e:2 s:3 t:2
    #[case("password", 54)] // a:3 s:3 s:3 o:2
    #[case("Sebastian", 972)]
    fn size_is_product_of_alternatives(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(leet_variant_count(word), expected);
        assert_eq!(leet_variants(word).len(), expected);
    }

    #[test]
    fn every_variant_has_same_char_length() {
        for v in leet_variants("password") {
            assert_eq!(v.chars().count(), 8, "{v}");
        }
    }

    #[test]
    fn count_saturates() {
        let long = "a".repeat(200);
        assert_eq!(leet_variant_count(&long), usize::MAX);
    }
}
