// Candidate combination: ordered picks of distinct pool variants joined by
// each separator

use hashbrown::HashSet;
use itertools::Itertools;
use tracing::debug;

use crate::pool::VariantPool;

/// Separators placed between combined variants by default.
pub const DEFAULT_SEPARATORS: [&str; 5] = ["", "_", "-", ".", "@"];

/// Longest run of variants combined into one candidate by default.
pub const DEFAULT_MAX_COMBO_LEN: usize = 3;

/// Cap on the number of candidate slots reserved up front.
const MAX_PREALLOCATION: usize = 1 << 20;

/// Combine pool variants into candidates.
///
/// For every length `L` in `1..=min(max_len, pool.len())`, every ordered
/// selection of `L` distinct pool positions is joined with every separator.
/// A single variant has nothing to separate, so length-1 candidates are the
/// pool itself (provided at least one separator is configured).
///
/// The pool's sorted order makes enumeration reproducible; the result is a
/// set, so the order of insertion does not leak out.
pub fn combine(pool: &VariantPool, separators: &[String], max_len: usize) -> HashSet<String> {
    let longest = max_len.min(pool.len());
    let capacity = candidate_bound(pool.len(), separators.len(), longest).min(MAX_PREALLOCATION);
    let mut candidates = HashSet::with_capacity(capacity);

    if separators.is_empty() {
        return candidates;
    }

    for len in 1..=longest {
        if len == 1 {
            candidates.extend(pool.iter().cloned());
            continue;
        }
        for pick in pool.iter().permutations(len) {
            for sep in separators {
                candidates.insert(pick.iter().join(sep));
            }
        }
    }

    debug!(
        pool = pool.len(),
        separators = separators.len(),
        max_len = longest,
        candidates = candidates.len(),
        "combined candidates"
    );
    candidates
}

/// Number of ordered selections of `len` distinct items out of `n`.
pub fn permutation_count(n: usize, len: usize) -> usize {
    if len > n {
        return 0;
    }
    (n - len + 1..=n).fold(1usize, usize::saturating_mul)
}

/// Upper bound on the number of candidates [`combine`] produces for a pool
/// of `pool_len` variants, `separators` separators and runs up to `max_len`.
///
/// Exact when no two joins happen to spell the same string.
pub fn candidate_bound(pool_len: usize, separators: usize, max_len: usize) -> usize {
    if separators == 0 {
        return 0;
    }
    let longest = max_len.min(pool_len);
    (1..=longest)
        .map(|len| {
            let picks = permutation_count(pool_len, len);
            if len == 1 {
                picks
            } else {
                picks.saturating_mul(separators)
            }
        })
        .fold(0usize, usize::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seps(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn default_seps() -> Vec<String> {
        seps(&DEFAULT_SEPARATORS)
    }

    // -- permutation_count tests --

    #[test]
    fn permutation_counts() {
        assert_eq!(permutation_count(5, 0), 1);
        assert_eq!(permutation_count(5, 1), 5);
        assert_eq!(permutation_count(5, 2), 20);
        assert_eq!(permutation_count(5, 3), 60);
        assert_eq!(permutation_count(2, 3), 0);
    }

    // -- combine tests --

    #[test]
    fn empty_pool_yields_nothing() {
        let pool = VariantPool::default();
        assert!(combine(&pool, &default_seps(), 3).is_empty());
    }

    #[test]
    fn no_separators_yields_nothing() {
        let pool = VariantPool::from_variants(["a", "b"]);
        assert!(combine(&pool, &[], 3).is_empty());
    }

    #[test]
    fn single_variant_pool() {
        let pool = VariantPool::from_variants(["rex"]);
        let out = combine(&pool, &default_seps(), 3);
        assert_eq!(out.len(), 1);
        assert!(out.contains("rex"));
    }

    #[test]
    fn two_variant_pool_covers_both_orders() {
        let pool = VariantPool::from_variants(["dog", "2020"]);
        let out = combine(&pool, &default_seps(), 3);
        for expected in ["dog", "2020", "dog2020", "2020dog", "dog_2020", "2020.dog", "dog@2020"] {
            assert!(out.contains(expected), "missing {expected}");
        }
        // 2 singles + 2 orders * 5 separators.
        assert_eq!(out.len(), 12);
    }

    #[test]
    fn no_repeats_within_a_candidate() {
        let pool = VariantPool::from_variants(["a", "b"]);
        let out = combine(&pool, &seps(&["_"]), 3);
        assert!(!out.contains("a_a"));
        assert!(!out.contains("a_b_a"));
    }

    #[test]
    fn size_matches_bound_without_collisions() {
        // Distinct letters per variant: no join can spell another join.
        let pool = VariantPool::from_variants(["x", "yy", "zzz", "w"]);
        let separators = default_seps();
        let out = combine(&pool, &separators, 3);
        let k = 4;
        let s = separators.len();
        let expected = k + s * (k * (k - 1) + k * (k - 1) * (k - 2));
        assert_eq!(out.len(), expected);
        assert_eq!(candidate_bound(k, s, 3), expected);
    }

    #[test]
    fn max_len_limits_run_length() {
        let pool = VariantPool::from_variants(["a", "b", "c"]);
        let out = combine(&pool, &seps(&["-"]), 2);
        assert!(out.contains("a-b"));
        assert!(!out.iter().any(|c| c.matches('-').count() > 1));
        assert_eq!(out.len(), 3 + 6);
    }

    #[test]
    fn candidates_decompose_into_pool_permutations() {
        let pool = VariantPool::from_variants(["ab", "cd", "ef", "gh"]);
        let separators = seps(&["_", "-", "."]);
        let out = combine(&pool, &separators, 3);
        for candidate in &out {
            let sep = separators.iter().find(|s| candidate.contains(s.as_str()));
            let parts: Vec<&str> = match sep {
                Some(sep) => candidate.split(sep.as_str()).collect(),
                None => vec![candidate.as_str()],
            };
            assert!((1..=3).contains(&parts.len()), "{candidate}");
            assert!(parts.iter().all(|p| pool.contains(p)), "{candidate}");
            assert!(parts.iter().all_unique(), "{candidate}");
        }
    }

    #[test]
    fn bound_with_small_pools() {
        assert_eq!(candidate_bound(0, 5, 3), 0);
        assert_eq!(candidate_bound(1, 5, 3), 1);
        assert_eq!(candidate_bound(2, 5, 3), 2 + 5 * 2);
        assert_eq!(candidate_bound(3, 0, 3), 0);
    }
}
