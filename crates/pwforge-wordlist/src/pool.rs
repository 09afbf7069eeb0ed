// Seeds and the variant pool built from them

use std::fmt;

use hashbrown::HashSet;
use pwforge_core::case::case_variants;
use tracing::{debug, trace};

use crate::WordlistError;
use crate::leet::{leet_variant_count, leet_variants};

// ---------------------------------------------------------------------------
// Seeds
// ---------------------------------------------------------------------------

/// Which personal fact a seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedKind {
    Name,
    Pet,
    Birth,
    Keyword,
}

impl SeedKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Pet => "pet",
            Self::Birth => "birth",
            Self::Keyword => "keyword",
        }
    }
}

/// A non-empty personal-fact string used as raw material for variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed {
    kind: SeedKind,
    value: String,
}

impl Seed {
    /// Create a seed, or `None` if `value` is empty.
    pub fn new(kind: SeedKind, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self { kind, value })
        }
    }

    pub fn kind(&self) -> SeedKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ---------------------------------------------------------------------------
// Variant pool
// ---------------------------------------------------------------------------

/// The deduplicated set of atomic variants across all seeds.
///
/// Stored as a sorted vector so that anything enumerating the pool (the
/// combiner in particular) sees the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantPool {
    variants: Vec<String>,
}

impl VariantPool {
    /// Build the pool for `seeds`.
    ///
    /// Each seed contributes its case variants and, when `leet` is set, the
    /// leetspeak variants of every case variant. The case variants remain
    /// in the pool alongside their leet forms.
    pub fn build(seeds: &[Seed], leet: bool) -> Self {
        let mut variants = HashSet::new();
        for seed in seeds {
            let cased = case_variants(seed.value());
            trace!(kind = seed.kind().as_str(), variants = cased.len(), "expanded seed");
            if leet {
                for variant in &cased {
                    variants.extend(leet_variants(variant));
                }
            }
            variants.extend(cased);
        }
        let pool = Self::from_variants(variants);
        debug!(seeds = seeds.len(), leet, pool = pool.len(), "built variant pool");
        pool
    }

    /// Build the pool, failing with [`WordlistError::PoolTooLarge`] as soon
    /// as it is known to exceed `limit` variants.
    ///
    /// Leet expansions are sized before they are materialized, so a single
    /// seed that would expand past the limit is rejected without allocating
    /// its variants.
    pub fn build_guarded(
        seeds: &[Seed],
        leet: bool,
        limit: Option<usize>,
    ) -> Result<Self, WordlistError> {
        let Some(limit) = limit else {
            return Ok(Self::build(seeds, leet));
        };

        if leet {
            for seed in seeds {
                for variant in case_variants(seed.value()) {
                    let size = leet_variant_count(&variant);
                    if size > limit {
                        return Err(WordlistError::PoolTooLarge { size, limit });
                    }
                }
            }
        }

        let pool = Self::build(seeds, leet);
        if pool.len() > limit {
            return Err(WordlistError::PoolTooLarge {
                size: pool.len(),
                limit,
            });
        }
        Ok(pool)
    }

    /// Build a pool directly from atomic variants (deduplicated and sorted).
    pub fn from_variants<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut variants: Vec<String> = variants.into_iter().map(Into::into).collect();
        variants.sort_unstable();
        variants.dedup();
        Self { variants }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.variants
            .binary_search_by(|v| v.as_str().cmp(variant))
            .is_ok()
    }

    /// The variants in ascending order.
    pub fn as_slice(&self) -> &[String] {
        &self.variants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.variants.iter()
    }
}

impl<'a> IntoIterator for &'a VariantPool {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(value: &str) -> Seed {
        Seed::new(SeedKind::Keyword, value).unwrap()
    }

    // -- Seed tests --

    #[test]
    fn empty_seed_is_rejected() {
        assert!(Seed::new(SeedKind::Name, "").is_none());
    }

    #[test]
    fn seed_accessors() {
        let s = Seed::new(SeedKind::Pet, "Rex").unwrap();
        assert_eq!(s.kind(), SeedKind::Pet);
        assert_eq!(s.value(), "Rex");
        assert_eq!(s.to_string(), "Rex");
        assert_eq!(s.kind().as_str(), "pet");
    }

    // -- build tests --

    #[test]
    fn build_without_leet_is_case_variants() {
        let pool = VariantPool::build(&[seed("Max")], false);
        assert_eq!(pool.as_slice(), &["MAX", "Max", "max"]);
    }

    #[test]
    fn build_unions_across_seeds() {
        let pool = VariantPool::build(&[seed("Max"), seed("1990")], false);
        assert_eq!(pool.len(), 4);
        assert!(pool.contains("1990"));
        assert!(pool.contains("max"));
    }

    #[test]
    fn build_is_idempotent_on_repeated_seeds() {
        let once = VariantPool::build(&[seed("Max")], true);
        let twice = VariantPool::build(&[seed("Max"), seed("max"), seed("Max")], true);
        assert_eq!(once, twice);
    }

    #[test]
    fn build_with_leet_keeps_case_variants() {
        let pool = VariantPool::build(&[seed("Max")], true);
        // Case variants: Max, max, MAX. Leet forms: Max/M@x/M4x, max/m@x/m4x, MaX/M@X/M4X.
        for v in ["Max", "max", "MAX", "M@x", "m4x", "MaX", "M@X", "M4X"] {
            assert!(pool.contains(v), "missing {v}");
        }
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn build_never_contains_empty_string() {
        let pool = VariantPool::build(&[seed("a"), seed("!")], true);
        assert!(!pool.contains(""));
    }

    #[test]
    fn build_from_no_seeds_is_empty() {
        assert!(VariantPool::build(&[], true).is_empty());
    }

    #[test]
    fn order_is_sorted_regardless_of_seed_order() {
        let a = VariantPool::build(&[seed("rex"), seed("Max")], false);
        let b = VariantPool::build(&[seed("Max"), seed("rex")], false);
        assert_eq!(a, b);
        assert!(a.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    // -- build_guarded tests --

    #[test]
    fn guard_passes_small_pool() {
        let pool = VariantPool::build_guarded(&[seed("Max")], true, Some(10)).unwrap();
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn guard_rejects_large_pool() {
        let err = VariantPool::build_guarded(&[seed("Max")], true, Some(9)).unwrap_err();
        assert!(matches!(err, WordlistError::PoolTooLarge { size: 10, limit: 9 }));
    }

    #[test]
    fn guard_rejects_single_expansion_before_materializing() {
        let err = VariantPool::build_guarded(&[seed("Sebastian")], true, Some(100)).unwrap_err();
        assert!(matches!(err, WordlistError::PoolTooLarge { size: 972, limit: 100 }));
    }

    #[test]
    fn no_guard_means_unchecked() {
        let pool = VariantPool::build_guarded(&[seed("Max")], true, None).unwrap();
        assert_eq!(pool.len(), 10);
    }

    // -- from_variants tests --

    #[test]
    fn from_variants_dedups_and_sorts() {
        let pool = VariantPool::from_variants(["b", "a", "b", "c"]);
        assert_eq!(pool.as_slice(), &["a", "b", "c"]);
    }
}
