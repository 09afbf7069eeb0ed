// WordlistGenerator: runs the whole expansion pipeline for one batch of seeds.
//
// Pipeline:
//   seeds -> case (+ leet) variants -> pool -> combine -> years -> cap
//
// The pool guard bounds the candidate set. Year augmentation is streamed
// straight into the capped builder, so the year multiplier never has to be
// held in memory at once. Nothing is carried over between runs.

use tracing::{debug, info};

use crate::WordlistError;
use crate::cap::{DEFAULT_MAX_SIZE, Wordlist, WordlistBuilder};
use crate::combiner::{DEFAULT_MAX_COMBO_LEN, DEFAULT_SEPARATORS, combine};
use crate::pool::{Seed, VariantPool};
use crate::years::{YearRange, with_years};

/// Default limit on the number of atomic variants in the pool.
///
/// Candidate count grows with the cube of the pool size, so 64 variants
/// already mean roughly 1.3 million candidates with the default separators.
pub const DEFAULT_MAX_POOL_SIZE: usize = 64;

/// Options controlling wordlist generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Add leetspeak variants of every case variant.
    pub leet: bool,
    /// Separators placed between combined variants.
    pub separators: Vec<String>,
    /// Longest run of variants in one candidate.
    pub max_combo_len: usize,
    /// Years to prefix and suffix onto candidates; `None` disables
    /// augmentation.
    pub years: Option<YearRange>,
    /// Maximum number of words in the result; `None` is unlimited.
    pub max_size: Option<usize>,
    /// Maximum number of pool variants; `None` disables the check.
    pub max_pool_size: Option<usize>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            leet: false,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            max_combo_len: DEFAULT_MAX_COMBO_LEN,
            years: None,
            max_size: Some(DEFAULT_MAX_SIZE),
            max_pool_size: Some(DEFAULT_MAX_POOL_SIZE),
        }
    }
}

/// Sizes observed at each pipeline stage of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordlistStats {
    pub seeds: usize,
    pub pool: usize,
    pub candidates: usize,
    /// Strings offered to the cap after year augmentation, duplicates
    /// included.
    pub augmented: usize,
    pub output: usize,
    /// Whether the cap dropped any distinct word.
    pub truncated: bool,
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub wordlist: Wordlist,
    pub stats: WordlistStats,
}

/// Generates targeted wordlists from personal-fact seeds.
#[derive(Debug, Clone, Default)]
pub struct WordlistGenerator {
    options: GeneratorOptions,
}

impl WordlistGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    // -- Option setters ------------------------------------------------------

    pub fn set_leet(&mut self, leet: bool) {
        self.options.leet = leet;
    }

    pub fn set_separators<I, S>(&mut self, separators: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.separators = separators.into_iter().map(Into::into).collect();
    }

    pub fn set_max_combo_len(&mut self, len: usize) {
        self.options.max_combo_len = len;
    }

    pub fn set_years(&mut self, years: Option<YearRange>) {
        self.options.years = years;
    }

    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.options.max_size = max_size;
    }

    pub fn set_max_pool_size(&mut self, max_pool_size: Option<usize>) {
        self.options.max_pool_size = max_pool_size;
    }

    // -- Generation ------------------------------------------------------------

    /// Run the pipeline for `seeds`.
    ///
    /// No seeds produce an empty wordlist. Fails only when the variant pool
    /// exceeds `max_pool_size`.
    pub fn generate(&self, seeds: &[Seed]) -> Result<Generated, WordlistError> {
        let opts = &self.options;
        let mut stats = WordlistStats {
            seeds: seeds.len(),
            ..WordlistStats::default()
        };

        if seeds.is_empty() {
            debug!("no seeds, nothing to generate");
            return Ok(Generated {
                wordlist: Wordlist::default(),
                stats,
            });
        }

        let pool = VariantPool::build_guarded(seeds, opts.leet, opts.max_pool_size)?;
        stats.pool = pool.len();

        let candidates = combine(&pool, &opts.separators, opts.max_combo_len);
        stats.candidates = candidates.len();

        let mut builder = WordlistBuilder::new(opts.max_size);
        match &opts.years {
            Some(range) => builder.extend(with_years(candidates, range)),
            None => builder.extend(candidates),
        }
        stats.augmented = builder.offered();
        stats.truncated = builder.truncated();

        let wordlist = builder.finish();
        stats.output = wordlist.len();

        info!(
            seeds = stats.seeds,
            pool = stats.pool,
            candidates = stats.candidates,
            years = opts.years.map_or(0, |range| range.count()),
            augmented = stats.augmented,
            output = stats.output,
            truncated = stats.truncated,
            "generated wordlist"
        );
        Ok(Generated { wordlist, stats })
    }
}
