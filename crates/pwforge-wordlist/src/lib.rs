//! Targeted wordlist generation from personal-fact seeds.
//!
//! A handful of seeds (a name, a pet, a birth date, a keyword) is expanded
//! into every case and optionally leetspeak variant, combined into ordered
//! runs of up to three variants with each separator, optionally wrapped in
//! years, and finally capped to a deterministic, sorted wordlist.
//!
//! # Architecture
//!
//! - [`leet`] -- Leetspeak substitution table and Cartesian expansion
//! - [`pool`] -- Seeds and the deduplicated variant pool
//! - [`combiner`] -- Permutation-with-separator candidate generation
//! - [`years`] -- Year range parsing and year augmentation
//! - [`cap`] -- Bounded, deterministic capping and the final [`Wordlist`]
//! - [`generator`] -- [`WordlistGenerator`], which runs the whole pipeline

pub mod cap;
pub mod combiner;
pub mod generator;
pub mod leet;
pub mod pool;
pub mod years;

pub use cap::{Wordlist, WordlistBuilder};
pub use generator::{Generated, GeneratorOptions, WordlistGenerator, WordlistStats};
pub use pool::{Seed, SeedKind, VariantPool};
pub use years::{YearRange, YearRangeError};

/// Error type for wordlist generation and output.
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("variant pool too large: {size} variants exceeds the limit of {limit}")]
    PoolTooLarge { size: usize, limit: usize },
    #[error("failed to write wordlist to {}: {source}", path.display())]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
