// pwforge-cli: shared utilities for the command-line tool.

use std::fmt::Display;
use std::process;

use pwforge_core::CrackEstimator;
use pwforge_wordlist::{Seed, SeedKind, YearRange};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PWFORGE_LOG";

/// Install the stderr log subscriber.
///
/// `PWFORGE_LOG` wins when set; otherwise `verbosity` (the number of `-v`
/// flags) picks the level: warn, info, debug, trace.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Collect the non-empty seeds, in name, pet, birth, keyword order.
pub fn collect_seeds(
    name: Option<&str>,
    pet: Option<&str>,
    birth: Option<&str>,
    keyword: Option<&str>,
) -> Vec<Seed> {
    [
        (SeedKind::Name, name),
        (SeedKind::Pet, pet),
        (SeedKind::Birth, birth),
        (SeedKind::Keyword, keyword),
    ]
    .into_iter()
    .filter_map(|(kind, value)| value.and_then(|v| Seed::new(kind, v)))
    .collect()
}

/// Render seeds as `[a, b, c]` for the summary line.
pub fn seed_summary(seeds: &[Seed]) -> String {
    let values: Vec<&str> = seeds.iter().map(Seed::value).collect();
    format!("[{}]", values.join(", "))
}

/// Parse a `--years` argument.
///
/// A malformed range is not fatal: it is logged as a warning and year
/// augmentation is disabled for the run.
pub fn parse_year_range(arg: Option<&str>) -> Option<YearRange> {
    let arg = arg?;
    match arg.parse::<YearRange>() {
        Ok(range) => Some(range),
        Err(err) => {
            warn!("{err}; continuing without year augmentation");
            None
        }
    }
}

/// Map the `--max-size` / `--max-pool` convention (0 = unlimited) to an
/// optional limit.
pub fn limit_from_arg(value: usize) -> Option<usize> {
    (value > 0).then_some(value)
}

/// The crack-time estimator used by `analyze` unless `--entropy-only` is set.
pub fn default_estimator() -> Box<dyn CrackEstimator> {
    Box::new(pwforge_core::estimator::ZxcvbnEstimator)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: impl Display) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_skip_missing_and_empty_values() {
        let seeds = collect_seeds(Some("Max"), None, Some(""), Some("summer"));
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].kind(), SeedKind::Name);
        assert_eq!(seeds[1].kind(), SeedKind::Keyword);
    }

    #[test]
    fn no_seeds() {
        assert!(collect_seeds(None, None, None, None).is_empty());
    }

    #[test]
    fn summary_lists_values() {
        let seeds = collect_seeds(Some("Max"), Some("rex"), Some("1990"), None);
        assert_eq!(seed_summary(&seeds), "[Max, rex, 1990]");
        assert_eq!(seed_summary(&[]), "[]");
    }

    #[test]
    fn year_range_parsing() {
        assert_eq!(parse_year_range(None), None);
        assert_eq!(
            parse_year_range(Some("2020-2021")),
            Some(YearRange::new(2020, 2021).unwrap())
        );
        assert_eq!(parse_year_range(Some("2021-2020")), None);
        assert_eq!(parse_year_range(Some("soon")), None);
    }

    #[test]
    fn zero_means_unlimited() {
        assert_eq!(limit_from_arg(0), None);
        assert_eq!(limit_from_arg(5000), Some(5000));
    }

    #[test]
    fn default_estimator_scores_passwords() {
        let estimator = default_estimator();
        assert!(estimator.estimate("Password1!").is_some());
        assert!(estimator.estimate("").is_none());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "trace");
    }
}
