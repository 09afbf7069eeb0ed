// pwforge: analyze password strength or generate a targeted wordlist.
//
// Usage:
//   pwforge analyze --password PASSWORD [--format text|json] [--entropy-only]
//   pwforge generate [--name S] [--pet S] [--birth S] [--keyword S]
//                    [--years START-END] [--append-years] [--leet]
//                    [--max-size N] [--max-pool N] [--separators LIST]
//                    [--out PATH]
//
// Log output goes to stderr; set PWFORGE_LOG (e.g. "debug") or pass -v to
// see pipeline sizes.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use pwforge_cli::{
    collect_seeds, default_estimator, fatal, init_tracing, limit_from_arg, parse_year_range,
    seed_summary,
};
use pwforge_core::analyze;
use pwforge_wordlist::WordlistGenerator;
use pwforge_wordlist::cap::DEFAULT_MAX_SIZE;
use pwforge_wordlist::generator::DEFAULT_MAX_POOL_SIZE;

#[derive(Parser)]
#[command(
    name = "pwforge",
    version,
    about = "Password strength analyzer and targeted wordlist generator"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze password strength
    Analyze(AnalyzeArgs),
    /// Generate a custom wordlist from personal facts
    Generate(GenerateArgs),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Password to analyze
    #[arg(long)]
    password: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the crack-time estimator and report entropy only
    #[arg(long)]
    entropy_only: bool,
}

#[derive(Args)]
struct GenerateArgs {
    /// Name input
    #[arg(long)]
    name: Option<String>,

    /// Pet name input
    #[arg(long)]
    pet: Option<String>,

    /// Birth year/date input
    #[arg(long)]
    birth: Option<String>,

    /// Keyword or hobby input
    #[arg(long)]
    keyword: Option<String>,

    /// Year range (e.g. 1990-2025)
    #[arg(long, value_name = "START-END")]
    years: Option<String>,

    /// Apply leetspeak variants
    #[arg(long)]
    leet: bool,

    /// Append/prepend years from --years
    #[arg(long)]
    append_years: bool,

    /// Limit output size (0 = unlimited)
    #[arg(long, env = "PWFORGE_MAX_SIZE", default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,

    /// Refuse to run when the variant pool exceeds this many entries (0 = no limit)
    #[arg(long, default_value_t = DEFAULT_MAX_POOL_SIZE)]
    max_pool: usize,

    /// Comma-separated separators placed between words; an empty entry
    /// means plain concatenation (default: ",_,-,.,@")
    #[arg(long, value_delimiter = ',')]
    separators: Option<Vec<String>>,

    /// Output filename
    #[arg(long, env = "PWFORGE_OUT", default_value = "wordlist.txt")]
    out: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Generate(args) => run_generate(args),
    }
}

fn run_analyze(args: AnalyzeArgs) {
    let estimator = (!args.entropy_only).then(default_estimator);
    let report = analyze(&args.password, estimator.as_deref());

    match args.format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| fatal(e));
            println!("{json}");
        }
    }
}

fn run_generate(args: GenerateArgs) {
    let seeds = collect_seeds(
        args.name.as_deref(),
        args.pet.as_deref(),
        args.birth.as_deref(),
        args.keyword.as_deref(),
    );
    if seeds.is_empty() {
        println!("No inputs provided for wordlist generation.");
        return;
    }

    // Parsed even without --append-years so a bad range is still reported.
    let years = parse_year_range(args.years.as_deref());
    if args.append_years && years.is_none() {
        info!("no usable year range, skipping year augmentation");
    }

    let mut generator = WordlistGenerator::default();
    generator.set_leet(args.leet);
    generator.set_years(if args.append_years { years } else { None });
    generator.set_max_size(limit_from_arg(args.max_size));
    generator.set_max_pool_size(limit_from_arg(args.max_pool));
    if let Some(separators) = args.separators {
        generator.set_separators(separators);
    }

    println!("Generating variants... base={}", seed_summary(&seeds));
    let generated = generator.generate(&seeds).unwrap_or_else(|e| fatal(e));
    if generated.stats.truncated {
        info!(max_size = args.max_size, "output truncated to --max-size");
    }
    generated
        .wordlist
        .save(&args.out)
        .unwrap_or_else(|e| fatal(e));

    println!(
        "Generated {} words -> {}",
        generated.wordlist.len(),
        args.out.display()
    );
}
