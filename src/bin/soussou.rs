// Soussou Morph CLI Tool
// Command-line interface for numeral analysis, answer scoring and quiz numbers

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use soussou_morph::{
    validate_answer, DifficultyTier, EngineConfig, FallbackLookup, LookupProvider, MapLookup,
    NumeralAnalyzer, RuleBasedLookup,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Soussou numeral explorer - explain how numbers 1-9999 are built
#[derive(Parser, Debug)]
#[command(name = "soussou")]
#[command(about = "Analyze Soussou numerals and score proposed translations", long_about = None)]
#[command(version)]
struct Args {
    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Engine configuration JSON (range, connector, layout, lexicon)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decompose a number and explain its construction
    Analyze {
        #[arg(value_name = "NUMBER")]
        number: u32,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// `;`-delimited dataset consulted before the built-in rules
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Bincode dataset snapshot consulted before the built-in rules
        #[arg(long, value_name = "FILE", conflicts_with = "data")]
        snapshot: Option<PathBuf>,
    },

    /// Score a proposed translation against the canonical one
    Score {
        #[arg(value_name = "PROPOSED")]
        proposed: String,

        #[arg(value_name = "CANONICAL")]
        canonical: String,
    },

    /// Pick a random number for a quiz
    Random {
        /// easy, medium, hard, very-hard
        #[arg(long, default_value = "easy")]
        tier: DifficultyTier,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };

    match args.command {
        Command::Analyze {
            number,
            json,
            data,
            snapshot,
        } => {
            let rules = RuleBasedLookup::new(&config);
            let provider: Box<dyn LookupProvider> = match (data, snapshot) {
                (Some(path), _) => Box::new(FallbackLookup::new(
                    MapLookup::from_dataset_file(path)?,
                    rules,
                )),
                (_, Some(path)) => Box::new(FallbackLookup::new(
                    MapLookup::load_snapshot(path)?,
                    rules,
                )),
                _ => Box::new(rules),
            };

            let analyzer = NumeralAnalyzer::new(config, provider)?;
            let result = analyzer.analyze(number)?;

            if json {
                println!("{}", result.to_json_pretty()?);
                return Ok(());
            }

            println!("Number: {}", result.number);
            match &result.canonical_text {
                Some(text) => println!("Text:   {}", text),
                None => println!("Text:   (unknown)"),
            }
            println!("Level:  {}", result.difficulty);

            let labels: Vec<&str> = result.pattern_labels.iter().map(|l| l.as_str()).collect();
            if labels.is_empty() {
                println!("Labels: (none)");
            } else {
                println!("Labels: {}", labels.join(", "));
            }

            println!("\nConstruction:");
            for step in &result.construction_steps {
                println!("  {}. {}", step.step_number, step.description);
            }

            println!("\nTree:");
            for node in result.tree.walk() {
                println!(
                    "  {}{:<6} {}",
                    "  ".repeat(node.level),
                    node.value,
                    node.text.as_deref().unwrap_or("-")
                );
            }

            println!("\n{}", result.explanation);
        }

        Command::Score {
            proposed,
            canonical,
        } => {
            config.validate()?;
            print!("{}", score_report(&proposed, &canonical, &config));
        }

        Command::Random { tier, seed } => {
            let analyzer = NumeralAnalyzer::with_rules(config)?;
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };

            match analyzer.random_number(tier, &mut rng) {
                Some(number) => println!("{}", number),
                None => {
                    return Err(format!(
                        "tier {} does not overlap the configured range",
                        tier
                    )
                    .into())
                }
            }
        }
    }

    Ok(())
}

/// Matched chars, similarity and mismatch kind, one line each
fn score_report(proposed: &str, canonical: &str, config: &EngineConfig) -> String {
    let check = validate_answer(proposed, canonical, &config.lexicon, &config.connector);
    format!(
        "Matched:    {} chars\nSimilarity: {:.2}% {}\nMismatch:   {}\n",
        check.score.matched_chars,
        check.score.percentage,
        score_bar(check.score.percentage),
        check.mismatch
    )
}

/// Generate a visual similarity bar from a 0-100 percentage
fn score_bar(percentage: f64) -> String {
    let bar_len = 10;
    let filled = (percentage / 100.0 * bar_len as f64) as usize;
    let mut bar = String::from("[");
    for i in 0..bar_len {
        if i < filled {
            bar.push('█');
        } else {
            bar.push('░');
        }
    }
    bar.push(']');
    bar
}
