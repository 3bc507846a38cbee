use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use toughnut::{Generator, GeneratorConfig, SeedList};

/// Generate "tough nut" passwords and passphrases by padding, obfuscating and permuting common
/// words, and print each with its estimated bit entropy.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Number of passwords to generate, split evenly across the four strategies.
    #[arg(default_value_t = 10, allow_negative_numbers = true)]
    count: i64,
    /// Word lists to draw from. Each file is split on whitespace. Defaults to a built-in list of
    /// words and phrases.
    seed_files: Vec<PathBuf>,
    /// Seed the random number generator, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// YAML file overriding the generator's length and padding parameters, or its default seeds.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log more detail to stderr; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Generate the batch and write the report to `output`. Nothing is written unless the whole
/// batch was generated.
fn run(args: Args, output: impl Write) -> Result<(), ProgError> {
    let config = match args.config.as_deref() {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let seeds = SeedList::load(args.seed_files.as_slice(), &config)?;
    let generator = Generator::new(config, seeds)?;

    let mut candidates = match args.seed {
        Some(seed) => {
            log::info!("using seeded generator ({seed})");
            generator.generate_batch(&mut StdRng::seed_from_u64(seed), args.count)
        }
        None => generator.generate_batch(&mut rand::thread_rng(), args.count),
    };

    let mut output = BufWriter::new(output);
    toughnut::write_report(&mut candidates, &mut output)?;
    output.flush().context("failed to flush standard output")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    match run(args, io::stdout().lock()) {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Error: {0}")]
    Generator(toughnut::GeneratorError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<toughnut::GeneratorError> for ProgError {
    fn from(err: toughnut::GeneratorError) -> ProgError {
        ProgError::Generator(err)
    }
}
