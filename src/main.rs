//! Chaotic Seed CLI
//!
//! Derives a seed from an entropy artifact and prints reproducible
//! integers, one per line. Logs go to stderr.

use chaotic_seed::{
    analysis,
    config::{ConfigError, FileConfig, Overrides, RunSettings, SeedOrigin},
    pipeline::SeedPipeline,
    sequence, EntropySource, FileSource, HashAlgorithm, Seed,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "chaotic-seed", version, about = "Reproducible integers from an entropy artifact")]
struct Cli {
    /// TOML configuration file; command-line flags override its values.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draw integers from [low, high) seeded by the artifact.
    Generate(GenerateArgs),
    /// Print the digest and derived seed of the artifact.
    Seed(ArtifactArgs),
    /// Print sample statistics for the artifact.
    Inspect(ArtifactArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Path to the entropy artifact.
    #[arg(long, short = 'i')]
    image: Option<PathBuf>,
    /// Inclusive lower bound.
    #[arg(long, allow_negative_numbers = true)]
    low: Option<i64>,
    /// Exclusive upper bound.
    #[arg(long, allow_negative_numbers = true)]
    high: Option<i64>,
    /// Number of values to draw.
    #[arg(long, short = 'n')]
    count: Option<usize>,
    /// Digest algorithm (sha1, sha256, blake3).
    #[arg(long, short = 'a')]
    algorithm: Option<HashAlgorithm>,
    /// Reuse a previously derived seed (decimal or 0x-hex) instead of the artifact.
    #[arg(long)]
    seed: Option<Seed>,
    /// Run sample diagnostics before hashing.
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Args)]
struct ArtifactArgs {
    /// Path to the entropy artifact.
    #[arg(long, short = 'i')]
    image: Option<PathBuf>,
    /// Digest algorithm (sha1, sha256, blake3).
    #[arg(long, short = 'a')]
    algorithm: Option<HashAlgorithm>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    debug!("Chaotic Seed v{}", chaotic_seed::VERSION);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    match cli.command {
        Command::Generate(args) => generate(file, args),
        Command::Seed(args) => print_seed(file, args),
        Command::Inspect(args) => inspect(file, args),
    }
}

fn generate(file: FileConfig, args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = Overrides {
        path: args.image,
        algorithm: args.algorithm,
        low: args.low,
        high: args.high,
        count: args.count,
        seed: args.seed,
        check: args.check,
    };
    let settings = RunSettings::resolve(file, overrides)?;

    let output = match &settings.origin {
        SeedOrigin::Explicit(seed) => {
            info!("Using explicit seed, artifact not read");
            sequence::generate(seed, settings.low, settings.high, settings.count)?
        }
        SeedOrigin::Artifact(path) => {
            let mut pipeline = SeedPipeline::from_path(path).with_algorithm(settings.algorithm);
            if let Some(thresholds) = settings.diagnostics.clone() {
                pipeline = pipeline.with_diagnostics(thresholds);
            }
            pipeline.generate(settings.low, settings.high, settings.count)?
        }
    };

    for value in &output {
        println!("{}", value);
    }
    Ok(())
}

fn artifact_pipeline(
    file: FileConfig,
    args: ArtifactArgs,
) -> Result<SeedPipeline<FileSource>, Box<dyn std::error::Error>> {
    let path = args
        .image
        .or(file.source.path)
        .ok_or(ConfigError::Missing("path"))?;
    let algorithm = args.algorithm.unwrap_or(file.digest.algorithm);
    Ok(SeedPipeline::from_path(path).with_algorithm(algorithm))
}

fn print_seed(file: FileConfig, args: ArtifactArgs) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = artifact_pipeline(file, args)?;
    let seed = pipeline.derive_seed()?;

    println!("algorithm: {}", pipeline.algorithm());
    println!("digest:    {}", seed.to_hex());
    println!("seed:      {}", seed);
    println!("bits:      {}", seed.bits());
    Ok(())
}

fn inspect(file: FileConfig, args: ArtifactArgs) -> Result<(), Box<dyn std::error::Error>> {
    let thresholds = file.analysis.thresholds.clone();
    let pipeline = artifact_pipeline(file, args)?;
    let sample = pipeline.source().read()?;
    let report = analysis::diagnose(&sample, &thresholds);

    println!("origin:         {}", sample.origin());
    println!("bytes:          {}", report.stats.sample_size);
    println!("entropy:        {:.4} bits/byte", report.stats.entropy_bits_per_byte);
    println!(
        "dominant byte:  0x{:02x} ({:.4})",
        report.stats.dominant_byte, report.stats.dominant_share
    );
    println!("longest run:    {}", report.stats.longest_run);
    match report.violation {
        Some(violation) => println!("verdict:        degenerate ({})", violation),
        None => println!("verdict:        ok"),
    }
    Ok(())
}
