use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// Use the library module
use bitpairs::bitpairs;

/// Parse a progress interval, rejecting values that do not fit a Duration
fn parse_interval(s: &str) -> Result<f64, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    if Duration::try_from_secs_f64(secs).is_err() {
        return Err("Interval must be a finite, non-negative number of seconds".to_string());
    }
    Ok(secs)
}

#[derive(Parser)]
#[command(name = "bitpairs")]
#[command(about = "Generate and check (bit count, value) pair fixture files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write random pairs to a fixture file, replacing any existing content
    Generate {
        /// Output file path
        #[arg(short = 'o', long, default_value = bitpairs::DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Number of lines to write
        #[arg(short = 'n', long = "lines", default_value_t = bitpairs::DEFAULT_NUM_LINES)]
        num_lines: u64,
        /// Seed for reproducible output (default: seeded from the OS)
        #[arg(long, env = "BITPAIRS_SEED")]
        seed: Option<u64>,
        /// Show progress while writing
        #[arg(long)]
        progress: bool,
        /// Progress update interval in seconds (default: 0.5)
        #[arg(short = 'i', long, default_value = "0.5", value_parser = parse_interval)]
        progress_interval: f64,
        /// Print progress on new lines instead of clearing and rewriting the same line
        #[arg(long)]
        newline_progress: bool,
        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },
    /// Check that every line of a fixture file is a valid pair
    Verify {
        /// Fixture file to check
        input: PathBuf,
        /// Fail unless the file has exactly this many lines
        #[arg(long)]
        expect_lines: Option<u64>,
        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },
}

/// Log to stderr; RUST_LOG overrides the --debug default
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            num_lines,
            seed,
            progress,
            progress_interval,
            newline_progress,
            debug,
        } => {
            init_logging(debug);

            println!("Generate command:");
            println!("  Output: {}", output.display());
            println!("  Lines: {}", num_lines);
            match seed {
                Some(seed) => println!("  Seed: {}", seed),
                None => println!("  Seed: random"),
            }
            println!();

            let options = bitpairs::GenerateOptions {
                output,
                num_lines,
                seed,
                progress: bitpairs::ProgressOptions {
                    enabled: progress,
                    interval_secs: progress_interval,
                    newline: newline_progress,
                },
            };

            match bitpairs::generate_with_options(&options) {
                Ok(summary) => {
                    summary.print();
                    println!("Result: GENERATE_COMPLETED");
                    std::process::exit(0);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    println!("Result: GENERATE_FAILED");
                    std::process::exit(1);
                }
            }
        }
        Commands::Verify {
            input,
            expect_lines,
            debug,
        } => {
            init_logging(debug);

            println!("Verify command:");
            println!("  Input: {}", input.display());
            if let Some(expected) = expect_lines {
                println!("  Expected lines: {}", expected);
            }
            println!();

            let options = bitpairs::VerifyOptions {
                input,
                expected_lines: expect_lines,
            };

            match bitpairs::verify_file(&options) {
                Ok(report) => {
                    report.print();
                    println!("Result: VERIFY_PASSED");
                    std::process::exit(0);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    println!("Result: VERIFY_FAILED");
                    std::process::exit(1);
                }
            }
        }
    }
}
