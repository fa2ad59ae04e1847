use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::bitpairs::error::{FixtureError, Result};
use crate::bitpairs::options::{GenerateOptions, ProgressOptions};
use crate::bitpairs::pair::{Pair, PairSampler};
use crate::bitpairs::progress::{GenerateSummary, ProgressTracker};

const WRITE_BUFFER_SIZE: usize = 64 * 1024;

fn write_pairs_tracked<W, R>(
    writer: &mut W,
    num_lines: u64,
    rng: &mut R,
    tracker: &mut ProgressTracker,
) -> io::Result<u64>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let sampler = PairSampler::new();
    let mut line = String::with_capacity(8);
    let mut bytes_written = 0u64;
    for _ in 0..num_lines {
        let pair: Pair = sampler.sample(rng);
        line.clear();
        // Formatting into a String cannot fail
        let _ = writeln!(line, "{}", pair);
        writer.write_all(line.as_bytes())?;
        bytes_written += line.len() as u64;
        tracker.record_line();
    }
    Ok(bytes_written)
}

/// Write `num_lines` random pairs to any sink, one `"{bit_count} {value}\n"` per line
///
/// Returns the number of bytes written. The writer is not flushed.
pub fn write_pairs<W, R>(writer: &mut W, num_lines: u64, rng: &mut R) -> io::Result<u64>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let mut tracker = ProgressTracker::new(num_lines, &ProgressOptions::default());
    write_pairs_tracked(writer, num_lines, rng, &mut tracker)
}

fn write_fixture<R: Rng + ?Sized>(
    path: &Path,
    num_lines: u64,
    rng: &mut R,
    progress: &ProgressOptions,
) -> Result<GenerateSummary> {
    let mut tracker = ProgressTracker::new(num_lines, progress);

    let file = File::create(path).map_err(|e| FixtureError::file_access(path, e))?;
    debug!(path = %path.display(), num_lines, "opened fixture for writing");

    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    let bytes = write_pairs_tracked(&mut writer, num_lines, rng, &mut tracker)
        .map_err(|e| FixtureError::file_access(path, e))?;
    writer
        .flush()
        .map_err(|e| FixtureError::file_access(path, e))?;
    tracker.finish();

    let summary = GenerateSummary {
        lines: tracker.lines_written,
        bytes,
        elapsed: tracker.elapsed(),
    };
    debug!(
        path = %path.display(),
        lines = summary.lines,
        bytes = summary.bytes,
        "fixture flushed"
    );
    Ok(summary)
}

/// Create or truncate `path` and fill it with `num_lines` random pairs
///
/// Bit counts are uniform over [1, 8] and values uniform over [0, 255].
/// The random source is seeded from the OS, so output differs run to run.
pub fn generate(path: impl AsRef<Path>, num_lines: u64) -> Result<()> {
    generate_with_rng(path, num_lines, &mut thread_rng())
}

/// Same as [`generate`] with a caller-supplied random source
pub fn generate_with_rng<R: Rng + ?Sized>(
    path: impl AsRef<Path>,
    num_lines: u64,
    rng: &mut R,
) -> Result<()> {
    write_fixture(path.as_ref(), num_lines, rng, &ProgressOptions::default())?;
    Ok(())
}

/// Generate a fixture as configured, reporting progress if enabled
pub fn generate_with_options(options: &GenerateOptions) -> Result<GenerateSummary> {
    let summary = match options.seed {
        Some(seed) => {
            debug!(seed, "using seeded random source");
            let mut rng = StdRng::seed_from_u64(seed);
            write_fixture(&options.output, options.num_lines, &mut rng, &options.progress)?
        }
        None => write_fixture(
            &options.output,
            options.num_lines,
            &mut thread_rng(),
            &options.progress,
        )?,
    };
    info!(
        path = %options.output.display(),
        lines = summary.lines,
        "fixture generated"
    );
    Ok(summary)
}
