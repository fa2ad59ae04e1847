// Module declarations
mod error;
mod generator;
mod options;
mod pair;
mod progress;
mod verify;

// Public re-exports
pub use error::{FixtureError, PairParseError, Result};
pub use generator::{generate, generate_with_options, generate_with_rng, write_pairs};
pub use options::{
    GenerateOptions, ProgressOptions, VerifyOptions, DEFAULT_NUM_LINES, DEFAULT_OUTPUT,
};
pub use pair::{Pair, PairSampler, MAX_BIT_COUNT, MIN_BIT_COUNT};
pub use progress::GenerateSummary;
pub use verify::{read_pairs, verify_file, VerifyReport};
