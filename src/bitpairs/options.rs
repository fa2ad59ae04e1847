use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "bit_value_pairs.txt";
pub const DEFAULT_NUM_LINES: u64 = 1_000_000;

/// Progress display settings shared by long-running operations
#[derive(Debug, Clone)]
pub struct ProgressOptions {
    pub enabled: bool,
    pub interval_secs: f64,
    pub newline: bool,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: 0.5,
            newline: false,
        }
    }
}

/// Options for writing a fixture file
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: PathBuf,
    pub num_lines: u64,
    pub seed: Option<u64>, // None draws from the thread-local OS-seeded generator
    pub progress: ProgressOptions,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            num_lines: DEFAULT_NUM_LINES,
            seed: None,
            progress: ProgressOptions::default(),
        }
    }
}

/// Options for checking an existing fixture file
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub input: PathBuf,
    pub expected_lines: Option<u64>,
}

impl VerifyOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            expected_lines: None,
        }
    }
}
