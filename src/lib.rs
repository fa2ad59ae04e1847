// Library module for bitpairs
// This exposes the public API for integration tests and other fixture consumers

pub mod bitpairs;

// Re-export the main public API
pub use bitpairs::{generate, verify_file, FixtureError, GenerateOptions, Pair, VerifyOptions};
