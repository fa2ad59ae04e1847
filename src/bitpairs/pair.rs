use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::bitpairs::error::PairParseError;

pub const MIN_BIT_COUNT: u8 = 1;
pub const MAX_BIT_COUNT: u8 = 8;

/// One fixture record: encode `value` using `bit_count` bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    bit_count: u8,
    value: u8,
}

impl Pair {
    pub fn new(bit_count: u8, value: u8) -> Result<Self, PairParseError> {
        if !(MIN_BIT_COUNT..=MAX_BIT_COUNT).contains(&bit_count) {
            return Err(PairParseError::BitCountOutOfRange(bit_count as u64));
        }
        Ok(Self { bit_count, value })
    }

    pub fn bit_count(&self) -> u8 {
        self.bit_count
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.bit_count, self.value)
    }
}

/// Parse one base-10 token, rejecting signs, whitespace and leading zeros
fn parse_token(token: &str) -> Result<u64, PairParseError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PairParseError::InvalidNumber(token.to_string()));
    }
    if token.len() > 1 && token.starts_with('0') {
        return Err(PairParseError::LeadingZero(token.to_string()));
    }
    token
        .parse::<u64>()
        .map_err(|_| PairParseError::InvalidNumber(token.to_string()))
}

impl FromStr for Pair {
    type Err = PairParseError;

    /// Parse a line without its trailing newline, e.g. `"3 217"`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (first, second) = line
            .split_once(' ')
            .ok_or(PairParseError::MissingSeparator)?;
        if second.contains(' ') {
            return Err(PairParseError::ExtraField);
        }

        let bit_count = parse_token(first)?;
        let value = parse_token(second)?;

        if !(MIN_BIT_COUNT as u64..=MAX_BIT_COUNT as u64).contains(&bit_count) {
            return Err(PairParseError::BitCountOutOfRange(bit_count));
        }
        let value = u8::try_from(value).map_err(|_| PairParseError::ValueOutOfRange(value))?;

        Pair::new(bit_count as u8, value)
    }
}

/// Uniform sampler over bit counts in [1, 8] and values in [0, 255]
#[derive(Debug, Clone, Copy)]
pub struct PairSampler {
    bit_count: Uniform<u8>,
    value: Uniform<u8>,
}

impl PairSampler {
    pub fn new() -> Self {
        Self {
            bit_count: Uniform::new_inclusive(MIN_BIT_COUNT, MAX_BIT_COUNT),
            value: Uniform::new_inclusive(u8::MIN, u8::MAX),
        }
    }
}

impl Default for PairSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Distribution<Pair> for PairSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Pair {
        let bit_count = self.bit_count.sample(rng);
        let value = self.value.sample(rng);
        Pair { bit_count, value }
    }
}
