use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::bitpairs::error::{FixtureError, Result};
use crate::bitpairs::options::VerifyOptions;
use crate::bitpairs::pair::{Pair, MAX_BIT_COUNT};

/// What a successful verification saw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub lines: u64,
    /// Line counts per bit count; index 0 holds bit count 1
    pub bit_counts: [u64; MAX_BIT_COUNT as usize],
    pub min_value: Option<u8>,
    pub max_value: Option<u8>,
}

impl VerifyReport {
    fn record(&mut self, pair: &Pair) {
        self.lines += 1;
        self.bit_counts[(pair.bit_count() - 1) as usize] += 1;
        self.min_value = Some(self.min_value.map_or(pair.value(), |v| v.min(pair.value())));
        self.max_value = Some(self.max_value.map_or(pair.value(), |v| v.max(pair.value())));
    }

    pub fn print(&self) {
        println!("Lines: {}", self.lines);
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            println!("Value range: {}..={}", min, max);
        }
        println!("Bit counts:");
        for (idx, count) in self.bit_counts.iter().enumerate() {
            let pct = if self.lines > 0 {
                *count as f64 / self.lines as f64 * 100.0
            } else {
                0.0
            };
            println!("  {}: {} ({:.1}%)", idx + 1, count, pct);
        }
    }
}

/// Walk every line of a fixture, handing each parsed pair to `visit`
///
/// Every line must end in `\n`, the last one included.
fn scan<R, F>(mut reader: R, path: &Path, mut visit: F) -> Result<u64>
where
    R: BufRead,
    F: FnMut(Pair),
{
    let mut buf = Vec::new();
    let mut line_no = 0u64;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| FixtureError::file_access(path, e))?;
        if n == 0 {
            return Ok(line_no);
        }
        line_no += 1;

        let Some(body) = buf.strip_suffix(b"\n") else {
            return Err(FixtureError::Malformed {
                line: line_no,
                reason: "missing trailing newline".to_string(),
            });
        };
        let text = std::str::from_utf8(body).map_err(|_| FixtureError::Malformed {
            line: line_no,
            reason: "not valid UTF-8".to_string(),
        })?;
        let pair = text.parse::<Pair>().map_err(|e| FixtureError::Malformed {
            line: line_no,
            reason: e.to_string(),
        })?;
        visit(pair);
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| FixtureError::file_access(path, e))?;
    Ok(BufReader::new(file))
}

/// Read every pair of a fixture file, in file order
pub fn read_pairs(path: impl AsRef<Path>) -> Result<Vec<Pair>> {
    let path = path.as_ref();
    let mut pairs = Vec::new();
    scan(open(path)?, path, |pair| pairs.push(pair))?;
    Ok(pairs)
}

/// Check that every line of a fixture is a well-formed pair
pub fn verify_file(options: &VerifyOptions) -> Result<VerifyReport> {
    let path = options.input.as_path();
    let mut report = VerifyReport::default();
    scan(open(path)?, path, |pair| report.record(&pair))?;

    if let Some(expected) = options.expected_lines {
        if expected != report.lines {
            return Err(FixtureError::LineCount {
                expected,
                found: report.lines,
            });
        }
    }

    debug!(path = %path.display(), lines = report.lines, "fixture verified");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan_str(text: &str) -> Result<Vec<Pair>> {
        let mut pairs = Vec::new();
        scan(Cursor::new(text), Path::new("mem"), |p| pairs.push(p))?;
        Ok(pairs)
    }

    #[test]
    fn test_scan_example_fixture() {
        let pairs = scan_str("4 12\n7 255\n1 0\n8 200\n2 91\n").unwrap();
        let rendered: Vec<String> = pairs.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, ["4 12", "7 255", "1 0", "8 200", "2 91"]);
    }

    #[test]
    fn test_scan_empty_input() {
        assert!(scan_str("").unwrap().is_empty());
    }

    #[test]
    fn test_scan_reports_line_number() {
        let err = scan_str("4 12\n7 255\n9 1\n").unwrap_err();
        match err {
            FixtureError::Malformed { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("bit count 9"), "reason was: {}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_scan_requires_trailing_newline() {
        let err = scan_str("4 12\n7 255").unwrap_err();
        assert!(matches!(err, FixtureError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_scan_rejects_blank_line() {
        let err = scan_str("4 12\n\n").unwrap_err();
        assert!(matches!(err, FixtureError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_scan_rejects_invalid_utf8() {
        let mut reader = Cursor::new(b"4 12\n\xff\xfe\n".to_vec());
        let err = scan(&mut reader, Path::new("mem"), |_| {}).unwrap_err();
        match err {
            FixtureError::Malformed { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "not valid UTF-8");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_report_histogram() {
        let mut report = VerifyReport::default();
        for line in ["1 5", "1 7", "8 0", "3 255"] {
            report.record(&line.parse().unwrap());
        }
        assert_eq!(report.lines, 4);
        assert_eq!(report.bit_counts, [2, 0, 1, 0, 0, 0, 0, 1]);
        assert_eq!(report.min_value, Some(0));
        assert_eq!(report.max_value, Some(255));
    }
}
