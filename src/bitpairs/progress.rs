use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::bitpairs::options::ProgressOptions;

/// Format seconds into a human-readable time string (e.g., "1h30m45s", "5m30s", or "45.00s")
pub(crate) fn format_time(secs: f64) -> String {
    let total_secs = secs as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        // Show fractional seconds for times under 1 minute
        format!("{:.2}s", secs)
    }
}

/// Outcome of a finished generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    pub lines: u64,
    pub bytes: u64,
    pub elapsed: Duration,
}

impl GenerateSummary {
    pub fn mb_written(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }

    pub fn lines_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.lines as f64 / secs
        } else {
            0.0
        }
    }

    pub fn elapsed_formatted(&self) -> String {
        format_time(self.elapsed.as_secs_f64())
    }

    /// Print the completion line to stdout
    pub fn print(&self) {
        println!(
            "Write complete: {} lines, {:.2} MB in {} ({:.0} lines/s)",
            self.lines,
            self.mb_written(),
            self.elapsed_formatted(),
            self.lines_per_sec()
        );
    }
}

pub(crate) struct ProgressTracker {
    pub(crate) lines_written: u64,
    total_lines: u64,
    start_time: Instant,
    last_update: Instant,
    update_interval: Duration,
    enabled: bool,
    // Whether to print on new lines instead of clearing and rewriting
    newline_progress: bool,
}

impl ProgressTracker {
    pub(crate) fn new(total_lines: u64, options: &ProgressOptions) -> Self {
        let now = Instant::now();
        // Oversized intervals saturate; negative or NaN ones report every check
        let update_interval = Duration::try_from_secs_f64(options.interval_secs).unwrap_or(
            if options.interval_secs > 0.0 {
                Duration::MAX
            } else {
                Duration::ZERO
            },
        );
        Self {
            lines_written: 0,
            total_lines,
            start_time: now,
            last_update: now,
            update_interval,
            enabled: options.enabled,
            newline_progress: options.newline,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub(crate) fn status_line(&self, elapsed: Duration) -> String {
        let pct = if self.total_lines > 0 {
            (self.lines_written as f64 / self.total_lines as f64) * 100.0
        } else {
            100.0
        };
        let secs = elapsed.as_secs_f64();
        let rate = if secs > 0.0 {
            self.lines_written as f64 / secs
        } else {
            0.0
        };
        format!(
            "Generated: {}/{} lines ({:.1}%) | {:.0} lines/s",
            self.lines_written, self.total_lines, pct, rate
        )
    }

    /// Record one more line and print a report if the interval has passed
    pub(crate) fn record_line(&mut self) {
        self.lines_written += 1;
        // Checking the clock on every line is measurable at a million lines
        if self.enabled && self.lines_written % 1024 == 0 {
            self.update_progress(false);
        }
    }

    pub(crate) fn update_progress(&mut self, force: bool) {
        if !self.enabled {
            return;
        }
        let now = Instant::now();
        if force || now.duration_since(self.last_update) >= self.update_interval {
            let line = self.status_line(now.duration_since(self.start_time));
            if self.newline_progress {
                println!("{}", line);
            } else {
                // Use carriage return and clear line
                print!("\r\x1b[K{}", line);
                let _ = io::stdout().flush();
            }
            self.last_update = now;
        }
    }

    /// Force a last report and end the rewritten line
    pub(crate) fn finish(&mut self) {
        if !self.enabled {
            return;
        }
        self.update_progress(true);
        if !self.newline_progress {
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(12.5), "12.50s");
        assert_eq!(format_time(330.0), "5m30s");
        assert_eq!(format_time(5445.0), "1h30m45s");
    }

    #[test]
    fn test_status_line() {
        let mut tracker = ProgressTracker::new(200, &ProgressOptions::default());
        tracker.lines_written = 50;
        assert_eq!(
            tracker.status_line(Duration::from_secs(2)),
            "Generated: 50/200 lines (25.0%) | 25 lines/s"
        );
    }

    #[test]
    fn test_status_line_empty_run() {
        let tracker = ProgressTracker::new(0, &ProgressOptions::default());
        assert_eq!(
            tracker.status_line(Duration::ZERO),
            "Generated: 0/0 lines (100.0%) | 0 lines/s"
        );
    }

    #[test]
    fn test_out_of_range_intervals_do_not_panic() {
        let cases = [
            (1e30, Duration::MAX),
            (f64::INFINITY, Duration::MAX),
            (-1.0, Duration::ZERO),
            (f64::NAN, Duration::ZERO),
            (0.25, Duration::from_millis(250)),
        ];
        for (interval_secs, expected) in cases {
            let options = ProgressOptions {
                interval_secs,
                ..ProgressOptions::default()
            };
            let tracker = ProgressTracker::new(10, &options);
            assert_eq!(tracker.update_interval, expected, "interval {}", interval_secs);
        }
    }

    #[test]
    fn test_disabled_tracker_counts_silently() {
        let mut tracker = ProgressTracker::new(3, &ProgressOptions::default());
        for _ in 0..3 {
            tracker.record_line();
        }
        tracker.finish();
        assert_eq!(tracker.lines_written, 3);
    }

    #[test]
    fn test_summary_rates() {
        let summary = GenerateSummary {
            lines: 1000,
            bytes: 2 * 1024 * 1024,
            elapsed: Duration::from_secs(4),
        };
        assert_eq!(summary.mb_written(), 2.0);
        assert_eq!(summary.lines_per_sec(), 250.0);
        assert_eq!(summary.elapsed_formatted(), "4.00s");
    }
}
