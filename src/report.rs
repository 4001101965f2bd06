//! Text rendering for benchmark results.
//!
//! The reporter is a collaborator of the counting core: it consumes a
//! [`RunReport`] and renders the human-facing summary, including the speedup
//! ratio and a warning when the two counts disagree. Counts are printed with
//! thousands separators.

use crate::runner::RunReport;
use std::io::{self, Write};

/// Format an unsigned count with thousands separators.
///
/// # Examples
///
/// ```
/// use primescan::report::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1_234), "1,234");
/// assert_eq!(format_count(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a run report as the standard summary text.
///
/// ```text
/// [Single-Threaded]
///   Primes found: 1,234
///   Time: 12.3 ms
///
/// [Multi-Threaded] (8 threads)
///   Primes found: 1,234
///   Time: 3.4 ms
///
/// Speedup: 3.62 x
/// ```
///
/// When the parallel time measured as zero the speedup line reads
/// `Speedup: n/a`.
#[must_use]
pub fn render_report(report: &RunReport) -> String {
    let speedup_line = match report.speedup() {
        Some(ratio) => format!("Speedup: {:.2} x", ratio),
        None => "Speedup: n/a (parallel time below clock resolution)".to_string(),
    };

    format!(
        "[Single-Threaded]\n  Primes found: {}\n  Time: {:.1} ms\n\n\
         [Multi-Threaded] ({} threads)\n  Primes found: {}\n  Time: {:.1} ms\n\n\
         {}\n",
        format_count(report.sequential_count),
        report.sequential_ms(),
        report.worker_count,
        format_count(report.parallel_count),
        report.parallel_ms(),
        speedup_line,
    )
}

/// Write the rendered report to `out`.
pub fn write_report(out: &mut impl Write, report: &RunReport) -> io::Result<()> {
    out.write_all(render_report(report).as_bytes())
}

/// Warning text when the two passes disagree, `None` when they match.
///
/// A disagreement indicates a bug in chunking or aggregation; callers should
/// surface it and fail the run.
#[must_use]
pub fn mismatch_warning(report: &RunReport) -> Option<String> {
    if report.counts_match() {
        None
    } else {
        Some(format!(
            "Error: Single-threaded ({}) and multi-threaded ({}) counts differ!",
            report.sequential_count, report.parallel_count
        ))
    }
}
