//! End-to-end runs: file input through the runner to rendered output.

use primescan::input::{parse_numbers, read_numbers};
use primescan::report::{mismatch_warning, render_report};
use primescan::runner::BenchmarkRunner;
use std::fs;
use std::path::PathBuf;

/// Write `contents` to a unique temp file; removed on drop.
struct TempInput {
    path: PathBuf,
}

impl TempInput {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "primescan-{}-{}-{}",
            name,
            std::process::id(),
            std::thread::current().name().unwrap_or("main").replace("::", "-"),
        ));
        fs::write(&path, contents).expect("failed to write temp input");
        Self { path }
    }
}

impl Drop for TempInput {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_file_to_report() {
    let input = TempInput::new("basic", "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n");
    let numbers = read_numbers(&input.path).unwrap();
    assert_eq!(numbers.len(), 10);

    let report = BenchmarkRunner::new().workers(4).run(&numbers).unwrap();
    assert_eq!(report.sequential_count, 4);
    assert_eq!(report.parallel_count, 4);
    assert_eq!(mismatch_warning(&report), None);

    let text = render_report(&report);
    assert!(text.contains("Primes found: 4"));
    assert!(text.contains("(4 threads)"));
}

#[test]
fn test_file_with_noise_lines() {
    let input = TempInput::new(
        "noise",
        "17\n\n  19  \nhello\n3.14\n23\n92233720368547758080\n",
    );
    let numbers = read_numbers(&input.path).unwrap();
    assert_eq!(numbers, vec![17, 19, 23]);

    let report = BenchmarkRunner::new().workers(2).run(&numbers).unwrap();
    assert_eq!(report.sequential_count, 3);
    assert!(report.counts_match());
}

#[test]
fn test_larger_file_across_worker_counts() {
    let contents: String = (0..5_000).map(|n| format!("{n}\n")).collect();
    let input = TempInput::new("sweep", &contents);
    let numbers = read_numbers(&input.path).unwrap();

    let baseline = BenchmarkRunner::new().workers(1).run(&numbers).unwrap();
    for workers in [2, 3, 5, 8] {
        let report = BenchmarkRunner::new().workers(workers).run(&numbers).unwrap();
        assert_eq!(report.parallel_count, baseline.sequential_count);
        assert_eq!(report.worker_count, workers);
        assert!(report.counts_match());
    }
}

#[test]
fn test_no_primes_input() {
    let numbers = parse_numbers("4\n8\n9\n10\n12\n".as_bytes()).unwrap();
    let report = BenchmarkRunner::new().workers(3).run(&numbers).unwrap();
    assert_eq!(report.sequential_count, 0);
    assert_eq!(report.parallel_count, 0);

    let text = render_report(&report);
    assert!(text.contains("Primes found: 0"));
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serializes_to_json() {
    let numbers = parse_numbers("2\n3\n4\n".as_bytes()).unwrap();
    let report = BenchmarkRunner::new().workers(2).run(&numbers).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"sequential_count\":2"));
}
