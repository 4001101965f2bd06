//! Command-line front end: read a file of integers, benchmark both counting
//! passes, print the report.
//!
//! All I/O lives here; the library core only ever sees the parsed sequence.

use primescan::input::read_numbers;
use primescan::report::{format_count, mismatch_warning, write_report};
use primescan::runner::BenchmarkRunner;
use std::path::Path;
use std::{env, fs, io, process};

fn main() {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: primescan <file_path>");
        process::exit(1);
    };

    if let Err(message) = run(&path) {
        eprintln!("{message}");
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), String> {
    let numbers =
        read_numbers(path).map_err(|err| format!("Error reading file: {err}"))?;
    if numbers.is_empty() {
        return Err("No valid numbers found in file.".to_string());
    }

    print_file_header(path, numbers.len());

    let report = BenchmarkRunner::new()
        .run(&numbers)
        .map_err(|err| err.to_string())?;

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &report).map_err(|err| err.to_string())?;

    if let Some(warning) = mismatch_warning(&report) {
        return Err(warning);
    }
    Ok(())
}

fn print_file_header(path: &str, count: usize) {
    let name = Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned());
    match fs::metadata(path) {
        Ok(meta) => println!(
            "File: {} ({} numbers, {} bytes)\n",
            name,
            format_count(count as u64),
            format_count(meta.len())
        ),
        Err(_) => println!("File: {} ({} numbers)\n", name, format_count(count as u64)),
    }
}
