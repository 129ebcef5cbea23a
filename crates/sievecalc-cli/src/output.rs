//! CLI output formatting and the result file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Name of the result file for bound `n`, relative to the working directory.
#[must_use]
pub fn output_file_name(n: u64) -> PathBuf {
    PathBuf::from(format!("{n}.txt"))
}

/// Write `primes` as single-space-separated decimals followed by a newline.
pub fn write_primes<W: Write>(out: &mut W, primes: &[u64]) -> io::Result<()> {
    let mut iter = primes.iter();
    if let Some(first) = iter.next() {
        write!(out, "{first}")?;
        for prime in iter {
            write!(out, " {prime}")?;
        }
    }
    writeln!(out)
}

/// Create (or truncate) `path` and write `primes` to it.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_primes_file(path: &Path, primes: &[u64]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_primes(&mut writer, primes)?;
    writer.flush()?;
    debug!(path = %path.display(), count = primes.len(), "Result file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        let s = format_duration(Duration::from_secs_f64(3.25));
        assert_eq!(s, "3.250s");
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(10_000_000), "10,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }

    #[test]
    fn output_file_name_uses_bound() {
        assert_eq!(output_file_name(30), PathBuf::from("30.txt"));
        assert_eq!(output_file_name(10_000_000), PathBuf::from("10000000.txt"));
    }

    #[test]
    fn write_primes_format() {
        let mut buf = Vec::new();
        write_primes(&mut buf, &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2 3 5 7 11 13 17 19 23 29\n");
    }

    #[test]
    fn write_single_prime() {
        let mut buf = Vec::new();
        write_primes(&mut buf, &[2]).unwrap();
        assert_eq!(buf, b"2\n");
    }

    #[test]
    fn write_primes_file_overwrites() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("30.txt");
        std::fs::write(&path, "stale content that is longer than the result").unwrap();

        write_primes_file(&path, &[2, 3, 5]).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_primes_file(&path, &[2, 3, 5]).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, b"2 3 5\n");
        assert_eq!(first, second);
    }
}
