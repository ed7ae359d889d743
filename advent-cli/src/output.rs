//! Terminal output for run records.

use crate::runner::RunRecord;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Prints records as they complete, then a closing summary.
pub struct OutputFormatter {
    quiet: bool,
    started: Instant,
}

impl OutputFormatter {
    /// The summary's wall-clock span is measured from this call.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            started: Instant::now(),
        }
    }

    pub fn print_record(&self, record: &RunRecord) {
        if self.quiet {
            self.print_quiet(record);
        } else {
            self.print_full(record);
        }
    }

    /// Bare answers on stdout, errors on stderr
    fn print_quiet(&self, record: &RunRecord) {
        match &record.answer {
            Ok(answer) => println!("{answer}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    /// One line per record with the phase timings it carries
    fn print_full(&self, record: &RunRecord) {
        let prefix = match record.part {
            Some(part) => format!("{}/{:02} Part {}", record.year, record.day, part),
            None => format!("{}/{:02}", record.year, record.day),
        };

        match &record.answer {
            Ok(answer) => {
                let mut timings = Vec::new();
                if let Some(d) = record.parse_elapsed {
                    timings.push(format!("parse: {}", format_duration(d)));
                }
                if let Some(d) = record.solve_elapsed {
                    timings.push(format!("solve: {}", format_duration(d)));
                }
                println!("{prefix}: {answer} ({})", timings.join(", "));
            }
            Err(e) => eprintln!("{prefix}: Error - {e}"),
        }
    }

    /// Per-phase totals plus the elapsed wall-clock span
    pub fn print_summary(&self, records: &[RunRecord]) {
        if self.quiet {
            return;
        }

        let solved = records.iter().filter(|r| r.answer.is_ok()).count();
        let failed = records.len() - solved;
        let parse_total: TimeDelta = records.iter().filter_map(|r| r.parse_elapsed).sum();
        let solve_total: TimeDelta = records.iter().filter_map(|r| r.solve_elapsed).sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {solved} solved, {failed} failed");
        println!("Total parse time: {}", format_duration(parse_total));
        println!("Total solve time: {}", format_duration(solve_total));
        println!(
            "Wall-clock time: {}",
            format_wall_clock(self.started.elapsed())
        );
    }
}

/// Render a chrono duration with a unit scaled to its magnitude.
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros as u128)
}

/// Wall-clock variant; std durations are unsigned.
fn format_wall_clock(d: Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1_000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
