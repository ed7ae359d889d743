//! Command line surface, parsed with clap derive.

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code solutions", version)]
pub struct Args {
    /// Run only this year (all registered years when omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Run only this day (all registered days when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Run only this part (all parts when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solutions (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs as <year>/day<dd>.txt
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Read the puzzle input from stdin (requires --year and --day)
    #[arg(long)]
    pub stdin: bool,

    /// Only print answers, skipping timings and the summary
    #[arg(short, long)]
    pub quiet: bool,
}
