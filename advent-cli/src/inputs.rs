//! Local store of puzzle input files

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading stored inputs
#[derive(Error, Debug)]
pub enum InputError {
    /// No file at the expected location
    #[error("no input file at {}", .0.display())]
    Missing(PathBuf),

    /// The file exists but could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// File-backed store of puzzle inputs
///
/// Directory structure: `{root}/{year}/day{day:02}.txt`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a store rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The path where the input for a year/day is expected
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if the input file is present
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        if !path.exists() {
            return Err(InputError::Missing(path));
        }
        Ok(fs::read_to_string(&path)?)
    }
}
