use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::constants::{day_dir_name, INPUT_DIR, INPUT_FILE, SAMPLE_FILE};
use crate::error::{Error, Result};

/// Path of a day's input, relative to the solutions root.
pub fn input_path(year: i32, day: u32, use_sample: bool) -> PathBuf {
    let file = if use_sample { SAMPLE_FILE } else { INPUT_FILE };
    Path::new(INPUT_DIR).join(year.to_string()).join(day_dir_name(day)).join(file)
}

/// Line-by-line reader over a puzzle input.
///
/// Iteration stops at the end of the file or at the first read error.
pub struct InputScanner {
    lines: Lines<BufReader<File>>,
}

impl InputScanner {
    /// Opens `input/{year}/day{DD}/input.txt`, or `sample.txt` when `use_sample` is set,
    /// relative to the working directory.
    pub fn open(year: i32, day: u32, use_sample: bool) -> Result<Self> {
        Self::open_path(input_path(year, day, use_sample))
    }

    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::io(format!("open input '{}'", path.display()), e))?;
        Ok(Self { lines: BufReader::new(file).lines() })
    }
}

impl Iterator for InputScanner {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(e) => {
                log::error!("Stopped reading input: {e}");
                None
            }
        }
    }
}
