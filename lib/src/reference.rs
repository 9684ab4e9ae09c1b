//! Provides lazy, line-by-line access to a reference file of networks
//!
//! The file handle is owned by [`ReferenceLines`] and released when it is
//! dropped, whether iteration ran to completion, stopped early, or failed.

use log::*;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{RCidrLibError, Result};

/// Reference file used when no path is configured
pub const DEFAULT_REFERENCE_FILE: &str = "example.db";

/// A single trimmed line read from a reference file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position of the line in the file
    pub number: usize,
    /// Line text with the terminator and surrounding whitespace stripped
    pub text: String,
}

impl Line {
    /// Returns true if nothing is left after trimming
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Entry point for opening reference files
pub struct ReferenceFile;

impl ReferenceFile {
    /// Opens the reference file at `path` for sequential reading
    ///
    /// # Errors
    ///
    /// Returns [`RCidrLibError::FileAccess`] if the file cannot be opened
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use r_cidrlib::reference::ReferenceFile;
    /// for line in ReferenceFile::open("example.db").unwrap() {
    ///     println!("{}", line.unwrap().text);
    /// }
    /// ```
    pub fn open<P: AsRef<Path>>(
        path: P,
    ) -> Result<ReferenceLines<BufReader<File>>> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| RCidrLibError::from_file_access_error(path, e))?;
        debug!("opened reference file {}", path.display());
        Ok(ReferenceLines::new(BufReader::new(file)))
    }
}

/// Forward-only, finite iterator over the trimmed lines of a reference
///
/// A read failure is yielded once as [`RCidrLibError::ReadLine`] and ends the
/// sequence.
pub struct ReferenceLines<R: BufRead> {
    reader: R,
    buf: String,
    number: usize,
    done: bool,
}

impl<R: BufRead> ReferenceLines<R> {
    /// Wraps any buffered reader as a sequence of reference lines
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            number: 0,
            done: false,
        }
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.number
    }
}

impl<R: BufRead> Iterator for ReferenceLines<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();

        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.number += 1;
                Some(Ok(Line {
                    number: self.number,
                    text: self.buf.trim().to_string(),
                }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(RCidrLibError::ReadLine {
                    line: self.number + 1,
                    source: e,
                }))
            }
        }
    }
}

#[cfg(test)]
#[path = "./reference_tests.rs"]
mod tests;
