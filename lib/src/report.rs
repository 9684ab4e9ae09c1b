//! Sinks that receive matches as soon as they are found
//!
//! Reporters flush after every match so output stays visible even if a later
//! reference entry aborts the scan.

#[cfg(test)]
use mockall::automock;

use serde::Serialize;
use std::io::Write;

use crate::{error::Result, matcher::Match, network::NetworkDetails};

#[cfg_attr(test, automock)]
/// Trait used by the matcher to emit matches
pub trait Reporter {
    /// Emits a single match
    fn report(&mut self, m: &Match) -> Result<()>;
}

/// Writes the matching entry text verbatim, one per line
pub struct PlainReporter<W: Write> {
    out: W,
}

impl<W: Write> PlainReporter<W> {
    /// Returns a new instance of PlainReporter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for PlainReporter<W> {
    fn report(&mut self, m: &Match) -> Result<()> {
        writeln!(self.out, "{}", m.text)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonMatch<'a> {
    entry: &'a str,
    line: usize,
    details: NetworkDetails,
}

/// Writes one JSON object per match, one per line
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    /// Returns a new instance of JsonReporter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, m: &Match) -> Result<()> {
        let record = JsonMatch {
            entry: &m.text,
            line: m.line,
            details: NetworkDetails::from(&m.network),
        };
        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./report_tests.rs"]
mod tests;
