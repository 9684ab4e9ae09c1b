//! Tests a single candidate address against a sequence of reference entries
//!
//! The candidate is parsed once up front. Each reference line is then parsed
//! and checked on its own, in file order, so memory use does not grow with
//! the size of the reference.

use ipnet::IpNet;
use log::*;
use std::{net::IpAddr, str::FromStr};

use crate::{
    error::{RCidrLibError, Result},
    network,
    reference::Line,
    report::Reporter,
};

/// What to do with a reference entry that is not a valid network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryPolicy {
    /// Stop the scan and return the parse error
    #[default]
    Abort,
    /// Log a warning and move on to the next entry
    Skip,
}

/// A reference entry that contains the candidate address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// 1-based line number of the entry
    pub line: usize,
    /// The entry text as it appeared in the reference, trimmed
    pub text: String,
    /// The parsed network
    pub network: IpNet,
}

/// Counters collected over a completed scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Total lines read
    pub lines: usize,
    /// Lines that were empty after trimming
    pub blank: usize,
    /// Invalid entries skipped under [`EntryPolicy::Skip`]
    pub skipped: usize,
    /// Entries containing the candidate
    pub matched: usize,
}

enum Outcome {
    Blank,
    Skipped,
    Miss,
    Hit(Match),
}

/// Holds the parsed candidate address and the policy for invalid entries
///
/// # Examples
///
/// ```
/// # use std::io::Cursor;
/// # use r_cidrlib::matcher::Matcher;
/// # use r_cidrlib::reference::ReferenceLines;
/// let reference = "10.0.0.0/8\n192.168.1.0/24\n172.16.0.0/12\n";
/// let matcher = Matcher::parse("192.168.1.55").unwrap();
///
/// let found = matcher
///     .matches(ReferenceLines::new(Cursor::new(reference)))
///     .map(|m| m.unwrap().text)
///     .collect::<Vec<String>>();
///
/// assert_eq!(found, vec!["192.168.1.0/24"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    candidate: IpAddr,
    policy: EntryPolicy,
}

impl Matcher {
    /// Returns a new Matcher for an already parsed address
    pub fn new(candidate: IpAddr) -> Self {
        Self {
            candidate,
            policy: EntryPolicy::default(),
        }
    }

    /// Parses the candidate address and returns a new Matcher
    ///
    /// # Errors
    ///
    /// Returns [`RCidrLibError::AddressParse`] if the text is not a valid IPv4
    /// or IPv6 address
    pub fn parse(candidate: &str) -> Result<Self> {
        let ip = IpAddr::from_str(candidate).map_err(|e| {
            RCidrLibError::from_net_addr_parse_error(candidate, e)
        })?;
        Ok(Self::new(ip))
    }

    /// Sets the policy applied to invalid reference entries
    pub fn with_policy(mut self, policy: EntryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The candidate address being tested
    pub fn candidate(&self) -> IpAddr {
        self.candidate
    }

    /// The policy applied to invalid reference entries
    pub fn policy(&self) -> EntryPolicy {
        self.policy
    }

    /// Returns true if the candidate lies within the network, first and last
    /// addresses included. Networks of the other address family never
    /// contain the candidate.
    pub fn contains(&self, network: &IpNet) -> bool {
        network.contains(&self.candidate)
    }

    fn evaluate(&self, line: Line) -> Result<Outcome> {
        if line.is_blank() {
            debug!("line {}: blank, skipping", line.number);
            return Ok(Outcome::Blank);
        }

        let network = match network::parse_entry(&line.text) {
            Ok(net) => net,
            Err(e) => {
                let err = RCidrLibError::from_entry_error(
                    line.number,
                    &line.text,
                    e,
                );
                return match self.policy {
                    EntryPolicy::Abort => Err(err),
                    EntryPolicy::Skip => {
                        warn!("skipping {}", err);
                        Ok(Outcome::Skipped)
                    }
                };
            }
        };

        if !self.contains(&network) {
            return Ok(Outcome::Miss);
        }

        debug!("line {}: {} contains {}", line.number, line.text, self.candidate);

        Ok(Outcome::Hit(Match {
            line: line.number,
            text: line.text,
            network,
        }))
    }

    /// Lazily yields every entry containing the candidate, in order
    ///
    /// The first error ends the sequence.
    pub fn matches<I>(&self, lines: I) -> Matches<I::IntoIter>
    where
        I: IntoIterator<Item = Result<Line>>,
    {
        Matches {
            matcher: *self,
            lines: lines.into_iter(),
            failed: false,
        }
    }

    /// Runs the full scan, handing each match to `reporter` as soon as it is
    /// found
    ///
    /// # Errors
    ///
    /// Returns the first read, parse (under [`EntryPolicy::Abort`]) or report
    /// error. Matches reported before the error stay reported.
    pub fn scan<I, R>(&self, lines: I, reporter: &mut R) -> Result<ScanSummary>
    where
        I: IntoIterator<Item = Result<Line>>,
        R: Reporter + ?Sized,
    {
        let mut summary = ScanSummary::default();

        for line in lines {
            let line = line?;
            summary.lines += 1;

            match self.evaluate(line)? {
                Outcome::Blank => summary.blank += 1,
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Miss => {}
                Outcome::Hit(m) => {
                    reporter.report(&m)?;
                    summary.matched += 1;
                }
            }
        }

        debug!("scan complete: {:?}", summary);

        Ok(summary)
    }
}

/// Iterator returned by [`Matcher::matches`]
pub struct Matches<I> {
    matcher: Matcher,
    lines: I,
    failed: bool,
}

impl<I> Iterator for Matches<I>
where
    I: Iterator<Item = Result<Line>>,
{
    type Item = Result<Match>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for line in self.lines.by_ref() {
            let outcome = line.and_then(|l| self.matcher.evaluate(l));

            match outcome {
                Ok(Outcome::Hit(m)) => return Some(Ok(m)),
                Ok(_) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "./matcher_tests.rs"]
mod tests;
