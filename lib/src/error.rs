//! Custom Error and Result types for this library

use std::{io, path::Path};
use thiserror::Error;

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum RCidrLibError {
    /// The reference file could not be opened
    #[error("failed to open reference file {path}: {source}")]
    FileAccess {
        /// Path of the reference file
        path: String,
        /// The underlying I/O error
        source: io::Error,
    },

    /// Reading a line from the reference file failed part way through
    #[error("failed to read reference line {line}: {source}")]
    ReadLine {
        /// 1-based number of the line that failed to read
        line: usize,
        /// The underlying I/O error
        source: io::Error,
    },

    /// The candidate address is not a valid IPv4 or IPv6 address
    #[error("invalid candidate address {input:?}: {error}")]
    AddressParse {
        /// The text that failed to parse
        input: String,
        /// The parse error message
        error: String,
    },

    /// A reference entry is not a valid CIDR network
    #[error("invalid network on line {line}: {entry:?}: {error}")]
    NetworkParse {
        /// 1-based line number of the entry
        line: usize,
        /// The trimmed entry text
        entry: String,
        /// The parse error message
        error: String,
    },

    /// A reporter failed to emit a match
    #[error("failed to report match: {_0}")]
    Report(String),
}

impl RCidrLibError {
    /// Converter for failures to open the reference file
    pub fn from_file_access_error(path: &Path, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.display().to_string(),
            source,
        }
    }

    /// Converter for std::net::AddrParseError
    pub fn from_net_addr_parse_error(
        input: &str,
        error: std::net::AddrParseError,
    ) -> Self {
        Self::AddressParse {
            input: input.to_string(),
            error: error.to_string(),
        }
    }

    /// Converter for reference entries that are not valid networks
    pub fn from_entry_error(
        line: usize,
        entry: &str,
        error: crate::network::EntryError,
    ) -> Self {
        Self::NetworkParse {
            line,
            entry: entry.to_string(),
            error: error.to_string(),
        }
    }
}

// I/O and serialization failures only surface while writing matches
impl From<io::Error> for RCidrLibError {
    fn from(value: io::Error) -> Self {
        Self::Report(value.to_string())
    }
}

impl From<serde_json::Error> for RCidrLibError {
    fn from(value: serde_json::Error) -> Self {
        Self::Report(value.to_string())
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`RCidrLibError`]
pub type Result<T> = std::result::Result<T, RCidrLibError>;
