//! Library package for finding which networks in a reference file contain an
//! IP address
//!
//! A reference file lists one network per line in CIDR notation
//! (`192.168.1.0/24`, `2001:db8::/32`). The file is read lazily, one line at a
//! time, and every entry containing the candidate address is reported in file
//! order.
//!
//! # Examples
//!
//! ## Lookup
//!
//! Reads `example.db` from the working directory, see `examples/lookup.rs`.
//!
//! ```bash
//! cargo run --example lookup -p r-cidrlib -- 192.168.1.55
//! ```

#![deny(missing_docs)]
pub mod classify;
pub mod error;
pub mod matcher;
pub mod network;
pub mod reference;
pub mod report;
