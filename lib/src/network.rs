//! Provides helpers for parsing reference entries into networks and
//! describing the address range they cover

use ipnet::IpNet;
use serde::Serialize;
use std::{net::IpAddr, str::FromStr};
use thiserror::Error;

/// Reasons a reference entry is not a valid network
#[derive(Error, Debug)]
pub enum EntryError {
    /// The text is not CIDR notation or an IP address
    #[error(transparent)]
    Syntax(#[from] ipnet::AddrParseError),

    /// The address has bits set below the prefix length
    #[error("{entry} has host bits set, expected {network}")]
    HostBitsSet {
        /// The network as written
        entry: IpNet,
        /// The network with host bits cleared
        network: IpNet,
    },
}

fn serialize_to_string<S, T>(val: &T, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: std::fmt::Display,
{
    s.serialize_str(&val.to_string())
}

/// Parses a trimmed reference entry into a network
///
/// Entries are normally in CIDR notation. A bare address with no prefix is
/// accepted as a single host network (/32 or /128).
///
/// # Errors
///
/// Returns [`EntryError::Syntax`] if the text is neither a CIDR network nor an
/// IP address, and [`EntryError::HostBitsSet`] if the address has bits set
/// below the prefix (`10.20.30.40/24`)
///
/// # Examples
///
/// ```
/// # use r_cidrlib::network::parse_entry;
/// let net = parse_entry("192.168.1.0/24").unwrap();
/// assert_eq!(net.prefix_len(), 24);
///
/// let host = parse_entry("10.0.0.1").unwrap();
/// assert_eq!(host.prefix_len(), 32);
/// ```
pub fn parse_entry(entry: &str) -> Result<IpNet, EntryError> {
    if !entry.contains('/') {
        // keep the ipnet error type for bare addresses that fail to parse
        return match IpAddr::from_str(entry) {
            Ok(ip) => Ok(IpNet::from(ip)),
            Err(_) => Ok(IpNet::from_str(entry)?),
        };
    }

    let net = IpNet::from_str(entry)?;
    let network = net.trunc();

    if net != network {
        return Err(EntryError::HostBitsSet {
            entry: net,
            network,
        });
    }

    Ok(net)
}

/// Returns the number of addresses in the network, network and last
/// addresses included. Saturates at `u128::MAX` for `::/0`.
pub fn address_count(net: &IpNet) -> u128 {
    let host_bits = u32::from(net.max_prefix_len() - net.prefix_len());
    1u128.checked_shl(host_bits).unwrap_or(u128::MAX)
}

/// Describes the full address range covered by a network entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDetails {
    /// The network in CIDR notation
    #[serde(serialize_with = "serialize_to_string")]
    pub cidr: IpNet,
    /// First address of the range
    pub network: IpAddr,
    /// Last address of the range (the broadcast address for IPv4)
    pub last: IpAddr,
    /// Subnet mask
    pub netmask: IpAddr,
    /// Host mask (inverse of the subnet mask)
    pub hostmask: IpAddr,
    /// Prefix length
    pub prefix_len: u8,
    /// Number of addresses in the range
    pub size: u128,
}

impl From<&IpNet> for NetworkDetails {
    fn from(net: &IpNet) -> Self {
        Self {
            cidr: *net,
            network: net.network(),
            last: net.broadcast(),
            netmask: net.netmask(),
            hostmask: net.hostmask(),
            prefix_len: net.prefix_len(),
            size: address_count(net),
        }
    }
}

#[cfg(test)]
#[path = "./network_tests.rs"]
mod tests;
