//! Classifies addresses against the IANA special-purpose registries
//!
//! An address may belong to several classes at once, e.g. `127.0.0.1` is both
//! [`AddressClass::Loopback`] and [`AddressClass::Private`]. Every address is
//! either [`AddressClass::Global`] or one of private / shared.

use ipnet::{Ipv4Net, Ipv6Net};
use itertools::Itertools;
use serde::Serialize;
use std::{
    fmt::Display,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

const V4_UNSPECIFIED: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::UNSPECIFIED, 32);
const V4_LOOPBACK: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(127, 0, 0, 0), 8);
const V4_LINK_LOCAL: Ipv4Net =
    Ipv4Net::new_assert(Ipv4Addr::new(169, 254, 0, 0), 16);
const V4_MULTICAST: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(224, 0, 0, 0), 4);
const V4_RESERVED: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(240, 0, 0, 0), 4);
// RFC 6598 carrier-grade NAT space
const V4_SHARED: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(100, 64, 0, 0), 10);

const V4_PRIVATE: [Ipv4Net; 14] = [
    Ipv4Net::new_assert(Ipv4Addr::new(0, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(127, 0, 0, 0), 8),
    Ipv4Net::new_assert(Ipv4Addr::new(240, 0, 0, 0), 4),
    Ipv4Net::new_assert(Ipv4Addr::new(255, 255, 255, 255), 32),
    Ipv4Net::new_assert(Ipv4Addr::new(169, 254, 0, 0), 16),
    Ipv4Net::new_assert(Ipv4Addr::new(172, 16, 0, 0), 12),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 0, 0, 0), 29),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 0, 0, 170), 31),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 0, 2, 0), 24),
    Ipv4Net::new_assert(Ipv4Addr::new(192, 168, 0, 0), 16),
    Ipv4Net::new_assert(Ipv4Addr::new(198, 18, 0, 0), 15),
    Ipv4Net::new_assert(Ipv4Addr::new(198, 51, 100, 0), 24),
    Ipv4Net::new_assert(Ipv4Addr::new(203, 0, 113, 0), 24),
];

const V6_UNSPECIFIED: Ipv6Net = Ipv6Net::new_assert(Ipv6Addr::UNSPECIFIED, 128);
const V6_LOOPBACK: Ipv6Net = Ipv6Net::new_assert(Ipv6Addr::LOCALHOST, 128);
const V6_LINK_LOCAL: Ipv6Net =
    Ipv6Net::new_assert(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0), 10);
const V6_MULTICAST: Ipv6Net =
    Ipv6Net::new_assert(Ipv6Addr::new(0xff00, 0, 0, 0, 0, 0, 0, 0), 8);

const V6_PRIVATE: [Ipv6Net; 5] = [
    V6_UNSPECIFIED,
    V6_LOOPBACK,
    V6_LINK_LOCAL,
    Ipv6Net::new_assert(Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 0), 7),
    Ipv6Net::new_assert(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0), 32),
];

/// Special-purpose class an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressClass {
    /// `0.0.0.0` or `::`
    Unspecified,
    /// `127.0.0.0/8` or `::1`
    Loopback,
    /// `169.254.0.0/16` or `fe80::/10`
    LinkLocal,
    /// `224.0.0.0/4` or `ff00::/8`
    Multicast,
    /// `240.0.0.0/4`
    Reserved,
    /// Shared address space `100.64.0.0/10`
    Shared,
    /// Listed as not globally reachable in the special-purpose registry
    Private,
    /// Neither private nor shared
    Global,
}

impl Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AddressClass::Unspecified => "unspecified",
            AddressClass::Loopback => "loopback",
            AddressClass::LinkLocal => "link-local",
            AddressClass::Multicast => "multicast",
            AddressClass::Reserved => "reserved",
            AddressClass::Shared => "shared",
            AddressClass::Private => "private",
            AddressClass::Global => "global",
        };
        write!(f, "{label}")
    }
}

/// Unwraps IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) so they are
/// classified by their IPv4 ranges
fn canonical(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6
            .to_ipv4_mapped()
            .map(IpAddr::V4)
            .unwrap_or(IpAddr::V6(v6)),
        v4 => v4,
    }
}

/// Returns true if the address is in the special-purpose registry as not
/// globally reachable
pub fn is_private(ip: IpAddr) -> bool {
    match canonical(ip) {
        IpAddr::V4(v4) => V4_PRIVATE.iter().any(|n| n.contains(&v4)),
        IpAddr::V6(v6) => V6_PRIVATE.iter().any(|n| n.contains(&v6)),
    }
}

/// Returns true if the address is in the shared address space
pub fn is_shared(ip: IpAddr) -> bool {
    match canonical(ip) {
        IpAddr::V4(v4) => V4_SHARED.contains(&v4),
        IpAddr::V6(_) => false,
    }
}

/// Returns true if the address is neither private nor shared
pub fn is_global(ip: IpAddr) -> bool {
    !is_private(ip) && !is_shared(ip)
}

/// Returns every class the address belongs to, most specific first
///
/// # Examples
///
/// ```
/// # use r_cidrlib::classify::{classify, AddressClass};
/// let classes = classify("127.0.0.1".parse().unwrap());
/// assert_eq!(classes, vec![AddressClass::Loopback, AddressClass::Private]);
/// ```
pub fn classify(ip: IpAddr) -> Vec<AddressClass> {
    let ip = canonical(ip);

    let mut classes = match ip {
        IpAddr::V4(v4) => [
            (AddressClass::Unspecified, V4_UNSPECIFIED.contains(&v4)),
            (AddressClass::Loopback, V4_LOOPBACK.contains(&v4)),
            (AddressClass::LinkLocal, V4_LINK_LOCAL.contains(&v4)),
            (AddressClass::Multicast, V4_MULTICAST.contains(&v4)),
            (AddressClass::Reserved, V4_RESERVED.contains(&v4)),
        ],
        IpAddr::V6(v6) => [
            (AddressClass::Unspecified, V6_UNSPECIFIED.contains(&v6)),
            (AddressClass::Loopback, V6_LOOPBACK.contains(&v6)),
            (AddressClass::LinkLocal, V6_LINK_LOCAL.contains(&v6)),
            (AddressClass::Multicast, V6_MULTICAST.contains(&v6)),
            (AddressClass::Reserved, false),
        ],
    }
    .into_iter()
    .filter_map(|(class, member)| member.then_some(class))
    .collect::<Vec<AddressClass>>();

    if is_shared(ip) {
        classes.push(AddressClass::Shared);
    }

    if is_private(ip) {
        classes.push(AddressClass::Private);
    } else if !is_shared(ip) {
        classes.push(AddressClass::Global);
    }

    classes
}

/// Renders classes as a comma separated list, e.g. `loopback, private`
pub fn describe(classes: &[AddressClass]) -> String {
    classes.iter().join(", ")
}

#[cfg(test)]
#[path = "./classify_tests.rs"]
mod tests;
