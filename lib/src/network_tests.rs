use std::net::{Ipv4Addr, Ipv6Addr};

use super::*;

#[test]
fn parses_ipv4_cidr_entry() {
    let net = parse_entry("192.168.1.0/24").unwrap();
    assert_eq!(net.network(), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 0)));
    assert_eq!(net.prefix_len(), 24);
}

#[test]
fn parses_ipv6_cidr_entry() {
    let net = parse_entry("2001:db8::/32").unwrap();
    assert_eq!(
        net.network(),
        IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0))
    );
    assert_eq!(net.prefix_len(), 32);
}

#[test]
fn parses_bare_address_as_host_network() {
    let v4 = parse_entry("10.0.0.1").unwrap();
    assert_eq!(v4.prefix_len(), 32);

    let v6 = parse_entry("::1").unwrap();
    assert_eq!(v6.prefix_len(), 128);
}

#[test]
fn rejects_host_bits_below_prefix() {
    match parse_entry("10.20.30.40/24") {
        Err(EntryError::HostBitsSet { entry, network }) => {
            assert_eq!(entry.to_string(), "10.20.30.40/24");
            assert_eq!(network.to_string(), "10.20.30.0/24");
        }
        other => panic!("expected host bits error, got {:?}", other),
    }

    assert!(matches!(
        parse_entry("2001:db8::1/32"),
        Err(EntryError::HostBitsSet { .. })
    ));
}

#[test]
fn describes_range_bounds() {
    let details = NetworkDetails::from(&parse_entry("10.20.30.0/24").unwrap());
    assert_eq!(details.cidr.to_string(), "10.20.30.0/24");
    assert_eq!(details.network, IpAddr::V4(Ipv4Addr::new(10, 20, 30, 0)));
    assert_eq!(details.last, IpAddr::V4(Ipv4Addr::new(10, 20, 30, 255)));
}

#[test]
fn returns_error_for_malformed_entry() {
    assert!(parse_entry("not-a-cidr").is_err());
    assert!(parse_entry("").is_err());
    assert!(parse_entry("10.0.0.0/33").is_err());
    assert!(parse_entry("10.0.0/8").is_err());
    assert!(parse_entry("no/pe").is_err());
    assert!(matches!(parse_entry("not-a-cidr"), Err(EntryError::Syntax(_))));
}

#[test]
fn counts_addresses_in_range() {
    assert_eq!(address_count(&parse_entry("10.20.30.0/24").unwrap()), 256);
    assert_eq!(address_count(&parse_entry("10.0.0.1/32").unwrap()), 1);
    assert_eq!(address_count(&parse_entry("0.0.0.0/0").unwrap()), 1 << 32);
    assert_eq!(address_count(&parse_entry("2001:db8::/64").unwrap()), 1 << 64);
    assert_eq!(address_count(&parse_entry("::/0").unwrap()), u128::MAX);
}

#[test]
fn describes_ipv4_network() {
    let details = NetworkDetails::from(&parse_entry("10.20.30.0/24").unwrap());
    assert_eq!(details.netmask, IpAddr::V4(Ipv4Addr::new(255, 255, 255, 0)));
    assert_eq!(details.hostmask, IpAddr::V4(Ipv4Addr::new(0, 0, 0, 255)));
    assert_eq!(details.prefix_len, 24);
    assert_eq!(details.size, 256);
}

#[test]
fn serializes_details_to_json() {
    let details = NetworkDetails::from(&parse_entry("192.168.1.0/30").unwrap());
    let value = serde_json::to_value(&details).unwrap();
    assert_eq!(value["cidr"], "192.168.1.0/30");
    assert_eq!(value["network"], "192.168.1.0");
    assert_eq!(value["last"], "192.168.1.3");
    assert_eq!(value["netmask"], "255.255.255.252");
    assert_eq!(value["size"], 4);
}
