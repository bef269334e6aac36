//! Parse range tokens into [`Range`] values.

use itertools::Itertools;
use std::net::IpAddr;

use super::shape::{classify, Shape};
use crate::error::SyntaxError;
use crate::models::{ipv4_mask_to_prefix, Prefix, Range};

/// Parse `s` as a whitespace separated list of IP ranges.
///
/// Every piece is parsed with [`parse_range`]. The first invalid piece fails
/// the whole list; empty input gives an empty list.
///
/// ```
/// use iprange::{parse_ranges, Family};
/// let ranges = parse_ranges("192.0.2.1 2001:db8::1").unwrap();
/// assert_eq!(ranges.len(), 2);
/// assert_eq!(ranges[0].family(), Family::V4);
/// assert_eq!(ranges[1].family(), Family::V6);
/// ```
pub fn parse_ranges(s: &str) -> Result<Vec<Range>, SyntaxError> {
    s.split_whitespace()
        .map(parse_range)
        .filter_map_ok(|range| range)
        .collect()
}

/// Parse `s` as an IP range.
///
/// Accepted forms, case-insensitive:
/// * IPv4 address (`192.0.2.1`) or IPv6 address (`2001:db8::1`)
/// * range (`192.0.2.0-192.0.2.10`, `2001:db8::-2001:db8::10`)
/// * CIDR (`192.0.2.0/24`, `2001:db8::/64`)
/// * IPv4 subnet mask (`192.0.2.0/255.255.255.0`)
///
/// CIDR and subnet mask ranges don't include the network and broadcast
/// addresses unless the block holds only one or two addresses.
///
/// Empty input gives `Ok(None)`.
///
/// ```
/// use iprange::parse_range;
/// let range = parse_range("10.0.0.0/30").unwrap().unwrap();
/// assert_eq!(range.to_string(), "10.0.0.1-10.0.0.2");
/// assert!(parse_range("10.0.0.5-10.0.0.3").is_err());
/// assert_eq!(parse_range("").unwrap(), None);
/// ```
pub fn parse_range(s: &str) -> Result<Option<Range>, SyntaxError> {
    let token = s.trim().to_lowercase();
    if token.is_empty() {
        return Ok(None);
    }

    let range = match classify(&token) {
        Some(Shape::Range) => parse_explicit_range(&token),
        Some(Shape::Cidr) => parse_cidr(&token),
        Some(Shape::SubnetMask) => parse_subnet_mask(&token),
        None => None,
    };

    match range {
        Some(range) => Ok(Some(range)),
        None => {
            log::debug!("Rejecting ip range token: {}", token);
            Err(SyntaxError::new(token))
        }
    }
}

/// `addr` or `addr-addr`, split at the first hyphen.
fn parse_explicit_range(token: &str) -> Option<Range> {
    match token.split_once('-') {
        Some((start, end)) => {
            let start: IpAddr = start.parse().ok()?;
            let end: IpAddr = end.parse().ok()?;
            Range::new(start, end)
        }
        None => {
            let addr: IpAddr = token.parse().ok()?;
            Range::new(addr, addr)
        }
    }
}

fn parse_cidr(token: &str) -> Option<Range> {
    let prefix: Prefix = token.parse().ok()?;
    prefix.host_range()
}

fn parse_subnet_mask(token: &str) -> Option<Range> {
    let (address, mask) = token.rsplit_once('/')?;
    let len = ipv4_mask_to_prefix(mask.parse().ok()?)?;
    parse_cidr(&format!("{}/{}", address, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Family;
    use num_bigint::BigUint;

    fn parse(s: &str) -> Range {
        parse_range(s)
            .unwrap_or_else(|e| panic!("{}: {}", s, e))
            .unwrap()
    }

    #[test]
    fn test_single_address() {
        let r = parse("192.0.2.1");
        assert_eq!(r.start(), r.end());
        assert_eq!(r.size(), BigUint::from(1u32));
        assert!(r.contains(&"192.0.2.1".parse().unwrap()));

        let r = parse("2001:DB8::1");
        assert_eq!(r.to_string(), "2001:db8::1-2001:db8::1");
        assert_eq!(r.family(), Family::V6);
    }

    #[test]
    fn test_explicit_range() {
        assert_eq!(parse("192.0.2.0-192.0.2.10").to_string(), "192.0.2.0-192.0.2.10");
        assert_eq!(parse("192.0.2.0-192.0.2.10").size(), BigUint::from(11u32));
        assert_eq!(
            parse("2001:db8::-2001:db8::10").to_string(),
            "2001:db8::-2001:db8::10"
        );
        assert_eq!(parse("10.0.0.1-10.0.0.1").size(), BigUint::from(1u32));
    }

    #[test]
    fn test_explicit_range_errors() {
        let bad = [
            "10.0.0.5-10.0.0.3",
            "10.0.0.1-::1",
            "10.0.0.1-",
            "-10.0.0.1",
            "-",
            "10.0.0.1-10.0.0.2-10.0.0.3",
            "10.0.0.1--10.0.0.2",
            "10.0.0.256",
            "deadbeef",
            "1.2.3",
            ":::",
        ];
        for token in bad {
            let err = parse_range(token).unwrap_err();
            assert_eq!(err.token, token);
        }
    }

    #[test]
    fn test_cidr() {
        assert_eq!(parse("10.0.0.0/30").to_string(), "10.0.0.1-10.0.0.2");
        assert_eq!(parse("10.0.0.0/30").size(), BigUint::from(2u32));
        assert_eq!(parse("10.0.0.0/31").to_string(), "10.0.0.0-10.0.0.1");
        assert_eq!(parse("10.0.0.0/31").size(), BigUint::from(2u32));
        assert_eq!(parse("10.0.0.7/32").to_string(), "10.0.0.7-10.0.0.7");
        assert_eq!(parse("192.0.2.77/24").to_string(), "192.0.2.1-192.0.2.254");
        assert_eq!(parse("0.0.0.0/0").to_string(), "0.0.0.1-255.255.255.254");
        assert_eq!(
            parse("2001:db8::/64").to_string(),
            "2001:db8::1-2001:db8::ffff:ffff:ffff:fffe"
        );
        assert_eq!(parse("2001:db8::/127").size(), BigUint::from(2u32));
        assert_eq!(parse("2001:db8::/128").size(), BigUint::from(1u32));
    }

    #[test]
    fn test_cidr_size_excludes_network_and_broadcast() {
        for len in 0..=30u32 {
            let r = parse(&format!("10.0.0.0/{}", len));
            let expected = (BigUint::from(1u32) << (32 - len) as usize) - 2u32;
            assert_eq!(r.size(), expected, "/{}", len);
        }
        for len in [0u32, 1, 64, 120, 126] {
            let r = parse(&format!("::/{}", len));
            let expected = (BigUint::from(1u32) << (128 - len) as usize) - 2u32;
            assert_eq!(r.size(), expected, "/{}", len);
        }
    }

    #[test]
    fn test_cidr_errors() {
        assert!(parse_range("10.0.0.0/33").is_err());
        assert!(parse_range("10.0.0.0/255").is_err());
        assert!(parse_range("2001:db8::/129").is_err());
        assert!(parse_range("10.0.0/24").is_err());
        assert!(parse_range("10.0.0.0/1234").is_err());
    }

    #[test]
    fn test_subnet_mask() {
        assert_eq!(parse("192.0.2.0/255.255.255.0"), parse("192.0.2.0/24"));
        assert_eq!(parse("10.0.0.0/255.255.255.252"), parse("10.0.0.0/30"));
        assert_eq!(parse("10.0.0.0/255.255.255.255"), parse("10.0.0.0/32"));
        assert_eq!(parse("10.1.2.3/0.0.0.0"), parse("0.0.0.0/0"));
    }

    #[test]
    fn test_subnet_mask_errors() {
        assert!(parse_range("192.0.2.0/255.0.255.0").is_err());
        assert!(parse_range("192.0.2.0/255.255.255.256").is_err());
        assert!(parse_range("192.0.2/255.255.255.0").is_err());
        assert!(parse_range("192.0.2.0/255.255.255.0.0").is_err());
    }

    #[test]
    fn test_unrecognized() {
        let err = parse_range("not-an-ip").unwrap_err();
        assert_eq!(err.to_string(), "ip range (not-an-ip) invalid syntax");
        assert!(parse_range("192.0.2.0_24").is_err());
        assert!(parse_range("fe80::1%eth0").is_err());
    }

    #[test]
    fn test_empty_and_case() {
        assert_eq!(parse_range("").unwrap(), None);
        assert_eq!(parse_range("   ").unwrap(), None);
        assert_eq!(parse(" 2001:DB8::/126 ").to_string(), "2001:db8::1-2001:db8::2");
        assert_eq!(parse_range("NOT-AN-IP").unwrap_err().token, "not-an-ip");
    }

    #[test]
    fn test_parse_ranges() {
        let ranges = parse_ranges("192.0.2.1 2001:db8::1").unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].family(), Family::V4);
        assert_eq!(ranges[1].family(), Family::V6);

        let ranges = parse_ranges("\t10.0.0.0/30\n 10.0.1.0-10.0.1.5  ").unwrap();
        assert_eq!(
            ranges.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
            vec!["10.0.0.1-10.0.0.2", "10.0.1.0-10.0.1.5"]
        );

        assert!(parse_ranges("").unwrap().is_empty());
        assert!(parse_ranges(" \n\t ").unwrap().is_empty());

        let err = parse_ranges("10.0.0.1 bogus 10.0.0.2-10.0.0.1").unwrap_err();
        assert_eq!(err.token, "bogus");
    }
}
