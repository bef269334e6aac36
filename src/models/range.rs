//! Inclusive range of IP addresses of one family.

use num_bigint::BigUint;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::net::IpAddr;
use std::str::FromStr;

use super::addr::{addr_to_u128, next_addr, same_family};
use crate::error::SyntaxError;
use crate::processing::parse_range;

/// Address family of a [`Range`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Inclusive `[start, end]` range of addresses.
///
/// Both ends share a family and `start <= end`; [`Range::new`] refuses
/// anything else, so every `Range` value is well formed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    start: IpAddr,
    end: IpAddr,
}

impl Range {
    /// Create a new [`Range`].
    ///
    /// Returns `None` when the addresses have different families or `start > end`.
    ///
    /// ```
    /// use iprange::Range;
    /// let start = "192.0.2.1".parse().unwrap();
    /// let end = "192.0.2.10".parse().unwrap();
    /// assert!(Range::new(start, end).is_some());
    /// assert!(Range::new(end, start).is_none());
    /// ```
    pub fn new(start: IpAddr, end: IpAddr) -> Option<Range> {
        if !same_family(start, end) || start > end {
            return None;
        }
        Some(Range { start, end })
    }

    pub fn start(&self) -> IpAddr {
        self.start
    }

    pub fn end(&self) -> IpAddr {
        self.end
    }

    pub fn family(&self) -> Family {
        if self.start.is_ipv6() {
            Family::V6
        } else {
            Family::V4
        }
    }

    /// True if `ip` lies within the range. Addresses of the other family never do.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        same_family(self.start, *ip) && self.start <= *ip && *ip <= self.end
    }

    /// Number of addresses in the range, `end - start + 1`.
    ///
    /// A full IPv6 range holds 2^128 addresses, one more than `u128` can count.
    pub fn size(&self) -> BigUint {
        BigUint::from(addr_to_u128(self.end) - addr_to_u128(self.start)) + 1u32
    }

    /// Lazily iterate over every address in the range, ascending.
    pub fn addrs(&self) -> Addrs {
        Addrs {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// Lazily iterate over every address in the range as text, ascending.
    ///
    /// Nothing bounds the iteration: a `/8` yields about sixteen million
    /// strings and an IPv6 `/64` will never finish. Use [`Iterator::take`]
    /// or check [`Range::size`] first.
    pub fn ips(&self) -> Ips {
        Ips {
            inner: self.addrs(),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for Range {
    type Err = SyntaxError;

    /// Parse any form accepted by [`parse_range`]. Empty input is an error here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)?.ok_or_else(|| SyntaxError::new(s.trim().to_lowercase()))
    }
}

impl Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Range, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Range::from_str(&s).map_err(de::Error::custom)
    }
}

/// Iterator over the addresses of a [`Range`], returned by [`Range::addrs`].
#[derive(Debug, Clone)]
pub struct Addrs {
    next: Option<IpAddr>,
    end: IpAddr,
}

impl Iterator for Addrs {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        let current = self.next?;
        self.next = if current == self.end {
            None
        } else {
            next_addr(current)
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map(|next| (addr_to_u128(self.end) - addr_to_u128(next)).checked_add(1))
            .unwrap_or(Some(0))
            .and_then(|n| usize::try_from(n).ok());
        match remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Addrs {}

/// Iterator over the addresses of a [`Range`] as strings, returned by [`Range::ips`].
#[derive(Debug, Clone)]
pub struct Ips {
    inner: Addrs,
}

impl Iterator for Ips {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next().map(|ip| ip.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Ips {}
