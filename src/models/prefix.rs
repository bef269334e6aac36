//! Address with a CIDR prefix length.
//!
//! Provides [`Prefix`] for both families, and the host-range reduction used
//! when a CIDR block is turned into a [`Range`].

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use super::addr::{addr_from_u128, addr_to_u128, host_mask, max_length, next_addr, prev_addr};
use super::Range;
use crate::error::SyntaxError;

/// IP address with CIDR notation support, e.g. `192.0.2.0/24` or `2001:db8::/64`.
///
/// The address may have host bits set; [`Prefix::lo`] and [`Prefix::hi`] mask them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Prefix {
    addr: IpAddr,
    len: u8,
}

impl Prefix {
    /// Create a new [`Prefix`], checking `len` against the width of the address family.
    pub fn new(addr: IpAddr, len: u8) -> Result<Prefix, SyntaxError> {
        if len > max_length(addr) {
            return Err(SyntaxError::new(format!("{}/{}", addr, len)));
        }
        Ok(Prefix { addr, len })
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// The prefix length.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Bit width of the address family (32 or 128).
    pub fn max_len(&self) -> u8 {
        max_length(self.addr)
    }

    fn host_mask(&self) -> u128 {
        host_mask(self.max_len() - self.len)
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> IpAddr {
        addr_from_u128(self.addr, addr_to_u128(self.addr) & !self.host_mask())
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> IpAddr {
        addr_from_u128(self.addr, addr_to_u128(self.addr) | self.host_mask())
    }

    /// The addresses of the block usable by hosts.
    ///
    /// Blocks of more than two addresses lose their network and broadcast
    /// address. `/31`, `/32`, `/127` and `/128` keep their full span.
    pub fn host_range(&self) -> Option<Range> {
        let (lo, hi) = (self.lo(), self.hi());
        match (next_addr(lo), prev_addr(hi)) {
            (Some(first), Some(last)) if first <= last => {
                log::trace!("{} reduced to hosts {}-{}", self, first, last);
                Range::new(first, last)
            }
            _ => {
                log::trace!("{} too small to reduce, keeping {}-{}", self, lo, hi);
                Range::new(lo, hi)
            }
        }
    }
}

impl FromStr for Prefix {
    type Err = SyntaxError;

    /// Parse `"<addr>/<len>"` where `len` is one to three decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SyntaxError::new(s);
        let (addr, len) = s.split_once('/').ok_or_else(invalid)?;
        if len.is_empty() || len.len() > 3 || !len.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let addr: IpAddr = addr.parse().map_err(|_| invalid())?;
        let len: u8 = len.parse().map_err(|_| invalid())?;
        Prefix::new(addr, len).map_err(|_| invalid())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::from_str(&s).map_err(de::Error::custom)
    }
}
