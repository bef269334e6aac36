//! Address arithmetic shared by [`Range`](super::Range) and [`Prefix`](super::Prefix).
//!
//! Addresses are plain [`IpAddr`] values. IPv4 and IPv6 are never mixed:
//! every helper keeps the family of its input.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Maximum prefix length for an IPv4 address (32 bits).
pub const V4_MAX_LENGTH: u8 = 32;
/// Maximum prefix length for an IPv6 address (128 bits).
pub const V6_MAX_LENGTH: u8 = 128;

/// Bit width of the family of `addr`.
pub fn max_length(addr: IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => V4_MAX_LENGTH,
        IpAddr::V6(_) => V6_MAX_LENGTH,
    }
}

/// True if both addresses belong to the same family.
pub fn same_family(a: IpAddr, b: IpAddr) -> bool {
    a.is_ipv4() == b.is_ipv4()
}

/// Ordinal value of an address.
pub fn addr_to_u128(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Build an address of the same family as `family` from its ordinal value.
///
/// For IPv4 only the low 32 bits of `bits` are used.
pub fn addr_from_u128(family: IpAddr, bits: u128) -> IpAddr {
    match family {
        IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::from(bits as u32)),
        IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::from(bits)),
    }
}

/// The address following `addr`, or `None` at the top of the family.
pub fn next_addr(addr: IpAddr) -> Option<IpAddr> {
    match addr {
        IpAddr::V4(v4) => u32::from(v4)
            .checked_add(1)
            .map(|bits| IpAddr::V4(Ipv4Addr::from(bits))),
        IpAddr::V6(v6) => u128::from(v6)
            .checked_add(1)
            .map(|bits| IpAddr::V6(Ipv6Addr::from(bits))),
    }
}

/// The address preceding `addr`, or `None` at the bottom of the family.
pub fn prev_addr(addr: IpAddr) -> Option<IpAddr> {
    match addr {
        IpAddr::V4(v4) => u32::from(v4)
            .checked_sub(1)
            .map(|bits| IpAddr::V4(Ipv4Addr::from(bits))),
        IpAddr::V6(v6) => u128::from(v6)
            .checked_sub(1)
            .map(|bits| IpAddr::V6(Ipv6Addr::from(bits))),
    }
}

/// Mask with the lowest `host_bits` bits set.
///
/// ```
/// use iprange::models::host_mask;
/// assert_eq!(host_mask(8), 0xFF);
/// assert_eq!(host_mask(0), 0);
/// assert_eq!(host_mask(128), u128::MAX);
/// ```
pub fn host_mask(host_bits: u8) -> u128 {
    let shift = 128u32.saturating_sub(u32::from(host_bits));
    u128::MAX.checked_shr(shift).unwrap_or(0)
}
