//! Value types for IP ranges.
//!
//! - [`Range`] - inclusive range of addresses of one [`Family`]
//! - [`Prefix`] - address with a CIDR prefix length
//! - address helpers and subnet mask conversion

mod addr;
mod mask;
mod prefix;
mod range;

// Re-export public types
pub use addr::{
    addr_from_u128, addr_to_u128, host_mask, max_length, next_addr, prev_addr, same_family,
    V4_MAX_LENGTH, V6_MAX_LENGTH,
};
pub use mask::ipv4_mask_to_prefix;
pub use prefix::Prefix;
pub use range::{Addrs, Family, Ips, Range};
