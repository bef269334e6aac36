//! Dotted-decimal subnet mask conversion.

use std::net::Ipv4Addr;

/// Convert an IPv4 subnet mask such as `255.255.255.0` into its prefix length.
///
/// Returns `None` when the one-bits of the mask are not contiguous.
///
/// ```
/// use iprange::models::ipv4_mask_to_prefix;
/// assert_eq!(ipv4_mask_to_prefix("255.255.255.0".parse().unwrap()), Some(24));
/// assert_eq!(ipv4_mask_to_prefix("255.0.255.0".parse().unwrap()), None);
/// ```
pub fn ipv4_mask_to_prefix(mask: Ipv4Addr) -> Option<u8> {
    let mask = u32::from(mask);

    let prefix = mask.leading_ones();
    if mask.checked_shl(prefix).unwrap_or(0) == 0 {
        Some(prefix as u8)
    } else {
        None
    }
}
