//! Token classification.
//!
//! The accepted forms share characters (an IPv4 address matches the range
//! shape as well as the front of a CIDR), so the checks run in a fixed order
//! and the first match wins.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // addr | addr-addr
    static ref RANGE_SHAPE: Regex = Regex::new(r"^[0-9a-f.:-]+$").expect("range shape regex");
    // addr/prefix_length
    static ref CIDR_SHAPE: Regex =
        Regex::new(r"^[0-9a-f.:]+/[0-9]{1,3}$").expect("cidr shape regex");
    // v4_addr/mask
    static ref SUBNET_MASK_SHAPE: Regex =
        Regex::new(r"^[0-9.]+/[0-9.]{7,}$").expect("subnet mask shape regex");
}

/// Textual form of a range token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A single address or `start-end`.
    Range,
    /// `addr/len`.
    Cidr,
    /// IPv4 only, `addr/255.255.255.0`.
    SubnetMask,
}

/// Classify a trimmed, lower-cased token. `None` means no form matches.
///
/// A token is only checked against its shape here; the address text
/// itself is validated by the parser.
///
/// ```
/// use iprange::processing::{classify, Shape};
/// assert_eq!(classify("192.0.2.0-192.0.2.10"), Some(Shape::Range));
/// assert_eq!(classify("2001:db8::/64"), Some(Shape::Cidr));
/// assert_eq!(classify("192.0.2.0/255.255.255.0"), Some(Shape::SubnetMask));
/// assert_eq!(classify("not an ip"), None);
/// ```
pub fn classify(token: &str) -> Option<Shape> {
    let shape = if RANGE_SHAPE.is_match(token) {
        Some(Shape::Range)
    } else if CIDR_SHAPE.is_match(token) {
        Some(Shape::Cidr)
    } else if SUBNET_MASK_SHAPE.is_match(token) {
        Some(Shape::SubnetMask)
    } else {
        None
    };
    log::trace!("token {} classified as {:?}", token, shape);
    shape
}
