//! Parse textual IP ranges into [`Range`] values.
//!
//! A token may be a single address, an explicit `start-end` range, a CIDR
//! block or an IPv4 address with a dotted subnet mask, for IPv4 and IPv6:
//!
//! ```
//! use iprange::parse_range;
//!
//! let range = parse_range("192.0.2.0/255.255.255.0").unwrap().unwrap();
//! assert_eq!(range.to_string(), "192.0.2.1-192.0.2.254");
//! assert!(range.contains(&"192.0.2.42".parse().unwrap()));
//! assert_eq!(range.ips().take(2).collect::<Vec<_>>(), ["192.0.2.1", "192.0.2.2"]);
//! ```

mod error;
pub mod models;
pub mod processing;

pub use error::SyntaxError;
pub use models::{Addrs, Family, Ips, Prefix, Range};
pub use processing::{parse_range, parse_ranges};
