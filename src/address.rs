//! IP literal validation.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Address family of an IP literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// Dotted-quad IPv4 (`203.0.113.5`).
    V4,
    /// IPv6 in standard presentation format (`2001:db8::1`).
    V6,
}

impl AddressFamily {
    /// Returns `true` if `text` is a literal address of this family.
    ///
    /// Only syntax is checked: no name resolution, no reachability.
    /// Zone-scoped IPv6 (`fe80::1%eth0`) and surrounding whitespace are
    /// rejected.
    ///
    /// ```
    /// use ffdns_genconfig::AddressFamily;
    ///
    /// assert!(AddressFamily::V4.is_valid("203.0.113.5"));
    /// assert!(!AddressFamily::V4.is_valid("2001:db8::1"));
    /// assert!(AddressFamily::V6.is_valid("2001:db8::1"));
    /// ```
    #[must_use]
    pub fn is_valid(self, text: &str) -> bool {
        classify(text) == Some(self)
    }

    /// Name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V4 => "v4",
            Self::V6 => "v6",
        }
    }
}

/// Parses `text` as an IP literal and reports its family, or `None` if it
/// is not one.
#[must_use]
pub fn classify(text: &str) -> Option<AddressFamily> {
    if text.parse::<Ipv4Addr>().is_ok() {
        Some(AddressFamily::V4)
    } else if text.parse::<Ipv6Addr>().is_ok() {
        Some(AddressFamily::V6)
    } else {
        None
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
