//! Option filters.
//!
//! A filter sees every `option=value` pair of every source file before the
//! pair is accepted. Filters are combined with logical AND: a pair survives
//! only if all of them accept it.

use crate::address::AddressFamily;

/// Predicate over a parsed `option=value` pair.
///
/// Closures of type `Fn(&str, &str) -> bool` implement this trait:
///
/// ```
/// use ffdns_genconfig::OptionFilter;
///
/// let no_loopback = |option: &str, value: &str| option != "server" || value != "127.0.0.1";
/// assert!(no_loopback.accept("server", "10.0.0.1"));
/// assert!(!no_loopback.accept("server", "127.0.0.1"));
/// ```
pub trait OptionFilter {
    /// Returns `true` to keep the pair.
    fn accept(&self, option: &str, value: &str) -> bool;
}

impl<F> OptionFilter for F
where
    F: Fn(&str, &str) -> bool,
{
    fn accept(&self, option: &str, value: &str) -> bool {
        self(option, value)
    }
}

/// Keeps only `server` values that are literals of one address family.
///
/// Every other option passes untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFamilyFilter(pub AddressFamily);

impl OptionFilter for AddressFamilyFilter {
    fn accept(&self, option: &str, value: &str) -> bool {
        option != "server" || self.0.is_valid(value)
    }
}

/// Ordered list of filters combined by conjunction.
///
/// An empty chain accepts everything.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn OptionFilter>>,
}

impl FilterChain {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Appends a filter.
    pub fn push(&mut self, filter: impl OptionFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Returns `true` if every filter accepts the pair.
    #[must_use]
    pub fn accept(&self, option: &str, value: &str) -> bool {
        self.filters.iter().all(|f| f.accept(option, value))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("len", &self.filters.len())
            .finish()
    }
}

impl FromIterator<AddressFamily> for FilterChain {
    fn from_iter<I: IntoIterator<Item = AddressFamily>>(iter: I) -> Self {
        let mut chain = Self::new();
        for family in iter {
            chain.push(AddressFamilyFilter(family));
        }
        chain
    }
}
