//! Generation run parameters.

use crate::address::AddressFamily;
use crate::formatter::ConfigFormat;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Default directory holding the source files.
pub const DEFAULT_SOURCE_DIR: &str = "data";

/// Parameters for one generation run.
///
/// # Example
///
/// ```
/// use ffdns_genconfig::{AddressFamily, ConfigFormat, GeneratorConfig};
///
/// let config = GeneratorConfig::new("data")
///     .with_format(ConfigFormat::BindForward)
///     .with_exclude(["README", "LICENSE"])
///     .with_filter(AddressFamily::V4);
///
/// assert_eq!(config.format, ConfigFormat::BindForward);
/// assert!(config.is_excluded("README"));
/// assert_eq!(config.filters, vec![AddressFamily::V4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory scanned (non-recursively) for source files.
    pub source_dir: PathBuf,

    /// Output dialect.
    pub format: ConfigFormat,

    /// File names inside `source_dir` that are never opened.
    pub exclude: BTreeSet<String>,

    /// Address-family filters applied to `server` values.
    pub filters: Vec<AddressFamily>,
}

impl GeneratorConfig {
    /// Creates a dnsmasq config reading every file in `source_dir`.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            format: ConfigFormat::default(),
            exclude: BTreeSet::new(),
            filters: Vec::new(),
        }
    }

    /// Overrides the output dialect.
    #[must_use]
    pub const fn with_format(mut self, format: ConfigFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds file names to skip. Empty names are ignored.
    #[must_use]
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(
            names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty()),
        );
        self
    }

    /// Adds an address-family filter.
    #[must_use]
    pub fn with_filter(mut self, family: AddressFamily) -> Self {
        self.filters.push(family);
        self
    }

    /// Returns `true` if `name` is on the exclude list.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_DIR)
    }
}
