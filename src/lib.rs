//! # ffdns-genconfig
//!
//! Generate DNS resolver configuration from a directory of per-domain
//! server lists.
//!
//! Each file in the source directory describes one administrative entity
//! (an organisation, a site) with the domains it serves and the DNS servers
//! authoritative for them:
//!
//! ```text
//! # Acme Corp
//! domain=acme.example
//! domain=10.in-addr.arpa
//! server=192.0.2.53
//! server=2001:db8::53   # dual-stack
//! ```
//!
//! The generator turns the whole directory into a single configuration
//! snippet for one of the supported resolvers:
//!
//! | [`ConfigFormat`]  | Output                                               |
//! |-------------------|------------------------------------------------------|
//! | `Dnsmasq`         | `server=/<domain>/<server>` per domain/server pair   |
//! | `Bind`            | one `static-stub` zone per domain                    |
//! | `BindForward`     | one `forward only` zone per domain                   |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use ffdns_genconfig::{AddressFamily, ConfigFormat, ConfigGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("data")
//!     .with_format(ConfigFormat::Bind)
//!     .with_exclude(["README.md"])
//!     .with_filter(AddressFamily::V4);
//!
//! print!("{}", ConfigGenerator::new(config).generate()?);
//! ```
//!
//! ## Filters
//!
//! Every `option=value` pair passes through all registered filters before
//! it is accepted. Built-in [`AddressFamilyFilter`]s keep only IPv4 or IPv6
//! servers; any `Fn(&str, &str) -> bool` can be added with
//! [`ConfigGenerator::with_filter`]. A file whose domains or servers are all
//! filtered away gets an explanatory comment instead of a stanza.
//!
//! ## Errors
//!
//! Generation is all-or-nothing. An unknown option or an unrecognized line
//! in any file aborts the run with a [`GenError`] naming the file.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod address;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod generator;
pub mod parser;
mod value_enum;

pub use address::AddressFamily;
pub use config::GeneratorConfig;
pub use error::{GenError, Result};
pub use filter::{AddressFamilyFilter, FilterChain, OptionFilter};
pub use formatter::{ConfigFormat, ConfigFormatter};
pub use generator::ConfigGenerator;
pub use parser::{Declaration, ParsedFile};
