//! Backend-specific rendering of parsed server lists.

use std::fmt;

/// Comment prefix understood by every backend (BIND accepts `#` too).
const COMMENT_PREFIX: &str = "# ";

/// Provenance header placed at the top of every generated file.
const PROVENANCE: &str = "
This file is automatically generated by the ffdns generator.
Don't edit it manually! Instead, send pull requests to
https://github.com/freifunkhamburg/ffdns
and re-generate it using ffdns-genconfig there!
";

/// Target resolver configuration dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// `server=/<domain>/<server>` lines for dnsmasq.
    #[default]
    Dnsmasq,
    /// BIND 9.8+ `static-stub` zones.
    Bind,
    /// BIND `forward only` zones.
    BindForward,
}

impl ConfigFormat {
    /// All formats, in CLI listing order.
    pub const ALL: [Self; 3] = [Self::Dnsmasq, Self::Bind, Self::BindForward];

    /// Name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dnsmasq => "dnsmasq",
            Self::Bind => "bind",
            Self::BindForward => "bind-forward",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulates comments and stanzas for one generation run.
///
/// # Example
///
/// ```
/// use ffdns_genconfig::{ConfigFormat, ConfigFormatter};
///
/// let mut fmt = ConfigFormatter::new(ConfigFormat::Dnsmasq);
/// fmt.add_data(&["example.org".to_string()], &["192.0.2.1".to_string()]);
/// assert!(fmt.finalize().ends_with("server=/example.org/192.0.2.1"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFormatter {
    format: ConfigFormat,
    config: Vec<String>,
}

impl ConfigFormatter {
    /// Creates a formatter whose output starts with the provenance header.
    #[must_use]
    pub fn new(format: ConfigFormat) -> Self {
        let mut formatter = Self {
            format,
            config: Vec::new(),
        };
        formatter.add_comment(PROVENANCE);
        formatter
    }

    /// Appends `text` as a comment, prefixing every line.
    pub fn add_comment(&mut self, text: &str) {
        let commented: Vec<String> = text
            .split('\n')
            .map(|line| format!("{COMMENT_PREFIX}{line}"))
            .collect();
        self.config.push(commented.join("\n"));
    }

    /// Binds every domain in `domains` to every server in `servers`.
    ///
    /// Callers are expected to pass non-empty slices; an empty slice simply
    /// renders nothing.
    pub fn add_data(&mut self, domains: &[String], servers: &[String]) {
        match self.format {
            ConfigFormat::Dnsmasq => {
                for domain in domains {
                    for server in servers {
                        self.config.push(format!("server=/{domain}/{server}"));
                    }
                }
            }
            ConfigFormat::Bind => {
                for domain in domains {
                    self.config.push(format!(
                        "zone \"{domain}\" {{\n    type static-stub;\n    server-addresses {{ {}; }};\n}};\n",
                        servers.join("; ")
                    ));
                }
            }
            ConfigFormat::BindForward => {
                for domain in domains {
                    self.config.push(format!(
                        "zone \"{domain}\" {{\n    type forward;\n    forwarders {{ {}; }};\n    forward only;\n}};\n",
                        servers.join("; ")
                    ));
                }
            }
        }
    }

    /// Returns the accumulated configuration, fragments joined by newlines.
    #[must_use]
    pub fn finalize(&self) -> String {
        self.config.join("\n")
    }
}
