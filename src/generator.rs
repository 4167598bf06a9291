//! Directory-wide configuration generation.
//!
//! Source files are visited in lexicographic order of their names so that
//! identical inputs always yield byte-identical output.

use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::filter::{FilterChain, OptionFilter};
use crate::formatter::ConfigFormatter;
use crate::parser::{self, ParsedFile};
use std::ffi::OsString;
use std::path::Path;

/// Comment emitted for a file without any surviving `domain`.
const NO_DOMAINS: &str = "No valid domains found";

/// Comment emitted for a file with domains but no surviving `server`.
const NO_SERVERS: &str = "No valid servers found";

/// Turns a directory of source files into one resolver configuration.
///
/// # Example
///
/// ```rust,ignore
/// use ffdns_genconfig::{ConfigFormat, ConfigGenerator, GeneratorConfig};
///
/// let config = GeneratorConfig::new("data").with_format(ConfigFormat::Bind);
/// let output = ConfigGenerator::new(config).generate()?;
/// println!("{output}");
/// ```
#[derive(Debug)]
pub struct ConfigGenerator {
    config: GeneratorConfig,
    filters: FilterChain,
}

impl ConfigGenerator {
    /// Creates a generator with the built-in filters named in `config`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let filters = config.filters.iter().copied().collect();
        Self { config, filters }
    }

    /// Adds a caller-supplied filter, combined with the others by AND.
    #[must_use]
    pub fn with_filter(mut self, filter: impl OptionFilter + 'static) -> Self {
        self.filters.push(filter);
        self
    }

    /// Generates the configuration for every non-excluded regular file in
    /// the source directory.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::SourceDir`] if the directory cannot be listed,
    /// [`GenError::ReadFile`] if a source file cannot be read, and the
    /// parse errors of [`parser::parse`]. Generation stops at the first
    /// error.
    pub fn generate(&self) -> Result<String> {
        let mut formatter = ConfigFormatter::new(self.config.format);
        let mut rendered = 0usize;
        let names = self.source_files()?;

        for name in &names {
            let path = self.config.source_dir.join(name);
            let parsed = self.parse_file(&path)?;
            if render_file(&mut formatter, &name.to_string_lossy(), &parsed) {
                rendered += 1;
            }
        }

        tracing::info!(
            source_dir = %self.config.source_dir.display(),
            format = %self.config.format,
            files = names.len(),
            rendered,
            "Generated resolver configuration"
        );
        Ok(formatter.finalize())
    }

    /// Lists the file names to visit, sorted.
    ///
    /// Names that are not valid UTF-8 are kept; they can never match the
    /// exclude list.
    fn source_files(&self) -> Result<Vec<OsString>> {
        let dir = &self.config.source_dir;
        let entries = std::fs::read_dir(dir).map_err(|source| source_dir_error(dir, source))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| source_dir_error(dir, source))?;
            let name = entry.file_name();

            if name.to_str().is_some_and(|n| self.config.is_excluded(n)) {
                tracing::debug!(file = %name.to_string_lossy(), "Excluded");
                continue;
            }
            if !entry.path().is_file() {
                tracing::debug!(file = %name.to_string_lossy(), "Not a regular file, skipping");
                continue;
            }
            names.push(name);
        }

        names.sort_unstable();
        Ok(names)
    }

    fn parse_file(&self, path: &Path) -> Result<ParsedFile> {
        let label = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| GenError::ReadFile {
            path: label.clone(),
            source,
        })?;

        let parsed = parser::parse(&label, &text, &self.filters)?;
        tracing::debug!(
            file = %label,
            domains = parsed.domains.len(),
            servers = parsed.servers.len(),
            "Parsed source file"
        );
        Ok(parsed)
    }
}

/// Emits one file's header, comments, and stanzas. Returns `true` if data
/// was rendered.
fn render_file(formatter: &mut ConfigFormatter, name: &str, parsed: &ParsedFile) -> bool {
    formatter.add_comment(&format!("\n{name}\n"));
    for comment in &parsed.comments {
        formatter.add_comment(comment);
    }

    if parsed.is_renderable() {
        formatter.add_data(&parsed.domains, &parsed.servers);
        true
    } else if parsed.domains.is_empty() {
        formatter.add_comment(NO_DOMAINS);
        false
    } else {
        formatter.add_comment(NO_SERVERS);
        false
    }
}

fn source_dir_error(dir: &Path, source: std::io::Error) -> GenError {
    GenError::SourceDir {
        path: dir.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressFamily;
    use crate::formatter::ConfigFormat;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn render_file_emits_header_comments_and_data() {
        let mut fmt = ConfigFormatter::new(ConfigFormat::Dnsmasq);
        let parsed = ParsedFile {
            domains: vec!["example.org".into()],
            servers: vec!["1.2.3.4".into()],
            comments: vec!["Acme".into()],
        };

        assert!(render_file(&mut fmt, "acme", &parsed));
        assert!(
            fmt.finalize()
                .ends_with("# \n# acme\n# \n# Acme\nserver=/example.org/1.2.3.4")
        );
    }

    #[test]
    fn render_file_reports_empty_sets() {
        let mut fmt = ConfigFormatter::new(ConfigFormat::Bind);
        let no_domains = ParsedFile {
            servers: vec!["1.2.3.4".into()],
            ..ParsedFile::default()
        };
        assert!(!render_file(&mut fmt, "a", &no_domains));
        assert!(fmt.finalize().ends_with("# No valid domains found"));

        let no_servers = ParsedFile {
            domains: vec!["example.org".into()],
            ..ParsedFile::default()
        };
        assert!(!render_file(&mut fmt, "b", &no_servers));
        assert!(fmt.finalize().ends_with("# No valid servers found"));
        assert!(!fmt.finalize().contains("zone"));
    }

    #[test]
    fn files_are_sorted_and_directories_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b", "domain=b.example\nserver=1.1.1.1\n");
        write(dir.path(), "a", "domain=a.example\nserver=2.2.2.2\n");
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let generator = ConfigGenerator::new(GeneratorConfig::new(dir.path()));
        assert_eq!(generator.source_files().unwrap(), ["a", "b"]);

        let out = generator.generate().unwrap();
        let a = out.find("server=/a.example/").unwrap();
        let b = out.find("server=/b.example/").unwrap();
        assert!(a < b);
        assert!(!out.contains("# sub"));
    }

    #[test]
    fn exclude_skips_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "good", "domain=example.org\nserver=1.2.3.4\n");
        write(dir.path(), "README", "This is not a source file.\n");

        let config = GeneratorConfig::new(dir.path()).with_exclude(["README"]);
        let out = ConfigGenerator::new(config).generate().unwrap();
        assert!(!out.contains("README"));
        assert!(out.contains("server=/example.org/1.2.3.4"));
    }

    #[test]
    fn custom_filter_combines_with_builtin() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "acme",
            "domain=example.org\nserver=10.0.0.1\nserver=192.0.2.1\nserver=::1\n",
        );

        let config = GeneratorConfig::new(dir.path()).with_filter(AddressFamily::V4);
        let out = ConfigGenerator::new(config)
            .with_filter(|option: &str, value: &str| option != "server" || !value.starts_with("10."))
            .generate()
            .unwrap();

        assert!(out.contains("server=/example.org/192.0.2.1"));
        assert!(!out.contains("10.0.0.1"));
        assert!(!out.contains("::1"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_file_name_is_still_parsed() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = std::ffi::OsStr::from_bytes(b"\xffbroken");
        std::fs::write(dir.path().join(name), "foo=bar\n").unwrap();

        let generator = ConfigGenerator::new(GeneratorConfig::new(dir.path()));
        assert_eq!(generator.source_files().unwrap(), vec![name.to_os_string()]);

        let err = generator.generate().unwrap_err();
        assert!(matches!(err, GenError::UnknownOption { ref option, .. } if option == "foo"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_file_name_is_labelled_lossily() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = std::ffi::OsStr::from_bytes(b"\xffacme");
        std::fs::write(dir.path().join(name), "domain=example.org\nserver=1.2.3.4\n").unwrap();

        let out = ConfigGenerator::new(GeneratorConfig::new(dir.path()))
            .generate()
            .unwrap();
        assert!(out.contains("# \u{fffd}acme\n"));
        assert!(out.contains("server=/example.org/1.2.3.4"));
    }

    #[test]
    fn missing_source_dir_fails() {
        let err = ConfigGenerator::new(GeneratorConfig::new("/nonexistent/ffdns-data"))
            .generate()
            .unwrap_err();
        assert!(matches!(err, GenError::SourceDir { .. }));
    }
}
