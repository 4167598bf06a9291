//! Source file parsing.
//!
//! A source file is line-oriented:
//!
//! ```text
//! # full-line comment
//! domain=example.org
//! server=192.0.2.53   # trailing comment
//! ```
//!
//! Each line is split at the first `#` before anything else, so a `=`
//! inside a comment never starts an assignment.

use crate::error::{GenError, Result};
use crate::filter::FilterChain;

const COMMENT_CHAR: char = '#';
const OPTION_CHAR: char = '=';

/// Any of these ends a line, so `\n`, `\r\n` and bare `\r` files all parse.
const LINE_ENDINGS: [char; 2] = ['\n', '\r'];

/// One accepted `option=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `domain=<value>`
    Domain(String),
    /// `server=<value>`
    Server(String),
}

/// Everything extracted from a single source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    /// Domains in line order, duplicates kept.
    pub domains: Vec<String>,
    /// Servers in line order, duplicates kept.
    pub servers: Vec<String>,
    /// Trimmed, non-empty comment texts in line order.
    pub comments: Vec<String>,
}

impl ParsedFile {
    fn push(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Domain(d) => self.domains.push(d),
            Declaration::Server(s) => self.servers.push(s),
        }
    }

    /// Returns `true` if the file has at least one domain and one server.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.domains.is_empty() && !self.servers.is_empty()
    }
}

/// Classification of a line once its comment has been removed.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Assignment { option: &'a str, value: &'a str },
    Unrecognized(&'a str),
}

/// Splits a raw line into its content class and optional comment.
fn classify_line(raw: &str) -> (Line<'_>, Option<&str>) {
    let (content, comment) = match raw.split_once(COMMENT_CHAR) {
        Some((content, comment)) => (content, Some(comment.trim())),
        None => (raw, None),
    };

    let line = if let Some((option, value)) = content.split_once(OPTION_CHAR) {
        Line::Assignment {
            option: option.trim(),
            value: value.trim(),
        }
    } else if content.trim().is_empty() {
        Line::Blank
    } else {
        Line::Unrecognized(content.trim())
    };

    (line, comment.filter(|c| !c.is_empty()))
}

/// Turns an assignment into a declaration, rejecting unknown options.
fn declaration(option: &str, value: &str, file: &str) -> Result<Declaration> {
    match option {
        "domain" => Ok(Declaration::Domain(value.to_string())),
        "server" => Ok(Declaration::Server(value.to_string())),
        _ => Err(GenError::UnknownOption {
            option: option.to_string(),
            file: file.to_string(),
        }),
    }
}

/// Parses the text of one source file.
///
/// `file` is only used to label errors. Every assignment is offered to
/// `filters` first; rejected pairs are dropped silently, before the option
/// name is checked.
///
/// # Errors
///
/// Returns [`GenError::UnknownOption`] for an assignment to anything but
/// `domain` or `server`, and [`GenError::UnrecognizedLine`] for non-blank
/// content without `=`. Parsing stops at the first error.
pub fn parse(file: &str, text: &str, filters: &FilterChain) -> Result<ParsedFile> {
    let mut parsed = ParsedFile::default();

    for raw in text.split(LINE_ENDINGS) {
        let (line, comment) = classify_line(raw);
        if let Some(comment) = comment {
            parsed.comments.push(comment.to_string());
        }

        match line {
            Line::Blank => {}
            Line::Assignment { option, value } => {
                if !filters.accept(option, value) {
                    tracing::trace!(file = %file, option, value, "Declaration rejected by filter");
                    continue;
                }
                parsed.push(declaration(option, value, file)?);
            }
            Line::Unrecognized(content) => {
                return Err(GenError::UnrecognizedLine {
                    line: content.to_string(),
                    file: file.to_string(),
                });
            }
        }
    }

    Ok(parsed)
}
