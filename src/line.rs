//! # Directive Line Grammar
//!
//! Parsing and rendering of single `deb`/`deb-src` repository definition
//! lines. This is the only syntax the tool understands; anything else in the
//! list file is treated as opaque text by the caller.
//!
//! The grammar, applied to a line with surrounding whitespace trimmed:
//!
//! ```text
//! [optional "#" with optional whitespace] ("deb"|"deb-src") <url> <release> <components...>
//! ```
//!
//! A leading `#` marks the entry *disabled*, but the directive is still
//! parsed out of the commented text: commenting is reversible metadata, not
//! removal. Rendering a parsed line and parsing it again yields identical
//! field values, though byte-exact whitespace of the input is not preserved.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Matches a (possibly commented-out) deb/deb-src directive.
///
/// Capture groups: 1 = comment marker, 2 = keyword, 3 = url, 4 = release,
/// 5 = remaining component tokens (may be empty). `deb-src` must be tried
/// before `deb` because the regex crate uses leftmost-first alternation.
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#\s*)?(deb-src|deb)\s+(\S+)\s+(\S+)\s*(.*)$")
        .expect("directive pattern is valid")
});

/// The kind of a repository directive: binary packages or source packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A `deb` line (pre-built binary packages).
    Binary,
    /// A `deb-src` line (source packages).
    Source,
}

impl EntryKind {
    /// All kinds, in the order entries are synthesized.
    pub const ALL: [EntryKind; 2] = [EntryKind::Binary, EntryKind::Source];

    /// The directive keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            EntryKind::Binary => "deb",
            EntryKind::Source => "deb-src",
        }
    }

    fn from_keyword(keyword: &str) -> Option<EntryKind> {
        match keyword {
            "deb" => Some(EntryKind::Binary),
            "deb-src" => Some(EntryKind::Source),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One parsed `deb`/`deb-src` directive.
///
/// Fields are the semantic content of the line; the original byte layout is
/// not retained. `components` preserves order and is joined with single
/// spaces on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Whether the directive is active (no leading comment marker).
    pub enabled: bool,
    /// `deb` or `deb-src`.
    pub kind: EntryKind,
    /// Repository base URL, compared verbatim against the vendor URL.
    pub url: String,
    /// Distribution codename token.
    pub release: String,
    /// Component names; empty only for a syntactically incomplete directive.
    pub components: Vec<String>,
}

impl SourceLine {
    /// Parse a single line into a directive.
    ///
    /// Returns [`Error::Parse`] for anything that does not match the grammar
    /// (blank lines, free-form comments, unrelated directives). Callers must
    /// treat that as "not a directive", never as a fatal condition.
    pub fn parse(text: &str) -> Result<SourceLine> {
        let trimmed = text.trim();
        let caps = DIRECTIVE.captures(trimmed).ok_or_else(|| Error::Parse {
            line: text.to_string(),
        })?;

        let keyword = &caps[2];
        let kind = EntryKind::from_keyword(keyword).ok_or_else(|| Error::Parse {
            line: text.to_string(),
        })?;

        Ok(SourceLine {
            enabled: caps.get(1).is_none(),
            kind,
            url: caps[3].to_string(),
            release: caps[4].to_string(),
            components: caps[5].split_whitespace().map(str::to_string).collect(),
        })
    }

    /// Render the directive back to its one-line text form.
    ///
    /// Disabled entries get a `"# "` prefix; fields are joined with single
    /// spaces. Re-parsing the result yields identical field values.
    pub fn render(&self) -> String {
        let mut line = String::new();
        if !self.enabled {
            line.push_str("# ");
        }
        line.push_str(self.kind.keyword());
        line.push(' ');
        line.push_str(&self.url);
        line.push(' ');
        line.push_str(&self.release);
        for component in &self.components {
            line.push(' ');
            line.push_str(component);
        }
        line
    }
}
