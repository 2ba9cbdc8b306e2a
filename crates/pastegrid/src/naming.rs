//! Header text to identifier normalization.
//!
//! Every header becomes a non-empty identifier whose first character is
//! valid for the selected convention. Running the normalizer on its own
//! output returns the same string. Duplicate names are left alone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PastegridError;

/// Casing and syntax rules applied to column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NamingConvention {
    /// Cleaned text with whitespace turned into underscores.
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "camelCase")]
    CamelCase,
    /// R syntactic names: `.` separates words.
    #[serde(rename = "r")]
    R,
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "julia")]
    Julia,
}

impl NamingConvention {
    pub const ALL: [NamingConvention; 7] = [
        NamingConvention::Default,
        NamingConvention::SnakeCase,
        NamingConvention::PascalCase,
        NamingConvention::CamelCase,
        NamingConvention::R,
        NamingConvention::Python,
        NamingConvention::Julia,
    ];

    /// Name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingConvention::Default => "default",
            NamingConvention::SnakeCase => "snake_case",
            NamingConvention::PascalCase => "PascalCase",
            NamingConvention::CamelCase => "camelCase",
            NamingConvention::R => "r",
            NamingConvention::Python => "python",
            NamingConvention::Julia => "julia",
        }
    }

    /// Prefix prepended when a name does not start with a valid character.
    fn escape_prefix(&self) -> char {
        match self {
            // Pascal casing would uppercase an `x` on the next pass.
            NamingConvention::PascalCase => 'X',
            _ => 'x',
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingConvention {
    type Err = PastegridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        NamingConvention::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                PastegridError::Config(format!("Unknown naming convention '{}'", s))
            })
    }
}

/// Inclusive range of non-ASCII characters accepted as letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRange {
    pub start: char,
    pub end: char,
}

impl ScriptRange {
    /// The Cyrillic block, U+0400..=U+04FF.
    pub const CYRILLIC: ScriptRange = ScriptRange {
        start: '\u{0400}',
        end: '\u{04FF}',
    };

    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

impl Default for ScriptRange {
    fn default() -> Self {
        ScriptRange::CYRILLIC
    }
}

/// Normalizes raw header text for one naming convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierNormalizer {
    convention: NamingConvention,
    script: ScriptRange,
}

impl IdentifierNormalizer {
    pub fn new(convention: NamingConvention) -> Self {
        Self {
            convention,
            script: ScriptRange::default(),
        }
    }

    /// Accept letters from `script` in addition to ASCII.
    pub fn with_script(mut self, script: ScriptRange) -> Self {
        self.script = script;
        self
    }

    pub fn convention(&self) -> NamingConvention {
        self.convention
    }

    /// Turn `name` into an identifier.
    pub fn normalize(&self, name: &str) -> String {
        let cleaned = self.clean(name);
        let cased = self.apply_casing(&cleaned);

        if self.has_valid_start(&cased) {
            cased
        } else {
            let mut escaped = String::with_capacity(cased.len() + 1);
            escaped.push(self.convention.escape_prefix());
            escaped.push_str(&cased);
            escaped
        }
    }

    /// Trim, drop disallowed characters, underscore whitespace runs and
    /// guard a leading digit.
    fn clean(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut in_space = false;

        for c in name.trim().chars() {
            let c = if c == '\u{00A0}' { ' ' } else { c };
            if c.is_whitespace() {
                in_space = true;
                continue;
            }
            if !self.is_kept(c) {
                continue;
            }
            if in_space {
                out.push('_');
                in_space = false;
            }
            out.push(c);
        }
        // Whitespace between dropped characters still separates words.
        if in_space {
            out.push('_');
        }

        if out.starts_with(|c: char| c.is_ascii_digit()) {
            out.insert(0, '_');
        }
        out
    }

    fn is_kept(&self, c: char) -> bool {
        c.is_ascii_alphanumeric()
            || c == '_'
            || self.script.contains(c)
            || (c == '.' && self.convention == NamingConvention::R)
    }

    fn is_letter(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || self.script.contains(c)
    }

    fn apply_casing(&self, name: &str) -> String {
        match self.convention {
            NamingConvention::Default => name.to_string(),
            NamingConvention::SnakeCase => name
                .split('_')
                .filter(|word| !word.is_empty())
                .map(lowercase_first)
                .collect::<Vec<_>>()
                .join("_"),
            NamingConvention::PascalCase => name.split('_').map(uppercase_first).collect(),
            NamingConvention::CamelCase => name
                .split('_')
                .filter(|word| !word.is_empty())
                .enumerate()
                .map(|(i, word)| {
                    if i == 0 {
                        lowercase_first(word)
                    } else {
                        uppercase_first(word)
                    }
                })
                .collect(),
            NamingConvention::R => name.replace('_', "."),
            NamingConvention::Python | NamingConvention::Julia => name.to_lowercase(),
        }
    }

    fn has_valid_start(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return false;
        };

        match self.convention {
            NamingConvention::R => {
                self.is_letter(first)
                    || (first == '.' && !chars.next().is_some_and(|c| c.is_ascii_digit()))
            }
            _ => self.is_letter(first) || first == '_',
        }
    }
}

/// Normalize `name` with the default script range.
pub fn normalize_identifier(name: &str, convention: NamingConvention) -> String {
    IdentifierNormalizer::new(convention).normalize(name)
}

fn lowercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
