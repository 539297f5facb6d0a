//! Target casing conventions.
//!
//! A [`Convention`] decides two things for the shared tokenizer:
//! which characters delimit words, and how the resulting words are joined.

use std::fmt;
use std::str::FromStr;

/// Output casing convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `firstName`
    Camel,
    /// `first.name`
    Dot,
    /// `first-name`
    Kebab,
}

impl Convention {
    pub const ALL: [Self; 3] = [Self::Camel, Self::Dot, Self::Kebab];

    pub fn name(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Dot => "dot",
            Self::Kebab => "kebab",
        }
    }

    /// Separator placed between words, if any.
    pub fn separator(self) -> Option<char> {
        match self {
            Self::Camel => None,
            Self::Dot => Some('.'),
            Self::Kebab => Some('-'),
        }
    }

    /// Whether `c` separates words in input destined for this convention.
    ///
    /// Kebab leaves existing hyphens alone: they are already its separator.
    pub(crate) fn is_delimiter(self, c: char) -> bool {
        match c {
            '_' => true,
            '-' => self != Self::Kebab,
            c => c.is_whitespace(),
        }
    }

    /// Join lowercase words into the final identifier.
    pub(crate) fn join(self, words: &[String]) -> String {
        match self {
            Self::Camel => {
                let mut out = String::with_capacity(words.iter().map(String::len).sum());
                let mut words = words.iter();
                if let Some(first) = words.next() {
                    out.push_str(first);
                }
                for word in words {
                    let mut chars = word.chars();
                    if let Some(head) = chars.next() {
                        out.extend(head.to_uppercase());
                        out.push_str(chars.as_str());
                    }
                }
                out
            }
            Self::Dot => words.join("."),
            Self::Kebab => words.join("-"),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown convention name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown convention '{0}' (expected camel, dot or kebab)")]
pub struct ParseConventionError(pub String);

impl FromStr for Convention {
    type Err = ParseConventionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "camel" | "camelcase" => Ok(Self::Camel),
            "dot" | "dot.case" | "dotcase" => Ok(Self::Dot),
            "kebab" | "kebab-case" | "kebabcase" => Ok(Self::Kebab),
            _ => Err(ParseConventionError(s.to_string())),
        }
    }
}
