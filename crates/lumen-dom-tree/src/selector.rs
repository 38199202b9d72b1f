//! Simple selector parsing.
//!
//! This module parses the three selector forms the query layer supports:
//! `#id`, `.class`, and bare tag names. Combinators, attribute selectors,
//! and compound selectors are out of scope for this engine.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for selector parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Input string was empty or whitespace-only.
    #[error("empty selector")]
    Empty,

    /// A `#` or `.` prefix with no name following it.
    #[error("missing name after '{0}'")]
    MissingName(char),

    /// Syntax this engine does not support (combinators, compound selectors).
    #[error("unsupported selector syntax: {0}")]
    Unsupported(String),
}

/// A parsed simple selector.
///
/// # Example
///
/// ```
/// use lumen_dom_tree::Selector;
///
/// assert_eq!("#main".parse(), Ok(Selector::Id("main".into())));
/// assert_eq!(".item".parse(), Ok(Selector::Class("item".into())));
/// assert_eq!("ul".parse(), Ok(Selector::Tag("ul".into())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Matches the element whose `id` attribute equals the name (`#name`).
    Id(String),
    /// Matches elements carrying the class (`.name`).
    Class(String),
    /// Matches elements with the (lowercased) tag name.
    Tag(String),
}

impl Selector {
    /// Parses a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }
        if input.chars().any(|c| c.is_whitespace() || c == '>' || c == ',') {
            return Err(SelectorError::Unsupported(input.to_string()));
        }

        if let Some(name) = input.strip_prefix('#') {
            if name.is_empty() {
                return Err(SelectorError::MissingName('#'));
            }
            return Ok(Self::Id(name.to_string()));
        }

        if let Some(name) = input.strip_prefix('.') {
            if name.is_empty() {
                return Err(SelectorError::MissingName('.'));
            }
            return Ok(Self::Class(name.to_string()));
        }

        Ok(Self::Tag(input.to_ascii_lowercase()))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(name) => write!(f, "#{name}"),
            Selector::Class(name) => write!(f, ".{name}"),
            Selector::Tag(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(Selector::parse("#testList"), Ok(Selector::Id("testList".into())));
    }

    #[test]
    fn test_parse_class() {
        assert_eq!(Selector::parse(".myList"), Ok(Selector::Class("myList".into())));
    }

    #[test]
    fn test_parse_tag_lowercases() {
        assert_eq!(Selector::parse("UL"), Ok(Selector::Tag("ul".into())));
    }

    #[test]
    fn test_parse_trims_outer_whitespace() {
        assert_eq!(Selector::parse("  #a  "), Ok(Selector::Id("a".into())));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("#"), Err(SelectorError::MissingName('#')));
        assert_eq!(Selector::parse("."), Err(SelectorError::MissingName('.')));
        assert!(matches!(
            Selector::parse("ul li"),
            Err(SelectorError::Unsupported(_))
        ));
        assert!(matches!(
            Selector::parse("ul > li"),
            Err(SelectorError::Unsupported(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["#main", ".item", "ul"] {
            let sel = Selector::parse(raw).unwrap();
            assert_eq!(sel.to_string(), raw);
        }
    }
}
