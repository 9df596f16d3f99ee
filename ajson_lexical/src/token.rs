//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_new::new;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration representing the reserved keywords of the JSON-like format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    True,
    False,
    Null,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> = {
                let mut map = HashMap::new();

                for keyword in KeywordKind::iter() {
                    map.insert(keyword.as_str(), keyword);
                }

                map
            };
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
        }
    }
}

/// Is an enumeration containing all kinds of tokens the tokenizer can produce.
///
/// Lexical errors are signaled in-band through the [`Self::Illegal`] variant rather than through
/// a separate error channel, so consumers match on it like any other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    Eof,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    Illegal,
    Str,
    Num,
    Keyword(KeywordKind),
}

impl From<KeywordKind> for TokenKind {
    fn from(keyword: KeywordKind) -> Self { Self::Keyword(keyword) }
}

/// Represents a single token produced by the tokenizer.
///
/// A token is an immutable pairing of a [`TokenKind`] with the literal text that was matched for
/// it. Tokens are created by the lexer at scan time and carry no reference back to it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,

    /// The literal text that makes up the token.
    ///
    /// This is [`None`] exactly for the end-of-input token. String literals exclude the
    /// delimiting quotes and keep their escape backslashes raw; no un-escaping is performed.
    pub literal: Option<String>,
}
