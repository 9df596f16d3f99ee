//! Contains the [`Lexer`] struct and the [`tokenize`] convenience function.

use std::str::FromStr;

use getset::{CopyGetters, Getters};

use crate::token::{KeywordKind, Token, TokenKind};

/// Checks if the given character can be part of a word run (keywords and keyword-like words).
fn is_word_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

/// Is a forward-only cursor over an input string that produces one [`Token`] per call.
///
/// The lexer owns the full input for its lifetime and never mutates it. The cursor state is the
/// pair of [`Self::position`] and [`Self::current_char`]; `current_char` always reflects the
/// character at `position`, or [`None`] once the cursor has passed the end of the input. The
/// position only ever increases, so a fresh lexer must be constructed to re-scan an input.
///
/// Scanning is lenient: malformed input never aborts the scan, it is reported in-band through
/// [`TokenKind::Illegal`] tokens, and every input eventually produces a [`TokenKind::Eof`] token.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Lexer {
    /// Gets the characters of the input string that the lexer scans over.
    #[get = "pub"]
    input: Vec<char>,

    /// Gets the index of the current character (`-1` before the first read).
    #[get_copy = "pub"]
    position: isize,

    /// Gets the character at the current position, or [`None`] past the end of the input.
    #[get_copy = "pub"]
    current_char: Option<char>,
}

impl Lexer {
    /// Creates a new [`Lexer`] over the given input string.
    ///
    /// The cursor starts at position `-1` and is advanced once, so [`Self::current_char`] holds
    /// the first character of the input (or [`None`] for an empty input).
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: -1,
            current_char: None,
        };

        lexer.advance();
        lexer
    }

    fn char_at(&self, index: isize) -> Option<char> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.input.get(index).copied())
    }

    /// Advances the cursor by one character and returns the new [`Self::current_char`].
    ///
    /// Once the position has reached the input length, repeated calls leave the cursor in place
    /// with `current_char` staying [`None`]; the cursor never wraps or errors.
    #[allow(clippy::cast_possible_wrap)]
    pub fn advance(&mut self) -> Option<char> {
        if self.position < self.input.len() as isize {
            self.position += 1;
            self.current_char = self.char_at(self.position);
        }

        self.current_char
    }

    /// Peeks at the character `offset` positions away from the cursor without mutating it.
    ///
    /// Returns [`None`] if the index falls outside the input. A negative offset looks behind;
    /// `peek(-1)` is used to tell an escaped quote from a closing quote while scanning strings.
    #[must_use]
    pub fn peek(&self, offset: isize) -> Option<char> { self.char_at(self.position + offset) }

    /// Advances the cursor past any whitespace characters.
    ///
    /// The end-of-input sentinel is not whitespace, so the loop terminates at the end of input.
    fn skip_whitespace(&mut self) {
        while self.current_char.is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn scan_string(&mut self, quote: char) -> Token {
        let mut literal = String::new();

        while let Some(character) = self.advance() {
            // an unescaped matching quote ends the string
            if character == quote && self.peek(-1) != Some('\\') {
                break;
            }

            literal.push(character);
        }

        // if the input ended before a matching quote, whatever accumulated is still the literal
        Token::new(TokenKind::Str, Some(literal))
    }

    fn scan_number(&mut self, first: char) -> Token {
        let mut literal = String::from(first);
        let mut seen_decimal_point = false;

        while let Some(character) = self.advance() {
            if !(character.is_ascii_digit() || character == '.') {
                break;
            }

            if character == '.' {
                if seen_decimal_point {
                    // a second decimal point abandons the accumulated digits and reports only
                    // the offending point
                    return Token::new(TokenKind::Illegal, Some(character.to_string()));
                }

                seen_decimal_point = true;
            }

            literal.push(character);
        }

        Token::new(TokenKind::Num, Some(literal))
    }

    fn scan_word(&mut self, first: char) -> Token {
        let mut word = String::from(first);

        while let Some(character) = self.advance() {
            if !is_word_character(character) {
                break;
            }

            word.push(character);
        }

        // Checks if the word is a keyword
        KeywordKind::from_str(&word).map_or_else(
            |_| Token::new(TokenKind::Illegal, Some(first.to_string())),
            |keyword| Token::new(keyword.into(), Some(word)),
        )
    }

    /// Scans and returns the next [`Token`] in the input.
    ///
    /// Whitespace before the token is skipped first. After the token has been produced the
    /// cursor is unconditionally advanced once more, leaving [`Self::current_char`] on the
    /// character after the token; for run-scanned tokens (strings, numbers, words) this steps
    /// over the character that terminated the inner scan.
    ///
    /// Calling this after the [`TokenKind::Eof`] token has been produced keeps returning
    /// end-of-input tokens.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.current_char {
            None => Token::new(TokenKind::Eof, None),

            Some(character @ '{') => {
                Token::new(TokenKind::LeftBrace, Some(character.to_string()))
            }
            Some(character @ '}') => {
                Token::new(TokenKind::RightBrace, Some(character.to_string()))
            }
            Some(character @ '[') => {
                Token::new(TokenKind::LeftBracket, Some(character.to_string()))
            }
            Some(character @ ']') => {
                Token::new(TokenKind::RightBracket, Some(character.to_string()))
            }
            Some(character @ ',') => Token::new(TokenKind::Comma, Some(character.to_string())),
            Some(character @ ':') => Token::new(TokenKind::Colon, Some(character.to_string())),

            Some(quote @ ('"' | '\'')) => self.scan_string(quote),

            Some(character) if character.is_ascii_digit() => self.scan_number(character),

            Some(character) if is_word_character(character) => self.scan_word(character),

            Some(character) => Token::new(TokenKind::Illegal, Some(character.to_string())),
        };

        self.advance();
        token
    }

    /// Tokenizes the remaining input into a sequence of [`Token`]s.
    ///
    /// This calls [`Self::next_token`] repeatedly, collecting every token up to and including
    /// the [`TokenKind::Eof`] token. The scan resumes from wherever the cursor currently is; it
    /// does not restart, so construct a new [`Lexer`] to re-scan an input.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind.is_eof();

            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }
}

/// Tokenizes the given input string in one shot.
///
/// Constructs a [`Lexer`] over the input and collects the full token sequence, including the
/// trailing [`TokenKind::Eof`] token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> { Lexer::new(input).tokenize() }
