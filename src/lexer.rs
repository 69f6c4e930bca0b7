use std::fmt;

use crate::token::{Token, TokenKind};

/// Longest dash prefix a flag may carry (`--name`).
const MAX_FLAG_DASHES: usize = 2;

/// Characters stripped when checking a string literal for emptiness.
const LITERAL_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0C', '\x0B'];

/// Why a flag was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFlagReason {
    /// More than two leading dashes (`---x`).
    TooManyDashes,
    /// Dashes not followed by any alphanumeric character (`--`).
    MissingIdentifier,
}

impl fmt::Display for InvalidFlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyDashes => write!(f, "too many leading dashes"),
            Self::MissingIdentifier => write!(f, "dashes with no identifier"),
        }
    }
}

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnrecognizedCharacter(char),
    /// Malformed flag; `flag` holds the characters read so far.
    InvalidFlag {
        flag: String,
        reason: InvalidFlagReason,
    },
    /// Closing `"` not found before the end of the line.
    UnterminatedString,
    /// Quoted text that is empty or whitespace only.
    EmptyStringLiteral,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedCharacter(ch) => {
                write!(f, "character not recognized: `{ch}`")
            }
            Self::InvalidFlag { flag, reason } => {
                write!(f, "invalid flag `{flag}`: {reason}")
            }
            Self::UnterminatedString => {
                write!(
                    f,
                    "unterminated string literal \
                     (missing closing quote)"
                )
            }
            Self::EmptyStringLiteral => {
                write!(f, "empty string literal not accepted")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at column {column}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub column: usize,
}

/// Tokenize a single command line into a sequence of tokens.
///
/// The whole line is scanned before anything is returned; on failure
/// no tokens are handed back.
///
/// # Errors
///
/// Returns `LexError` on unrecognized characters, malformed flags,
/// unterminated or empty string literals.
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(line).tokenize()
}

/// Automaton states. `Unknown` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Identifier,
    Flag,
    StringLiteral,
    Unknown,
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut state = State::Initial;

        loop {
            state = match state {
                State::Initial => match self.next_state() {
                    Some(next) => next,
                    None => break,
                },
                State::Identifier => {
                    tokens.push(self.read_identifier());
                    State::Initial
                }
                State::Flag => {
                    tokens.push(self.read_flag()?);
                    State::Initial
                }
                State::StringLiteral => {
                    tokens.push(self.read_string_literal()?);
                    State::Initial
                }
                State::Unknown => {
                    let ch = self.chars[self.pos];
                    return Err(LexError {
                        kind: LexErrorKind::UnrecognizedCharacter(ch),
                        column: self.pos,
                    });
                }
            };
            log::trace!("lexer state {state:?} at column {}", self.pos);
        }

        log::debug!("tokenized line into {} token(s)", tokens.len());
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Skip spaces and pick the state for the character under the
    /// cursor. `None` means the end of the line was reached.
    fn next_state(&mut self) -> Option<State> {
        while self.peek() == Some(' ') {
            self.pos += 1;
        }

        let ch = self.peek()?;
        let state = match ch {
            c if c.is_ascii_alphanumeric() => State::Identifier,
            '-' => State::Flag,
            '"' => {
                self.pos += 1; // skip opening quote
                State::StringLiteral
            }
            _ => State::Unknown,
        };
        Some(state)
    }

    /// Consume a maximal run of ASCII alphanumerics.
    fn read_alphanumeric(&mut self, buffer: &mut String) {
        while let Some(c) = self.peek().filter(char::is_ascii_alphanumeric) {
            buffer.push(c);
            self.pos += 1;
        }
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.pos;
        let mut text = String::new();
        self.read_alphanumeric(&mut text);
        Token::new(TokenKind::Identifier, text, start)
    }

    fn read_flag(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let mut text = String::new();

        while self.peek() == Some('-') {
            text.push('-');
            self.pos += 1;
        }
        let dashes = text.len();

        if dashes > MAX_FLAG_DASHES {
            return Err(LexError {
                kind: LexErrorKind::InvalidFlag {
                    flag: text,
                    reason: InvalidFlagReason::TooManyDashes,
                },
                column: start,
            });
        }

        self.read_alphanumeric(&mut text);

        if text.len() == dashes {
            return Err(LexError {
                kind: LexErrorKind::InvalidFlag {
                    flag: text,
                    reason: InvalidFlagReason::MissingIdentifier,
                },
                column: start,
            });
        }

        Ok(Token::new(TokenKind::Flag, text, start))
    }

    /// Read quoted text; the cursor sits just past the opening quote.
    ///
    /// Errors point at the first character of the content. The token
    /// keeps the untrimmed content; trimming only decides emptiness.
    fn read_string_literal(&mut self) -> Result<Token, LexError> {
        let content_start = self.pos;
        let mut text = String::new();

        loop {
            match self.peek() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        column: content_start,
                    });
                }
                Some('"') => break,
                Some(c) => {
                    text.push(c);
                    self.pos += 1;
                }
            }
        }

        if text.trim_matches(&LITERAL_WHITESPACE[..]).is_empty() {
            return Err(LexError {
                kind: LexErrorKind::EmptyStringLiteral,
                column: content_start,
            });
        }

        self.pos += 1; // skip closing quote

        Ok(Token::new(
            TokenKind::StringLiteral,
            text,
            content_start - 1,
        ))
    }
}
