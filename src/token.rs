use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of ASCII alphanumeric characters.
    Identifier,
    /// `-name` or `--name`.
    Flag,
    /// Double-quoted text (`"..."`), quotes stripped.
    StringLiteral,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::Flag => "flag",
            Self::StringLiteral => "string",
        };
        f.pad(name)
    }
}

/// A single token with its kind, text, and position in the line.
///
/// `column` is the zero-based character offset of the first
/// character consumed for this token: the first letter of an
/// identifier, the first dash of a flag, the opening quote of a
/// string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub column: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            column,
        }
    }

    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self.kind, TokenKind::Flag)
    }

    #[must_use]
    pub const fn is_string_literal(&self) -> bool {
        matches!(self.kind, TokenKind::StringLiteral)
    }
}
