//! Renders a token sequence back into a canonical command line.
//!
//! Tokens are separated by a single space and string literals are
//! re-quoted, so the output tokenizes to the same kinds and texts.

use crate::token::{Token, TokenKind};

/// Format tokens as a single line.
#[must_use]
pub fn format(tokens: &[Token]) -> String {
    let mut out = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        format_token(&mut out, token);
    }

    out
}

fn format_token(out: &mut String, token: &Token) {
    match token.kind {
        TokenKind::Identifier | TokenKind::Flag => out.push_str(&token.text),
        TokenKind::StringLiteral => {
            out.push('"');
            out.push_str(&token.text);
            out.push('"');
        }
    }
}
