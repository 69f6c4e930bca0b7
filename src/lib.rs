//! Single-line command lexer and declarative flag resolver.
//!
//! A raw command line is split into typed tokens (identifiers,
//! `-`/`--` flags, quoted strings), then the flags are matched
//! against a caller-supplied rule table to produce at most one
//! assignment per configuration name, plus the tokens nobody claimed.
//!
//! # Quick start
//!
//! ```
//! use flagline::{FlagArgument, FlagRule, FlagTable, parse_line};
//!
//! let table = FlagTable::new(vec![
//!     FlagRule::new("SIZE", "SHORT").aliases(["-s", "--short"]).required(),
//!     FlagRule::new("SIZE", "LONG").aliases(["-l", "--long"]),
//! ])
//! .unwrap();
//!
//! let resolution = parse_line("print -s \"big\" now", &table).unwrap();
//! let size = resolution.get(&"SIZE").unwrap();
//! assert_eq!(size.config_value, "SHORT");
//! assert_eq!(size.argument, FlagArgument::Text("big".to_string()));
//! assert_eq!(flagline::format(&resolution.residual), "print now");
//! ```
//!
//! ## Tokenize only
//!
//! ```
//! use flagline::{TokenKind, tokenize};
//!
//! let tokens = tokenize("--short \"hello\"").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Flag);
//! assert_eq!(tokens[1].text, "hello");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::fmt;
use std::hash::Hash;

pub mod formatter;
pub mod lexer;
pub mod resolver;
pub mod rule;
pub mod token;

pub use formatter::format;
pub use lexer::{InvalidFlagReason, LexError, LexErrorKind, tokenize};
pub use resolver::{
    FlagArgument, Resolution, ResolveError, ResolveErrorKind, ResolvedConfig, resolve,
};
pub use rule::{ArgumentPolicy, FlagRule, FlagTable, RuleError, RuleErrorKind};
pub use token::{Token, TokenKind};

/// Lead-in written once at the start of every framed error message.
pub const ERROR_MARKER: &str = "<# ";

/// Unified error type covering rule tables, lexing and resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A rule table error.
    #[error("{0}")]
    Rule(#[from] RuleError),
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A flag resolution error.
    #[error("{0}")]
    Resolve(#[from] ResolveError),
}

impl Error {
    /// Column of the offending character or flag. Rule table errors
    /// are not tied to a line and have none.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::Rule(_) => None,
            Self::Lex(e) => Some(e.column),
            Self::Resolve(e) => Some(e.column),
        }
    }

    /// The message with the [`ERROR_MARKER`] lead-in and a trailing
    /// newline, for tools that scan output for error lines.
    #[must_use]
    pub fn framed(&self) -> String {
        format!("{ERROR_MARKER}{self}\n")
    }
}

/// Tokenize a line and resolve its flags in one step.
pub fn parse_line<N, V>(line: &str, table: &FlagTable<N, V>) -> Result<Resolution<N, V>, Error>
where
    N: Clone + Eq + Hash + fmt::Display,
    V: Clone,
{
    let tokens = tokenize(line)?;
    Ok(table.resolve(tokens)?)
}
