#![allow(dead_code)]

use std::fmt;

use flagline::{FlagRule, FlagTable, Token, TokenKind, format, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Setting {
    Size,
    Output,
    Color,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size => write!(f, "SIZE"),
            Self::Output => write!(f, "OUTPUT"),
            Self::Color => write!(f, "COLOR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Short,
    Long,
    File,
    Always,
}

/// `-s/--short` (required), `-l/--long` (forbidden),
/// `-o/--output` (optional), `-c/--color` (forbidden).
pub fn sample_rules() -> Vec<FlagRule<Setting, Value>> {
    vec![
        FlagRule::new(Setting::Size, Value::Short)
            .aliases(["-s", "--short"])
            .required(),
        FlagRule::new(Setting::Size, Value::Long)
            .aliases(["-l", "--long"])
            .forbidden(),
        FlagRule::new(Setting::Output, Value::File)
            .aliases(["-o", "--output"])
            .optional(),
        FlagRule::new(Setting::Color, Value::Always)
            .aliases(["-c", "--color"])
            .forbidden(),
    ]
}

pub fn sample_table() -> FlagTable<Setting, Value> {
    FlagTable::new(sample_rules()).expect("sample table is valid")
}

/// Kind and text of each token, ignoring columns.
pub fn shape(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens.iter().map(|t| (t.kind, t.text.clone())).collect()
}

/// Tokenize, render, tokenize again; kinds and texts must survive.
pub fn assert_render_roundtrip(input: &str) {
    let tokens = tokenize(input).expect("tokenize failed");
    let rendered = format(&tokens);
    let again = tokenize(&rendered).unwrap_or_else(|e| {
        panic!("failed to re-tokenize rendered line: {e}\n--- rendered ---\n{rendered}")
    });
    assert_eq!(
        shape(&tokens),
        shape(&again),
        "render round-trip mismatch\n--- input ---\n{input}\n--- rendered ---\n{rendered}"
    );
}
