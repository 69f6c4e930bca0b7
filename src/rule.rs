//! Declarative flag rules and the validated rule table.
//!
//! Rules are built fluently and collected into a [`FlagTable`],
//! which checks once, up front, that every alias is a well-formed
//! flag and that no alias is claimed by two rules.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::lexer::tokenize;
use crate::resolver::{self, Resolution, ResolveError};
use crate::token::{Token, TokenKind};

/// Whether a matched flag takes the string literal that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArgumentPolicy {
    /// A string literal must follow the flag.
    Required,
    /// The flag is a switch; nothing after it is consumed.
    #[default]
    Forbidden,
    /// A following string literal is consumed if present.
    Optional,
}

/// Maps a set of flag aliases to one configuration assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRule<N, V> {
    pub aliases: BTreeSet<String>,
    pub config_name: N,
    pub config_value: V,
    pub argument: ArgumentPolicy,
}

impl<N, V> FlagRule<N, V> {
    /// Create a rule with no aliases and a `Forbidden` argument.
    #[must_use]
    pub const fn new(config_name: N, config_value: V) -> Self {
        Self {
            aliases: BTreeSet::new(),
            config_name,
            config_value,
            argument: ArgumentPolicy::Forbidden,
        }
    }

    /// Add an alias such as `-s` or `--short`.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.insert(alias.into());
        self
    }

    /// Add several aliases at once.
    #[must_use]
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn argument(mut self, policy: ArgumentPolicy) -> Self {
        self.argument = policy;
        self
    }

    #[must_use]
    pub const fn required(self) -> Self {
        self.argument(ArgumentPolicy::Required)
    }

    #[must_use]
    pub const fn forbidden(self) -> Self {
        self.argument(ArgumentPolicy::Forbidden)
    }

    #[must_use]
    pub const fn optional(self) -> Self {
        self.argument(ArgumentPolicy::Optional)
    }

    /// Whether `flag` is one of this rule's aliases.
    #[must_use]
    pub fn matches(&self, flag: &str) -> bool {
        self.aliases.contains(flag)
    }
}

/// Classifies a rule table error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleErrorKind {
    /// A rule declares no aliases and could never match.
    NoAliases,
    /// An alias that does not lex as a single flag.
    InvalidAlias { alias: String },
    /// An alias already claimed by an earlier rule.
    DuplicateAlias { alias: String, first: usize },
}

impl fmt::Display for RuleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAliases => write!(f, "rule has no aliases"),
            Self::InvalidAlias { alias } => {
                write!(f, "alias `{alias}` is not a valid flag")
            }
            Self::DuplicateAlias { alias, first } => {
                write!(f, "alias `{alias}` already used by rule {first}")
            }
        }
    }
}

/// Error produced while building a [`FlagTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (rule {rule})")]
pub struct RuleError {
    pub kind: RuleErrorKind,
    /// Index of the offending rule in table order.
    pub rule: usize,
}

/// An ordered rule table whose aliases are known to be disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagTable<N, V> {
    rules: Vec<FlagRule<N, V>>,
}

impl<N, V> FlagTable<N, V> {
    /// Validate and wrap an ordered list of rules.
    ///
    /// # Errors
    ///
    /// Returns `RuleError` for a rule without aliases, an alias that is
    /// not exactly one flag token, or an alias shared by two rules.
    pub fn new(rules: Vec<FlagRule<N, V>>) -> Result<Self, RuleError> {
        let mut owners: HashMap<&str, usize> = HashMap::new();

        for (index, rule) in rules.iter().enumerate() {
            if rule.aliases.is_empty() {
                return Err(RuleError {
                    kind: RuleErrorKind::NoAliases,
                    rule: index,
                });
            }

            for alias in &rule.aliases {
                if !is_single_flag(alias) {
                    return Err(RuleError {
                        kind: RuleErrorKind::InvalidAlias {
                            alias: alias.clone(),
                        },
                        rule: index,
                    });
                }
                if let Some(&first) = owners.get(alias.as_str()) {
                    return Err(RuleError {
                        kind: RuleErrorKind::DuplicateAlias {
                            alias: alias.clone(),
                            first,
                        },
                        rule: index,
                    });
                }
                owners.insert(alias.as_str(), index);
            }
        }

        log::debug!("flag table built with {} rule(s)", rules.len());
        Ok(Self { rules })
    }

    /// The rules in table order.
    #[must_use]
    pub fn rules(&self) -> &[FlagRule<N, V>] {
        &self.rules
    }

    /// Resolve a token sequence against this table.
    ///
    /// # Errors
    ///
    /// See [`resolver::resolve`].
    pub fn resolve(&self, tokens: Vec<Token>) -> Result<Resolution<N, V>, ResolveError>
    where
        N: Clone + Eq + std::hash::Hash + fmt::Display,
        V: Clone,
    {
        resolver::resolve(tokens, &self.rules)
    }
}

fn is_single_flag(alias: &str) -> bool {
    matches!(
        tokenize(alias).as_deref(),
        Ok([token]) if token.kind == TokenKind::Flag && token.text == alias
    )
}
