use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use crate::rule::{ArgumentPolicy, FlagRule};
use crate::token::Token;

/// The argument attached to a resolved flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagArgument {
    /// Text taken from a string literal; empty when an optional
    /// argument was absent.
    Text(String),
    /// Set for flags whose rule forbids an argument.
    Switch(bool),
}

impl FlagArgument {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Switch(_) => None,
        }
    }

    #[must_use]
    pub const fn is_switch(&self) -> bool {
        matches!(self, Self::Switch(_))
    }
}

impl fmt::Display for FlagArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Switch(on) => write!(f, "{on}"),
        }
    }
}

/// One configuration assignment produced by a matched flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig<N, V> {
    pub config_name: N,
    pub config_value: V,
    pub argument: FlagArgument,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<N: Eq + Hash, V> {
    /// At most one assignment per configuration name.
    pub configs: HashMap<N, ResolvedConfig<N, V>>,
    /// Tokens no rule consumed, in their original order.
    pub residual: Vec<Token>,
}

impl<N: Eq + Hash, V> Resolution<N, V> {
    #[must_use]
    pub fn get(&self, name: &N) -> Option<&ResolvedConfig<N, V>> {
        self.configs.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &N) -> bool {
        self.configs.contains_key(name)
    }

    /// True when no flag was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Resolved configurations ordered by name.
    #[must_use]
    pub fn sorted_configs(&self) -> Vec<&ResolvedConfig<N, V>>
    where
        N: Ord,
    {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.config_name.cmp(&b.config_name));
        configs
    }

    #[must_use]
    pub fn into_parts(self) -> (HashMap<N, ResolvedConfig<N, V>>, Vec<Token>) {
        (self.configs, self.residual)
    }
}

/// Classifies a resolution error. Configuration names are kept in
/// their rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveErrorKind {
    /// A second flag targeted an already assigned configuration.
    DuplicateConfiguration { config_name: String, flag: String },
    /// A `Required` rule matched but no string literal followed.
    MissingRequiredArgument { config_name: String, flag: String },
}

impl fmt::Display for ResolveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateConfiguration { config_name, flag } => {
                write!(
                    f,
                    "duplicate configuration assignment for \
                     {config_name} (flag `{flag}`)"
                )
            }
            Self::MissingRequiredArgument { config_name, flag } => {
                write!(
                    f,
                    "flag `{flag}` requires a string argument \
                     for {config_name}"
                )
            }
        }
    }
}

/// Error produced during flag resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at column {column}")]
pub struct ResolveError {
    pub kind: ResolveErrorKind,
    /// Column of the offending flag token.
    pub column: usize,
}

/// Resolve the flags in `tokens` against an ordered list of rules.
///
/// Each flag is matched against the first rule listing it as an
/// alias. Unmatched flags and every non-flag token not claimed as an
/// argument end up in the residual, in order.
///
/// # Errors
///
/// Returns `ResolveError` when two flags assign the same
/// configuration name, or when a `Required` rule matches a flag that
/// is not followed by a string literal.
pub fn resolve<N, V>(
    tokens: Vec<Token>,
    rules: &[FlagRule<N, V>],
) -> Result<Resolution<N, V>, ResolveError>
where
    N: Clone + Eq + Hash + fmt::Display,
    V: Clone,
{
    Resolver::new(rules).resolve(tokens)
}

struct Resolver<'a, N, V> {
    rules: &'a [FlagRule<N, V>],
}

impl<'a, N, V> Resolver<'a, N, V>
where
    N: Clone + Eq + Hash + fmt::Display,
    V: Clone,
{
    const fn new(rules: &'a [FlagRule<N, V>]) -> Self {
        Self { rules }
    }

    fn resolve(&self, tokens: Vec<Token>) -> Result<Resolution<N, V>, ResolveError> {
        let mut configs = HashMap::new();
        let mut residual = Vec::with_capacity(tokens.len());
        let mut tokens = tokens.into_iter().peekable();

        while let Some(token) = tokens.next() {
            if !token.is_flag() {
                residual.push(token);
                continue;
            }

            let Some(rule) = self.rule_for(&token.text) else {
                log::debug!("flag `{}` matches no rule, passing through", token.text);
                residual.push(token);
                continue;
            };

            let argument = match rule.argument {
                ArgumentPolicy::Optional => FlagArgument::Text(
                    tokens
                        .next_if(Token::is_string_literal)
                        .map(|arg| arg.text)
                        .unwrap_or_default(),
                ),
                ArgumentPolicy::Forbidden => FlagArgument::Switch(true),
                ArgumentPolicy::Required => match tokens.next_if(Token::is_string_literal) {
                    Some(arg) => FlagArgument::Text(arg.text),
                    None => {
                        return Err(ResolveError {
                            kind: ResolveErrorKind::MissingRequiredArgument {
                                config_name: rule.config_name.to_string(),
                                flag: token.text,
                            },
                            column: token.column,
                        });
                    }
                },
            };

            match configs.entry(rule.config_name.clone()) {
                Entry::Occupied(_) => {
                    return Err(ResolveError {
                        kind: ResolveErrorKind::DuplicateConfiguration {
                            config_name: rule.config_name.to_string(),
                            flag: token.text,
                        },
                        column: token.column,
                    });
                }
                Entry::Vacant(slot) => {
                    log::debug!(
                        "flag `{}` sets {} ({argument})",
                        token.text,
                        rule.config_name
                    );
                    slot.insert(ResolvedConfig {
                        config_name: rule.config_name.clone(),
                        config_value: rule.config_value.clone(),
                        argument,
                    });
                }
            }
        }

        Ok(Resolution { configs, residual })
    }

    fn rule_for(&self, flag: &str) -> Option<&'a FlagRule<N, V>> {
        self.rules.iter().find(|rule| rule.matches(flag))
    }
}
