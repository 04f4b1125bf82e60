//! Declaration validation.
//!
//! Checks a [`Registry`] for structural problems before it is used: options
//! without aliases, aliases the token grammar can never produce, aliases
//! shared between options, help aliases on options that do not print usage,
//! and a second usage descriptor or positional list.
//!
//! Shared aliases are reported but still parse: the first declared option
//! wins, and a parse session only logs a warning for them.
//!
//! # Examples
//!
//! ```
//! use argbind_core::*;
//!
//! struct Config {
//!     out: String,
//!     output: String,
//! }
//!
//! let mut registry = Registry::<Config>::new();
//! registry.option(OptionSpec::string("out,o", "out", |c: &mut Config| &mut c.out));
//! assert!(validate_registry(&registry).is_empty());
//!
//! registry.option(OptionSpec::string("output,o", "output", |c: &mut Config| &mut c.output));
//! let errors = validate_registry(&registry);
//! assert!(matches!(errors[0], DeclarationError::DuplicateAlias { .. }));
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::token::is_name_char;
use crate::{HELP_ALIASES, Registry};

/// Problems found in a target's declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// An option or positional list has an empty field name.
    #[error("declaration has an empty field name")]
    EmptyFieldName,
    /// An option declares no aliases.
    #[error("option for field {field} declares no aliases")]
    MissingAliases { field: String },
    /// An alias contains characters an option token cannot carry.
    #[error("invalid alias {alias:?} for field {field}")]
    InvalidAlias { alias: String, field: String },
    /// Two options share an alias; the first declared one wins.
    #[error("alias {alias:?} is shared by fields {first} and {second}")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },
    /// A help alias is bound to an option that does not print usage. Matching
    /// it still counts as a help request.
    #[error("help alias {alias:?} is bound to non-usage field {field}")]
    HelpAliasOnValueOption { alias: String, field: String },
    #[error("more than one usage descriptor: {first} and {second}")]
    DuplicateUsage { first: String, second: String },
    #[error("more than one positional list: {first} and {second}")]
    DuplicatePositionalList { first: String, second: String },
}

/// Validates every declaration in a registry, returning all problems found.
pub fn validate_registry<T>(registry: &Registry<T>) -> Vec<DeclarationError> {
    let mut errors = Vec::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for option in registry.options() {
        let field = option.field();
        if field.trim().is_empty() {
            errors.push(DeclarationError::EmptyFieldName);
        }

        if option.aliases().is_empty() {
            errors.push(DeclarationError::MissingAliases {
                field: field.to_string(),
            });
        }

        for alias in option.aliases() {
            if !alias.chars().all(is_name_char) {
                errors.push(DeclarationError::InvalidAlias {
                    alias: alias.clone(),
                    field: field.to_string(),
                });
            }
            if !option.is_usage() && HELP_ALIASES.contains(&alias.as_str()) {
                errors.push(DeclarationError::HelpAliasOnValueOption {
                    alias: alias.clone(),
                    field: field.to_string(),
                });
            }
            match owners.get(alias.as_str()) {
                Some(first) if *first != field => {
                    errors.push(DeclarationError::DuplicateAlias {
                        alias: alias.clone(),
                        first: first.to_string(),
                        second: field.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    owners.insert(alias, field);
                }
            }
        }
    }

    if let Some(positional) = registry.positional_spec() {
        if positional.field().trim().is_empty() {
            errors.push(DeclarationError::EmptyFieldName);
        }
    }

    errors.extend(registry.problems().iter().cloned());
    errors
}
