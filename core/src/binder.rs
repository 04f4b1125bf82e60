//! Writes resolved values into target fields.

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::{Binding, ValueKind};

/// A value produced by one of the value parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Int(i32),
    Str(String),
    StrList(Vec<String>),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Bool(_) => ValueKind::Bool,
            FieldValue::Int(_) => ValueKind::Int,
            FieldValue::Str(_) => ValueKind::String,
            FieldValue::StrList(_) => ValueKind::StringList,
        }
    }
}

/// Assigns `value` to the field behind `binding`.
///
/// The usage binding is read-only and rejects every value.
///
/// # Examples
///
/// ```
/// use argbind_core::{Binding, FieldValue, commit};
///
/// #[derive(Default)]
/// struct Config {
///     retries: i32,
/// }
///
/// let mut config = Config::default();
/// let binding = Binding::Int(|c: &mut Config| &mut c.retries);
///
/// commit(&mut config, "retries", &binding, FieldValue::Int(3)).unwrap();
/// assert_eq!(config.retries, 3);
/// assert!(commit(&mut config, "retries", &binding, FieldValue::Bool(true)).is_err());
/// ```
pub fn commit<T>(
    target: &mut T,
    field: &str,
    binding: &Binding<T>,
    value: FieldValue,
) -> Result<()> {
    debug!(field, value = ?value, "Binding field");
    match (binding, value) {
        (Binding::Bool(get), FieldValue::Bool(v)) => *get(target) = v,
        (Binding::Int(get), FieldValue::Int(v)) => *get(target) = v,
        (Binding::Str(get), FieldValue::Str(v)) => *get(target) = v,
        (Binding::StrList(get), FieldValue::StrList(v)) => *get(target) = v,
        (Binding::Usage(_), _) => {
            return Err(ParseError::ReadOnlyField {
                field: field.to_string(),
            });
        }
        (binding, value) => {
            return Err(ParseError::KindMismatch {
                field: field.to_string(),
                expected: binding.value_kind(),
                found: value.kind(),
            });
        }
    }
    Ok(())
}

/// Reads the current value of a boolean field, for toggle semantics.
pub(crate) fn current_bool<T>(target: &mut T, binding: &Binding<T>) -> Option<bool> {
    match binding {
        Binding::Bool(get) => Some(*get(target)),
        _ => None,
    }
}
