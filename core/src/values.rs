//! Type-directed value parsers.
//!
//! Each parser starts from the option's inline value fragment and, when that
//! is empty, may consume following tokens through the cursor.

use crate::error::{ParseError, Result};
use crate::token::{OptionToken, TokenClassifier, TokenCursor};

/// Resolves a boolean option.
///
/// A raw token ending in `+` or `-` overrides the inline fragment. With
/// `allow_separate` set, an empty fragment may be taken from the next token
/// unless that token is option-shaped. An empty fragment toggles `current`.
pub(crate) fn parse_bool<'a>(
    cursor: &mut TokenCursor<'a>,
    token: &OptionToken<'a>,
    classifier: TokenClassifier,
    allow_separate: bool,
    current: bool,
) -> Result<bool> {
    let mut fragment = token.value;
    if token.raw.ends_with('+') {
        fragment = "+";
    } else if token.raw.ends_with('-') {
        fragment = "-";
    }

    if allow_separate && fragment.is_empty() {
        if let Some(next) = cursor.peek().filter(|next| !classifier.is_option(next)) {
            cursor.next_token();
            fragment = next;
        }
    }

    resolve_bool(fragment, current).ok_or_else(|| ParseError::InvalidBooleanValue {
        option: token.name.to_string(),
        value: fragment.to_string(),
    })
}

/// Maps a boolean fragment to a value; an empty fragment negates `current`.
///
/// # Examples
///
/// ```
/// use argbind_core::resolve_bool;
///
/// assert_eq!(resolve_bool("", false), Some(true));
/// assert_eq!(resolve_bool("", true), Some(false));
/// assert_eq!(resolve_bool("YES", false), Some(true));
/// assert_eq!(resolve_bool("-", true), Some(false));
/// assert_eq!(resolve_bool("maybe", true), None);
/// ```
pub fn resolve_bool(fragment: &str, current: bool) -> Option<bool> {
    if fragment.is_empty() {
        return Some(!current);
    }
    match fragment.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "+" => Some(true),
        "off" | "false" | "no" | "-" => Some(false),
        _ => None,
    }
}

/// Resolves a 32-bit integer option.
pub(crate) fn parse_int<'a>(cursor: &mut TokenCursor<'a>, token: &OptionToken<'a>) -> Result<i32> {
    let fragment = take_value(cursor, token)?;
    fragment
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidIntegerValue {
            option: token.name.to_string(),
            value: fragment.to_string(),
        })
}

/// Resolves a string option.
pub(crate) fn parse_string<'a>(
    cursor: &mut TokenCursor<'a>,
    token: &OptionToken<'a>,
) -> Result<String> {
    take_value(cursor, token).map(String::from)
}

/// Resolves a string-list option.
///
/// With an inline fragment, the fragment alone is the value. Otherwise the
/// next token is taken whole when it is comma-delimited, else tokens are
/// collected up to the next option-shaped token or the end of input.
pub(crate) fn parse_list<'a>(
    cursor: &mut TokenCursor<'a>,
    token: &OptionToken<'a>,
    classifier: TokenClassifier,
) -> Result<Vec<String>> {
    if !token.value.is_empty() {
        return Ok(split_list(token.value));
    }

    let Some(next) = cursor.peek() else {
        return Err(missing_value(token));
    };
    if has_list_separator(next) {
        cursor.next_token();
        return Ok(split_list(next));
    }

    let mut values = Vec::new();
    while let Some(next) = cursor.peek() {
        if classifier.is_option(next) {
            break;
        }
        cursor.next_token();
        values.push(next.to_string());
    }
    Ok(values)
}

/// Splits a comma-delimited value, keeping empty elements.
///
/// A value whose only commas start at position zero is a single element.
///
/// # Examples
///
/// ```
/// use argbind_core::split_list;
///
/// assert_eq!(split_list("a,b,c"), vec!["a", "b", "c"]);
/// assert_eq!(split_list("a,,b"), vec!["a", "", "b"]);
/// assert_eq!(split_list(",a"), vec![",a"]);
/// assert_eq!(split_list("solo"), vec!["solo"]);
/// ```
pub fn split_list(value: &str) -> Vec<String> {
    if has_list_separator(value) {
        value.split(',').map(String::from).collect()
    } else {
        vec![value.to_string()]
    }
}

fn has_list_separator(value: &str) -> bool {
    value.find(',').is_some_and(|idx| idx > 0)
}

fn take_value<'a>(cursor: &mut TokenCursor<'a>, token: &OptionToken<'a>) -> Result<&'a str> {
    if !token.value.is_empty() {
        return Ok(token.value);
    }
    cursor.next_token().ok_or_else(|| missing_value(token))
}

fn missing_value(token: &OptionToken<'_>) -> ParseError {
    ParseError::MissingValueParameter {
        option: token.name.to_string(),
    }
}
