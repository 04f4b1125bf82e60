//! Token classification and the option-token grammar.
//!
//! An option token is a prefix (`-`, `--`, or `/` when slash options are
//! enabled), a name made of word characters or `?`, and an optional inline
//! value introduced by `:` or `=`:
//!
//! ```text
//! -name        --name=value       /name:value       -q-
//! ```
//!
//! A lone `-` is never an option. It is reserved as the explicit boolean
//! "off" marker and otherwise treated as a positional token.

/// Decides whether raw tokens are options, and splits option tokens.
///
/// # Examples
///
/// ```
/// use argbind_core::TokenClassifier;
///
/// let classifier = TokenClassifier::new(true);
/// assert!(classifier.is_option("--verbose"));
/// assert!(classifier.is_option("/out:file.txt"));
/// assert!(!classifier.is_option("-"));
/// assert!(!classifier.is_option("//server/share"));
///
/// let token = classifier.split("--out=file.txt").unwrap();
/// assert_eq!(token.name, "out");
/// assert_eq!(token.value, "file.txt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClassifier {
    allow_slash_options: bool,
}

impl TokenClassifier {
    pub fn new(allow_slash_options: bool) -> Self {
        Self {
            allow_slash_options,
        }
    }

    /// Returns `true` if `token` is option-shaped.
    pub fn is_option(&self, token: &str) -> bool {
        if token == "-" {
            return false;
        }
        token.starts_with('-') || self.is_slash_option(token)
    }

    /// Splits an option token into name and inline value.
    ///
    /// Returns `None` when the token has no option prefix or no name after
    /// it (`--`, `-.x`). Characters following the name that are not a
    /// separator are ignored.
    pub fn split<'a>(&self, token: &'a str) -> Option<OptionToken<'a>> {
        let rest = if let Some(rest) = token.strip_prefix("--") {
            rest
        } else if let Some(rest) = token.strip_prefix('-') {
            rest
        } else if self.is_slash_option(token) {
            &token[1..]
        } else {
            return None;
        };

        let name_len = rest
            .char_indices()
            .find(|(_, ch)| !is_name_char(*ch))
            .map_or(rest.len(), |(idx, _)| idx);
        if name_len == 0 {
            return None;
        }

        let (name, tail) = rest.split_at(name_len);
        let value = match tail.chars().next() {
            Some(':' | '=') => &tail[1..],
            _ => "",
        };

        Some(OptionToken {
            raw: token,
            name,
            value,
        })
    }

    fn is_slash_option(&self, token: &str) -> bool {
        self.allow_slash_options && token.starts_with('/') && !token.starts_with("//")
    }
}

/// Characters allowed in an option name.
pub(crate) fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '?'
}

/// The parts of an option token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionToken<'a> {
    /// The token as typed.
    pub raw: &'a str,
    /// Name portion, matched against aliases.
    pub name: &'a str,
    /// Inline value fragment; empty when absent.
    pub value: &'a str,
}

/// Left-to-right cursor over the token list.
#[derive(Debug)]
pub(crate) struct TokenCursor<'a> {
    tokens: &'a [String],
    index: usize,
}

impl<'a> TokenCursor<'a> {
    pub(crate) fn new(tokens: &'a [String]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Returns the next token and advances past it.
    pub(crate) fn next_token(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.index += 1;
        Some(token)
    }

    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.index).map(String::as_str)
    }

    /// Index of the next unread token.
    pub(crate) fn position(&self) -> usize {
        self.index
    }
}
