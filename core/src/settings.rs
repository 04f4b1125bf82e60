//! Parser switches.
//!
//! Settings can be built in code or loaded from JSON; missing keys take
//! their defaults.
//!
//! ```json
//! {
//!   "allow_separate_boolean_parameters": false,
//!   "allow_slash_options": true,
//!   "add_unknown_options_to_positional_list": false
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Switches controlling how a parse session reads its tokens.
///
/// # Examples
///
/// ```
/// use argbind_core::ParserSettings;
///
/// let settings = ParserSettings::default();
/// assert!(!settings.allow_separate_boolean_parameters);
/// assert!(settings.allow_slash_options);
/// assert!(!settings.add_unknown_options_to_positional_list);
///
/// let loaded = ParserSettings::from_json_str(r#"{"allow_slash_options": false}"#).unwrap();
/// assert_eq!(loaded, ParserSettings::default().with_slash_options(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Accept `-flag value` for booleans. Off by default because the value
    /// is indistinguishable from a positional token.
    pub allow_separate_boolean_parameters: bool,
    /// Accept `/name` as an option prefix. `//` never starts an option.
    pub allow_slash_options: bool,
    /// Route unknown option-shaped tokens to the positional list.
    pub add_unknown_options_to_positional_list: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            allow_separate_boolean_parameters: false,
            allow_slash_options: true,
            add_unknown_options_to_positional_list: false,
        }
    }
}

impl ParserSettings {
    pub fn with_separate_boolean_parameters(mut self, allow: bool) -> Self {
        self.allow_separate_boolean_parameters = allow;
        self
    }

    pub fn with_slash_options(mut self, allow: bool) -> Self {
        self.allow_slash_options = allow;
        self
    }

    pub fn with_unknown_options_as_positional(mut self, allow: bool) -> Self {
        self.add_unknown_options_to_positional_list = allow;
        self
    }

    /// Parses settings from a JSON object.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
