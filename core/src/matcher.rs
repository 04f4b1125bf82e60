//! Option name resolution.
//!
//! Names are resolved against every declared option in declaration order and
//! the first option with an exactly matching alias wins. Aliases are not
//! required to be unique; see [`validate_registry`](crate::validate_registry)
//! for reporting shared aliases.

use crate::OptionSpec;

/// Aliases that conventionally request help.
///
/// Matching any option that declares one of these counts as a help request,
/// whatever its kind. A value option aliased `h` therefore ends a
/// [`run`](crate::run) with `Exit(0)` without printing usage;
/// [`validate_registry`](crate::validate_registry) reports such declarations.
pub const HELP_ALIASES: [&str; 3] = ["h", "help", "?"];

/// Returns the index of the first option matching `name`.
///
/// # Examples
///
/// ```
/// use argbind_core::{OptionSpec, find_option};
///
/// struct Config {
///     name: String,
///     verbose: bool,
/// }
///
/// let options = vec![
///     OptionSpec::string("name,n", "name", |c: &mut Config| &mut c.name),
///     OptionSpec::switch("verbose,v", "verbose", |c: &mut Config| &mut c.verbose),
/// ];
///
/// assert_eq!(find_option(&options, "v"), Some(1));
/// assert_eq!(find_option(&options, "name"), Some(0));
/// assert_eq!(find_option(&options, "Name"), None);
/// assert_eq!(find_option(&options, "na"), None);
/// ```
pub fn find_option<T>(options: &[OptionSpec<T>], name: &str) -> Option<usize> {
    options.iter().position(|spec| spec.matches(name))
}

/// Returns `true` if the option declares one of the [`HELP_ALIASES`].
pub fn is_help_option<T>(spec: &OptionSpec<T>) -> bool {
    spec.aliases()
        .iter()
        .any(|alias| HELP_ALIASES.contains(&alias.as_str()))
}
