//! Declaration types for binding command-line tokens onto a target struct.
//!
//! A configuration type describes its bindable fields once, through the
//! [`Declare`] trait, by filling a [`Registry`]. Each entry carries the
//! aliases a user may type, the field name used in messages, and a typed
//! accessor that hands out a mutable reference to the field. No runtime
//! introspection is involved: the accessor's type fixes the value kind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::DeclarationError;

/// Accessor returning a mutable reference to one field of the target.
pub type Accessor<T, V> = fn(&mut T) -> &mut V;

/// Semantic type of a bound field.
///
/// # Examples
///
/// ```
/// use argbind_core::ValueKind;
///
/// assert_eq!(ValueKind::StringList.to_string(), "string-list");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// `bool` field with toggle semantics.
    Bool,
    /// `i32` field.
    Int,
    /// `String` field.
    String,
    /// `Vec<String>` field.
    StringList,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::String => write!(f, "string"),
            ValueKind::StringList => write!(f, "string-list"),
        }
    }
}

/// How an option writes into its target field.
///
/// `Usage` marks the usage descriptor: matching it prints the bound string
/// instead of assigning to it.
pub enum Binding<T> {
    Bool(Accessor<T, bool>),
    Int(Accessor<T, i32>),
    Str(Accessor<T, String>),
    StrList(Accessor<T, Vec<String>>),
    Usage(Accessor<T, String>),
}

impl<T> Binding<T> {
    /// Returns the value kind of the bound field.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Binding::Bool(_) => ValueKind::Bool,
            Binding::Int(_) => ValueKind::Int,
            Binding::Str(_) | Binding::Usage(_) => ValueKind::String,
            Binding::StrList(_) => ValueKind::StringList,
        }
    }

    /// Returns `true` for the usage descriptor binding.
    pub fn is_usage(&self) -> bool {
        matches!(self, Binding::Usage(_))
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Binding<T> {}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_usage() {
            write!(f, "Binding::Usage")
        } else {
            write!(f, "Binding::{}", self.value_kind())
        }
    }
}

/// An option descriptor: aliases plus the field they populate.
///
/// Aliases are declared as one comma-joined string (`"name,n"`). They are
/// split for matching; surrounding whitespace is trimmed and empty entries
/// are dropped.
///
/// # Examples
///
/// ```
/// use argbind_core::{OptionSpec, ValueKind};
///
/// #[derive(Default)]
/// struct Config {
///     name: String,
/// }
///
/// let spec = OptionSpec::string("name, n", "name", |c: &mut Config| &mut c.name).required();
/// assert_eq!(spec.aliases(), ["name", "n"]);
/// assert_eq!(spec.value_kind(), ValueKind::String);
/// assert!(spec.is_required());
/// assert!(spec.matches("n"));
/// assert!(!spec.matches("N"));
/// ```
pub struct OptionSpec<T> {
    aliases: Vec<String>,
    joined: String,
    field: String,
    required: bool,
    description: Option<String>,
    occurrences: usize,
    binding: Binding<T>,
}

impl<T> OptionSpec<T> {
    /// Creates an option from a comma-joined alias list and a binding.
    pub fn new(aliases: &str, field: &str, binding: Binding<T>) -> Self {
        Self {
            aliases: split_aliases(aliases),
            joined: aliases.to_string(),
            field: field.to_string(),
            required: false,
            description: None,
            occurrences: 0,
            binding,
        }
    }

    /// Creates a boolean option.
    pub fn switch(aliases: &str, field: &str, accessor: Accessor<T, bool>) -> Self {
        Self::new(aliases, field, Binding::Bool(accessor))
    }

    /// Creates a 32-bit integer option.
    pub fn integer(aliases: &str, field: &str, accessor: Accessor<T, i32>) -> Self {
        Self::new(aliases, field, Binding::Int(accessor))
    }

    /// Creates a string option.
    pub fn string(aliases: &str, field: &str, accessor: Accessor<T, String>) -> Self {
        Self::new(aliases, field, Binding::Str(accessor))
    }

    /// Creates a string-list option.
    pub fn list(aliases: &str, field: &str, accessor: Accessor<T, Vec<String>>) -> Self {
        Self::new(aliases, field, Binding::StrList(accessor))
    }

    /// Creates the usage descriptor. The bound string is printed when matched.
    pub fn usage(aliases: &str, field: &str, accessor: Accessor<T, String>) -> Self {
        Self::new(aliases, field, Binding::Usage(accessor))
    }

    /// Marks the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a description, used by [`render_help`](crate::render_help).
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Number of times the option matched during the current parse.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    pub fn binding(&self) -> &Binding<T> {
        &self.binding
    }

    pub fn value_kind(&self) -> ValueKind {
        self.binding.value_kind()
    }

    pub fn is_usage(&self) -> bool {
        self.binding.is_usage()
    }

    /// Returns the first alias, falling back to the field name.
    pub fn display_name(&self) -> &str {
        self.aliases.first().map_or(self.field.as_str(), String::as_str)
    }

    /// Checks an option name against the joined alias string, then each alias.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn matches(&self, name: &str) -> bool {
        self.joined == name || self.aliases.iter().any(|alias| alias == name)
    }

    pub(crate) fn record_occurrence(&mut self) {
        self.occurrences += 1;
    }
}

impl<T> fmt::Debug for OptionSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("aliases", &self.aliases)
            .field("field", &self.field)
            .field("required", &self.required)
            .field("occurrences", &self.occurrences)
            .field("binding", &self.binding)
            .finish()
    }
}

fn split_aliases(aliases: &str) -> Vec<String> {
    aliases
        .split(',')
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(String::from)
        .collect()
}

/// The positional-list descriptor.
///
/// Collects every token that is not an option, in order. The collected list
/// is written to the bound field once the scan finishes.
///
/// # Examples
///
/// ```
/// use argbind_core::PositionalSpec;
///
/// #[derive(Default)]
/// struct Config {
///     files: Vec<String>,
/// }
///
/// let spec = PositionalSpec::new("files", |c: &mut Config| &mut c.files).required();
/// assert_eq!(spec.field(), "files");
/// assert!(spec.is_required());
/// assert!(spec.values().is_empty());
/// ```
pub struct PositionalSpec<T> {
    field: String,
    required: bool,
    description: Option<String>,
    accessor: Accessor<T, Vec<String>>,
    values: Vec<String>,
}

impl<T> PositionalSpec<T> {
    pub fn new(field: &str, accessor: Accessor<T, Vec<String>>) -> Self {
        Self {
            field: field.to_string(),
            required: false,
            description: None,
            accessor,
            values: Vec::new(),
        }
    }

    /// Requires at least one positional token on a non-empty command line.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn accessor(&self) -> Accessor<T, Vec<String>> {
        self.accessor
    }

    /// Tokens captured so far.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub(crate) fn push(&mut self, token: &str) {
        self.values.push(token.to_string());
    }
}

impl<T> fmt::Debug for PositionalSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionalSpec")
            .field("field", &self.field)
            .field("required", &self.required)
            .field("values", &self.values)
            .finish()
    }
}

/// Implemented by configuration types that can be bound from arguments.
///
/// # Examples
///
/// ```
/// use argbind_core::{Declare, OptionSpec, Registry};
///
/// #[derive(Default)]
/// struct Config {
///     verbose: bool,
/// }
///
/// impl Declare for Config {
///     fn declare(registry: &mut Registry<Self>) {
///         registry.option(OptionSpec::switch("verbose,v", "verbose", |c: &mut Config| {
///             &mut c.verbose
///         }));
///     }
/// }
///
/// let registry = Registry::<Config>::for_target();
/// assert_eq!(registry.options().len(), 1);
/// ```
pub trait Declare: Sized {
    fn declare(registry: &mut Registry<Self>);
}

/// Ordered collection of the descriptors declared for one target type.
///
/// Options are kept in declaration order, which is also matching order.
/// At most one usage descriptor and one positional list are accepted; a
/// second one is not registered and is recorded as a declaration problem.
pub struct Registry<T> {
    options: Vec<OptionSpec<T>>,
    positional: Option<PositionalSpec<T>>,
    problems: Vec<DeclarationError>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            positional: None,
            problems: Vec::new(),
        }
    }

    /// Builds the registry from the target type's [`Declare`] impl.
    pub fn for_target() -> Self
    where
        T: Declare,
    {
        let mut registry = Self::new();
        T::declare(&mut registry);
        registry
    }

    /// Registers an option (or the usage descriptor).
    pub fn option(&mut self, spec: OptionSpec<T>) -> &mut Self {
        if spec.is_usage() {
            if let Some(first) = self.usage().map(|u| u.field().to_string()) {
                self.problems.push(DeclarationError::DuplicateUsage {
                    first,
                    second: spec.field().to_string(),
                });
                return self;
            }
        }
        self.options.push(spec);
        self
    }

    /// Registers the positional list.
    pub fn positional(&mut self, spec: PositionalSpec<T>) -> &mut Self {
        if let Some(existing) = &self.positional {
            self.problems
                .push(DeclarationError::DuplicatePositionalList {
                    first: existing.field().to_string(),
                    second: spec.field().to_string(),
                });
            return self;
        }
        self.positional = Some(spec);
        self
    }

    pub fn options(&self) -> &[OptionSpec<T>] {
        &self.options
    }

    pub fn usage(&self) -> Option<&OptionSpec<T>> {
        self.options.iter().find(|o| o.is_usage())
    }

    pub fn positional_spec(&self) -> Option<&PositionalSpec<T>> {
        self.positional.as_ref()
    }

    /// Problems recorded while declaring (second usage, second positional list).
    pub fn problems(&self) -> &[DeclarationError] {
        &self.problems
    }

    /// Returns a serializable description of the declared descriptors.
    ///
    /// # Examples
    ///
    /// ```
    /// use argbind_core::{OptionSpec, Registry, ValueKind};
    ///
    /// struct Config {
    ///     retries: i32,
    /// }
    ///
    /// let mut registry = Registry::<Config>::new();
    /// registry.option(OptionSpec::integer("retries,r", "retries", |c: &mut Config| {
    ///     &mut c.retries
    /// }));
    ///
    /// let summary = registry.summary();
    /// assert_eq!(summary.options[0].aliases, vec!["retries", "r"]);
    /// assert_eq!(summary.options[0].kind, ValueKind::Int);
    /// assert!(summary.positional.is_none());
    /// ```
    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            options: self
                .options
                .iter()
                .map(|o| OptionSummary {
                    aliases: o.aliases().to_vec(),
                    field: o.field().to_string(),
                    kind: o.value_kind(),
                    required: o.is_required(),
                    usage: o.is_usage(),
                    description: o.description().map(String::from),
                })
                .collect(),
            positional: self.positional.as_ref().map(|p| PositionalSummary {
                field: p.field().to_string(),
                required: p.is_required(),
                description: p.description().map(String::from),
            }),
        }
    }

    pub(crate) fn options_mut(&mut self) -> &mut [OptionSpec<T>] {
        &mut self.options
    }

    pub(crate) fn positional_mut(&mut self) -> Option<&mut PositionalSpec<T>> {
        self.positional.as_mut()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("options", &self.options)
            .field("positional", &self.positional)
            .field("problems", &self.problems)
            .finish()
    }
}

/// Serializable view of a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySummary {
    pub options: Vec<OptionSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positional: Option<PositionalSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSummary {
    pub aliases: Vec<String>,
    pub field: String,
    pub kind: ValueKind,
    pub required: bool,
    /// Whether this is the usage descriptor.
    pub usage: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalSummary {
    pub field: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
