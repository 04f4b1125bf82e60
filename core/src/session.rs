//! The parse session: one left-to-right pass over the token list.
//!
//! For each token the session asks the classifier whether it is an option.
//! Option tokens are resolved against the declared aliases and handed to the
//! value parser for the bound field's kind; everything else goes to the
//! positional list. Once all tokens are consumed, required options are
//! checked unless the usage descriptor bypasses validation.

use std::collections::BTreeMap;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::binder::{self, FieldValue};
use crate::error::{ParseError, Result};
use crate::matcher::{find_option, is_help_option};
use crate::token::{TokenClassifier, TokenCursor};
use crate::{
    Accessor, Binding, Declare, DeclarationError, ParserSettings, Registry, validate_registry,
    values,
};

/// What a successful parse did besides binding fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Usage text was written, either on request or for empty input.
    pub usage_shown: bool,
    /// An option carrying one of the conventional help aliases matched.
    pub help_requested: bool,
    /// Match counts per option, keyed by field name.
    pub occurrences: BTreeMap<String, usize>,
    /// Tokens captured by the positional list.
    pub positionals: Vec<String>,
}

impl ParseOutcome {
    /// Returns how many times the option bound to `field` matched.
    pub fn occurrences_of(&self, field: &str) -> usize {
        self.occurrences.get(field).copied().unwrap_or(0)
    }
}

/// A single binding pass over one token list.
///
/// A session is consumed by [`parse`](ParseSession::parse); occurrence
/// counts and captured positionals never carry over to another call.
///
/// # Examples
///
/// ```
/// use argbind_core::{OptionSpec, ParseSession, Registry};
///
/// #[derive(Default)]
/// struct Config {
///     name: String,
///     verbose: bool,
/// }
///
/// let mut registry = Registry::<Config>::new();
/// registry
///     .option(OptionSpec::string("name,n", "name", |c: &mut Config| &mut c.name).required())
///     .option(OptionSpec::switch("v", "verbose", |c: &mut Config| &mut c.verbose));
///
/// let mut config = Config::default();
/// let outcome = ParseSession::new(&mut config, registry)
///     .parse(["-n", "Pete", "-v"])
///     .unwrap();
///
/// assert_eq!(config.name, "Pete");
/// assert!(config.verbose);
/// assert_eq!(outcome.occurrences_of("name"), 1);
/// ```
pub struct ParseSession<'a, T> {
    target: &'a mut T,
    registry: Registry<T>,
    settings: ParserSettings,
    usage_out: Box<dyn Write + 'a>,
}

impl<'a, T> ParseSession<'a, T> {
    /// Creates a session with default settings that prints usage to stdout.
    pub fn new(target: &'a mut T, registry: Registry<T>) -> Self {
        Self {
            target,
            registry,
            settings: ParserSettings::default(),
            usage_out: Box::new(io::stdout()),
        }
    }

    pub fn with_settings(mut self, settings: ParserSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Redirects usage text away from stdout.
    pub fn with_usage_writer(mut self, writer: impl Write + 'a) -> Self {
        self.usage_out = Box::new(writer);
        self
    }

    /// Binds `args` onto the target.
    ///
    /// `args` must not include the program name.
    pub fn parse<I, S>(mut self, args: I) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();

        if self.registry.options().is_empty() {
            return Err(ParseError::NoOptionsDeclared);
        }
        if let Some(problem) = self.registry.problems().first() {
            return Err(problem.clone().into());
        }
        self.warn_declarations();

        let classifier = TokenClassifier::new(self.settings.allow_slash_options);
        let mut cursor = TokenCursor::new(&tokens);
        let mut outcome = ParseOutcome::default();

        while let Some(raw) = cursor.next_token() {
            if classifier.is_option(raw) {
                self.apply_option(raw, &mut cursor, classifier, &mut outcome)?;
            } else {
                debug!(token = raw, "Positional token");
                self.append_positional(raw)?;
            }
        }

        self.commit_positionals(&mut outcome);
        self.validate(tokens.is_empty(), &mut outcome)?;
        self.record_occurrences(&mut outcome);
        Ok(outcome)
    }

    fn apply_option<'t>(
        &mut self,
        raw: &'t str,
        cursor: &mut TokenCursor<'t>,
        classifier: TokenClassifier,
        outcome: &mut ParseOutcome,
    ) -> Result<()> {
        let matched = classifier.split(raw).and_then(|token| {
            find_option(self.registry.options(), token.name).map(|index| (token, index))
        });

        let Some((token, index)) = matched else {
            if self.settings.add_unknown_options_to_positional_list {
                debug!(token = raw, "Unknown option routed to positional list");
                return self.append_positional(raw);
            }
            return Err(ParseError::UnknownOption {
                token: raw.to_string(),
            });
        };

        let spec = &mut self.registry.options_mut()[index];
        spec.record_occurrence();
        let binding = *spec.binding();
        let field = spec.field().to_string();
        debug!(
            token = raw,
            field = %field,
            position = cursor.position(),
            "Matched option"
        );

        let value = match binding {
            Binding::Usage(text) => {
                self.print_usage(text)?;
                outcome.usage_shown = true;
                return Ok(());
            }
            Binding::Bool(_) => {
                let current = binder::current_bool(self.target, &binding).unwrap_or_default();
                FieldValue::Bool(values::parse_bool(
                    cursor,
                    &token,
                    classifier,
                    self.settings.allow_separate_boolean_parameters,
                    current,
                )?)
            }
            Binding::Int(_) => FieldValue::Int(values::parse_int(cursor, &token)?),
            Binding::Str(_) => FieldValue::Str(values::parse_string(cursor, &token)?),
            Binding::StrList(_) => {
                FieldValue::StrList(values::parse_list(cursor, &token, classifier)?)
            }
        };

        binder::commit(self.target, &field, &binding, value)
    }

    fn append_positional(&mut self, raw: &str) -> Result<()> {
        match self.registry.positional_mut() {
            Some(positional) => {
                positional.push(raw);
                Ok(())
            }
            None => Err(ParseError::UnexpectedPositionalParameter {
                token: raw.to_string(),
            }),
        }
    }

    /// Writes captured positionals to their field. Nothing captured leaves
    /// the field as it was.
    fn commit_positionals(&mut self, outcome: &mut ParseOutcome) {
        let Some(positional) = self.registry.positional_spec() else {
            return;
        };
        if positional.values().is_empty() {
            return;
        }
        let accessor = positional.accessor();
        outcome.positionals = positional.values().to_vec();
        debug!(
            field = positional.field(),
            count = outcome.positionals.len(),
            "Binding positional list"
        );
        *accessor(self.target) = outcome.positionals.clone();
    }

    fn validate(&mut self, input_empty: bool, outcome: &mut ParseOutcome) -> Result<()> {
        let usage = self
            .registry
            .usage()
            .map(|usage| (*usage.binding(), usage.occurrences()));

        if let Some((binding, occurrences)) = usage {
            if input_empty {
                if let Binding::Usage(text) = binding {
                    self.print_usage(text)?;
                    outcome.usage_shown = true;
                }
                return Ok(());
            }
            if occurrences > 0 {
                debug!("Usage requested, skipping required checks");
                return Ok(());
            }
        }

        if input_empty {
            return Ok(());
        }

        if let Some(missing) = self
            .registry
            .options()
            .iter()
            .find(|option| option.is_required() && option.occurrences() == 0)
        {
            return Err(ParseError::MissingRequiredOption {
                option: missing.display_name().to_string(),
                field: missing.field().to_string(),
            });
        }

        if let Some(positional) = self.registry.positional_spec() {
            if positional.is_required() && positional.values().is_empty() {
                return Err(ParseError::MissingPositionalParameters {
                    field: positional.field().to_string(),
                });
            }
        }

        Ok(())
    }

    fn record_occurrences(&self, outcome: &mut ParseOutcome) {
        for option in self.registry.options() {
            outcome
                .occurrences
                .insert(option.field().to_string(), option.occurrences());
            if option.occurrences() > 0 && is_help_option(option) {
                outcome.help_requested = true;
            }
        }
    }

    fn print_usage(&mut self, text: Accessor<T, String>) -> Result<()> {
        let text = text(self.target).clone();
        writeln!(self.usage_out, "{text}")?;
        self.usage_out.flush()?;
        Ok(())
    }

    fn warn_declarations(&self) {
        for error in validate_registry(&self.registry) {
            match error {
                DeclarationError::DuplicateAlias {
                    alias,
                    first,
                    second,
                } => warn!(
                    alias = %alias,
                    first = %first,
                    second = %second,
                    "Alias declared by more than one option; first declaration wins"
                ),
                DeclarationError::HelpAliasOnValueOption { alias, field } => warn!(
                    alias = %alias,
                    field = %field,
                    "Help alias bound to an option that prints no usage"
                ),
                _ => {}
            }
        }
    }
}

/// Binds `args` onto `target` using its [`Declare`] impl and default settings.
///
/// # Examples
///
/// ```
/// use argbind_core::{Declare, OptionSpec, PositionalSpec, Registry, parse_args};
///
/// #[derive(Default)]
/// struct Config {
///     tags: Vec<String>,
///     files: Vec<String>,
/// }
///
/// impl Declare for Config {
///     fn declare(registry: &mut Registry<Self>) {
///         registry
///             .option(OptionSpec::list("tags,t", "tags", |c: &mut Config| &mut c.tags))
///             .positional(PositionalSpec::new("files", |c: &mut Config| &mut c.files));
///     }
/// }
///
/// let mut config = Config::default();
/// parse_args(&mut config, ["a.txt", "-tags:x,y"]).unwrap();
/// assert_eq!(config.tags, ["x", "y"]);
/// assert_eq!(config.files, ["a.txt"]);
/// ```
pub fn parse_args<T, I, S>(target: &mut T, args: I) -> Result<ParseOutcome>
where
    T: Declare,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parse_args_with(target, args, ParserSettings::default())
}

/// Like [`parse_args`], with explicit settings.
pub fn parse_args_with<T, I, S>(
    target: &mut T,
    args: I,
    settings: ParserSettings,
) -> Result<ParseOutcome>
where
    T: Declare,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ParseSession::new(target, Registry::for_target())
        .with_settings(settings)
        .parse(args)
}
