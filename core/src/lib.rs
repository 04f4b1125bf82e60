//! Declarative command-line argument binding.
//!
//! A configuration type declares, once, which of its fields can be set from
//! the command line and under which aliases. [`parse_args`] then walks the
//! argument list a single time, left to right, and writes each value into
//! its field:
//!
//! - [`Declare`] / [`Registry`]: the declared options, the optional usage
//!   descriptor and the optional positional list.
//! - [`TokenClassifier`]: tells option tokens (`-name`, `--name=value`,
//!   `/name:value`) from positional ones.
//! - [`find_option`]: first-declared-wins alias resolution.
//! - Value parsing for `bool` (toggle and `+`/`-` suffixes), `i32`,
//!   `String` and `Vec<String>` fields.
//! - [`ParseSession`]: the pass itself, plus required-option validation
//!   with a usage/help bypass.
//! - [`run`] / [`parse_env_or_exit`]: wrappers for `main`.
//!
//! Declarations can be checked up front with [`validate_registry`], and a
//! usage text can be generated with [`render_help`].
//!
//! # Example
//!
//! ```
//! use argbind_core::*;
//!
//! #[derive(Default)]
//! struct Options {
//!     name: String,
//!     verbose: bool,
//!     retries: i32,
//!     files: Vec<String>,
//!     usage: String,
//! }
//!
//! impl Declare for Options {
//!     fn declare(registry: &mut Registry<Self>) {
//!         registry
//!             .option(OptionSpec::string("name,n", "name", |o: &mut Options| &mut o.name).required())
//!             .option(OptionSpec::switch("verbose,v", "verbose", |o: &mut Options| &mut o.verbose))
//!             .option(OptionSpec::integer("retries,r", "retries", |o: &mut Options| &mut o.retries))
//!             .option(OptionSpec::usage("h,help,?", "usage", |o: &mut Options| &mut o.usage))
//!             .positional(PositionalSpec::new("files", |o: &mut Options| &mut o.files));
//!     }
//! }
//!
//! let mut options = Options::default();
//! parse_args(&mut options, ["-n", "Pete", "-v", "-r:3", "a.txt", "b.txt"]).unwrap();
//!
//! assert_eq!(options.name, "Pete");
//! assert!(options.verbose);
//! assert_eq!(options.retries, 3);
//! assert_eq!(options.files, ["a.txt", "b.txt"]);
//!
//! let err = parse_args(&mut Options::default(), ["-v"]).unwrap_err();
//! assert!(matches!(err, ParseError::MissingRequiredOption { .. }));
//! ```

mod binder;
mod error;
mod help;
mod matcher;
mod process;
mod session;
mod settings;
mod token;
mod types;
mod validate;
mod values;

pub use binder::{FieldValue, commit};
pub use error::{ParseError, Result};
pub use help::render_help;
pub use matcher::{HELP_ALIASES, find_option, is_help_option};
pub use process::{
    FAILURE_EXIT_CODE, ProcessOutcome, parse_env_or_exit, parse_env_or_exit_with, run,
    run_with_writers,
};
pub use session::{ParseOutcome, ParseSession, parse_args, parse_args_with};
pub use settings::ParserSettings;
pub use token::{OptionToken, TokenClassifier};
pub use types::*;
pub use validate::{DeclarationError, validate_registry};
pub use values::{resolve_bool, split_list};
