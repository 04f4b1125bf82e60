//! Process-facing entry points.
//!
//! These wrap a parse session for use from `main`: errors become a message
//! on stderr and a non-zero exit, and a matched help option ends the process
//! successfully after the usage text has been printed.

use std::io::{self, Write};

use crate::{Declare, ParseSession, ParserSettings, Registry};

/// Exit code used when binding fails.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// What the caller should do after binding the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Binding succeeded; carry on with the program.
    Continue,
    /// Stop with this exit code.
    Exit(i32),
}

/// Binds `args` onto `target`, printing usage to stdout and errors to stderr.
///
/// `args` must not include the program name.
///
/// # Examples
///
/// ```
/// use argbind_core::{Declare, OptionSpec, ProcessOutcome, ParserSettings, Registry, run};
///
/// #[derive(Default)]
/// struct Config {
///     retries: i32,
/// }
///
/// impl Declare for Config {
///     fn declare(registry: &mut Registry<Self>) {
///         registry.option(OptionSpec::integer("r", "retries", |c: &mut Config| &mut c.retries));
///     }
/// }
///
/// let mut config = Config::default();
/// assert_eq!(run(&mut config, ["-r", "4"], ParserSettings::default()), ProcessOutcome::Continue);
/// assert_eq!(config.retries, 4);
/// assert_eq!(run(&mut config, ["-r"], ParserSettings::default()), ProcessOutcome::Exit(1));
/// ```
pub fn run<T, I, S>(target: &mut T, args: I, settings: ParserSettings) -> ProcessOutcome
where
    T: Declare,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run_with_writers(target, args, settings, io::stdout(), io::stderr())
}

/// Like [`run`], with explicit usage and error writers.
pub fn run_with_writers<'a, T, I, S>(
    target: &'a mut T,
    args: I,
    settings: ParserSettings,
    usage_out: impl Write + 'a,
    mut error_out: impl Write,
) -> ProcessOutcome
where
    T: Declare,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let result = ParseSession::new(target, Registry::for_target())
        .with_settings(settings)
        .with_usage_writer(usage_out)
        .parse(args);

    match result {
        Ok(outcome) if outcome.help_requested => ProcessOutcome::Exit(0),
        Ok(_) => ProcessOutcome::Continue,
        Err(err) => {
            // A failed write to the error stream has nowhere to be reported.
            let _ = writeln!(error_out, "error: {err}");
            ProcessOutcome::Exit(FAILURE_EXIT_CODE)
        }
    }
}

/// Binds `std::env::args` onto `target` with default settings, exiting the
/// process on error or after help was shown.
pub fn parse_env_or_exit<T: Declare>(target: &mut T) {
    parse_env_or_exit_with(target, ParserSettings::default());
}

/// Like [`parse_env_or_exit`], with explicit settings.
pub fn parse_env_or_exit_with<T: Declare>(target: &mut T, settings: ParserSettings) {
    if let ProcessOutcome::Exit(code) = run(target, std::env::args().skip(1), settings) {
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use crate::OptionSpec;

    use super::*;

    #[derive(Default)]
    struct Config {
        name: String,
        help: String,
    }

    impl Declare for Config {
        fn declare(registry: &mut Registry<Self>) {
            registry
                .option(OptionSpec::string("name,n", "name", |c: &mut Config| &mut c.name).required())
                .option(OptionSpec::usage("h,help,?", "help", |c: &mut Config| &mut c.help));
        }
    }

    fn run_captured(config: &mut Config, args: &[&str]) -> (ProcessOutcome, String, String) {
        let mut usage = Vec::new();
        let mut errors = Vec::new();
        let outcome = run_with_writers(
            config,
            args.iter().copied(),
            ParserSettings::default(),
            &mut usage,
            &mut errors,
        );
        (
            outcome,
            String::from_utf8(usage).unwrap(),
            String::from_utf8(errors).unwrap(),
        )
    }

    #[test]
    fn test_success_continues() {
        let mut config = Config::default();
        let (outcome, usage, errors) = run_captured(&mut config, &["-n", "Pete"]);

        assert_eq!(outcome, ProcessOutcome::Continue);
        assert!(usage.is_empty());
        assert!(errors.is_empty());
        assert_eq!(config.name, "Pete");
    }

    #[test]
    fn test_help_exits_successfully() {
        let mut config = Config {
            help: "usage: greet -name <string>".into(),
            ..Default::default()
        };
        let (outcome, usage, _) = run_captured(&mut config, &["--help"]);

        assert_eq!(outcome, ProcessOutcome::Exit(0));
        assert_eq!(usage, "usage: greet -name <string>\n");
    }

    #[test]
    fn test_error_prints_message_and_fails() {
        let mut config = Config::default();
        let (outcome, _, errors) = run_captured(&mut config, &["-x"]);

        assert_eq!(outcome, ProcessOutcome::Exit(FAILURE_EXIT_CODE));
        assert_eq!(errors, "error: unknown option: -x\n");
    }

    #[test]
    fn test_empty_input_prints_usage_and_continues() {
        let mut config = Config {
            help: "usage".into(),
            ..Default::default()
        };
        let (outcome, usage, errors) = run_captured(&mut config, &[]);

        assert_eq!(outcome, ProcessOutcome::Continue);
        assert_eq!(usage, "usage\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_help_alias_on_value_option_still_exits() {
        #[derive(Default)]
        struct Remote {
            host: String,
        }

        impl Declare for Remote {
            fn declare(registry: &mut Registry<Self>) {
                registry.option(OptionSpec::string("host,h", "host", |r: &mut Remote| &mut r.host));
            }
        }

        let mut remote = Remote::default();
        let mut usage = Vec::new();
        let outcome = run_with_writers(
            &mut remote,
            ["-h", "example.org"],
            ParserSettings::default(),
            &mut usage,
            io::sink(),
        );

        assert_eq!(outcome, ProcessOutcome::Exit(0));
        assert_eq!(remote.host, "example.org");
        assert!(usage.is_empty());
    }
}
