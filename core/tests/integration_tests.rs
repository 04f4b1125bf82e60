use argbind_core::{
    Declare, OptionSpec, ParseError, ParseOutcome, ParseSession, ParserSettings, PositionalSpec,
    Registry, parse_args, parse_args_with, render_help,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Options {
    name: String,
    verbose: bool,
    retries: i32,
    tags: Vec<String>,
    files: Vec<String>,
    usage: String,
}

impl Declare for Options {
    fn declare(registry: &mut Registry<Self>) {
        registry
            .option(
                OptionSpec::string("name,n", "name", |o: &mut Options| &mut o.name)
                    .required()
                    .with_description("Who to greet"),
            )
            .option(OptionSpec::switch("verbose,v", "verbose", |o: &mut Options| {
                &mut o.verbose
            }))
            .option(OptionSpec::integer("retries,r", "retries", |o: &mut Options| {
                &mut o.retries
            }))
            .option(OptionSpec::list("tags", "tags", |o: &mut Options| &mut o.tags))
            .option(OptionSpec::usage("h,help,?", "usage", |o: &mut Options| &mut o.usage))
            .positional(PositionalSpec::new("files", |o: &mut Options| &mut o.files));
    }
}

/// Options without a usage descriptor.
#[derive(Debug, Default)]
struct Plain {
    name: String,
    quiet: bool,
    files: Vec<String>,
}

impl Declare for Plain {
    fn declare(registry: &mut Registry<Self>) {
        registry
            .option(OptionSpec::string("name,n", "name", |p: &mut Plain| &mut p.name).required())
            .option(OptionSpec::switch("q", "quiet", |p: &mut Plain| &mut p.quiet))
            .positional(PositionalSpec::new("files", |p: &mut Plain| &mut p.files));
    }
}

fn parse_quietly<T: Declare>(target: &mut T, args: &[&str]) -> Result<ParseOutcome, ParseError> {
    parse_with_output(target, args, ParserSettings::default()).0
}

fn parse_with_output<T: Declare>(
    target: &mut T,
    args: &[&str],
    settings: ParserSettings,
) -> (Result<ParseOutcome, ParseError>, String) {
    let mut out = Vec::new();
    let result = ParseSession::new(target, Registry::for_target())
        .with_settings(settings)
        .with_usage_writer(&mut out)
        .parse(args.iter().copied());
    (result, String::from_utf8(out).unwrap())
}

// ---------------------------------------------------------------------------
// Boolean semantics
// ---------------------------------------------------------------------------

#[test]
fn bare_switch_toggles_current_value() {
    for initial in [false, true] {
        let mut plain = Plain {
            quiet: initial,
            ..Default::default()
        };
        parse_quietly(&mut plain, &["-n", "x", "-q"]).unwrap();
        assert_eq!(plain.quiet, !initial);
    }
}

#[test]
fn explicit_boolean_values_ignore_current_value() {
    for initial in [false, true] {
        for (token, expected) in [
            ("-q:on", true),
            ("-q=yes", true),
            ("-q+", true),
            ("-q:TRUE", true),
            ("-q:off", false),
            ("-q=no", false),
            ("-q-", false),
            ("-q:False", false),
        ] {
            let mut plain = Plain {
                quiet: initial,
                ..Default::default()
            };
            parse_quietly(&mut plain, &["-n", "x", token]).unwrap();
            assert_eq!(plain.quiet, expected, "{token} from {initial}");
        }
    }
}

#[test]
fn separate_boolean_values_need_opt_in() {
    let mut plain = Plain::default();
    parse_quietly(&mut plain, &["-n", "x", "-q", "off"]).unwrap();
    assert!(plain.quiet);
    assert_eq!(plain.files, ["off"]);

    let mut plain = Plain::default();
    let settings = ParserSettings::default().with_separate_boolean_parameters(true);
    parse_args_with(&mut plain, ["-n", "x", "-q", "on"], settings).unwrap();
    assert!(plain.quiet);
    assert!(plain.files.is_empty());
}

#[test]
fn invalid_boolean_value_is_rejected() {
    let mut plain = Plain::default();
    let err = parse_quietly(&mut plain, &["-q:sometimes"]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidBooleanValue { ref value, .. } if value == "sometimes"));
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[test]
fn list_inline_and_separate_forms_agree() {
    let mut inline = Options::default();
    parse_quietly(&mut inline, &["-n", "x", "-tags:a,b,c"]).unwrap();

    let mut separate = Options::default();
    parse_quietly(&mut separate, &["-n", "x", "-tags", "a", "b", "c"]).unwrap();

    let mut comma_token = Options::default();
    parse_quietly(&mut comma_token, &["-n", "x", "-tags", "a,b,c"]).unwrap();

    assert_eq!(inline.tags, ["a", "b", "c"]);
    assert_eq!(separate.tags, inline.tags);
    assert_eq!(comma_token.tags, inline.tags);
}

#[test]
fn comma_token_is_one_unit_and_rest_is_positional() {
    let mut options = Options::default();
    parse_quietly(&mut options, &["-n", "x", "-tags", "a,b", "c"]).unwrap();

    assert_eq!(options.tags, ["a", "b"]);
    assert_eq!(options.files, ["c"]);
}

#[test]
fn leading_comma_is_a_literal_element() {
    let mut options = Options::default();
    parse_quietly(&mut options, &["-n", "x", "-tags:,a"]).unwrap();
    assert_eq!(options.tags, [",a"]);
}

// ---------------------------------------------------------------------------
// Required options and usage
// ---------------------------------------------------------------------------

#[test]
fn missing_required_option_is_reported_after_scan() {
    let mut plain = Plain::default();
    let err = parse_quietly(&mut plain, &["a.txt", "b.txt"]).unwrap_err();

    assert!(matches!(
        err,
        ParseError::MissingRequiredOption { ref option, ref field } if option == "name" && field == "name"
    ));
    assert_eq!(plain.files, ["a.txt", "b.txt"]);
}

#[test]
fn empty_input_never_fails_required_checks() {
    let mut plain = Plain::default();
    let outcome = parse_quietly(&mut plain, &[]).unwrap();
    assert!(!outcome.usage_shown);
    assert!(plain.name.is_empty());
}

#[test]
fn empty_input_prints_usage_when_declared() {
    let mut options = Options {
        usage: "Usage: greet -name <string>".into(),
        ..Default::default()
    };
    let (result, out) = parse_with_output(&mut options, &[], ParserSettings::default());
    let outcome = result.unwrap();

    assert!(outcome.usage_shown);
    assert!(!outcome.help_requested);
    assert_eq!(out, "Usage: greet -name <string>\n");
}

#[test]
fn matched_usage_skips_required_checks() {
    let mut options = Options {
        usage: render_help("greet", &Registry::<Options>::for_target()),
        ..Default::default()
    };
    let (result, out) = parse_with_output(&mut options, &["-v", "-?"], ParserSettings::default());
    let outcome = result.unwrap();

    assert!(outcome.help_requested);
    assert!(options.verbose);
    assert!(out.starts_with("Usage: greet [options] [files...]"));
    assert!(out.contains("-name, -n <string>"));
}

#[test]
fn unmatched_usage_still_requires_options() {
    let mut options = Options::default();
    let err = parse_quietly(&mut options, &["-v"]).unwrap_err();
    assert!(matches!(err, ParseError::MissingRequiredOption { .. }));
}

// ---------------------------------------------------------------------------
// Positional routing
// ---------------------------------------------------------------------------

#[test]
fn unknown_options_can_become_positionals() {
    let settings = ParserSettings::default().with_unknown_options_as_positional(true);
    let mut plain = Plain::default();
    parse_args_with(&mut plain, ["-n", "x", "-xyz", "file"], settings).unwrap();
    assert_eq!(plain.files, ["-xyz", "file"]);

    let mut plain = Plain::default();
    let err = parse_quietly(&mut plain, &["-n", "x", "-xyz"]).unwrap_err();
    assert!(matches!(err, ParseError::UnknownOption { ref token } if token == "-xyz"));
}

#[test]
fn slash_paths_are_positional_when_slash_options_are_off() {
    let mut plain = Plain::default();
    let err = parse_quietly(&mut plain, &["-n", "x", "/path/to/file"]).unwrap_err();
    assert!(matches!(err, ParseError::UnknownOption { .. }));

    let settings = ParserSettings::default().with_slash_options(false);
    let mut plain = Plain::default();
    parse_args_with(&mut plain, ["-n", "x", "/path/to/file"], settings).unwrap();
    assert_eq!(plain.files, ["/path/to/file"]);
}

#[test]
fn double_slash_is_always_positional() {
    let mut plain = Plain::default();
    parse_quietly(&mut plain, &["/n", "x", "//server/share"]).unwrap();
    assert_eq!(plain.name, "x");
    assert_eq!(plain.files, ["//server/share"]);
}

#[test]
fn positional_without_list_is_rejected() {
    #[derive(Default)]
    struct NoList {
        verbose: bool,
    }

    impl Declare for NoList {
        fn declare(registry: &mut Registry<Self>) {
            registry.option(OptionSpec::switch("v", "verbose", |n: &mut NoList| &mut n.verbose));
        }
    }

    let mut target = NoList::default();
    let err = parse_args(&mut target, ["-v", "stray"]).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedPositionalParameter { ref token } if token == "stray"));
    // Fields bound before the failing token stay bound.
    assert!(target.verbose);
}

#[test]
fn unknown_option_without_list_is_an_unexpected_positional() {
    #[derive(Default)]
    struct NoList {
        verbose: bool,
    }

    impl Declare for NoList {
        fn declare(registry: &mut Registry<Self>) {
            registry.option(OptionSpec::switch("v", "verbose", |n: &mut NoList| &mut n.verbose));
        }
    }

    let settings = ParserSettings::default().with_unknown_options_as_positional(true);
    let err = parse_args_with(&mut NoList::default(), ["-xyz"], settings).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedPositionalParameter { ref token } if token == "-xyz"));
}

#[test]
fn failed_scan_commits_no_positionals() {
    let mut plain = Plain {
        files: vec!["default.txt".to_string()],
        ..Default::default()
    };
    let err = parse_quietly(&mut plain, &["-n", "x", "a.txt", "-bogus"]).unwrap_err();

    assert!(matches!(err, ParseError::UnknownOption { ref token } if token == "-bogus"));
    assert_eq!(plain.name, "x");
    assert_eq!(plain.files, ["default.txt"]);
}

#[test]
fn target_without_options_is_rejected() {
    #[derive(Default)]
    struct Empty;

    impl Declare for Empty {
        fn declare(_registry: &mut Registry<Self>) {}
    }

    let err = parse_args(&mut Empty, Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, ParseError::NoOptionsDeclared));
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_required_string_by_short_alias() {
    let mut plain = Plain::default();
    parse_quietly(&mut plain, &["-n", "Pete"]).unwrap();
    assert_eq!(plain.name, "Pete");
}

#[test]
fn scenario_default_false_switch_turns_on() {
    let mut options = Options::default();
    parse_quietly(&mut options, &["-n", "x", "-v"]).unwrap();
    assert!(options.verbose);
}

#[test]
fn scenario_minus_suffix_turns_default_true_off() {
    let mut plain = Plain {
        quiet: true,
        ..Default::default()
    };
    parse_quietly(&mut plain, &["-n", "x", "-q-"]).unwrap();
    assert!(!plain.quiet);
}

#[test]
fn scenario_integer_without_value() {
    let mut options = Options::default();
    let err = parse_quietly(&mut options, &["-n", "x", "-r"]).unwrap_err();
    assert!(matches!(err, ParseError::MissingValueParameter { ref option } if option == "r"));
}

#[test]
fn scenario_integer_conversion_failure() {
    let mut options = Options::default();
    let err = parse_quietly(&mut options, &["-n", "x", "--retries=many"]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidIntegerValue { ref value, .. } if value == "many"));
}
