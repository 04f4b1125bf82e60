use argbind_core::{
    Declare, OptionSpec, ParserSettings, PositionalSpec, Registry, parse_env_or_exit_with,
    render_help,
};
use serde::Serialize;

const PROGRAM: &str = "argbind-demo";

/// Environment variable holding [`ParserSettings`] as JSON.
const SETTINGS_ENV: &str = "ARGBIND_SETTINGS";

#[derive(Debug, Default, Serialize)]
struct DemoOptions {
    name: String,
    verbose: bool,
    retries: i32,
    tags: Vec<String>,
    files: Vec<String>,
    #[serde(skip)]
    describe: bool,
    #[serde(skip)]
    usage: String,
}

impl Declare for DemoOptions {
    fn declare(registry: &mut Registry<Self>) {
        registry
            .option(
                OptionSpec::string("name,n", "name", |o: &mut DemoOptions| &mut o.name)
                    .required()
                    .with_description("Name to greet"),
            )
            .option(
                OptionSpec::switch("verbose,v", "verbose", |o: &mut DemoOptions| {
                    &mut o.verbose
                })
                .with_description("Toggle verbose output"),
            )
            .option(
                OptionSpec::integer("retries,r", "retries", |o: &mut DemoOptions| {
                    &mut o.retries
                })
                .with_description("Retry count"),
            )
            .option(
                OptionSpec::list("tags,t", "tags", |o: &mut DemoOptions| &mut o.tags)
                    .with_description("Tags, comma or space separated"),
            )
            .option(
                OptionSpec::switch("describe", "describe", |o: &mut DemoOptions| {
                    &mut o.describe
                })
                .with_description("Print the declared options as JSON"),
            )
            .option(
                OptionSpec::usage("h,help,?", "usage", |o: &mut DemoOptions| &mut o.usage)
                    .with_description("Show this help"),
            )
            .positional(
                PositionalSpec::new("files", |o: &mut DemoOptions| &mut o.files)
                    .with_description("Input files"),
            );
    }
}

fn load_settings() -> Result<ParserSettings, String> {
    match std::env::var(SETTINGS_ENV) {
        Ok(json) => ParserSettings::from_json_str(&json)
            .map_err(|err| format!("invalid {SETTINGS_ENV}: {err}")),
        Err(_) => Ok(ParserSettings::default()),
    }
}

fn run() -> Result<(), String> {
    let settings = load_settings()?;
    let registry = Registry::<DemoOptions>::for_target();

    let mut options = DemoOptions {
        retries: 3,
        usage: render_help(PROGRAM, &registry),
        ..Default::default()
    };
    parse_env_or_exit_with(&mut options, settings);

    let json = if options.describe {
        serde_json::to_string_pretty(&registry.summary())
    } else {
        serde_json::to_string_pretty(&options)
    }
    .map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
