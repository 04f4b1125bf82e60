//! Usage text rendering from declarations.

use crate::{Registry, ValueKind};

/// Renders a usage text listing every declared option.
///
/// Options are listed in declaration order as their aliases followed by a
/// value placeholder, with descriptions aligned in a second column. The
/// result is typically stored in the usage field.
///
/// # Examples
///
/// ```
/// use argbind_core::{OptionSpec, PositionalSpec, Registry, render_help};
///
/// struct Config {
///     name: String,
///     files: Vec<String>,
/// }
///
/// let mut registry = Registry::<Config>::new();
/// registry
///     .option(
///         OptionSpec::string("name,n", "name", |c: &mut Config| &mut c.name)
///             .required()
///             .with_description("Who to greet"),
///     )
///     .positional(PositionalSpec::new("files", |c: &mut Config| &mut c.files));
///
/// let help = render_help("greet", &registry);
/// assert!(help.starts_with("Usage: greet [options] [files...]"));
/// assert!(help.contains("-name, -n <string>  Who to greet (required)"));
/// ```
pub fn render_help<T>(program: &str, registry: &Registry<T>) -> String {
    let mut usage_line = format!("Usage: {program} [options]");
    if let Some(positional) = registry.positional_spec() {
        usage_line.push_str(&format!(" [{}...]", positional.field()));
    }

    let option_rows: Vec<(String, String)> = registry
        .options()
        .iter()
        .map(|option| {
            let names = option
                .aliases()
                .iter()
                .map(|alias| format!("-{alias}"))
                .collect::<Vec<_>>()
                .join(", ");
            let left = if option.is_usage() {
                names
            } else {
                format!("{names} {}", placeholder(option.value_kind()))
            };
            (left, describe(option.description(), option.is_required()))
        })
        .collect();

    let mut sections = vec![usage_line, format_section("Options:", &option_rows)];

    if let Some(positional) = registry.positional_spec() {
        let row = (
            format!("{}...", positional.field()),
            describe(positional.description(), positional.is_required()),
        );
        sections.push(format_section("Arguments:", &[row]));
    }

    sections.join("\n\n")
}

fn describe(description: Option<&str>, required: bool) -> String {
    match (description, required) {
        (Some(desc), true) => format!("{desc} (required)"),
        (Some(desc), false) => desc.to_string(),
        (None, true) => "(required)".to_string(),
        (None, false) => String::new(),
    }
}

fn placeholder(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Bool => "[+|-]",
        ValueKind::Int => "<int>",
        ValueKind::String => "<string>",
        ValueKind::StringList => "<value,...>",
    }
}

fn format_section(title: &str, rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    let mut out = title.to_string();
    for (left, right) in rows {
        out.push('\n');
        if right.is_empty() {
            out.push_str(&format!("  {left}"));
        } else {
            out.push_str(&format!("  {left:<width$}  {right}"));
        }
    }
    out
}
