// Command-line interface for tmd
//
// The main role of the tmd program is to turn TMD sources into HTML or Markdown. The actual
// translation lives in the tmd-babel crate; this binary only reads files, resolves settings and
// writes results.
//
// Usage:
//  tmd <input> [--format html|markdown] [--output <file>]          - Convert (default command)
//  tmd convert <input> [--format html|markdown] [--output <file>]  - Same as above (explicit)
//  tmd inspect <input> [<transform>]                               - Show how lines are classified
//  tmd --list-formats                                              - List output formats
//
// Settings are layered: built-in defaults, ./tmd.toml, --config <path>, then --extra-* flags.
//
// Extra Parameters:
//
// Dialect knobs can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies them over the loaded configuration.
// Example:
//  tmd notes.tmd --extra-tables --extra-italic star

use tmd_cli::{io, transforms, CliError};

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{debug, warn};
use std::collections::HashMap;
use tmd_babel::{FormatRegistry, ItalicStyle, OutputFormat, TranslateOptions};
use tmd_config::{Loader, TmdConfig, CONFIG_FILE_NAME};

/// Extra keys that take a boolean. A bare flag only swallows the next argument when that
/// argument is a boolean literal, so `--extra-tables notes.tmd` keeps the input path.
const BOOLEAN_EXTRAS: &[&str] = &["tables", "table"];

/// Parse extra-* arguments from command line args
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Check if the next arg is a value or another flag/end
            let has_value = match args.get(i + 1) {
                Some(next) if next.starts_with('-') => false,
                Some(next) if BOOLEAN_EXTRAS.contains(&key) => bool_literal(next).is_some(),
                Some(_) => true,
                None => false,
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("tmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert TMD documents to HTML or Markdown")
        .long_about(
            "tmd converts documents written in the TMD markup into HTML or Markdown.\n\n\
            Commands:\n  \
            - convert: Translate a .tmd file (default, the command name can be omitted)\n  \
            - inspect: Show how each line of a .tmd file is classified\n\n\
            Extra Parameters:\n  \
            --extra-tables [bool]       Treat lines containing '|' as table rows\n  \
            --extra-italic slash|star   Italic marker: //text// or *text*\n\n\
            Examples:\n  \
            tmd notes.tmd                          # HTML on stdout\n  \
            tmd notes.tmd --format markdown        # Markdown on stdout\n  \
            tmd notes.tmd -o notes.html            # Write HTML to a file",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a TMD file (default command)")
                .arg(
                    Arg::new("input")
                        .help("Path to input file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format (defaults to html, or the configured format)")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            OutputFormat::NAMES,
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Path to output file (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show how each line of a TMD file is classified")
                .arg(
                    Arg::new("path")
                        .help("Path to the TMD file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'lines-simple'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

/// Inject "convert" right after the program name unless the command line already names a
/// subcommand or asks for something that needs none.
///
/// Options may come before the input path (`tmd --format markdown notes.tmd`), so every token
/// is checked, not only the first one.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];
    const STANDALONE_FLAGS: &[&str] = &["--list-formats", "-h", "--help", "-V", "--version"];

    let rest = args.get(1..).filter(|rest| !rest.is_empty())?;
    let names_command = |arg: &String| {
        SUBCOMMANDS.contains(&arg.as_str()) || STANDALONE_FLAGS.contains(&arg.as_str())
    };
    if rest.iter().any(names_command) {
        return None;
    }
    let mut new_args = vec![args[0].clone(), "convert".to_string()];
    new_args.extend_from_slice(rest);
    Some(new_args)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&cleaned_args) {
            Some(new_args) => cli
                .try_get_matches_from(&new_args)
                .unwrap_or_else(|e2| e2.exit()),
            None => e.exit(),
        },
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(err) = run(&matches, &mut extra_params) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches, extra_params: &mut HashMap<String, String>) -> Result<(), CliError> {
    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        extra_params,
    )?;
    for key in extra_params.keys() {
        warn!("ignoring unknown parameter --extra-{key}");
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let format = sub_matches
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| config.convert.format.clone());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &format, output, &config)
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &config)
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    format: &str,
    output: Option<&str>,
    config: &TmdConfig,
) -> Result<(), CliError> {
    let registry = FormatRegistry::default();

    // Validate the format before touching the filesystem
    registry.get(format)?;

    let source = io::read_source(input)?;
    let options = TranslateOptions::from(&config.convert.markup);
    debug!("converting '{input}' to {format} with {options:?}");
    let result = registry.translate(&source, format, &options)?;

    match output {
        Some(path) => {
            io::write_output(path, &result)?;
            println!("Written to {path}");
        }
        None => println!("{result}"),
    }
    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, config: &TmdConfig) -> Result<(), CliError> {
    let source = io::read_source(path)?;
    let options = TranslateOptions::from(&config.convert.markup);
    let output = transforms::execute_transform(&source, transform, &options)?;
    print!("{output}");
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!(
                "  {name:<10} {} (.{})",
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &mut HashMap<String, String>,
) -> Result<TmdConfig, CliError> {
    let loader = Loader::new().with_optional_file(CONFIG_FILE_NAME);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    Ok(apply_config_overrides(loader, extra_params)?.build()?)
}

/// Layer the known `--extra-*` parameters over the file-based settings.
///
/// Recognized keys are removed from `extra_params`; whatever remains is unknown to tmd.
fn apply_config_overrides(
    mut loader: Loader,
    extra_params: &mut HashMap<String, String>,
) -> Result<Loader, CliError> {
    if let Some(raw) = take_override(extra_params, &["tables", "table"]) {
        loader = loader.set_override("convert.markup.tables", parse_bool_arg("tables", &raw))?;
    }
    if let Some(raw) = take_override(extra_params, &["italic", "italic-style"]) {
        let style = raw.parse::<ItalicStyle>()?;
        loader = loader.set_override("convert.markup.italic", style.name())?;
    }
    if let Some(raw) = take_override(extra_params, &["format"]) {
        loader = loader.set_override("convert.format", raw)?;
    }
    Ok(loader)
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn bool_literal(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    bool_literal(raw).unwrap_or_else(|| {
        eprintln!("Invalid boolean value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
