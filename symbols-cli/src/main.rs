//! Command-line interface for symbol catalogues
//! This binary loads a catalogue resource, groups it into sections and prints it in one of
//! the supported formats.
//!
//! Usage:
//!   symbols [`<resource>`] [--format `<format>`] [--name `<name>`] [--resources `<dir>`]
//!   symbols --list-resources                                 - List resources in the resource directory
//!   symbols --list-formats                                   - List output formats
//!
//! Configuration is layered: built-in defaults, then `symbols.toml` in the working directory,
//! then `--config <file>`, then the flags above.

use clap::{Arg, ArgAction, ArgMatches, Command};
use symbols_config::{Loader, SymbolsConfig, LOCAL_CONFIG_FILE};
use symbols_parser::symbols::formats::{format_catalogue, Format};
use symbols_parser::symbols::loader::DirectoryLoader;
use symbols_parser::Catalogue;

fn build_cli() -> Command {
    Command::new("symbols")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting sectioned symbol catalogues")
        .arg(
            Arg::new("resource")
                .help("Resource name to load, without extension (default: catalogue.resource)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: source, outline, json, yaml (default: output.format)"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .help("Display name for the catalogue (default: catalogue.name)"),
        )
        .arg(
            Arg::new("resources")
                .long("resources")
                .short('r')
                .help("Directory containing catalogue resources (default: resources.directory)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-resources")
                .long("list-resources")
                .help("List the resources available in the resource directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parsing details to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    tracing::debug!(?config, "configuration loaded");

    let loader = DirectoryLoader::new(&config.resources.directory)
        .with_extension(config.resources.extension.as_str());

    if matches.get_flag("list-resources") {
        handle_list_resources_command(&loader);
        return;
    }

    let resource = matches
        .get_one::<String>("resource")
        .cloned()
        .unwrap_or_else(|| config.catalogue.resource.clone());
    handle_show_command(&config, &loader, &resource);
}

/// Install the stderr subscriber. `-v` forces debug output, otherwise `RUST_LOG`
/// decides and warnings are shown by default.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Layer defaults, the local config file, `--config` and flag overrides.
fn load_config(matches: &ArgMatches) -> Result<SymbolsConfig, String> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);

    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(format) = matches.get_one::<String>("format") {
        let format: Format = format.parse().map_err(|e| format!("{}", e))?;
        loader = loader
            .set_override("output.format", format.name())
            .map_err(|e| e.to_string())?;
    }

    if let Some(name) = matches.get_one::<String>("name") {
        loader = loader
            .set_override("catalogue.name", name.as_str())
            .map_err(|e| e.to_string())?;
    }

    if let Some(dir) = matches.get_one::<String>("resources") {
        loader = loader
            .set_override("resources.directory", dir.as_str())
            .map_err(|e| e.to_string())?;
    }

    loader.build().map_err(|e| e.to_string())
}

/// Handle the default command: load, group and print a catalogue
fn handle_show_command(config: &SymbolsConfig, loader: &DirectoryLoader, resource: &str) {
    let catalogue = Catalogue::from_resource(config.catalogue.name.as_str(), resource, loader);

    let mut formatted = format_catalogue(&catalogue, config.output.format).unwrap_or_else(|e| {
        eprintln!("Error formatting catalogue: {}", e);
        std::process::exit(1);
    });
    if !formatted.is_empty() && !formatted.ends_with('\n') {
        formatted.push('\n');
    }

    print!("{}", formatted);
}

/// Handle the list-resources command
fn handle_list_resources_command(loader: &DirectoryLoader) {
    let names = loader.list().unwrap_or_else(|e| {
        eprintln!("Cannot list resources: {}", e);
        std::process::exit(1);
    });

    if names.is_empty() {
        eprintln!(
            "No .{} resources found in {}",
            loader.extension(),
            loader.root().display()
        );
        return;
    }

    for name in names {
        println!("{}", name);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");

    for format in Format::all() {
        println!("  {}", format);
        println!("    {}", format.description());
        println!();
    }
}
