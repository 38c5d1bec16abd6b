//! Command-line interface for seqd
//! This binary parses seqd sequence-diagram sources and renders them into
//! the registered output formats.
//!
//! Usage:
//!   seqd render `<path>` [--to `<format>`] [--output `<file>`] [--config `<file>`]
//!   seqd check `<path>`          - Parse only, report diagnostics
//!   seqd formats                 - List available output formats

use clap::{Arg, ArgMatches, Command};
use seqd_config::{Loader, SeqdConfig};
use seqd_render::default_registry;
use std::io::Read;
use std::process::exit;

fn main() {
    let matches = Command::new("seqd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering seqd sequence diagrams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render a diagram source into an output format")
                .arg(
                    Arg::new("path")
                        .help("Path to the diagram source, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Output format (default taken from configuration)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the built-in defaults"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a diagram source and report diagnostics")
                .arg(
                    Arg::new("path")
                        .help("Path to the diagram source, or '-' for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("render", sub_matches)) => handle_render_command(sub_matches),
        Some(("check", sub_matches)) => handle_check_command(sub_matches),
        Some(("formats", _)) => handle_formats_command(),
        _ => {}
    }
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").expect("path is required");
    let config = load_config(matches.get_one::<String>("config"));
    let source = read_source(path);

    let diagram = seqd_parser::parse_diagram(&source).unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1);
    });

    let format = matches
        .get_one::<String>("to")
        .unwrap_or(&config.render.format);
    let registry = default_registry();
    let output = registry
        .render(&diagram, format, &config.render_options())
        .unwrap_or_else(|e| {
            eprintln!("Render error: {}", e);
            eprintln!("\nAvailable formats:");
            for name in registry.list_formats() {
                eprintln!("  {}", name);
            }
            exit(1);
        });

    match matches.get_one::<String>("output") {
        Some(file) => {
            std::fs::write(file, output).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {}", file, e);
                exit(1);
            });
        }
        None => print!("{}", output),
    }
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").expect("path is required");
    let source = read_source(path);

    match seqd_parser::parse_diagram(&source) {
        Ok(diagram) => {
            println!(
                "{}: {} actors, {} statements",
                path,
                diagram.actors.len(),
                diagram.statements.len()
            );
        }
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = default_registry();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        let format = registry.get(&name).expect("listed format exists");
        println!("  {} (.{})", name, format.extension());
        println!("    {}", format.description());
        println!();
    }
}

/// Read the diagram source, treating `-` as stdin.
fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {}", e);
                exit(1);
            });
        source
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", path, e);
            exit(1);
        })
    }
}

/// Layer an optional user configuration file over the embedded defaults.
fn load_config(config_path: Option<&String>) -> SeqdConfig {
    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        exit(1);
    })
}
