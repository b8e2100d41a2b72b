//! Command-line interface for the syntek engine
//! This binary tokenizes Syntek source files the way a host editor would,
//! line by line through one session per file.
//!
//! Usage:
//!   syntek tokens `<path>` [--indent-unit `<n>`] [--format `<format>`]  - Dump classified tokens
//!   syntek check `<path>` [--indent-unit `<n>`]                       - Report lexical/indentation errors

use clap::{Arg, Command};

use syntek::syntek::{Category, LexerState, Token};

fn main() {
    let matches = Command::new("syntek")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tokenizer and indentation checker for Syntek source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a file and print the classified tokens")
                .arg(
                    Arg::new("path")
                        .help("Path to the Syntek source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("indent-unit")
                        .long("indent-unit")
                        .short('u')
                        .help("Columns per indentation level")
                        .default_value("4"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report lexical and indentation errors, exit 1 when any are found")
                .arg(
                    Arg::new("path")
                        .help("Path to the Syntek source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("indent-unit")
                        .long("indent-unit")
                        .short('u')
                        .help("Columns per indentation level")
                        .default_value("4"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let unit = parse_indent_unit(tokens_matches.get_one::<String>("indent-unit").unwrap());
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, unit, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            let unit = parse_indent_unit(check_matches.get_one::<String>("indent-unit").unwrap());
            handle_check_command(path, unit);
        }
        _ => unreachable!(),
    }
}

/// Parse the indent-unit argument, rejecting non-numeric input
fn parse_indent_unit(value: &str) -> usize {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Error: --indent-unit must be a positive integer, got {:?}", value);
        std::process::exit(1);
    })
}

/// Read a source file or exit with an error
fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Tokenize the whole file, one session, line by line
fn tokenize_file(source: &str, indent_unit: usize) -> Vec<Vec<Token>> {
    let mut state = LexerState::new(0, indent_unit);
    source.lines().map(|line| state.tokenize_line(line)).collect()
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, indent_unit: usize, format: &str) {
    let source = read_source(path);
    let lines = tokenize_file(&source, indent_unit);

    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&lines).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "text" => {
            for (number, tokens) in lines.iter().enumerate() {
                for token in tokens {
                    println!("{}: {}", number + 1, token);
                }
            }
        }
        other => {
            eprintln!("Error: unknown format {:?} (expected 'text' or 'json')", other);
            std::process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(path: &str, indent_unit: usize) {
    let source = read_source(path);
    let lines = tokenize_file(&source, indent_unit);

    let mut errors = 0;
    for (number, tokens) in lines.iter().enumerate() {
        for token in tokens {
            if token.indent_error {
                println!("{}:{}: indentation error near {:?}", path, number + 1, token.text);
                errors += 1;
            }
            if token.category == Category::LexError {
                println!("{}:{}: lexical error at {:?}", path, number + 1, token.text);
                errors += 1;
            }
        }
    }

    if errors > 0 {
        eprintln!("{} error(s) found", errors);
        std::process::exit(1);
    }
    println!("No errors found");
}
