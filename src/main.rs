//! CLI tool to extract symbols from note files.
//!
//! Usage:
//!   notesyms extract [--format text|json] [--title first|last] [--verbose] `<files>`...
//!   notesyms tokens `<file>`

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use notesyms::{ExtractOptions, Extractor, TitlePolicy, TracingSink, read_document};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let verbose = matches
        .subcommand()
        .is_some_and(|(_, sub)| sub.get_flag("verbose"));
    init_logging(verbose);

    match matches.subcommand() {
        Some(("extract", sub)) => handle_extract(sub),
        Some(("tokens", sub)) => handle_tokens(sub),
        _ => ExitCode::from(2),
    }
}

fn cli() -> Command {
    let verbose = Arg::new("verbose")
        .long("verbose")
        .short('v')
        .action(ArgAction::SetTrue)
        .help("Log diagnostics (illegal characters, unterminated links) to stderr");

    Command::new("notesyms")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract titles, headings, links, wiki-links and tags from notes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Print the symbol table of each file")
                .arg(
                    Arg::new("files")
                        .help("Note files to read")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Which level-1 heading becomes the title")
                        .value_parser(clap::value_parser!(TitlePolicy))
                        .default_value("first"),
                )
                .arg(verbose.clone()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a file, one token per line")
                .arg(
                    Arg::new("file")
                        .help("Note file to read")
                        .required(true)
                        .index(1),
                )
                .arg(verbose),
        )
}

fn init_logging(verbose: bool) {
    let default = if verbose { "notesyms=trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn handle_extract(matches: &ArgMatches) -> ExitCode {
    let json = matches
        .get_one::<String>("format")
        .is_some_and(|f| f == "json");
    let policy = matches
        .get_one::<TitlePolicy>("title")
        .copied()
        .unwrap_or_default();
    let verbose = matches.get_flag("verbose");
    let options = ExtractOptions::new().title_policy(policy);

    let mut had_error = false;
    let files = matches.get_many::<String>("files").into_iter().flatten();

    for path in files {
        let text = match read_document(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
                continue;
            }
        };

        let extractor = if verbose {
            Extractor::with_sink(&text, options, TracingSink)
        } else {
            Extractor::with_options(&text, options)
        };
        let table = extractor.extract();

        if json {
            match serde_json::to_string_pretty(&table) {
                Ok(out) => println!("{out}"),
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            }
        } else {
            println!("{path}:");
            print!("{}", notesyms::render(&table));
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn handle_tokens(matches: &ArgMatches) -> ExitCode {
    let Some(path) = matches.get_one::<String>("file") else {
        return ExitCode::from(2);
    };
    let text = match read_document(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let scanner = if matches.get_flag("verbose") {
        notesyms::Scanner::with_sink(&text, TracingSink)
    } else {
        notesyms::Scanner::new(&text)
    };
    for token in scanner {
        println!(
            "{}:{}\t{}\t{:?}",
            token.line, token.column, token.kind, token.literal
        );
    }
    ExitCode::SUCCESS
}
