//! Command-line interface for lgt-lex
//! This binary is used to inspect the lexer and indentation advisor output
//! for Logtalk source files.
//!
//! Usage:
//!   lgt highlight `<path>`                    - Print the file with ANSI colors
//!   lgt tokens `<path>` [--format `<format>`]   - Dump classified spans
//!   lgt indent `<path>`                       - Reprint the file with advised indentation

use clap::{Arg, Command};

use crossterm::style::Stylize;
use lgt_lex::logtalk::indent;
use lgt_lex::logtalk::lexing::{coalesce, tokenize, Category, StyledSpan};

fn main() {
    let matches = Command::new("lgt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Logtalk highlighting and indentation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("highlight")
                .about("Print a Logtalk file with ANSI colors")
                .arg(
                    Arg::new("path")
                        .help("Path to the Logtalk file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump classified spans for a Logtalk file")
                .arg(
                    Arg::new("path")
                        .help("Path to the Logtalk file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'plain')")
                        .default_value("plain"),
                ),
        )
        .subcommand(
            Command::new("indent")
                .about("Reprint a Logtalk file with advised indentation")
                .arg(
                    Arg::new("path")
                        .help("Path to the Logtalk file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("highlight", sub)) => {
            let path = sub.get_one::<String>("path").expect("required arg");
            handle_highlight_command(path);
        }
        Some(("tokens", sub)) => {
            let path = sub.get_one::<String>("path").expect("required arg");
            let format = sub.get_one::<String>("format").expect("defaulted arg");
            handle_tokens_command(path, format);
        }
        Some(("indent", sub)) => {
            let path = sub.get_one::<String>("path").expect("required arg");
            handle_indent_command(path);
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the highlight command
fn handle_highlight_command(path: &str) {
    let source = read_source(path);
    let per_line = tokenize(&source);

    for (line, spans) in source.lines().zip(&per_line) {
        for span in coalesce(spans) {
            let text = &line[span.range];
            match span.category {
                Some(category) => print!("{}", paint(text, category)),
                None => print!("{}", text),
            }
        }
        println!();
    }
}

fn paint(text: &str, category: Category) -> crossterm::style::StyledContent<&str> {
    match category {
        Category::Comment => text.dark_grey(),
        Category::Escape => text.magenta(),
        Category::String => text.green(),
        Category::Atom => text.dark_green(),
        Category::Meta => text.cyan(),
        Category::Operator => text.yellow(),
        Category::Builtin => text.blue(),
        Category::Number => text.dark_yellow(),
        Category::Variable => text.dark_cyan(),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str) {
    let source = read_source(path);
    let per_line = tokenize(&source);

    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&per_line).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "plain" => {
            for (number, (line, spans)) in source.lines().zip(&per_line).enumerate() {
                for span in coalesce(spans) {
                    println!("{}", plain_span_line(number + 1, line, &span));
                }
            }
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// One line of plain `tokens` output: `line:start..end`, wire name, text.
fn plain_span_line(number: usize, line: &str, span: &StyledSpan) -> String {
    let name = span.category.map_or("none", |c| c.wire_name());
    let text = &line[span.range.clone()];
    format!(
        "{}:{}..{}\t{}\t{:?}",
        number, span.range.start, span.range.end, name, text
    )
}

/// Handle the indent command
fn handle_indent_command(path: &str) {
    let source = read_source(path);
    let lines: Vec<&str> = source.lines().collect();

    for (number, line) in lines.iter().enumerate() {
        let content = line.trim_start();
        if content.is_empty() {
            println!();
            continue;
        }
        let width = indent::suggest_indent(number, &lines);
        println!("{}{}", " ".repeat(width), content);
    }
}
