//! Command-line interface for oracion
//!
//! Usage:
//!   oracion check `<sentence>` [--format `<format>`]  - Validate a sentence and show its breakdown
//!   oracion tokens `<sentence>`                     - Print the classified token stream
//!   oracion grammar                               - Print the fixed grammar

use clap::{Arg, Command};
use oracion::lexer::{literals, Scanner};
use oracion::processor::validate;

fn main() {
    let matches = Command::new("oracion")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validates sentences against a fixed Spanish grammar")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Validate a sentence and show its breakdown")
                .arg(
                    Arg::new("sentence")
                        .help("The sentence to validate")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('table' or 'json')")
                        .default_value("table"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the classified token stream for a sentence")
                .arg(
                    Arg::new("sentence")
                        .help("The sentence to tokenize")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("grammar").about("Print the fixed grammar"))
        .get_matches();

    match matches.subcommand() {
        Some(("check", check_matches)) => {
            let sentence = check_matches.get_one::<String>("sentence").unwrap();
            let format = check_matches.get_one::<String>("format").unwrap();
            handle_check_command(sentence, format);
        }
        Some(("tokens", tokens_matches)) => {
            let sentence = tokens_matches.get_one::<String>("sentence").unwrap();
            handle_tokens_command(sentence);
        }
        Some(("grammar", _)) => {
            handle_grammar_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the check command
fn handle_check_command(sentence: &str, format: &str) {
    let result = validate(sentence);
    match format {
        "table" => {
            if result.is_valid() {
                println!("Oración VÁLIDA\n");
                println!("{}", result.render_table());
            } else {
                eprintln!("Oración INVÁLIDA: {}", result.render_table());
                std::process::exit(1);
            }
        }
        "json" => {
            let json = result.to_json().unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
            if !result.is_valid() {
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("Unknown format '{}' (expected 'table' or 'json')", other);
            std::process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(sentence: &str) {
    for item in Scanner::new(sentence) {
        match item {
            Ok(token) => println!(
                "{:>4}  {:<9}  {}",
                token.line,
                token.kind.name(),
                token.lexeme
            ),
            Err(error) => println!("{:>4}  {:<9}  {}", error.line, "ERROR", error.character),
        }
    }
}

/// Handle the grammar command
fn handle_grammar_command() {
    println!("O           → SALUDO , SUJETO VERBO COMPLEMENTO . DESPEDIDA");
    println!("SALUDO      → {}", literals::GREETINGS.join(" | "));
    println!("SUJETO      → [A-Z][a-z]+");
    println!("VERBO       → [a-z]+");
    println!("COMPLEMENTO → PALABRA COMPLEMENTO | PALABRA");
    println!("PALABRA     → [a-z]+");
    println!("DESPEDIDA   → {}", literals::FAREWELLS.join(" | "));
}
