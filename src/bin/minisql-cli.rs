//! minisql interactive shell
//!
//! Reads one statement per line, dispatches it to the engine and prints
//! the reply; `exit;` ends the session.

use std::env;
use std::io::{self, BufRead, Write};

use colored::Colorize;
use minisql::sql::engine::Session;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => println!("minisql v{}", VERSION),
            _ => print_help(),
        }
        return;
    }

    if let Err(err) = repl() {
        eprintln!("{}", format!("Error: {}", err).red());
        std::process::exit(1);
    }
}

fn print_help() {
    println!("minisql v{} - minimal interactive SQL engine", VERSION);
    println!();
    println!("Usage:");
    println!("  minisql-cli              start the interactive shell");
    println!("  minisql-cli --version    print the version");
    println!();
    println!("Statements: CREATE TABLE, INSERT INTO, SELECT ... FROM ... WHERE");
}

fn repl() -> io::Result<()> {
    let mut session = Session::new();

    println!("{}", format!("minisql v{}", VERSION).bright_cyan());
    println!("Enter statements, or 'exit;' to quit.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", ">".bright_cyan());
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let statement = line.trim();
        if statement.is_empty() {
            continue;
        }
        if statement.eq_ignore_ascii_case("exit;") {
            break;
        }

        match session.execute(statement) {
            Ok(result) => println!("{}", result),
            Err(err) => println!("{}", format!("Error: {}", err).red()),
        }
    }

    Ok(())
}
