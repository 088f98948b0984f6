mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;
use calc_core::{
    environment::prelude::Environment,
    eval::interpret,
    parser::prelude::parse_source,
    utils::prelude::Error
};

#[derive(Parser)]
enum Command {
    /// Starts an interactive calculator session
    Repl,
    /// Evaluates a single expression and prints its value
    Eval {
        /// Expression to evaluate
        expression: String,
        /// Print the parsed tree instead of evaluating it
        #[arg(long, default_value_t = false)]
        print_ast: bool
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl
}

fn main() {
    match Command::parse() {
        Command::Repl => {
            let _ = repl::start();
        },
        Command::Eval { expression, print_ast } => {
            if print_ast {
                match parse_source(&expression) {
                    Ok(parsed) => println!("{:#?}", parsed),
                    Err(err) => {
                        let err = Error::from_parse(
                            PathBuf::from("expr"),
                            expression.clone(),
                            err
                        );

                        cli::print_error(&err);
                        std::process::exit(1);
                    }
                }

                return;
            }

            let mut env = Environment::new();

            match interpret(PathBuf::from("expr"), &expression, &mut env) {
                Ok(value) => println!("{value}"),
                Err(err) => {
                    cli::print_error(&err);
                    std::process::exit(1);
                }
            }
        },
        Command::Rlpl => {
            let _ = rlpl::start();
        },
        Command::Rppl => {
            let _ = rppl::start();
        }
    }
}
