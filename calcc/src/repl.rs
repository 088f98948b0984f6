use std::io::Write;
use std::path::PathBuf;

use calc_core::{environment::prelude::Environment, eval::interpret};

use crate::cli;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	ctrlc::set_handler(|| {
		println!();
		std::process::exit(0);
	}).expect("setting Ctrl-C handler");

	cli::print_session("interactive calculator, type `end` to quit");
	print_manual();

	let mut env = Environment::new();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			"end" => return Ok(()),
			_ => {
				match interpret(PathBuf::from("repl"), &input, &mut env) {
					Ok(value) => println!("{value}"),
					Err(err) => cli::print_error(&err)
				}
			}
		}
	}
}

fn print_manual() {
	println!("Add, subtract, multiply and divide with `+`, `-`, `*` and `/`, e.g. `1 + 2 / 1`.");
	println!("Parentheses group subexpressions, e.g. `(1 + 3) / 2`.");
	println!("Assign with `=` and chain statements with `;`, e.g. `x = 4; (x + 5) * 2`.");
	println!("Variables keep their values between lines.");
}
