//! CLI surface: argument parsing, usage text, and the run loop.

mod flags;
mod help;
mod parse;
mod prompts;

use std::io::{self, Write};

pub use flags::CliFlags;
pub use parse::parse;

use crate::pass::{self, charset};
use crate::rand::OsEntropy;

/// Parse arguments, generate one password, and report the exit code.
pub fn run(args: &[String]) -> i32 {
    let flags = parse(args);

    if flags.help {
        help::print_help();
        return 0;
    }

    let chars = charset::build(flags.classes);
    if chars.is_empty() {
        prompts::error("All character classes disabled; nothing to generate from");
        return 1;
    }

    let password = match pass::generate(&mut OsEntropy, &chars, flags.length) {
        Ok(p) => p,
        Err(e) => {
            prompts::error(&format!("Failed to get random: {e}"));
            return 1;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = out
        .write_all(&password)
        .and_then(|_| out.write_all(b"\n"))
        .and_then(|_| out.flush());

    // Password buffer zeroizes on drop here.
    match written {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
