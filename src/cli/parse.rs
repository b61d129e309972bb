//! Argument parsing for the generator's option grammar.
//!
//! Class toggles come in short `+x`/`-x` pairs and long
//! `--enable-x`/`--disable-x` pairs. Bad tokens are reported and skipped,
//! never fatal: the run proceeds with whatever state has accumulated.

use super::{CliFlags, prompts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    LowerEnable,
    LowerDisable,
    UpperEnable,
    UpperDisable,
    NumberEnable,
    NumberDisable,
    SymbolEnable,
    SymbolDisable,
    Help,
}

fn parse_option(arg: &str) -> Option<Opt> {
    match arg {
        "+l" | "--enable-lower" => Some(Opt::LowerEnable),
        "-l" | "--disable-lower" => Some(Opt::LowerDisable),
        "+u" | "--enable-upper" => Some(Opt::UpperEnable),
        "-u" | "--disable-upper" => Some(Opt::UpperDisable),
        "+n" | "--enable-number" => Some(Opt::NumberEnable),
        "-n" | "--disable-number" => Some(Opt::NumberDisable),
        "+s" | "--enable-symbol" => Some(Opt::SymbolEnable),
        "-s" | "--disable-symbol" => Some(Opt::SymbolDisable),
        "--help" => Some(Opt::Help),
        _ => None,
    }
}

/// Parse `args` (including the program name at index 0) into [`CliFlags`].
///
/// Only the final token is considered as a positional LENGTH; if it fails
/// to parse as an unsigned integer the default length stands and the token
/// is reported as unrecognized, like any other stray argument.
pub fn parse(args: &[String]) -> CliFlags {
    let mut flags = CliFlags::default();

    for (i, arg) in args.iter().enumerate().skip(1) {
        match parse_option(arg) {
            Some(Opt::LowerEnable) => flags.classes.lower = true,
            Some(Opt::LowerDisable) => flags.classes.lower = false,
            Some(Opt::UpperEnable) => flags.classes.upper = true,
            Some(Opt::UpperDisable) => flags.classes.upper = false,
            Some(Opt::NumberEnable) => flags.classes.number = true,
            Some(Opt::NumberDisable) => flags.classes.number = false,
            Some(Opt::SymbolEnable) => flags.classes.symbol = true,
            Some(Opt::SymbolDisable) => flags.classes.symbol = false,
            Some(Opt::Help) => flags.help = true,
            None => {
                if i == args.len() - 1
                    && let Ok(length) = arg.parse::<usize>()
                {
                    flags.length = length;
                    continue;
                }
                prompts::warn(&format!("Unrecognized option: {arg}"));
            }
        }
    }

    flags
}
