//! Code to parse the command line using `clap`. charscan takes no options of
//! its own: the parser answers `--help` and `--version`, and arguments after
//! the first plain one are accepted and ignored.

use clap::Parser;
use std::ffi::OsString;

/// Parses the command line. Returns unless `--help` or `--version` was asked
/// for, in which case `clap` prints its message and exits.
pub fn parse_command_line() {
    CliArgs::parse();
}

#[derive(Debug, Parser)]
#[command(name = "charscan", version)]
/// Reads lines from standard input up to the first blank line, then prints
/// each line in upper case followed by its vowels and vowel count, its space
/// and tab counts, a running newline counter, and its count of special
/// characters (anything other than a letter or a space).
struct CliArgs {
    // Whatever follows is ignored; input only ever comes from stdin.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<OsString>,
}
