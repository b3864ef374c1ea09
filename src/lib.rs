//! `charscan` reads lines of text and reports, for each line: its upper case
//! version, the vowels it contains and how many there are, how many spaces
//! and tabs it has, a running newline counter, and how many "special"
//! characters it has.
//!
//! The `run` function is the kernel of the application. The `input` module
//! collects lines, the `scan` module holds the per-line scans, and the
//! `report` module formats their results.
//!
//! Current Limitations:
//! * Everything is ASCII. Case mapping and the vowel set only know ASCII
//!   letters, and each byte of a multi-byte UTF-8 character counts as one
//!   special character.
//! * All lines are read into memory before the first is reported.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub mod args;
pub mod input;
use crate::input::collect_lines;
pub mod report;
use crate::report::Reporter;
pub mod scan;

/// Writes the banner to `out`, collects lines from `input` up to the first
/// empty line (or the end of input), then writes the report for each line in
/// the order the lines were read.
pub fn run(input: impl BufRead, out: impl Write) -> Result<()> {
    let mut reporter = Reporter::new(out);
    reporter.begin().context("Error writing to standard output")?;

    let lines = collect_lines(input)?;
    for line in &lines {
        reporter.line(line).context("Error writing to standard output")?;
    }
    reporter.finish().context("Error writing to standard output")?;
    Ok(())
}
