//! Writes scan results in charscan's fixed, line-oriented format.
//!
//! For each line the `Reporter` writes, in order: the uppercased line, each
//! vowel on a line of its own, `cnt: N`, `Spaces: N`, `Tabs: N`,
//! `Newlines: N`, and `Spl char: N`.

use std::io::{self, Write};

use crate::scan;

/// Written once, before any input is read
pub const BANNER: &str = "begin";

// The counter is bumped before it is printed, so the first line reports 2.
const FIRST_NEWLINE_COUNT: usize = 1;

/// Formats per-line reports onto `out` and keeps the running newline counter.
pub struct Reporter<W: Write> {
    out: W,
    newlines: usize,
}

impl<W: Write> Reporter<W> {
    /// A `Reporter` writing to `out`, with the newline counter at its start
    #[must_use]
    pub fn new(out: W) -> Self {
        Reporter { out, newlines: FIRST_NEWLINE_COUNT }
    }

    /// Writes the banner and flushes, so that it shows up before we wait for
    /// input.
    pub fn begin(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")?;
        self.out.flush()
    }

    /// Runs every scan on `line` and writes the results.
    pub fn line(&mut self, line: &[u8]) -> io::Result<()> {
        self.out.write_all(&scan::to_caps(line))?;
        self.out.write_all(b"\n")?;

        let vowels = scan::vowels(line);
        for vowel in vowels.found() {
            self.out.write_all(&[*vowel, b'\n'])?;
        }
        writeln!(self.out, "cnt: {}", vowels.count())?;

        let whitespace = scan::whitespace(line);
        writeln!(self.out, "Spaces: {}", whitespace.spaces)?;
        writeln!(self.out, "Tabs: {}", whitespace.tabs)?;

        self.newlines += 1;
        writeln!(self.out, "Newlines: {}", self.newlines)?;

        writeln!(self.out, "Spl char: {}", scan::special_chars(line))
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn report(lines: &[&str]) -> String {
        let mut reporter = Reporter::new(Vec::new());
        reporter.begin().unwrap();
        for line in lines {
            reporter.line(line.as_bytes()).unwrap();
        }
        String::from_utf8(reporter.finish().unwrap()).unwrap()
    }

    #[test]
    fn banner_alone_when_there_are_no_lines() {
        assert_eq!(report(&[]), "begin\n");
    }

    #[test]
    fn one_line_report() {
        let expected = "begin\nHI!\ni\ncnt: 1\nSpaces: 0\nTabs: 0\nNewlines: 2\nSpl char: 1\n";
        assert_eq!(report(&["Hi!"]), expected);
    }

    #[test]
    fn vowels_print_before_their_count() {
        let expected = "begin\nTEST\ne\ncnt: 1\nSpaces: 0\nTabs: 0\nNewlines: 2\nSpl char: 0\n";
        assert_eq!(report(&["test"]), expected);
    }

    #[test]
    fn no_vowels_prints_only_the_count() {
        let expected = "begin\nB12\ncnt: 0\nSpaces: 0\nTabs: 0\nNewlines: 2\nSpl char: 2\n";
        assert_eq!(report(&["b12"]), expected);
        let output = report(&["xyz 42"]);
        assert!(output.contains("XYZ 42\ncnt: 0\nSpaces: 1\n"), "{output}");
    }

    #[test]
    fn whitespace_lines_follow_the_grouping_rule() {
        let output = report(&["    x\ty"]);
        assert!(output.contains("Spaces: 3\nTabs: 2\n"), "{output}");
        let output = report(&["  "]);
        assert!(output.contains("Spaces: 4\nTabs: 0\n"), "{output}");
    }

    #[test]
    fn newline_counter_runs_across_lines() {
        let output = report(&["a", "b", "c"]);
        let counters: Vec<&str> = output.lines().filter(|l| l.starts_with("Newlines: ")).collect();
        assert_eq!(counters, ["Newlines: 2", "Newlines: 3", "Newlines: 4"]);
    }

    #[test]
    fn scan_counts_do_not_leak_between_lines() {
        let output = report(&["aeiou  !!", "z"]);
        let second = output.split("Spl char: 2\n").nth(1).unwrap();
        assert_eq!(second, "Z\ncnt: 0\nSpaces: 0\nTabs: 0\nNewlines: 3\nSpl char: 0\n");
    }

    #[test]
    fn bytes_are_written_as_read() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.line(b"\xE9a").unwrap();
        let output = reporter.finish().unwrap();
        assert!(output.starts_with(b"\xE9A\na\ncnt: 1\n"));
    }
}
