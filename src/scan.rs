//! The per-line scans. Each one is a single pass over a line's bytes, and all
//! of them treat the line as ASCII: a byte outside ASCII is never a letter, a
//! vowel, or a blank.
//!
//! The scans only compute; the `report` module decides how results are
//! printed.

use bstr::BString;

/// Returns a copy of `line` with every ASCII letter uppercased. Every other
/// byte, including non-ASCII bytes, is copied unchanged, so the result has the
/// same length as `line`.
#[must_use]
pub fn to_caps(line: &[u8]) -> Vec<u8> {
    line.to_ascii_uppercase()
}

const VOWELS: &[u8] = b"aeiouAEIOU";

/// The vowels found in a line, in the order and case in which they occur.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vowels {
    found: BString,
}

impl Vowels {
    /// The vowel bytes, one per vowel found
    #[must_use]
    pub fn found(&self) -> &[u8] {
        &self.found
    }
    /// How many vowels were found
    #[must_use]
    pub fn count(&self) -> usize {
        self.found.len()
    }
}

/// Collects every byte of `line` that is one of `a`, `e`, `i`, `o`, `u`, in
/// either case.
#[must_use]
pub fn vowels(line: &[u8]) -> Vowels {
    let found = line.iter().copied().filter(|b| VOWELS.contains(b)).collect::<Vec<u8>>();
    Vowels { found: BString::from(found) }
}

/// Four consecutive spaces make one tab-equivalent group
const SPACES_PER_TAB: usize = 4;

/// Space and tab totals for a line, as computed by `whitespace`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Whitespace {
    /// Plain spaces, counted by the grouping rule described at `whitespace`
    pub spaces: usize,
    /// Literal tabs plus groups of four consecutive spaces
    pub tabs: usize,
}

/// Counts spaces and tabs in `line`.
///
/// A run of spaces is counted in groups of four: the 1st, 2nd, and 3rd space
/// of a group each add one to `spaces`, and the 4th adds one to `tabs` instead
/// and starts a new group. A literal tab adds one to `tabs`. Any other byte, a
/// tab included, ends the current run. At the end of the line the size of an
/// unfinished group is added to `spaces` once more, so `"  "` counts as four
/// spaces and `"    "` as three spaces and one tab.
#[must_use]
pub fn whitespace(line: &[u8]) -> Whitespace {
    let mut counts = Whitespace::default();
    let mut conse = 0;
    for &b in line {
        match b {
            b' ' => {
                conse += 1;
                if conse == SPACES_PER_TAB {
                    counts.tabs += 1;
                    conse = 0;
                } else {
                    counts.spaces += 1;
                }
            }
            b'\t' => {
                counts.tabs += 1;
                conse = 0;
            }
            _ => conse = 0,
        }
    }
    counts.spaces += conse;
    counts
}

/// Counts the bytes of `line` that are neither ASCII letters nor a space:
/// digits, punctuation, control characters (tab among them), and every byte
/// outside ASCII.
#[must_use]
pub fn special_chars(line: &[u8]) -> usize {
    line.iter().filter(|&&b| is_special(b)).count()
}

fn is_special(b: u8) -> bool {
    !matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b' ')
}
