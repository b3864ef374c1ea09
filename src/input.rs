//! Reading the lines to report on.
use anyhow::{Context, Result};
use bstr::io::BufReadExt;
use std::io::BufRead;

/// The lines collected from the input, in the order they were read
pub type InputBuffer = Vec<Vec<u8>>;

/// Reads lines from `reader` until the first empty line or the end of input,
/// whichever comes first. The empty line itself is not kept, and nothing
/// after it is read. Line terminators (`\n` or `\r\n`) are stripped; a last
/// line without a terminator is kept. Bytes are kept as read, with no decoding.
pub fn collect_lines(mut reader: impl BufRead) -> Result<InputBuffer> {
    let mut lines = InputBuffer::new();
    reader
        .for_byte_line(|line| {
            if line.is_empty() {
                return Ok(false);
            }
            lines.push(line.to_vec());
            Ok(true)
        })
        .context("Error reading standard input")?;
    Ok(lines)
}
