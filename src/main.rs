use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;

fn main() -> Result<()> {
    charscan::args::parse_command_line();

    let input = io::stdin().lock();
    let stdout = io::stdout();
    if stdout.is_terminal() {
        charscan::run(input, stdout.lock())
    } else {
        charscan::run(input, io::BufWriter::new(stdout.lock()))
    }
}
