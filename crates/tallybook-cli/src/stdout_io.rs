use std::io::{self, Write};

/// Writes help and other pre-rendered text to stdout. A closed pipe on the
/// reading side (`tallybook --help | head`) is treated as success so the
/// process still exits cleanly.
pub fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    ignore_broken_pipe(stdout.write_all(text.as_bytes()))?;
    ignore_broken_pipe(stdout.flush())
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
