//! Interactive prompt helpers
//!
//! Generic over the reader and writer so the prompt flow can be tested
//! against in-memory buffers.

use std::io::{BufRead, Write};

/// Print a prompt and read one trimmed answer line
///
/// Returns an empty string at end of input.
pub fn prompt_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> std::io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print a prompt and wait for one input line, discarding it
///
/// End of input counts as a keypress.
pub fn pause<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}
