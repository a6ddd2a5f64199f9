use crate::error::Result;
use std::io::{self, BufRead, Write};

pub const URL_PROMPT: &str = "Enter the YouTube video URL: ";

/// Writes the prompt and reads one line, trimmed. End of input yields an empty string.
pub fn read_url<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    write!(writer, "{}", URL_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn prompt_for_url() -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_url(&mut stdin.lock(), &mut stdout.lock())
}
