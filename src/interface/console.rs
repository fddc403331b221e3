use std::io::{BufRead, ErrorKind, Write};

use dialoguer::Input;

use crate::error::{MenuError, Result};

/// Line-level I/O used by the session.
pub trait Console {
    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print one line of output.
    fn say(&mut self, line: &str) -> Result<()>;
}

/// Plain reader/writer console for piped input and tests.
///
/// Prompts are written without a trailing newline, the way a classic
/// terminal program would.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

/// Interactive terminal console backed by dialoguer prompts.
#[derive(Debug, Default)]
pub struct TermConsole;

impl TermConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TermConsole {
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        // dialoguer renders its own ": " suffix.
        let label = prompt.trim_end().trim_end_matches(':');

        let input: std::result::Result<String, dialoguer::Error> = Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text();

        match input {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(MenuError::from(e)),
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_strips_line_endings() {
        let mut out = Vec::new();
        let mut console = LineConsole::new("Coke\r\nwater\n".as_bytes(), &mut out);

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("Coke"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("water"));
        assert_eq!(console.prompt("> ").unwrap(), None);
        drop(console);

        assert_eq!(String::from_utf8(out).unwrap(), "> > > ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = LineConsole::new("done".as_bytes(), Vec::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("done"));
        assert_eq!(console.prompt("").unwrap(), None);
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = LineConsole::new("".as_bytes(), Vec::new());
        console.say("Item added successfully.").unwrap();
        let (_, out) = console.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Item added successfully.\n");
    }
}
