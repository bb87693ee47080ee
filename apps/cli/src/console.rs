//! # Console
//!
//! Line-oriented terminal I/O, generic over the reader and writer so the
//! menus can be driven from a `Cursor` in tests.
//!
//! ```text
//! Console<StdinLock, Stdout>             production
//! Console<Cursor<&[u8]>, Vec<u8>>        tests
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use nutrifit_core::ValidationError;

use crate::error::CliResult;

/// Terminal input and output.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Direct access to the writer, for `write!`-style output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> CliResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Shows `label: ` and reads one trimmed line. `None` at end of input.
    ///
    /// A line that is not valid UTF-8 is consumed and reported as a
    /// validation error, so the caller can ask again.
    pub fn read_answer(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = match self.input.read_line(&mut line) {
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                return Err(ValidationError::InvalidFormat {
                    field: label.to_string(),
                    reason: "input is not valid UTF-8".to_string(),
                }
                .into());
            }
            Err(err) => return Err(err.into()),
        };
        if read == 0 {
            // Keep the transcript on separate lines when input runs out.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Console::read_answer`], but running out of input while a
    /// value is being asked for is a validation error.
    pub fn prompt(&mut self, label: &str) -> CliResult<String> {
        self.read_answer(label)?
            .ok_or_else(|| ValidationError::required(label).into())
    }

    /// Returns `preset` if given, otherwise prompts for it.
    pub fn value_or_prompt(&mut self, preset: Option<String>, label: &str) -> CliResult<String> {
        match preset {
            Some(value) => Ok(value),
            None => self.prompt(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<&[u8]>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes()), Vec::new())
    }

    #[test]
    fn test_prompt_trims_and_echoes_label() {
        let mut c = console("  Omega3  \n");
        assert_eq!(c.prompt("Supplement name").unwrap(), "Omega3");
        assert_eq!(String::from_utf8(c.into_output()).unwrap(), "Supplement name: ");
    }

    #[test]
    fn test_eof_while_prompting_is_required() {
        let mut c = console("");
        let err = c.prompt("Price").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.message, "Price is required");
    }

    #[test]
    fn test_read_answer_distinguishes_blank_from_eof() {
        let mut c = console("\n");
        assert_eq!(c.read_answer("Quantity").unwrap(), Some(String::new()));
        assert_eq!(c.read_answer("Quantity").unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_recoverable_and_skipped() {
        let mut c = Console::new(Cursor::new(&b"\xff\xfe\nOmega3\n"[..]), Vec::new());

        let err = c.prompt("Supplement name").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(
            err.message,
            "Supplement name has invalid format: input is not valid UTF-8"
        );

        assert_eq!(c.prompt("Supplement name").unwrap(), "Omega3");
    }

    #[test]
    fn test_value_or_prompt_skips_prompt_when_preset() {
        let mut c = console("");
        let value = c.value_or_prompt(Some("Alice".to_string()), "User name").unwrap();
        assert_eq!(value, "Alice");
        assert!(c.into_output().is_empty());
    }
}
