use crate::error::{Result, ShelfError};
use crate::validation;
use std::io::{BufRead, Write};
use tracing::warn;

/// Line-oriented prompts that keep asking until the answer is valid.
///
/// With `max_attempts` unset a prompt only gives up at end of input. With a
/// bound, the n-th rejected answer yields `ShelfError::InvalidInput`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: Option<usize>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes `label` without a newline so the answer lands on the same line.
    pub fn ask(&mut self, label: &str) -> Result<()> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Reads one line, stripped of its line terminator.
    ///
    /// Bytes that are not UTF-8 are replaced, so such a line fails the
    /// usual validation instead of ending the session.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ShelfError::EndOfInput);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn read_int(&mut self) -> Result<i32> {
        self.read_valid(
            "Please enter a valid Integer!!",
            validation::parse_int,
        )
    }

    pub fn read_alphabetic(&mut self) -> Result<String> {
        self.read_valid("Please enter a valid Alphabetic!!", |line| {
            validation::is_alphabetic(line).then(|| line.to_string())
        })
    }

    pub fn read_email(&mut self) -> Result<String> {
        self.read_valid("Please enter a valid Email!!", |line| {
            validation::is_email(line).then(|| line.to_string())
        })
    }

    fn read_valid<T>(&mut self, complaint: &str, accept: impl Fn(&str) -> Option<T>) -> Result<T> {
        let mut rejected = 0usize;
        loop {
            let line = self.read_line()?;
            if let Some(value) = accept(&line) {
                return Ok(value);
            }
            writeln!(self.writer, "{}", complaint)?;
            rejected += 1;
            if self.max_attempts.is_some_and(|max| rejected >= max) {
                warn!(rejected, "prompt retry bound reached");
                return Err(ShelfError::InvalidInput(format!(
                    "gave up after {} invalid answers",
                    rejected
                )));
            }
        }
    }
}
