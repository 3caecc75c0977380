//! Line-oriented questions on a reader/writer pair.
//!
//! Answers are trimmed and lowercased. End of input is reported as `None` so
//! callers can wind down instead of treating it as an error.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks once and returns the normalized answer, `None` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Asks until `parse` accepts the answer, switching to `retry` after the
    /// first rejection.
    pub fn ask_until_valid<T, F>(
        &mut self,
        question: &str,
        retry: &str,
        mut parse: F,
    ) -> Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T>,
    {
        let mut current = question;
        loop {
            let Some(answer) = self.ask(current)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    debug!(answer = %answer, error = %e, "Rejected input");
                    current = retry;
                }
            }
        }
    }

    /// Yes/no question. Anything but `yes` or `y`, including end of input,
    /// counts as no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(matches!(self.ask(question)?.as_deref(), Some("yes" | "y")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_normalizes() {
        let mut p = prompter("  New York City  \n");
        assert_eq!(p.ask("City?").unwrap().as_deref(), Some("new york city"));
        assert_eq!(p.ask("Again?").unwrap(), None);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "City?\nAgain?\n");
    }

    #[test]
    fn test_ask_until_valid_reprompts() {
        let mut p = prompter("zero\n-1\n3\n");
        let parse = |s: &str| -> Result<u32> {
            match s.parse::<u32>() {
                Ok(n) if n > 0 => Ok(n),
                _ => bail!("not a positive number"),
            }
        };
        let n = p.ask_until_valid("How many?", "Try again:", parse).unwrap();
        assert_eq!(n, Some(3));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "How many?\nTry again:\nTry again:\n");
    }

    #[test]
    fn test_ask_until_valid_eof() {
        let mut p = prompter("bad\n");
        let n = p
            .ask_until_valid("Q?", "Again:", |s: &str| Ok::<u32, anyhow::Error>(s.parse::<u32>()?))
            .unwrap();
        assert_eq!(n, None);
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("YES\ny\nno\n\n");
        assert!(p.confirm("?").unwrap());
        assert!(p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap()); // end of input
    }
}
