//! Line-based prompts that re-ask until the answer is valid.

use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::terminal::print_error;

use super::text;

/// Reads answers from `input` and writes questions to `out`.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    out: W,
    show_errors_on_stderr: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            show_errors_on_stderr: false,
        }
    }

    /// Route retry messages to stderr in red instead of the prompt stream.
    pub fn errors_to_stderr(mut self) -> Self {
        self.show_errors_on_stderr = true;
        self
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.out, "{msg}")?;
        Ok(())
    }

    /// A message telling the user to try again.
    pub fn complain(&mut self, msg: &str) -> Result<()> {
        if self.show_errors_on_stderr {
            self.out.flush()?;
            print_error(msg);
            Ok(())
        } else {
            self.say(msg)
        }
    }

    /// Ask once and return the raw line without its line ending.
    /// Closed input is reported as `UnexpectedEof`.
    pub fn get_input(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Yes/no question; blank accepts `default`.
    pub fn ask_yn(&mut self, message: &str, default: bool) -> Result<bool> {
        let prompt = format!("{message} {}", if default { "(Y/n) " } else { "(y/N) " });
        loop {
            let answer = self.get_input(&prompt)?.trim().to_lowercase();
            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.complain(text::YES_NO_RETRY)?,
            }
        }
    }

    /// Non-negative number; blank accepts `default`, `accept` decides the rest.
    ///
    /// `accept` returns `Err(message)` to reject a parsed value and re-prompt.
    pub fn get_numeric_input<F>(&mut self, prompt: &str, default: usize, accept: F) -> Result<usize>
    where
        F: Fn(usize) -> std::result::Result<(), String>,
    {
        loop {
            let answer = self.get_input(prompt)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<usize>() {
                Ok(n) => match accept(n) {
                    Ok(()) => return Ok(n),
                    Err(msg) => self.complain(&msg)?,
                },
                Err(_) => self.complain(text::NUMBER_RETRY)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::Error;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.out).unwrap()
    }

    #[test]
    fn yes_no_defaults_and_retries() {
        let mut p = prompter("\nmaybe\nYES\nn\n");
        assert!(p.ask_yn("Go?", true).unwrap());
        assert!(p.ask_yn("Go?", false).unwrap());
        assert!(!p.ask_yn("Go?", true).unwrap());
        let out = written(p);
        assert!(out.contains("Go? (Y/n) "));
        assert!(out.contains("Go? (y/N) "));
        assert_eq!(out.matches(text::YES_NO_RETRY).count(), 1);
    }

    #[test]
    fn numbers_retry_on_garbage() {
        let mut p = prompter("abc\n-4\n 17 \n\n");
        assert_eq!(p.get_numeric_input("Len: ", 12, |_| Ok(())).unwrap(), 17);
        assert_eq!(p.get_numeric_input("Len: ", 12, |_| Ok(())).unwrap(), 12);
        assert_eq!(written(p).matches(text::NUMBER_RETRY).count(), 2);
    }

    #[test]
    fn numbers_checked_by_predicate() {
        let mut p = prompter("1\n3\n");
        let n = p
            .get_numeric_input("Limit: ", 0, |n| {
                if n >= 2 { Ok(()) } else { Err("too low".into()) }
            })
            .unwrap();
        assert_eq!(n, 3);
        assert!(written(p).contains("too low"));
    }

    #[test]
    fn raw_input_keeps_inner_spaces() {
        let mut p = prompter("  a b \r\n");
        assert_eq!(p.get_input("> ").unwrap(), "  a b ");
    }

    #[test]
    fn closed_input_is_eof() {
        let mut p = prompter("");
        match p.ask_yn("Go?", true) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected eof, got {other:?}"),
        }
    }
}
