use std::io::{BufRead, Write};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::menu::errors::MenuError;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[\s,;]+").expect("separator pattern is valid");
}

/// Source of answers for the exercise handlers.
pub trait Prompt {
    /// Show `prompt` and return the next line without its line terminator.
    fn ask(&mut self, prompt: &str) -> Result<String, MenuError>;
}

impl<'a> dyn Prompt + 'a {
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, MenuError> {
        let line = self.ask(prompt)?;
        parse_token(line.trim())
    }

    /// Read one line holding zero or more numbers.
    pub fn ask_numbers<T: FromStr>(&mut self, prompt: &str) -> Result<Vec<T>, MenuError> {
        let line = self.ask(prompt)?;
        parse_tokens(&line)
    }
}

pub fn parse_token<T: FromStr>(token: &str) -> Result<T, MenuError> {
    if token.is_empty() {
        return Err(MenuError::BadInput("Expected a number, got an empty line".into()));
    }
    token
        .parse::<T>()
        .map_err(|_| MenuError::BadInput(format!("Invalid number: '{}'", token)))
}

/// Split on whitespace, commas or semicolons.
pub fn parse_tokens<T: FromStr>(line: &str) -> Result<Vec<T>, MenuError> {
    SEPARATORS
        .split(line.trim())
        .filter(|t| !t.is_empty())
        .map(parse_token)
        .collect()
}

/// Line-oriented console over any reader / writer pair.
pub struct Console<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn say(&mut self, text: &str) -> Result<(), MenuError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, MenuError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
