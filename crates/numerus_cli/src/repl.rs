//! Line-oriented interactive converter.
//!
//! # Responsibility
//! - Read commands or conversion inputs line by line.
//! - Render core results and errors as plain text.
//!
//! # Invariants
//! - Input is trimmed and lowercased before command dispatch.
//! - End of input ends the session like `quit`.

use crate::conversion::convert;
use log::{debug, info};
use numerus_core::{core_version, RomanConverter, MAX_ARABIC, MIN_ARABIC};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "numerus> ";
const WELCOME_TEXT: &str = "Numerus: roman numerals converter. Type `help` for commands.";
const EXIT_TEXT: &str = "Vale!";
const HELP_TEXT: &str = "\
Type an integer or a roman numeral to convert it.
Commands:
  help, ?      show this text
  about, info  show version information
  syntax       describe the accepted numeral syntax
  quit, exit   leave";
const SYNTAX_TEXT: &str = "\
Numerals use the symbols I V X L C D M, case and spaces ignored.
- I, X, C, M repeat at most three times in a row.
- V, L, D appear at most once.
- Subtractive pairs: IV IX XL XC CD CM.
- NULLA is zero; a leading `-` makes a numeral negative.";

/// REPL command parsed from one trimmed, lowercased line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Help,
    About,
    Syntax,
    Quit,
    Blank,
    Convert(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line {
            "" => Self::Blank,
            "help" | "?" => Self::Help,
            "about" | "info" => Self::About,
            "syntax" => Self::Syntax,
            "quit" | "exit" => Self::Quit,
            other => Self::Convert(other),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Syntax => "syntax",
            Self::Quit => "quit",
            Self::Blank => "blank",
            Self::Convert(_) => "convert",
        }
    }
}

/// Interactive session over any line source and text sink.
pub struct Repl<R, W> {
    input: R,
    output: W,
    converter: RomanConverter,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            converter: RomanConverter::new(),
        }
    }

    /// Runs until `quit`/`exit` or end of input.
    ///
    /// # Errors
    /// - Propagates read/write failures of the underlying streams.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=repl_start module=cli status=ok");
        writeln!(self.output, "{WELCOME_TEXT}")?;

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let normalized = line.trim().to_lowercase();
            let command = Command::parse(&normalized);
            debug!(
                "event=repl_command module=cli status=ok command={}",
                command.name()
            );
            if !self.execute(command)? {
                break;
            }
        }

        info!("event=repl_end module=cli status=ok");
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn execute(&mut self, command: Command<'_>) -> io::Result<bool> {
        match command {
            Command::Blank => {}
            Command::Help => writeln!(self.output, "{HELP_TEXT}")?,
            Command::About => writeln!(
                self.output,
                "Numerus {} - integers in [{MIN_ARABIC}, {MAX_ARABIC}] and roman numerals",
                core_version()
            )?,
            Command::Syntax => writeln!(self.output, "{SYNTAX_TEXT}")?,
            Command::Quit => {
                writeln!(self.output, "{EXIT_TEXT}")?;
                return Ok(false);
            }
            Command::Convert(text) => match convert(&self.converter, text) {
                Ok(conversion) => writeln!(self.output, "{conversion}")?,
                Err(err) => writeln!(self.output, "{err}")?,
            },
        }
        Ok(true)
    }
}
