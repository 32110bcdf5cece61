use std::io::{BufRead, Write};

use color_eyre::Report;
use log::debug;

use super::parser::{parse_command, Command};
use super::Calculator;

/////
///// The command loop
/////

/// Reads commands line by line, printing values to `out` and rejected
/// commands to `err`. Nothing but I/O failure ends a session early.
pub struct Session<W: Write, E: Write> {
    calc: Calculator,
    out: W,
    err: E,
}

impl<W: Write, E: Write> Session<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Session {
            calc: Calculator::new(),
            out,
            err,
        }
    }

    pub fn into_parts(self) -> (Calculator, W, E) {
        (self.calc, self.out, self.err)
    }

    /// Runs until `quit` or the end of `input`.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), Report> {
        for line in input.lines() {
            let line = line?;
            if !self.execute(&line)? {
                debug!("quit");
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Executes a single line. Returns `false` once the session should stop.
    pub fn execute(&mut self, line: &str) -> Result<bool, Report> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(self.err, "{}", e)?;
                return Ok(true);
            }
        };

        match command {
            Command::Empty => {}
            Command::Quit => return Ok(false),
            Command::Print(register) => match self.calc.query_register(&register) {
                Ok(v) => writeln!(self.out, "{}", v)?,
                Err(e) => writeln!(self.err, "{}", e)?,
            },
            Command::Record(source, operator, operand) => {
                if let Err(e) = self.calc.record_operation(&source, &operator, &operand) {
                    writeln!(self.err, "illegal command: {}: {}", line.trim(), e)?;
                }
            }
        }
        Ok(true)
    }
}
