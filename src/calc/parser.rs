use chumsky::prelude::*;
use color_eyre::{eyre::bail, eyre::eyre, Report};

/////
///// Commands
/////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A blank line.
    Empty,
    Quit,
    Print(String),
    /// `<register> <operator> <register>`, unvalidated.
    Record(String, String, String),
}

/////
///// Parser
/////

// Splits a line into whitespace separated words.
fn parser() -> impl Parser<char, Vec<String>, Error = Simple<char>> {
    let word = filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .padded();

    word.repeated().padded().then_ignore(end())
}

pub fn parse_command(line: &str) -> Result<Command, Report> {
    let words = match parser().parse(line) {
        Ok(words) => words,
        Err(parse_errs) => {
            return Err(eyre!(parse_errs
                .into_iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .concat()))
        }
    };

    Ok(match words.as_slice() {
        [] => Command::Empty,
        [cmd] if cmd.eq_ignore_ascii_case("quit") => Command::Quit,
        [cmd, register] if cmd.eq_ignore_ascii_case("print") => Command::Print(register.clone()),
        [source, operator, operand] => {
            Command::Record(source.clone(), operator.clone(), operand.clone())
        }
        _ => bail!("illegal command: {}", line.trim()),
    })
}
