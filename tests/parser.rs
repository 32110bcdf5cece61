use color_eyre::Report;
use pretty_assertions::assert_eq;
use register_calc::calc::{parse_command, Command};

#[test]
fn parse_record() -> Result<(), Report> {
    assert_eq!(
        parse_command("a add b")?,
        Command::Record("a".to_owned(), "add".to_owned(), "b".to_owned())
    );
    assert_eq!(
        parse_command("  x   multiply\t-3  ")?,
        Command::Record("x".to_owned(), "multiply".to_owned(), "-3".to_owned())
    );
    Ok(())
}

#[test]
fn parse_print_and_quit() -> Result<(), Report> {
    assert_eq!(parse_command("print total")?, Command::Print("total".to_owned()));
    assert_eq!(parse_command("PRINT total")?, Command::Print("total".to_owned()));
    assert_eq!(parse_command("quit")?, Command::Quit);
    assert_eq!(parse_command("Quit\n")?, Command::Quit);
    Ok(())
}

#[test]
fn parse_blank() -> Result<(), Report> {
    assert_eq!(parse_command("")?, Command::Empty);
    assert_eq!(parse_command("   \t ")?, Command::Empty);
    Ok(())
}

#[test]
fn parse_illegal() {
    for line in ["hello", "print", "show a", "a add b c", "print a b c d"] {
        let err = parse_command(line).unwrap_err();
        assert_eq!(err.to_string(), format!("illegal command: {}", line));
    }
}
