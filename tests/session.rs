use color_eyre::Report;
use pretty_assertions::assert_eq;
use register_calc::calc::Session;

fn run(input: &str) -> Result<(String, String, usize), Report> {
    let mut session = Session::new(Vec::new(), Vec::new());
    session.run(input.as_bytes())?;
    let (calc, out, err) = session.into_parts();
    Ok((
        String::from_utf8(out)?,
        String::from_utf8(err)?,
        calc.operations().len(),
    ))
}

#[test]
fn session_0() -> Result<(), Report> {
    let input = "\
A add 2
print A
B add 5
B subtract 2
print B
A add 1
print A
quit
";
    let (out, err, recorded) = run(input)?;
    assert_eq!(out, "2\n3\n3\n");
    assert_eq!(err, "");
    assert_eq!(recorded, 4);
    Ok(())
}

#[test]
fn session_1() -> Result<(), Report> {
    let input = "\
result add revenue
result subtract costs
revenue add 200
costs add salaries
salaries add 20
salaries multiply 5
costs add 10
print result
QUIT
";
    let (out, err, _) = run(input)?;
    assert_eq!(out, "90\n");
    assert_eq!(err, "");
    Ok(())
}

#[test]
fn quit_stops_reading() -> Result<(), Report> {
    let (out, _, recorded) = run("a add 1\nquit\na add 1\nprint a\n")?;
    assert_eq!(out, "");
    assert_eq!(recorded, 1);
    Ok(())
}

#[test]
fn end_of_input_stops_reading() -> Result<(), Report> {
    let (out, _, _) = run("a add 4\n\nprint a")?;
    assert_eq!(out, "4\n");
    Ok(())
}

#[test]
fn errors_are_reported_and_skipped() -> Result<(), Report> {
    let input = "\
hello
5 add a
a add b
b add a
print a
c add 3
print c
print c-d
";
    let (out, err, recorded) = run(input)?;
    assert_eq!(out, "3\n0\n");
    assert_eq!(
        err,
        "\
illegal command: hello
illegal command: 5 add a: illegal operation, integer 5 cannot be the target of an operation
illegal operation, there is a cycle in the evaluation of `a`
"
    );
    assert_eq!(recorded, 3);
    Ok(())
}

#[test]
fn unknown_operators_are_recorded_and_skipped() -> Result<(), Report> {
    let (out, err, recorded) = run("a ADD 1\nprint a\na + 1\na add 2\nprint a\n")?;
    assert_eq!(out, "0\n2\n");
    assert_eq!(err, "");
    assert_eq!(recorded, 3);
    Ok(())
}
