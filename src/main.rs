use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::{eyre::WrapErr, Report};
use register_calc::calc::Session;

#[derive(Parser)]
#[command(name = "register-calc")]
#[command(about = "Lazy register calculator: `<register> <add|subtract|multiply> <register>`, `print <register>`, `quit`")]
struct Cli {
    /// File to read commands from (standard input when omitted)
    file: Option<PathBuf>,

    /// Raise the log level, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut session = Session::new(io::stdout().lock(), io::stderr());
    match cli.file {
        Some(path) => {
            let file = File::open(&path)
                .wrap_err_with(|| format!("cannot open {}", path.display()))?;
            session.run(BufReader::new(file))
        }
        None => session.run(io::stdin().lock()),
    }
}
