mod session;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use session::Session;
use std::io;
use std::io::BufWriter;
use std::process::ExitCode;

/// Evaluates arithmetic expressions written in reverse polish notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, e.g. `3 4 +`. Read from standard input, one per line, if omitted
    #[clap(allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Do not print the welcome banner before reading from standard input
    #[clap(long)]
    no_banner: bool,

    /// Print the tokens of each expression before its value
    #[clap(long)]
    show_tokens: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<ExitCode> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    debug!("{:?}", args);

    let stdout = io::stdout();
    let mut session = Session::new(BufWriter::new(stdout.lock()), args.show_tokens);

    if !args.expression.is_empty() {
        let evaluated = session.evaluate_line(&args.expression.join(" "))?;
        return Ok(if evaluated {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if !args.no_banner {
        session.print_banner()?;
    }
    session.run(io::stdin().lock())?;
    Ok(ExitCode::SUCCESS)
}
