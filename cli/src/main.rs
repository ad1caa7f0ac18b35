//! entrypoint for gcurl

use std::io;
use std::process::ExitCode;

use gcurl::{trace, write_usage, Args, Outcome};
use tracing::level_filters::LevelFilter;

fn main() -> ExitCode {
    let args = Args::parse_normalized(std::env::args_os());

    if let Err(err) = trace::init_tracing(LevelFilter::WARN) {
        eprintln!("gcurl: tracing disabled: {err}");
    }

    match gcurl::run(args, io::stdin().lock(), io::stdout().lock()) {
        Ok(Outcome::Relayed(_)) => ExitCode::SUCCESS,
        Ok(Outcome::MissingUrl) => {
            if let Err(err) = write_usage(io::stdout().lock()) {
                eprintln!("gcurl: could not print usage: {err}");
            }
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("gcurl: {err}");
            ExitCode::from(2)
        }
    }
}
