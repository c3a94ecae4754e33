use std::io;
use std::process::ExitCode;

use clap::Parser;
use cmd_cache_cli::cli_args::Args;
use cmd_cache_cli::dispatch;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match dispatch::execute(&args, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_informational() => {
            // Nothing stored yet, which is not a failure
            println!("{e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
