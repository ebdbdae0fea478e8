use std::process::ExitCode;

use clap::Parser;

/// Prints how a value receiver and a reference receiver diverge after the
/// same delivery.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    receiver_kinds::trace::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match receiver_kinds::run(&mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("receiver-kinds: {err}");
            ExitCode::FAILURE
        }
    }
}
