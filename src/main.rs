//! `bigo` binary. All work happens in [`bigo_curves::app::run`].

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = bigo_curves::app::run() {
        eprintln!("{err}");
        return ExitCode::from(err.exit_code());
    }
    ExitCode::SUCCESS
}
