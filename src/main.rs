use std::process::ExitCode;
use tasktrack::commands::Cli;
use tasktrack::libs::logging;
use tasktrack::msg_error;

fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenv::dotenv();
    logging::init();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
