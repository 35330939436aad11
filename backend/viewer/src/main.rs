use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use viewer::cli::Args;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    viewer::init_tracing();

    match viewer::start(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.user_message());

            ExitCode::FAILURE
        }
    }
}
