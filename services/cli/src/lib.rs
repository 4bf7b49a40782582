mod cli;
mod commands;
mod infra;
mod render;

use jobtrack::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
