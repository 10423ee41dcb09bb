mod cli;
mod replay;
mod session;

use parking_attendant::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
