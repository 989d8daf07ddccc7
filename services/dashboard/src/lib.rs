mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use supplier_compliance::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
