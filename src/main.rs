/**
 * Password hash generator - binary entry point
 *
 * Hashes the password given as the first argument (default `admin123`) with
 * bcrypt and prints the hash plus the SQL needed to store it for the admin
 * account.
 *
 * Usage: cargo run --bin hash_password [password]
 *
 * Besides the argument, the only inputs read are an optional `.env` file and
 * `RUST_LOG`, both for log filtering. Neither changes what is hashed or
 * printed to stdout.
 */

use std::io;
use std::process::ExitCode;

use password_hash_generator::cli;
use password_hash_generator::hasher::{BcryptHasher, HASH_COST};
use password_hash_generator::telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables (RUST_LOG) from .env file
    dotenv::dotenv().ok();

    if let Err(e) = telemetry::init_logging(telemetry::DEFAULT_LOG_LEVEL) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    tracing::debug!(cost = HASH_COST, "starting password hash generator");

    let outcome = password_hash_generator::run(
        cli::lossy_args(std::env::args_os()),
        &BcryptHasher::default(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;

    ExitCode::from(outcome.exit_code())
}
