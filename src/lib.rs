//! Generates a bcrypt hash for an admin password and prints it together with
//! a ready-to-paste `UPDATE` statement.

use std::io::Write;

pub mod cli;
pub mod errors;
pub mod hasher;
pub mod models;
pub mod report;
pub mod telemetry;

use errors::{GeneratorError, HashError};
use hasher::PasswordHasher;
use models::HashReport;

/// Result of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success, // exit 0
    Failed,  // exit 1
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failed => 1,
        }
    }
}

/// Hashes `password` and pairs it with the resulting hash.
pub async fn generate<H: PasswordHasher>(hasher: &H, password: String) -> Result<HashReport, HashError> {
    let hash = hasher::hash_password(hasher, &password).await?;
    Ok(HashReport::new(password, hash))
}

/// Runs the generator for `args` (program name first), writing the report to
/// `out` and any failure to `err`.
///
/// Nothing reaches `out` unless hashing succeeded.
pub async fn run<I, H, W, E>(args: I, hasher: &H, out: &mut W, err: &mut E) -> Outcome
where
    I: IntoIterator<Item = String>,
    H: PasswordHasher,
    W: Write,
    E: Write,
{
    let password = cli::password_from_args(args);

    match try_run(password, hasher, out).await {
        Ok(()) => Outcome::Success,
        Err(e) => {
            tracing::debug!(error = ?e, "hash generation failed");
            let _ = writeln!(err, "{}", e);
            Outcome::Failed
        }
    }
}

async fn try_run<H: PasswordHasher, W: Write>(password: String, hasher: &H, out: &mut W) -> Result<(), GeneratorError> {
    let report = generate(hasher, password).await?;
    report::write_report(out, &report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_exit_codes() {
        assert_eq!(Outcome::Success.exit_code(), 0);
        assert_eq!(Outcome::Failed.exit_code(), 1);
    }
}
