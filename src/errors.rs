use thiserror::Error;

/// Failures while computing a password hash.
#[derive(Error, Debug)]
pub enum HashError {
    #[error("{0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("salt generation failed: {0}")]
    Salt(#[from] rand::Error),

    #[error("hashing task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("hashing primitive returned an empty hash")]
    EmptyHash,

    #[error("generated hash does not verify against its password")]
    VerificationFailed,
}

/// Top-level failure of one generator invocation, formatted for stderr.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Error generating hash: {0}")]
    Hash(#[from] HashError),

    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_failure_keeps_native_detail() {
        let err = GeneratorError::from(HashError::Bcrypt(bcrypt::BcryptError::CostNotAllowed(3)));
        let message = err.to_string();
        assert!(message.starts_with("Error generating hash: "));
        assert!(message.contains("got 3"), "unexpected message: {message}");
    }

    #[test]
    fn output_failure_is_labelled() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert_eq!(
            GeneratorError::from(io).to_string(),
            "Error writing output: pipe closed"
        );
    }
}
