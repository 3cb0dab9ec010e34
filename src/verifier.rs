use crate::broadcast::VerificationRequest;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service responded with {status}: {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("bytecode mismatch for {contract}: {reason}")]
    BytecodeMismatch { contract: String, reason: String },
}

/// External service able to map deployed bytecode back to its sources.
#[async_trait]
pub trait Verifier: Send + Sync {
    async fn verify(&self, request: &VerificationRequest) -> Result<(), VerifyError>;
}
