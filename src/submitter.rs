use crate::{
    broadcast::{DeploymentRecord, RecordError, VerificationRequest},
    verifier::{Verifier, VerifyError},
};
use std::{path::Path, sync::Arc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("malformed deployment record: {0}")]
    MalformedRecord(#[from] RecordError),
    #[error("verification of {name} at {address} failed: {source}")]
    VerificationFailure {
        name: String,
        address: String,
        source: VerifyError,
    },
    #[error("verification task for {name} at {address} was aborted: {source}")]
    Aborted {
        name: String,
        address: String,
        source: tokio::task::JoinError,
    },
}

pub struct VerificationSubmitter {
    verifier: Arc<dyn Verifier>,
}

impl VerificationSubmitter {
    pub fn new(verifier: Arc<dyn Verifier>) -> Self {
        Self { verifier }
    }

    /// Submits every qualifying contract of the record at `path`.
    /// Returns the number of verified contracts.
    pub async fn submit_record(&self, path: &Path) -> Result<usize, SubmitError> {
        let record = DeploymentRecord::from_file(path)?;
        self.submit_all(record.verification_requests()).await
    }

    /// Starts all verifications at once and waits for every one of them to settle.
    /// If some of them failed, the first failure (in request order) is returned.
    pub async fn submit_all(
        &self,
        requests: Vec<VerificationRequest>,
    ) -> Result<usize, SubmitError> {
        let (requests, handles): (Vec<_>, Vec<_>) = requests
            .into_iter()
            .map(|request| {
                log::info!("Verifying {} at {}", request.name, request.address);
                let verifier = self.verifier.clone();
                let task_request = request.clone();
                let handle =
                    tokio::spawn(async move { verifier.verify(&task_request).await });
                (request, handle)
            })
            .unzip();

        let total = requests.len();
        let results = futures::future::join_all(handles).await;

        let mut first_failure = None;
        for (request, result) in requests.into_iter().zip(results) {
            let VerificationRequest { name, address } = request;
            let err = match result {
                Ok(Ok(())) => continue,
                Ok(Err(source)) => SubmitError::VerificationFailure {
                    name,
                    address,
                    source,
                },
                Err(source) => SubmitError::Aborted {
                    name,
                    address,
                    source,
                },
            };
            log::error!("{err}");
            first_failure.get_or_insert(err);
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(total),
        }
    }
}
