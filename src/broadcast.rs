use serde::Deserialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("couldn't read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("couldn't parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Broadcast log written by the deployment script runner.
/// Only the fields required for verification are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeploymentRecord {
    pub transactions: Vec<TransactionEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntry {
    pub contract_address: Option<String>,
    pub contract_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerificationRequest {
    pub name: String,
    pub address: String,
}

impl fmt::Display for VerificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name, self.address)
    }
}

impl TransactionEntry {
    /// Returns `Some` only for entries that name both the deployed contract
    /// and the address it was deployed to.
    pub fn verification_request(&self) -> Option<VerificationRequest> {
        let name = self.contract_name.as_deref().filter(|name| !name.is_empty())?;
        let address = self
            .contract_address
            .as_deref()
            .filter(|address| !address.is_empty())?;
        Some(VerificationRequest {
            name: name.to_string(),
            address: address.to_string(),
        })
    }
}

impl DeploymentRecord {
    pub fn from_file(path: &Path) -> Result<Self, RecordError> {
        let content = std::fs::read(path).map_err(|source| RecordError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&content).map_err(|source| RecordError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Requests for every qualifying transaction, in file order.
    pub fn verification_requests(&self) -> Vec<VerificationRequest> {
        self.transactions
            .iter()
            .filter_map(TransactionEntry::verification_request)
            .collect()
    }
}
