use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Body of the contracts verification endpoint
// https://docs.tenderly.co/contract-verification
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VerifyContractsRequest {
    pub contracts: Vec<ContractToVerify>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractToVerify {
    pub contract_name: String,
    /// Deployments keyed by chain id.
    pub networks: BTreeMap<String, NetworkDeployment>,
    pub compiler: CompilerConfig,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NetworkDeployment {
    pub address: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CompilerConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct VerifyContractsResponse {
    #[serde(default)]
    pub bytecode_mismatch_errors: Vec<BytecodeMismatchError>,
}

#[derive(Debug, Deserialize)]
pub struct BytecodeMismatchError {
    pub contract_id: Option<String>,
    pub assumed_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub slug: Option<String>,
    pub message: String,
}
