mod broadcast;
pub mod cli;
mod consts;
mod settings;
mod submitter;
mod tenderly;
mod verifier;

#[cfg(test)]
mod tests;

pub use broadcast::{DeploymentRecord, RecordError, TransactionEntry, VerificationRequest};
pub use settings::{
    BroadcastSettings, CompilerSettings, NetworkSettings, Settings, TenderlySettings,
};
pub use submitter::{SubmitError, VerificationSubmitter};
pub use tenderly::TenderlyClient;
pub use verifier::{Verifier, VerifyError};

use std::{path::PathBuf, sync::Arc};

/// Verifies every contract of the broadcast record on Tenderly.
/// `record_path` overrides the path derived from `settings.broadcast`.
pub async fn run(settings: Settings, record_path: Option<PathBuf>) -> anyhow::Result<usize> {
    let chain_id = settings.network.chain_id;
    let record_path =
        record_path.unwrap_or_else(|| settings.broadcast.record_path(chain_id));

    if settings.tenderly.access_key.is_none() {
        log::warn!("tenderly access key is not set, requests are sent unauthenticated");
    }
    let client = TenderlyClient::new(
        &settings.tenderly,
        chain_id,
        settings.compiler.version.clone(),
    )?;

    log::info!(
        "Verifying contracts from {} (chain {chain_id}, rpc {}) at {}",
        record_path.display(),
        settings
            .network
            .url
            .as_ref()
            .map_or("not set", |url| url.as_str()),
        client.endpoint()
    );

    let submitter = VerificationSubmitter::new(Arc::new(client));
    let verified = submitter.submit_record(&record_path).await?;
    Ok(verified)
}
