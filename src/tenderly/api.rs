use super::types::{
    ApiErrorResponse, CompilerConfig, ContractToVerify, NetworkDeployment,
    VerifyContractsRequest, VerifyContractsResponse,
};
use crate::{
    broadcast::VerificationRequest,
    settings::TenderlySettings,
    verifier::{Verifier, VerifyError},
};
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue};
use semver::Version;
use std::{collections::BTreeMap, time::Duration};
use url::Url;

const ACCESS_KEY_HEADER: &str = "x-access-key";
const COMPILER_NAME: &str = "solc";

pub struct TenderlyClient {
    http_client: reqwest::Client,
    endpoint: Url,
    chain_id: u64,
    compiler_version: Version,
}

impl TenderlyClient {
    pub fn new(
        settings: &TenderlySettings,
        chain_id: u64,
        compiler_version: Version,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(access_key) = &settings.access_key {
            let mut value =
                HeaderValue::from_str(access_key).context("invalid tenderly access key")?;
            value.set_sensitive(true);
            headers.insert(ACCESS_KEY_HEADER, value);
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout))
            .default_headers(headers)
            .build()
            .context("cannot build an http client")?;
        let endpoint = verification_endpoint(settings).context("invalid tenderly api url")?;

        Ok(Self {
            http_client,
            endpoint,
            chain_id,
            compiler_version,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_body(&self, request: &VerificationRequest) -> VerifyContractsRequest {
        VerifyContractsRequest {
            contracts: vec![ContractToVerify {
                contract_name: request.name.clone(),
                networks: BTreeMap::from([(
                    self.chain_id.to_string(),
                    NetworkDeployment {
                        address: request.address.clone(),
                    },
                )]),
                compiler: CompilerConfig {
                    name: COMPILER_NAME.to_string(),
                    version: self.compiler_version.to_string(),
                },
            }],
        }
    }
}

#[async_trait::async_trait]
impl Verifier for TenderlyClient {
    async fn verify(&self, request: &VerificationRequest) -> Result<(), VerifyError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&self.request_body(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(VerifyError::Rejected {
                status,
                message: error_message(&body),
            });
        }

        let response = parse_response(&body);
        match response.bytecode_mismatch_errors.into_iter().next() {
            Some(mismatch) => Err(VerifyError::BytecodeMismatch {
                contract: mismatch.contract_id.unwrap_or_else(|| request.name.clone()),
                reason: mismatch
                    .assumed_reason
                    .unwrap_or_else(|| "deployed bytecode differs".to_string()),
            }),
            None => Ok(()),
        }
    }
}

fn verification_endpoint(settings: &TenderlySettings) -> Result<Url, url::ParseError> {
    let mut base = settings.api_url.clone();
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    let path = if settings.private_verification {
        format!(
            "account/{}/project/{}/contracts",
            settings.username, settings.project
        )
    } else {
        "public/verify".to_string()
    };
    base.join(&path)
}

fn parse_response(body: &str) -> VerifyContractsResponse {
    if body.trim().is_empty() {
        return VerifyContractsResponse::default();
    }
    serde_json::from_str(body).unwrap_or_else(|err| {
        log::warn!("unexpected verification response: {err}; body: {body}");
        VerifyContractsResponse::default()
    })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(ApiErrorResponse { error }) => match error.slug {
            Some(slug) => format!("{slug}: {}", error.message),
            None => error.message,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(api_url: &str, private_verification: bool) -> TenderlySettings {
        TenderlySettings {
            api_url: Url::parse(api_url).unwrap(),
            private_verification,
            ..Default::default()
        }
    }

    #[test]
    fn private_endpoint() {
        let endpoint = verification_endpoint(&settings("https://api.tenderly.co/api/v1/", true));
        assert_eq!(
            endpoint.unwrap().as_str(),
            "https://api.tenderly.co/api/v1/account/euler-labs/project/euler/contracts"
        );
    }

    #[test]
    fn public_endpoint() {
        let endpoint = verification_endpoint(&settings("https://api.tenderly.co/api/v1/", false));
        assert_eq!(
            endpoint.unwrap().as_str(),
            "https://api.tenderly.co/api/v1/public/verify"
        );
    }

    #[test]
    fn endpoint_without_trailing_slash() {
        let endpoint = verification_endpoint(&settings("http://127.0.0.1:8080/api/v1", false));
        assert_eq!(
            endpoint.unwrap().as_str(),
            "http://127.0.0.1:8080/api/v1/public/verify"
        );
    }

    #[test]
    fn request_body_uses_chain_and_compiler() {
        let client = TenderlyClient::new(
            &TenderlySettings::default(),
            1,
            Version::new(0, 8, 19),
        )
        .unwrap();
        let body = client.request_body(&VerificationRequest {
            name: "VaultA".into(),
            address: "0x1".into(),
        });

        let contract = &body.contracts[0];
        assert_eq!(contract.contract_name, "VaultA");
        assert_eq!(contract.networks["1"].address, "0x1");
        assert_eq!(contract.compiler.version, "0.8.19");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            error_message(r#"{"error": {"slug": "not_found", "message": "project not found"}}"#),
            "not_found: project not found"
        );
        assert_eq!(
            error_message(r#"{"error": {"message": "internal error"}}"#),
            "internal error"
        );
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_message(""), "empty response body");
    }

    #[test]
    fn lenient_success_body() {
        assert!(parse_response("").bytecode_mismatch_errors.is_empty());
        assert!(parse_response("OK").bytecode_mismatch_errors.is_empty());
        assert_eq!(
            parse_response(r#"{"bytecode_mismatch_errors": [{"contract_id": "A"}]}"#)
                .bytecode_mismatch_errors
                .len(),
            1
        );
    }
}
