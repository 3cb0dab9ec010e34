use crate::consts::{
    BROADCAST_DIR, DEFAULT_CHAIN_ID, DEFAULT_COMPILER_VERSION, DEFAULT_DEPLOY_SCRIPT,
    DEFAULT_RECORD_FILE_NAME, DEFAULT_TENDERLY_API_URL, DEFAULT_TENDERLY_PROJECT,
    DEFAULT_TENDERLY_USERNAME,
};
use anyhow::Context;
use config::{Config, Environment, File};
use semver::Version;
use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

const SERVICE_NAME: &str = "DEPLOYMENT_VERIFIER";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub network: NetworkSettings,
    pub compiler: CompilerSettings,
    pub tenderly: TenderlySettings,
    pub broadcast: BroadcastSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkSettings {
    /// RPC endpoint of the network the contracts were deployed to.
    pub url: Option<Url>,
    pub chain_id: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            url: None,
            chain_id: DEFAULT_CHAIN_ID,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerSettings {
    #[serde(with = "serde_with::rust::display_fromstr")]
    pub version: Version,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: Version::parse(DEFAULT_COMPILER_VERSION).expect("valid version"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TenderlySettings {
    pub api_url: Url,
    pub username: String,
    pub project: String,
    pub access_key: Option<String>,
    /// Verified contracts are visible only inside the project.
    /// Setting to `false` makes them visible to the whole world.
    pub private_verification: bool,
    /// Request timeout in seconds.
    pub request_timeout: u64,
}

impl Default for TenderlySettings {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_TENDERLY_API_URL).expect("valid url"),
            username: DEFAULT_TENDERLY_USERNAME.to_string(),
            project: DEFAULT_TENDERLY_PROJECT.to_string(),
            access_key: None,
            private_verification: true,
            request_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BroadcastSettings {
    /// Project directory that contains the `broadcast` folder.
    pub root: PathBuf,
    pub script: String,
    pub file_name: String,
}

impl Default for BroadcastSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            script: DEFAULT_DEPLOY_SCRIPT.to_string(),
            file_name: DEFAULT_RECORD_FILE_NAME.to_string(),
        }
    }
}

impl BroadcastSettings {
    pub fn record_path(&self, chain_id: u64) -> PathBuf {
        self.root
            .join(BROADCAST_DIR)
            .join(&self.script)
            .join(chain_id.to_string())
            .join(&self.file_name)
    }
}

impl Settings {
    pub fn new() -> anyhow::Result<Self> {
        Self::build(None)
    }

    /// Builds the settings from the given file (or the one named by
    /// `DEPLOYMENT_VERIFIER__CONFIG`), the environment, and the legacy
    /// `REMOTE_RPC_URL` / `TENDERLY_*` variables, in increasing priority.
    pub fn build(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path_name = format!("{SERVICE_NAME}__CONFIG");
        let env_config_path = std::env::var_os(&config_path_name).map(PathBuf::from);
        // otherwise it is read back as an unknown `config` key
        std::env::remove_var(&config_path_name);

        let mut builder = Config::builder();
        if let Some(config_path) = config_path.or(env_config_path) {
            builder = builder.add_source(File::from(config_path));
        }
        // Use `__` so that keys with underscores in names (e.g. `access_key`) are addressable
        builder = builder
            .add_source(Environment::with_prefix(SERVICE_NAME).separator("__"))
            .set_override_option("network.url", legacy_var("REMOTE_RPC_URL"))?
            .set_override_option("tenderly.access_key", legacy_var("TENDERLY_ACCESS_KEY"))?
            .set_override_option(
                "tenderly.private_verification",
                legacy_var("TENDERLY_PRIVATE_VERIFICATION"),
            )?;

        let settings: Self = builder
            .build()?
            .try_deserialize()
            .context("invalid settings")?;

        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.tenderly.private_verification
            && (self.tenderly.username.is_empty() || self.tenderly.project.is_empty())
        {
            anyhow::bail!("private verification requires both tenderly username and project");
        }
        if self.tenderly.request_timeout == 0 {
            anyhow::bail!("tenderly request timeout should be positive");
        }
        Ok(())
    }
}

fn legacy_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
