use deployment_verifier::Settings;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

// Kept as the only test of this binary: it mutates the process environment.
#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("verifier.toml");
    std::fs::write(
        &config_path,
        r#"
            [network]
            chain_id = 1

            [tenderly]
            project = "from-file"
            request_timeout = 5

            [broadcast]
            root = "/srv/contracts"
            script = "DeployOracles.s.sol"
        "#,
    )
    .unwrap();

    std::env::set_var("DEPLOYMENT_VERIFIER__TENDERLY__PROJECT", "from-env");
    std::env::set_var("DEPLOYMENT_VERIFIER__COMPILER__VERSION", "0.8.19");
    std::env::set_var("REMOTE_RPC_URL", "https://rpc.vnet.tenderly.co/devnet/euler");
    std::env::set_var("TENDERLY_ACCESS_KEY", "secret");
    std::env::set_var("TENDERLY_PRIVATE_VERIFICATION", "false");

    let settings = Settings::build(Some(config_path)).expect("Failed to parse config");

    assert_eq!(settings.network.chain_id, 1);
    assert_eq!(
        settings.network.url.as_ref().map(|url| url.as_str()),
        Some("https://rpc.vnet.tenderly.co/devnet/euler")
    );
    assert_eq!(settings.compiler.version, semver::Version::new(0, 8, 19));
    assert_eq!(settings.tenderly.project, "from-env");
    assert_eq!(settings.tenderly.username, "euler-labs");
    assert_eq!(settings.tenderly.access_key.as_deref(), Some("secret"));
    assert!(!settings.tenderly.private_verification);
    assert_eq!(settings.tenderly.request_timeout, 5);
    assert_eq!(
        settings.broadcast.record_path(settings.network.chain_id),
        PathBuf::from("/srv/contracts/broadcast/DeployOracles.s.sol/1/run-latest.json")
    );
}
