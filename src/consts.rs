pub const DEFAULT_TENDERLY_API_URL: &str = "https://api.tenderly.co/api/v1/";
pub const DEFAULT_TENDERLY_USERNAME: &str = "euler-labs";
pub const DEFAULT_TENDERLY_PROJECT: &str = "euler";

pub const DEFAULT_CHAIN_ID: u64 = 41337;
pub const DEFAULT_COMPILER_VERSION: &str = "0.8.24";

pub const BROADCAST_DIR: &str = "broadcast";
pub const DEFAULT_DEPLOY_SCRIPT: &str = "DeployLendVaults.sol";
pub const DEFAULT_RECORD_FILE_NAME: &str = "run-latest.json";
