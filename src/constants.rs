//! Constants used in the deploy scripts

/// The name under which the rollup contract is recorded in the
/// deployments registry
pub const ROLLUP_CONTRACT_NAME: &str = "Rollup";

/// The name under which the PLONK verifier contract is recorded in the
/// deployments registry
pub const VERIFIER_CONTRACT_NAME: &str = "PlonkVerifier";

/// The environment variable overriding the verifier address when the
/// registry holds no entry for it
pub const VERIFIER_ADDRESS_ENV_VAR: &str = "PLONKVERIFIER_ADDRESS";

/// The environment variable holding the state root hash the rollup starts from
pub const INITIAL_STATE_ROOT_HASH_ENV_VAR: &str = "ROLLUP_INITIAL_STATE_ROOT_HASH";

/// The environment variable holding the L2 block number the rollup starts from
pub const INITIAL_BLOCK_NUMBER_ENV_VAR: &str = "ROLLUP_INITIAL_BLOCK_NUMBER";

/// The environment variable holding the security council address
pub const SECURITY_COUNCIL_ENV_VAR: &str = "ROLLUP_SECURITY_COUNCIL";

/// The environment variable holding the comma-separated operator address list
pub const OPERATORS_ENV_VAR: &str = "ROLLUP_OPERATORS";

/// The environment variable holding the rate limit period in seconds
pub const RATE_LIMIT_PERIOD_ENV_VAR: &str = "ROLLUP_RATE_LIMIT_PERIOD";

/// The environment variable holding the rate limit amount in wei
pub const RATE_LIMIT_AMOUNT_ENV_VAR: &str = "ROLLUP_RATE_LIMIT_AMOUNT";

/// The environment variable holding the genesis block timestamp
pub const GENESIS_TIMESTAMP_ENV_VAR: &str = "ROLLUP_GENESIS_TIMESTAMP";

/// The environment variable gating writes to the deployments registry
pub const SAVE_ADDRESS_ENV_VAR: &str = "SAVE_ADDRESS";

/// The environment variable naming the branch this deployment is cut from
pub const DEPLOY_BRANCH_ENV_VAR: &str = "DEPLOY_BRANCH";

/// Networks that only accept deployments cut from an allowed branch
pub const PROTECTED_NETWORKS: [&str; 2] = ["mainnet", "sepolia"];

/// The branch always allowed to deploy to protected networks
pub const MAIN_BRANCH: &str = "main";

/// The prefix of release branches allowed to deploy to protected networks
pub const RELEASE_BRANCH_PREFIX: &str = "release/";

/// The top-level key of the `deployments.json` registry file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The address key of a registry entry
pub const ADDRESS_KEY: &str = "address";

/// The transaction hash key of a registry entry
pub const TX_HASH_KEY: &str = "txHash";

/// The file name of the rollup implementation's compilation artifact
pub const ROLLUP_ARTIFACT_FILE: &str = "Rollup.json";

/// The file name of the transparent proxy's compilation artifact
///
/// Compiled from <https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/transparent/TransparentUpgradeableProxy.sol>
pub const PROXY_ARTIFACT_FILE: &str = "TransparentUpgradeableProxy.json";

/// The bytecode key in a compilation artifact
pub const ARTIFACT_BYTECODE_KEY: &str = "bytecode";

/// The name of the `forge` command
pub const FORGE_COMMAND: &str = "forge";

/// The name of the forge subcommand used for source verification
pub const VERIFY_COMMAND: &str = "verify-contract";

/// The flag selecting the chain for the forge verification command
pub const CHAIN_FLAG: &str = "--chain";
