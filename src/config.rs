//! Environment-sourced configuration for the deploy scripts

use std::env;

use crate::{
    constants::{
        DEPLOY_BRANCH_ENV_VAR, GENESIS_TIMESTAMP_ENV_VAR, INITIAL_BLOCK_NUMBER_ENV_VAR,
        INITIAL_STATE_ROOT_HASH_ENV_VAR, MAIN_BRANCH, OPERATORS_ENV_VAR, PROTECTED_NETWORKS,
        RATE_LIMIT_AMOUNT_ENV_VAR, RATE_LIMIT_PERIOD_ENV_VAR, RELEASE_BRANCH_PREFIX,
        SECURITY_COUNCIL_ENV_VAR,
    },
    errors::ScriptError,
};

/// A source of environment-style configuration values.
///
/// The process environment in production, a fixed map in tests.
pub trait EnvSource {
    /// Returns the value of the given variable, or `None` if it is unset
    fn get_optional(&self, name: &str) -> Option<String>;

    /// Returns the value of the given variable, failing with
    /// [`ScriptError::MissingConfiguration`] naming the variable if it is unset
    fn get_required(&self, name: &str) -> Result<String, ScriptError> {
        self.get_optional(name)
            .ok_or_else(|| ScriptError::MissingConfiguration(name.to_string()))
    }
}

/// The process environment
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get_optional(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// The rollup initializer configuration, gathered from the environment in
/// one eager pass before any chain interaction.
///
/// Values are kept as the raw strings read from the environment; parsing
/// into ABI types happens during calldata construction. Presence is the
/// only validation applied here.
#[derive(Debug, Clone)]
pub struct RollupConfig {
    /// Hex-encoded state root hash the rollup starts from
    pub initial_state_root_hash: String,
    /// L2 block number the rollup starts from
    pub initial_block_number: String,
    /// Address of the security council
    pub security_council: String,
    /// Comma-separated list of operator addresses
    pub operators: String,
    /// Rate limit period in seconds
    pub rate_limit_period: String,
    /// Rate limit amount in wei
    pub rate_limit_amount: String,
    /// Timestamp of the genesis block
    pub genesis_timestamp: String,
}

impl RollupConfig {
    /// Reads all required variables, failing on the first absent one
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ScriptError> {
        Ok(RollupConfig {
            initial_state_root_hash: env.get_required(INITIAL_STATE_ROOT_HASH_ENV_VAR)?,
            initial_block_number: env.get_required(INITIAL_BLOCK_NUMBER_ENV_VAR)?,
            security_council: env.get_required(SECURITY_COUNCIL_ENV_VAR)?,
            operators: env.get_required(OPERATORS_ENV_VAR)?,
            rate_limit_period: env.get_required(RATE_LIMIT_PERIOD_ENV_VAR)?,
            rate_limit_amount: env.get_required(RATE_LIMIT_AMOUNT_ENV_VAR)?,
            genesis_timestamp: env.get_required(GENESIS_TIMESTAMP_ENV_VAR)?,
        })
    }
}

/// Validates that the targeted network may be deployed to from the branch
/// this run was cut from.
///
/// Protected networks only accept deployments from the main branch or a
/// release branch; all other networks are unrestricted.
pub fn validate_deploy_branch(network: &str, env: &impl EnvSource) -> Result<(), ScriptError> {
    if !PROTECTED_NETWORKS.contains(&network) {
        return Ok(());
    }

    let branch = env.get_optional(DEPLOY_BRANCH_ENV_VAR).unwrap_or_default();
    if branch == MAIN_BRANCH || branch.starts_with(RELEASE_BRANCH_PREFIX) {
        Ok(())
    } else {
        Err(ScriptError::PolicyViolation(format!(
            "network `{network}` may not be deployed to from branch `{branch}`"
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        constants::{
            DEPLOY_BRANCH_ENV_VAR, GENESIS_TIMESTAMP_ENV_VAR, INITIAL_BLOCK_NUMBER_ENV_VAR,
            INITIAL_STATE_ROOT_HASH_ENV_VAR, OPERATORS_ENV_VAR, RATE_LIMIT_AMOUNT_ENV_VAR,
            RATE_LIMIT_PERIOD_ENV_VAR, SECURITY_COUNCIL_ENV_VAR,
        },
        errors::ScriptError,
        test_helpers::MapEnv,
    };

    use super::{validate_deploy_branch, RollupConfig};

    /// The seven required rollup configuration variables
    const REQUIRED_VARS: [&str; 7] = [
        INITIAL_STATE_ROOT_HASH_ENV_VAR,
        INITIAL_BLOCK_NUMBER_ENV_VAR,
        SECURITY_COUNCIL_ENV_VAR,
        OPERATORS_ENV_VAR,
        RATE_LIMIT_PERIOD_ENV_VAR,
        RATE_LIMIT_AMOUNT_ENV_VAR,
        GENESIS_TIMESTAMP_ENV_VAR,
    ];

    /// An environment carrying all seven required variables
    fn full_env() -> MapEnv {
        let mut env = MapEnv::new();
        for var in REQUIRED_VARS {
            env.set(var, "value");
        }
        env
    }

    #[test]
    fn test_from_env__all_present() {
        let config = RollupConfig::from_env(&full_env()).unwrap();
        assert_eq!(config.operators, "value");
    }

    #[test]
    fn test_from_env__each_missing_var_is_fatal() {
        for var in REQUIRED_VARS {
            let mut env = full_env();
            env.unset(var);

            let err = RollupConfig::from_env(&env).unwrap_err();
            match err {
                ScriptError::MissingConfiguration(name) => assert_eq!(name, var),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_validate_deploy_branch__unprotected_network() {
        // No branch set at all, but devnet is not a protected network
        validate_deploy_branch("devnet", &MapEnv::new()).unwrap();
    }

    #[test]
    fn test_validate_deploy_branch__protected_network_allowed_branches() {
        for branch in ["main", "release/v0.2.0"] {
            let mut env = MapEnv::new();
            env.set(DEPLOY_BRANCH_ENV_VAR, branch);
            validate_deploy_branch("mainnet", &env).unwrap();
        }
    }

    #[test]
    fn test_validate_deploy_branch__protected_network_rejected() {
        let mut env = MapEnv::new();
        env.set(DEPLOY_BRANCH_ENV_VAR, "feature/faster-proofs");

        let err = validate_deploy_branch("mainnet", &env).unwrap_err();
        assert!(matches!(err, ScriptError::PolicyViolation(_)));

        // Unset branch is also rejected for protected networks
        let err = validate_deploy_branch("sepolia", &MapEnv::new()).unwrap_err();
        assert!(matches!(err, ScriptError::PolicyViolation(_)));
    }
}
