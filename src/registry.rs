//! The deployed-address registry, backed by a `deployments.json` file

use std::{fs, path::PathBuf, str::FromStr};

use alloy_primitives::{Address, TxHash};
use json::JsonValue;
use tracing::{info, warn};

use crate::{
    config::EnvSource,
    constants::{ADDRESS_KEY, DEPLOYMENTS_KEY, SAVE_ADDRESS_ENV_VAR, TX_HASH_KEY},
    errors::ScriptError,
};

/// A registry of previously deployed contract addresses, keyed by contract name
pub trait AddressRegistry {
    /// Returns the recorded address of the given contract, or `None` if the
    /// contract has no recorded deployment
    fn get(&self, contract_name: &str) -> Result<Option<Address>, ScriptError>;

    /// Attempts to record a deployment.
    ///
    /// Never raises; the registry decides internally whether the record is
    /// actually persisted, and failures do not fail the deployment itself.
    fn try_store(&self, network: &str, contract_name: &str, address: Address, tx_hash: TxHash);
}

/// The live registry: a `deployments.json` file holding, per network, the
/// address and deployment transaction hash of each recorded contract
pub struct DeploymentsFile {
    /// Path of the registry file
    path: PathBuf,
    /// The network whose records `get` reads
    network: String,
    /// Whether `try_store` actually writes, from the `SAVE_ADDRESS` flag
    save: bool,
}

impl DeploymentsFile {
    /// Opens the registry at the given path for the given network, capturing
    /// the `SAVE_ADDRESS` flag once at construction
    pub fn new(path: &str, network: &str, env: &impl EnvSource) -> Self {
        let save = env
            .get_optional(SAVE_ADDRESS_ENV_VAR)
            .is_some_and(|v| v == "true");

        DeploymentsFile {
            path: PathBuf::from(path),
            network: network.to_string(),
            save,
        }
    }

    /// Parses the registry file into JSON
    fn read_registry(&self) -> Result<JsonValue, ScriptError> {
        let contents =
            fs::read_to_string(&self.path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

        json::parse(&contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
    }

    /// Records a deployment, creating the registry file if it does not exist
    fn store(
        &self,
        network: &str,
        contract_name: &str,
        address: Address,
        tx_hash: TxHash,
    ) -> Result<(), ScriptError> {
        // If the file doesn't exist, create it
        if !self.path.exists() {
            fs::write(&self.path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
        }
        let mut parsed = self.read_registry()?;

        let mut entry = JsonValue::new_object();
        entry[ADDRESS_KEY] = JsonValue::String(format!("{address:#x}"));
        entry[TX_HASH_KEY] = JsonValue::String(format!("{tx_hash:#x}"));
        parsed[DEPLOYMENTS_KEY][network][contract_name] = entry;

        fs::write(&self.path, json::stringify_pretty(parsed, 4))
            .map_err(|e| ScriptError::WriteDeployments(e.to_string()))
    }
}

impl AddressRegistry for DeploymentsFile {
    fn get(&self, contract_name: &str) -> Result<Option<Address>, ScriptError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let parsed = self.read_registry()?;

        match parsed[DEPLOYMENTS_KEY][self.network.as_str()][contract_name][ADDRESS_KEY].as_str() {
            Some(addr) => Address::from_str(addr)
                .map(Some)
                .map_err(|e| ScriptError::ReadDeployments(e.to_string())),
            None => Ok(None),
        }
    }

    fn try_store(&self, network: &str, contract_name: &str, address: Address, tx_hash: TxHash) {
        if !self.save {
            info!("SAVE_ADDRESS is not set, skipping registry write for {contract_name}");
            return;
        }

        if let Err(e) = self.store(network, contract_name, address, tx_hash) {
            warn!("failed to record {contract_name} deployment: {e}");
        }
    }
}
