//! Best-effort source verification of deployed contracts

use std::process::Command;

use alloy_primitives::Address;
use tracing::info;

use crate::constants::{CHAIN_FLAG, FORGE_COMMAND, VERIFY_COMMAND};

/// The external source-verification service.
///
/// Verification is advisory: implementations never raise, and the
/// deployment must not fail on account of a failed verification.
pub trait ContractVerifier {
    /// Attempts verification of the contract at the given address
    fn try_verify(&self, address: Address);
}

/// Verifies deployed contracts by shelling out to `forge verify-contract`
pub struct ForgeVerifier {
    /// The chain argument passed to forge
    network: String,
    /// The contract identifier to verify the deployed bytecode against
    contract: String,
}

impl ForgeVerifier {
    /// Creates a verifier for the given network and contract
    pub fn new(network: &str, contract: &str) -> Self {
        ForgeVerifier {
            network: network.to_string(),
            contract: contract.to_string(),
        }
    }
}

impl ContractVerifier for ForgeVerifier {
    fn try_verify(&self, address: Address) {
        info!("Attempting source verification of {address:#x}");

        // The exit status is deliberately discarded
        let _ = Command::new(FORGE_COMMAND)
            .arg(VERIFY_COMMAND)
            .arg(CHAIN_FLAG)
            .arg(&self.network)
            .arg(format!("{address:#x}"))
            .arg(&self.contract)
            .status();
    }
}
