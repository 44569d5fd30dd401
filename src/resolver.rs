//! Resolution of the verifier contract's address

use std::str::FromStr;

use alloy_primitives::Address;
use tracing::info;

use crate::{
    config::EnvSource,
    constants::{VERIFIER_ADDRESS_ENV_VAR, VERIFIER_CONTRACT_NAME},
    errors::ScriptError,
    registry::AddressRegistry,
};

/// Where the verifier address was resolved from.
///
/// A previously recorded deployment always wins; the environment override is
/// only consulted when the registry holds no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierSource {
    /// Resolved from the deployments registry
    Registry(Address),
    /// Resolved from the `PLONKVERIFIER_ADDRESS` environment override
    EnvOverride(Address),
}

impl VerifierSource {
    /// The resolved address, regardless of source
    pub fn address(&self) -> Address {
        match self {
            VerifierSource::Registry(addr) | VerifierSource::EnvOverride(addr) => *addr,
        }
    }
}

/// Resolves the verifier address: registry first, environment override
/// second, otherwise the run must abort — there is no safe default for a
/// verifier address
pub fn resolve_verifier(
    registry: &impl AddressRegistry,
    env: &impl EnvSource,
) -> Result<VerifierSource, ScriptError> {
    if let Some(address) = registry.get(VERIFIER_CONTRACT_NAME)? {
        info!("Using deployed address for {VERIFIER_CONTRACT_NAME}, {address:#x}");
        return Ok(VerifierSource::Registry(address));
    }

    match env.get_optional(VERIFIER_ADDRESS_ENV_VAR) {
        Some(raw) => {
            let address = Address::from_str(&raw)
                .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
            info!("Using environment variable for {VERIFIER_CONTRACT_NAME}, {address:#x}");
            Ok(VerifierSource::EnvOverride(address))
        }
        None => Err(ScriptError::MissingDependency(
            VERIFIER_ADDRESS_ENV_VAR.to_string(),
        )),
    }
}
