//! Utilities for the deploy scripts

use std::{fs, path::Path, str::FromStr};

use alloy::{
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolCall;

use crate::{
    config::RollupConfig, constants::ARTIFACT_BYTECODE_KEY, errors::ScriptError,
    solidity::initializeCall,
};

/// Sets up the client with which to submit deployment transactions, along
/// with the deployer's address, from the private key and RPC url
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<(DynProvider, Address), ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let deployer_address = signer.address();

    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new()
        .wallet(signer)
        .with_simple_nonce_management()
        .connect_http(url);

    Ok((DynProvider::new(provider), deployer_address))
}

/// Reads the deploy bytecode out of a hardhat-style compilation artifact
pub fn load_artifact_bytecode(path: &Path) -> Result<Vec<u8>, ScriptError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    let artifact: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = artifact[ARTIFACT_BYTECODE_KEY].as_str().ok_or_else(|| {
        ScriptError::ArtifactParsing(format!(
            "no `{ARTIFACT_BYTECODE_KEY}` field in {}",
            path.display()
        ))
    })?;

    hex::decode(bytecode.trim_start_matches("0x"))
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

/// Prepares calldata for the rollup contract's `initialize` method.
///
/// The operator list is the comma-split decomposition of the raw
/// environment string, order-preserving and without deduplication.
pub fn rollup_initialize_calldata(
    config: &RollupConfig,
    verifier_address: Address,
) -> Result<Vec<u8>, ScriptError> {
    let initial_state_root_hash = B256::from_str(&config.initial_state_root_hash)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    let initial_block_number = U256::from_str(&config.initial_block_number)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    let security_council = Address::from_str(&config.security_council)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    let operators = config
        .operators
        .split(',')
        .map(|op| {
            Address::from_str(op).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let rate_limit_period = U256::from_str(&config.rate_limit_period)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    let rate_limit_amount = U256::from_str(&config.rate_limit_amount)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    let genesis_timestamp = U256::from_str(&config.genesis_timestamp)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

    Ok(initializeCall {
        _initialStateRootHash: initial_state_root_hash,
        _initialL2BlockNumber: initial_block_number,
        _defaultVerifier: verifier_address,
        _securityCouncil: security_council,
        _operators: operators,
        _rateLimitPeriodInSeconds: rate_limit_period,
        _rateLimitAmountInWei: rate_limit_amount,
        _genesisTimestamp: genesis_timestamp,
    }
    .abi_encode())
}
