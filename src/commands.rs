//! Implementations of the deploy scripts

use alloy::providers::DynProvider;
use alloy_primitives::Address;
use tracing::info;

use crate::{
    cli::DeployRollupArgs,
    config::{validate_deploy_branch, EnvSource, ProcessEnv, RollupConfig},
    constants::{ROLLUP_CONTRACT_NAME, SAVE_ADDRESS_ENV_VAR},
    deployer::{ProxyAdminDeployer, UpgradeableDeployer},
    errors::ScriptError,
    registry::{AddressRegistry, DeploymentsFile},
    resolver::resolve_verifier,
    utils::rollup_initialize_calldata,
    verify::{ContractVerifier, ForgeVerifier},
};

/// Deploys the rollup contract, wiring the live collaborators into
/// [`deploy_rollup`]
pub async fn deploy_rollup_cmd(
    args: DeployRollupArgs,
    client: DynProvider,
    deployer_address: Address,
    network: &str,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let env = ProcessEnv;
    let registry = DeploymentsFile::new(deployments_path, network, &env);
    let deployer = ProxyAdminDeployer::new(client, deployer_address, args.artifacts_dir);
    let verifier = ForgeVerifier::new(network, ROLLUP_CONTRACT_NAME);

    deploy_rollup(network, &env, &registry, &deployer, &verifier)
        .await
        .map(|_| ())
}

/// Deploys the rollup contract as an upgradeable proxy.
///
/// The sequence is strictly linear: branch policy validation, verifier
/// resolution (registry over environment override), eager configuration
/// gathering, deployment, receipt confirmation, conditional persistence,
/// and one best-effort verification attempt. Every failure aborts the run
/// except verification, whose outcome is discarded.
pub async fn deploy_rollup(
    network: &str,
    env: &impl EnvSource,
    registry: &impl AddressRegistry,
    deployer: &impl UpgradeableDeployer,
    verifier: &impl ContractVerifier,
) -> Result<Address, ScriptError> {
    validate_deploy_branch(network, env)?;

    let existing_address = registry.get(ROLLUP_CONTRACT_NAME)?;
    let verifier_source = resolve_verifier(registry, env)?;
    let config = RollupConfig::from_env(env)?;

    info!("Setting operators {}", config.operators);
    match existing_address {
        None => info!(
            "Deploying initial version, NB: the address will be saved if env {SAVE_ADDRESS_ENV_VAR}=true."
        ),
        Some(addr) => info!(
            "Deploying new version, NB: {addr:#x} will be overwritten if env {SAVE_ADDRESS_ENV_VAR}=true."
        ),
    }

    let calldata = rollup_initialize_calldata(&config, verifier_source.address())?;
    let deployed = deployer.deploy_upgradeable(&calldata).await?;
    let receipt = deployed.receipt.ok_or(ScriptError::ReceiptNotFound)?;

    info!(
        "{ROLLUP_CONTRACT_NAME} deployed: address={:#x} blockNumber={}",
        deployed.address, receipt.block_number
    );

    registry.try_store(
        network,
        ROLLUP_CONTRACT_NAME,
        deployed.address,
        receipt.tx_hash,
    );

    verifier.try_verify(deployed.address);

    Ok(deployed.address)
}
