//! Deployment of upgradeable contracts behind a proxy admin

use std::path::PathBuf;

use alloy::{
    network::TransactionBuilder,
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_sol_types::SolConstructor;
use tracing::info;

use crate::{
    constants::{PROXY_ARTIFACT_FILE, ROLLUP_ARTIFACT_FILE},
    errors::ScriptError,
    solidity::TransparentUpgradeableProxy,
    utils::load_artifact_bytecode,
};

/// The confirmation record of a deployment transaction's inclusion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReceipt {
    /// Hash of the deployment transaction
    pub tx_hash: TxHash,
    /// The block the deployment transaction was included in
    pub block_number: u64,
}

/// The handle to a freshly deployed upgradeable contract
#[derive(Debug, Clone)]
pub struct DeployedProxy {
    /// Address of the proxy contract
    pub address: Address,
    /// The confirmation of the proxy's deployment transaction, absent when
    /// the transaction could not be confirmed
    pub receipt: Option<DeploymentReceipt>,
}

/// The routine deploying an upgradeable contract behind a proxy admin.
///
/// An atomic external operation from the orchestrator's point of view: it
/// either returns a live contract handle or raises.
#[allow(async_fn_in_trait)]
pub trait UpgradeableDeployer {
    /// Deploys the implementation and its transparent proxy, forwarding the
    /// given initializer calldata through the proxy constructor
    async fn deploy_upgradeable(
        &self,
        initializer_calldata: &[u8],
    ) -> Result<DeployedProxy, ScriptError>;
}

/// Deploys the rollup implementation and a
/// [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy)
/// in front of it.
///
/// The proxy constructor deploys a `ProxyAdmin` owned by the configured
/// owner; upgrade calls can only be made through that admin.
pub struct ProxyAdminDeployer<P> {
    /// The client submitting deployment transactions
    provider: P,
    /// Owner of the proxy admin contract
    owner: Address,
    /// Directory holding the compilation artifacts
    artifacts_dir: PathBuf,
}

impl<P: Provider> ProxyAdminDeployer<P> {
    /// Creates a deployer submitting through the given client, with the
    /// given proxy admin owner
    pub fn new(provider: P, owner: Address, artifacts_dir: PathBuf) -> Self {
        ProxyAdminDeployer {
            provider,
            owner,
            artifacts_dir,
        }
    }

    /// Sends a deployment transaction and awaits its confirmation
    async fn deploy_bytecode(
        &self,
        deploy_code: Vec<u8>,
    ) -> Result<TransactionReceipt, ScriptError> {
        let tx = TransactionRequest::default().with_deploy_code(deploy_code);

        self.provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))
    }
}

impl<P: Provider> UpgradeableDeployer for ProxyAdminDeployer<P> {
    async fn deploy_upgradeable(
        &self,
        initializer_calldata: &[u8],
    ) -> Result<DeployedProxy, ScriptError> {
        // Deploy the implementation contract
        let impl_code = load_artifact_bytecode(&self.artifacts_dir.join(ROLLUP_ARTIFACT_FILE))?;
        let impl_receipt = self.deploy_bytecode(impl_code).await?;
        let impl_address = impl_receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment("no implementation address in receipt".to_string())
        })?;

        info!("Rollup implementation deployed at {impl_address:#x}");

        // Deploy the proxy, pointing it at the implementation and invoking
        // the initializer through the constructor
        let mut proxy_code = load_artifact_bytecode(&self.artifacts_dir.join(PROXY_ARTIFACT_FILE))?;
        let constructor = TransparentUpgradeableProxy::constructorCall {
            _logic: impl_address,
            initialOwner: self.owner,
            _data: Bytes::copy_from_slice(initializer_calldata),
        };
        proxy_code.extend(constructor.abi_encode());

        let receipt = self.deploy_bytecode(proxy_code).await?;
        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment("no proxy address in receipt".to_string())
        })?;

        let confirmation = receipt.block_number.map(|block_number| DeploymentReceipt {
            tx_hash: receipt.transaction_hash,
            block_number,
        });

        Ok(DeployedProxy {
            address,
            receipt: confirmation,
        })
    }
}
