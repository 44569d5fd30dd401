//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use alloy::providers::DynProvider;
use alloy_primitives::Address;
use clap::{Args, Parser, Subcommand};

use crate::{commands::deploy_rollup_cmd, errors::ScriptError};

/// The deploy scripts CLI
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "DEPLOYER_PRIVATE_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Name of the targeted network, keying the deployments registry and
    /// the deployment branch policy
    #[arg(short, long, env = "NETWORK_NAME")]
    pub network: String,

    /// Path of the deployments registry file
    #[arg(long, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the rollup contract behind an upgradeable proxy
    DeployRollup(DeployRollupArgs),
}

impl Command {
    /// Runs the command
    pub async fn run(
        self,
        client: DynProvider,
        deployer_address: Address,
        network: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployRollup(args) => {
                deploy_rollup_cmd(args, client, deployer_address, network, deployments_path).await
            }
        }
    }
}

/// Deploy the rollup contract as an upgradeable proxy.
///
/// Concretely, this deploys the implementation and a
/// [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy)
/// in front of it, which itself deploys a `ProxyAdmin` contract owned by the
/// deployer. The rollup initializer is invoked through the proxy constructor.
#[derive(Args)]
pub struct DeployRollupArgs {
    /// Directory holding the compilation artifacts of the rollup
    /// implementation and the transparent proxy
    #[arg(short, long)]
    pub artifacts_dir: PathBuf,
}
