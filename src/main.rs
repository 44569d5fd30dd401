use clap::Parser;
use rollup_scripts::{cli::Cli, errors::ScriptError, utils::setup_client};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        network,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let (client, deployer_address) = setup_client(&priv_key, &rpc_url)?;

    command
        .run(client, deployer_address, &network, &deployments_path)
        .await
}
