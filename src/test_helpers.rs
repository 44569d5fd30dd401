//! Stub collaborators shared by the unit tests

use std::{cell::RefCell, collections::HashMap};

use alloy_primitives::{Address, TxHash};

use crate::{
    config::EnvSource,
    deployer::{DeployedProxy, DeploymentReceipt, UpgradeableDeployer},
    errors::ScriptError,
    registry::AddressRegistry,
    verify::ContractVerifier,
};

/// An environment backed by a fixed map, insulated from the process
/// environment so tests can run in parallel. Records every variable looked
/// up through it.
pub(crate) struct MapEnv {
    /// The variables the environment exposes
    vars: HashMap<String, String>,
    /// The variable names that have been looked up
    lookups: RefCell<Vec<String>>,
}

impl MapEnv {
    /// Creates an empty environment
    pub(crate) fn new() -> Self {
        MapEnv {
            vars: HashMap::new(),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Sets a variable
    pub(crate) fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    /// Removes a variable
    pub(crate) fn unset(&mut self, name: &str) {
        self.vars.remove(name);
    }

    /// The variable names looked up so far
    pub(crate) fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl EnvSource for MapEnv {
    fn get_optional(&self, name: &str) -> Option<String> {
        self.lookups.borrow_mut().push(name.to_string());
        self.vars.get(name).cloned()
    }
}

/// A registry over a fixed address map, recording every store attempt
pub(crate) struct StubRegistry {
    /// The recorded deployments the registry exposes
    known: HashMap<String, Address>,
    /// The store attempts made against the registry
    stores: RefCell<Vec<(String, String, Address, TxHash)>>,
}

impl StubRegistry {
    /// Creates an empty registry
    pub(crate) fn new() -> Self {
        StubRegistry {
            known: HashMap::new(),
            stores: RefCell::new(Vec::new()),
        }
    }

    /// Records a deployment the registry should report
    pub(crate) fn insert(&mut self, contract_name: &str, address: Address) {
        self.known.insert(contract_name.to_string(), address);
    }

    /// The store attempts made so far
    pub(crate) fn stores(&self) -> Vec<(String, String, Address, TxHash)> {
        self.stores.borrow().clone()
    }
}

impl AddressRegistry for StubRegistry {
    fn get(&self, contract_name: &str) -> Result<Option<Address>, ScriptError> {
        Ok(self.known.get(contract_name).copied())
    }

    fn try_store(&self, network: &str, contract_name: &str, address: Address, tx_hash: TxHash) {
        self.stores.borrow_mut().push((
            network.to_string(),
            contract_name.to_string(),
            address,
            tx_hash,
        ));
    }
}

/// A deployer returning a fixed handle, recording the calldata of every
/// invocation
pub(crate) struct StubDeployer {
    /// The address the deployer reports for the proxy
    address: Address,
    /// The confirmation the deployer reports, if any
    receipt: Option<DeploymentReceipt>,
    /// The initializer calldata of each invocation
    calls: RefCell<Vec<Vec<u8>>>,
}

impl StubDeployer {
    /// Creates a deployer returning the given handle
    pub(crate) fn new(address: Address, receipt: Option<DeploymentReceipt>) -> Self {
        StubDeployer {
            address,
            receipt,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A deployer whose deployment confirms immediately
    pub(crate) fn confirmed(address: Address) -> Self {
        Self::new(
            address,
            Some(DeploymentReceipt {
                tx_hash: TxHash::repeat_byte(0x77),
                block_number: 1,
            }),
        )
    }

    /// A deployer whose deployment transaction never confirms
    pub(crate) fn unconfirmed(address: Address) -> Self {
        Self::new(address, None)
    }

    /// The initializer calldata of the invocations made so far
    pub(crate) fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.borrow().clone()
    }
}

impl UpgradeableDeployer for StubDeployer {
    async fn deploy_upgradeable(
        &self,
        initializer_calldata: &[u8],
    ) -> Result<DeployedProxy, ScriptError> {
        self.calls.borrow_mut().push(initializer_calldata.to_vec());

        Ok(DeployedProxy {
            address: self.address,
            receipt: self.receipt.clone(),
        })
    }
}

/// A verifier recording every verification attempt
pub(crate) struct StubVerifier {
    /// The addresses verification was attempted for
    calls: RefCell<Vec<Address>>,
}

impl StubVerifier {
    /// Creates a verifier with no attempts recorded
    pub(crate) fn new() -> Self {
        StubVerifier {
            calls: RefCell::new(Vec::new()),
        }
    }

    /// The verification attempts made so far
    pub(crate) fn calls(&self) -> Vec<Address> {
        self.calls.borrow().clone()
    }
}

impl ContractVerifier for StubVerifier {
    fn try_verify(&self, address: Address) {
        self.calls.borrow_mut().push(address);
    }
}
