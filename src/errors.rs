//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The targeted network may not be deployed to from the current branch
    PolicyViolation(String),
    /// A dependency contract's address could not be resolved from the
    /// deployments registry or from its environment override
    MissingDependency(String),
    /// A required environment variable is absent, named by the payload
    MissingConfiguration(String),
    /// Error parsing a compilation artifact
    ArtifactParsing(String),
    /// Error constructing calldata for a contract method
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// The deployment transaction produced no confirmable receipt
    ReceiptNotFound,
    /// Error reading the deployments registry file
    ReadDeployments(String),
    /// Error writing the deployments registry file
    WriteDeployments(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::PolicyViolation(s) => write!(f, "deployment policy violation: {}", s),
            ScriptError::MissingDependency(s) => {
                write!(f, "missing dependency contract address: {}", s)
            }
            ScriptError::MissingConfiguration(s) => {
                write!(f, "missing required environment variable: {}", s)
            }
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ReceiptNotFound => {
                write!(f, "contract deployment transaction receipt not found")
            }
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for ScriptError {}
