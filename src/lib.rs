//! Scripts for deploying and initializing the rollup contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod config;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod registry;
pub mod resolver;
mod solidity;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod utils;
pub mod verify;
