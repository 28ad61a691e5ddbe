//! Scripts for deploying the mock DAI token and lending pool contracts and
//! seeding the pool with initial liquidity.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod environment;
pub mod errors;
mod solidity;
pub mod types;
pub mod utils;
