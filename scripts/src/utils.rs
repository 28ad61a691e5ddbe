//! Utilities for the provisioning scripts.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::Bytes,
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    config::DeployConfig,
    constants::{ARTIFACT_EXTENSION, CONTRACTS_PATH_SEGMENT, SOLIDITY_EXTENSION},
    errors::ScriptError,
    types::LendingContract,
};

/// Sets up the RPC client used for every transaction, with the configured
/// signer attached as the default sender.
///
/// Fails with [`ScriptError::Environment`] if the node cannot be reached.
pub async fn setup_client(config: &DeployConfig) -> Result<DynProvider, ScriptError> {
    let provider = ProviderBuilder::new()
        .wallet(config.signer.clone())
        .connect_http(config.rpc_url.clone());

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::Environment(e.to_string()))?;
    info!(chain_id, rpc_url = %config.rpc_url, "connected to node");

    Ok(DynProvider::new(provider))
}

/// Wait for a submitted transaction to be confirmed and check that it succeeded.
///
/// Any failure, including a revert, is wrapped with `err` so that callers can
/// attribute it to the step that submitted the transaction.
pub async fn wait_for_tx_success(
    pending_tx: PendingTransactionBuilder<Ethereum>,
    confirmations: u64,
    timeout: Duration,
    err: fn(String) -> ScriptError,
) -> Result<TransactionReceipt, ScriptError> {
    let tx_hash = *pending_tx.tx_hash();
    debug!(%tx_hash, confirmations, "waiting for transaction");

    let receipt = pending_tx
        .with_required_confirmations(confirmations)
        .with_timeout(Some(timeout))
        .get_receipt()
        .await
        .map_err(|e| err(format!("transaction {tx_hash}: {e}")))?;

    if !receipt.status() {
        return Err(err(format!("transaction {tx_hash} reverted")));
    }

    Ok(receipt)
}

// -------------
// | Artifacts |
// -------------

/// A compiled contract, as emitted by Hardhat into its artifacts directory
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let artifact: Self =
            serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        // Interfaces and abstract contracts compile to empty bytecode
        if artifact.bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has no creation bytecode",
                artifact.contract_name
            )));
        }

        Ok(artifact)
    }

    /// The transaction input that deploys this contract with the given
    /// ABI-encoded constructor arguments
    pub fn deploy_code(&self, constructor_args: &[u8]) -> Bytes {
        [self.bytecode.as_ref(), constructor_args].concat().into()
    }

    /// A contract creation transaction for this contract, sent from the
    /// provider's default sender
    pub fn deploy_request(&self, constructor_args: &[u8]) -> TransactionRequest {
        TransactionRequest::default().with_deploy_code(self.deploy_code(constructor_args))
    }
}

/// The path of a contract's artifact, following Hardhat's
/// `contracts/<Name>.sol/<Name>.json` layout
pub fn artifact_path(artifacts_dir: &Path, contract: LendingContract) -> PathBuf {
    let name = contract.name();
    artifacts_dir
        .join(CONTRACTS_PATH_SEGMENT)
        .join(format!("{name}.{SOLIDITY_EXTENSION}"))
        .join(format!("{name}.{ARTIFACT_EXTENSION}"))
}

/// Read the artifact of the given contract from the artifacts directory
pub fn read_artifact(
    artifacts_dir: &Path,
    contract: LendingContract,
) -> Result<ContractArtifact, ScriptError> {
    let path = artifact_path(artifacts_dir, contract);
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

    ContractArtifact::from_json(&contents)
}
