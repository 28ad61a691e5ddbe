//! The execution environment the provisioning steps run against

use std::{path::PathBuf, time::Duration};

use alloy::{
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider},
};
use tracing::debug;

use crate::{
    config::DeployConfig,
    errors::ScriptError,
    solidity::{Lending, MockDAI},
    types::{Amount, LendingContract},
    utils::{read_artifact, setup_client, wait_for_tx_success},
};

/// The capabilities the provisioning steps need from a chain.
///
/// Every state-changing method returns only once its transaction has been
/// confirmed.
#[allow(async_fn_in_trait)]
pub trait ExecutionEnvironment {
    /// The address of the signing identity
    fn operator(&self) -> Result<Address, ScriptError>;

    /// Deploy a contract with the given ABI-encoded constructor arguments,
    /// returning its address
    async fn deploy(
        &self,
        contract: LendingContract,
        constructor_args: Bytes,
    ) -> Result<Address, ScriptError>;

    /// Approve `spender` to transfer `amount` of `token` on the operator's behalf
    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), ScriptError>;

    /// Seed the lending pool at `lending` with `amount` of its token
    async fn add_liquidity(&self, lending: Address, amount: Amount) -> Result<(), ScriptError>;
}

/// An [`ExecutionEnvironment`] backed by a JSON-RPC node and a local signer
#[derive(Clone)]
pub struct RpcEnvironment {
    /// The RPC client, with the operator's wallet attached
    provider: DynProvider,
    /// The operator's address
    operator: Address,
    /// The directory containing the compiled contract artifacts
    artifacts_dir: PathBuf,
    /// The number of confirmations to wait for on each transaction
    confirmations: u64,
    /// How long to wait for each transaction to confirm
    confirmation_timeout: Duration,
}

impl RpcEnvironment {
    /// Create an environment over an already connected provider, whose
    /// default sender is `operator`
    pub fn new(
        provider: DynProvider,
        operator: Address,
        artifacts_dir: PathBuf,
        confirmations: u64,
        confirmation_timeout: Duration,
    ) -> Self {
        Self {
            provider,
            operator,
            artifacts_dir,
            confirmations,
            confirmation_timeout,
        }
    }

    /// Connect to the node described by the config
    pub async fn connect(config: &DeployConfig) -> Result<Self, ScriptError> {
        let provider = setup_client(config).await?;

        Ok(Self::new(
            provider,
            config.signer.address(),
            config.artifacts_dir.clone(),
            config.confirmations,
            config.confirmation_timeout,
        ))
    }
}

impl ExecutionEnvironment for RpcEnvironment {
    fn operator(&self) -> Result<Address, ScriptError> {
        Ok(self.operator)
    }

    async fn deploy(
        &self,
        contract: LendingContract,
        constructor_args: Bytes,
    ) -> Result<Address, ScriptError> {
        let artifact = read_artifact(&self.artifacts_dir, contract)?;
        let tx = artifact.deploy_request(&constructor_args);

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::Deployment(format!("{contract}: {e}")))?;
        let receipt = wait_for_tx_success(
            pending_tx,
            self.confirmations,
            self.confirmation_timeout,
            ScriptError::Deployment,
        )
        .await?;
        debug!(%contract, gas_used = receipt.gas_used, "deployment confirmed");

        receipt.contract_address.ok_or_else(|| {
            ScriptError::Deployment(format!("{contract}: receipt has no contract address"))
        })
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), ScriptError> {
        let token = MockDAI::new(token, self.provider.clone());
        let pending_tx = token
            .approve(spender, amount.base_units())
            .send()
            .await
            .map_err(|e| ScriptError::Call(format!("approve: {e}")))?;

        wait_for_tx_success(
            pending_tx,
            self.confirmations,
            self.confirmation_timeout,
            ScriptError::Call,
        )
        .await?;

        Ok(())
    }

    async fn add_liquidity(&self, lending: Address, amount: Amount) -> Result<(), ScriptError> {
        let lending = Lending::new(lending, self.provider.clone());
        let pending_tx = lending
            .addLiquidity(amount.base_units())
            .send()
            .await
            .map_err(|e| ScriptError::Call(format!("addLiquidity: {e}")))?;

        wait_for_tx_success(
            pending_tx,
            self.confirmations,
            self.confirmation_timeout,
            ScriptError::Call,
        )
        .await?;

        Ok(())
    }
}
