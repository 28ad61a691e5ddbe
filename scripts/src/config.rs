//! The resolved configuration for a provisioning run

use std::{path::PathBuf, str::FromStr, time::Duration};

use alloy::{signers::local::PrivateKeySigner, transports::http::reqwest::Url};

use crate::errors::ScriptError;

/// Everything a run needs from its surroundings, resolved once up front
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// The RPC endpoint of the node to provision against
    pub rpc_url: Url,
    /// The operator's signer
    pub signer: PrivateKeySigner,
    /// The directory containing the compiled contract artifacts
    pub artifacts_dir: PathBuf,
    /// The number of confirmations to wait for on each transaction
    pub confirmations: u64,
    /// How long to wait for each transaction to confirm
    pub confirmation_timeout: Duration,
}

impl DeployConfig {
    /// Resolve a config from raw inputs
    ///
    /// Fails with [`ScriptError::Environment`] if no private key is
    /// configured, or if the key or the RPC URL is malformed.
    pub fn new(
        priv_key: Option<&str>,
        rpc_url: &str,
        artifacts_dir: PathBuf,
        confirmations: u64,
        confirmation_timeout: Duration,
    ) -> Result<Self, ScriptError> {
        let priv_key = priv_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ScriptError::Environment("no operator private key configured".to_string())
            })?;

        let signer = PrivateKeySigner::from_str(priv_key)
            .map_err(|e| ScriptError::Environment(format!("invalid private key: {e}")))?;
        let rpc_url = Url::parse(rpc_url)
            .map_err(|e| ScriptError::Environment(format!("invalid RPC URL {rpc_url}: {e}")))?;

        Ok(Self {
            rpc_url,
            signer,
            artifacts_dir,
            confirmations,
            confirmation_timeout,
        })
    }
}
