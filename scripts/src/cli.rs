//! Definitions of CLI arguments and commands for the provisioning scripts

use std::{io::Write, path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy_lending, deploy_token, provision, seed_liquidity},
    config::DeployConfig,
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIRMATION_TIMEOUT_SECS, DEFAULT_LIQUIDITY_AMOUNT,
        DEFAULT_NUM_CONFIRMATIONS, DEFAULT_RPC_URL,
    },
    environment::ExecutionEnvironment,
    errors::ScriptError,
};

/// Deploy the mock DAI token and the lending pool, and seed the pool with liquidity
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the operator
    #[arg(short, long = "pkey", env = "PKEY", hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Directory containing the compiled contract artifacts
    #[arg(long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Number of confirmations to wait for on each transaction
    #[arg(long, default_value_t = DEFAULT_NUM_CONFIRMATIONS)]
    pub confirmations: u64,

    /// Seconds to wait for each transaction to confirm
    #[arg(long, default_value_t = DEFAULT_CONFIRMATION_TIMEOUT_SECS)]
    pub confirmation_timeout: u64,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Resolve the run's configuration from the parsed arguments
    pub fn config(&self) -> Result<DeployConfig, ScriptError> {
        DeployConfig::new(
            self.priv_key.as_deref(),
            &self.rpc_url,
            self.artifacts_dir.clone(),
            self.confirmations,
            Duration::from_secs(self.confirmation_timeout),
        )
    }
}

/// The provisioning commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy both contracts and seed the lending pool
    Provision(ProvisionArgs),
    /// Deploy the mock DAI token only
    DeployToken,
    /// Deploy the lending pool over an existing token
    DeployLending(DeployLendingArgs),
    /// Approve and seed liquidity into an existing lending pool
    SeedLiquidity(SeedLiquidityArgs),
}

impl Command {
    /// Run the command against the given environment, writing progress to `out`
    pub async fn run(
        self,
        env: &impl ExecutionEnvironment,
        out: impl Write,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Provision(args) => provision(args, env, out).await,
            Command::DeployToken => deploy_token(env, out).await,
            Command::DeployLending(args) => deploy_lending(&args.token, env, out).await,
            Command::SeedLiquidity(args) => seed_liquidity(args, env, out).await,
        }
    }
}

/// Provision the token and lending pool from scratch
#[derive(Args)]
pub struct ProvisionArgs {
    /// Liquidity to seed, in whole tokens of the 18-decimal mock DAI
    #[arg(short, long, default_value = DEFAULT_LIQUIDITY_AMOUNT)]
    pub amount: String,
}

/// Deploy the lending pool
#[derive(Args)]
pub struct DeployLendingArgs {
    /// Address of the deployed token contract in hex
    #[arg(short, long)]
    pub token: String,
}

/// Seed an existing lending pool
#[derive(Args)]
pub struct SeedLiquidityArgs {
    /// Address of the deployed token contract in hex
    #[arg(short, long)]
    pub token: String,

    /// Address of the deployed lending contract in hex
    #[arg(short, long)]
    pub lending: String,

    /// Liquidity to seed, in whole tokens of the 18-decimal mock DAI
    #[arg(short, long, default_value = DEFAULT_LIQUIDITY_AMOUNT)]
    pub amount: String,
}
