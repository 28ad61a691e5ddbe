//! Implementations of the provisioning steps and the commands built from them

use std::{fmt, io::Write, str::FromStr};

use alloy::{
    primitives::{Address, Bytes},
    sol_types::SolValue,
};
use tracing::info;

use crate::{
    cli::{ProvisionArgs, SeedLiquidityArgs},
    constants::MOCK_DAI_DECIMALS,
    environment::ExecutionEnvironment,
    errors::ScriptError,
    types::{
        Amount, DeploymentRecord, LendingContract, LendingDeployed, LiquidityApproved, Operator,
        ProvisioningReport, TokenDeployed,
    },
};

/// Runs the provisioning steps against an execution environment, writing a
/// progress line to `out` after each one.
///
/// Each step consumes the output of the step before it, so the steps can
/// only be chained in order. Every step is an irreversible on-chain mutation;
/// a failure part way through leaves the earlier steps in place.
pub struct Provisioner<'a, E, W> {
    /// The environment the steps run against
    env: &'a E,
    /// The sink for human-readable progress lines
    out: W,
}

impl<'a, E: ExecutionEnvironment, W: Write> Provisioner<'a, E, W> {
    /// Create a provisioner over the given environment
    pub fn new(env: &'a E, out: W) -> Self {
        Self { env, out }
    }

    /// Consume the provisioner, returning its progress sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run every step in order, stopping at the first failure
    pub async fn run(&mut self, amount: Amount) -> Result<ProvisioningReport, ScriptError> {
        let operator = self.acquire_operator()?;
        let token = self.deploy_token(operator).await?;
        let deployed = self.deploy_lending(token).await?;
        let approved = self.approve_liquidity(deployed, amount).await?;
        self.seed_liquidity(approved).await
    }

    /// Step 1: acquire the signing identity
    pub fn acquire_operator(&mut self) -> Result<Operator, ScriptError> {
        let address = self.env.operator()?;
        if address.is_zero() {
            return Err(ScriptError::Environment(
                "operator resolved to the zero address".to_string(),
            ));
        }

        self.progress(format_args!("Deploying with account: {address}"))?;
        Ok(Operator { address })
    }

    /// Step 2: deploy the token contract
    pub async fn deploy_token(
        &mut self,
        operator: Operator,
    ) -> Result<TokenDeployed, ScriptError> {
        let token = self.deploy(LendingContract::MockDai, Bytes::new()).await?;

        self.progress(format_args!("MockDAI deployed at: {}", token.address))?;
        Ok(TokenDeployed { operator, token })
    }

    /// Step 3: deploy the lending pool over the token deployed in step 2
    pub async fn deploy_lending(
        &mut self,
        token: TokenDeployed,
    ) -> Result<LendingDeployed, ScriptError> {
        let TokenDeployed { operator, token } = token;
        let constructor_args = Bytes::from(token.address.abi_encode());
        let lending = self.deploy(LendingContract::Lending, constructor_args).await?;

        self.progress(format_args!(
            "Lending contract deployed at: {}",
            lending.address
        ))?;
        Ok(LendingDeployed {
            operator,
            token,
            lending,
        })
    }

    /// Step 4: allow the lending pool to pull `amount` of the operator's tokens
    pub async fn approve_liquidity(
        &mut self,
        deployed: LendingDeployed,
        amount: Amount,
    ) -> Result<LiquidityApproved, ScriptError> {
        info!(
            token = %deployed.token.address,
            spender = %deployed.lending.address,
            %amount,
            "approving liquidity"
        );
        self.env
            .approve(deployed.token.address, deployed.lending.address, amount)
            .await?;

        self.progress(format_args!("Liquidity approval confirmed"))?;
        Ok(LiquidityApproved { deployed, amount })
    }

    /// Step 5: seed the lending pool with the amount approved in step 4
    pub async fn seed_liquidity(
        &mut self,
        approved: LiquidityApproved,
    ) -> Result<ProvisioningReport, ScriptError> {
        let LiquidityApproved { deployed, amount } = approved;
        info!(lending = %deployed.lending.address, %amount, "adding liquidity");
        self.env.add_liquidity(deployed.lending.address, amount).await?;

        self.progress(format_args!("Liquidity added: {amount}"))?;
        Ok(ProvisioningReport {
            operator: deployed.operator,
            token: deployed.token,
            lending: deployed.lending,
            liquidity: amount,
        })
    }

    /// Deploy a contract and record its address
    async fn deploy(
        &mut self,
        contract: LendingContract,
        constructor_args: Bytes,
    ) -> Result<DeploymentRecord, ScriptError> {
        info!(%contract, "deploying contract");
        let address = self.env.deploy(contract, constructor_args).await?;
        if address.is_zero() {
            return Err(ScriptError::Deployment(format!(
                "{contract} deployed at the zero address"
            )));
        }

        Ok(DeploymentRecord::new(contract, address))
    }

    /// Write a progress line
    fn progress(&mut self, line: fmt::Arguments<'_>) -> Result<(), ScriptError> {
        writeln!(self.out, "{line}").map_err(|e| ScriptError::Output(e.to_string()))
    }
}

// ------------
// | Commands |
// ------------

/// Provision both contracts and seed the lending pool
pub async fn provision(
    args: ProvisionArgs,
    env: &impl ExecutionEnvironment,
    out: impl Write,
) -> Result<(), ScriptError> {
    let amount = Amount::parse(&args.amount, MOCK_DAI_DECIMALS)?;
    let report = Provisioner::new(env, out).run(amount).await?;

    let liquidity = report.liquidity.format(MOCK_DAI_DECIMALS)?;
    info!(
        token = %report.token.address,
        lending = %report.lending.address,
        %liquidity,
        "provisioning complete"
    );
    Ok(())
}

/// Deploy the token contract on its own
pub async fn deploy_token(
    env: &impl ExecutionEnvironment,
    out: impl Write,
) -> Result<(), ScriptError> {
    let mut provisioner = Provisioner::new(env, out);
    let operator = provisioner.acquire_operator()?;
    provisioner.deploy_token(operator).await?;

    Ok(())
}

/// Deploy the lending pool over an already deployed token
pub async fn deploy_lending(
    token: &str,
    env: &impl ExecutionEnvironment,
    out: impl Write,
) -> Result<(), ScriptError> {
    let token = parse_address(token)?;

    let mut provisioner = Provisioner::new(env, out);
    let operator = provisioner.acquire_operator()?;
    provisioner
        .deploy_lending(TokenDeployed::existing(operator, token))
        .await?;

    Ok(())
}

/// Approve and seed liquidity into an already deployed lending pool
pub async fn seed_liquidity(
    args: SeedLiquidityArgs,
    env: &impl ExecutionEnvironment,
    out: impl Write,
) -> Result<(), ScriptError> {
    let token = parse_address(&args.token)?;
    let lending = parse_address(&args.lending)?;
    let amount = Amount::parse(&args.amount, MOCK_DAI_DECIMALS)?;

    let mut provisioner = Provisioner::new(env, out);
    let operator = provisioner.acquire_operator()?;
    let deployed = LendingDeployed::existing(operator, token, lending);
    let approved = provisioner.approve_liquidity(deployed, amount).await?;
    provisioner.seed_liquidity(approved).await?;

    Ok(())
}

/// Parse a hex address given on the command line
fn parse_address(address: &str) -> Result<Address, ScriptError> {
    Address::from_str(address).map_err(|e| ScriptError::AddressParsing(format!("{address}: {e}")))
}
