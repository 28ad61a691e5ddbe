//! Type definitions used throughout the scripts
//!
//! The provisioning steps hand their results to one another through the stage
//! types defined here: each step consumes the previous stage by value and
//! produces the next, so a step can only ever see records produced before it.

use std::fmt::{self, Display};

use alloy::primitives::{
    utils::{format_units, parse_units, ParseUnits},
    Address, U256,
};

use crate::{
    constants::{LENDING_CONTRACT_NAME, MOCK_DAI_CONTRACT_NAME},
    errors::ScriptError,
};

/// The contracts deployed by the scripts
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LendingContract {
    /// The mock DAI ERC20 token
    MockDai,
    /// The lending pool, constructed over the mock DAI token
    Lending,
}

impl LendingContract {
    /// The contract's name, as it appears in the compiled artifacts
    pub fn name(&self) -> &'static str {
        match self {
            LendingContract::MockDai => MOCK_DAI_CONTRACT_NAME,
            LendingContract::Lending => LENDING_CONTRACT_NAME,
        }
    }
}

impl Display for LendingContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A token quantity in base units, i.e. scaled by `10^decimals`
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(U256);

impl Amount {
    /// Parse a decimal string such as `"10000"` or `"0.5"` into base units
    /// for a token with the given number of decimals.
    ///
    /// The conversion is done on integers so no floating-point rounding can
    /// creep in. Negative and zero values are rejected.
    pub fn parse(value: &str, decimals: u8) -> Result<Self, ScriptError> {
        let base_units = match parse_units(value, decimals)
            .map_err(|e| ScriptError::AmountParsing(format!("{value}: {e}")))?
        {
            ParseUnits::U256(base_units) => base_units,
            ParseUnits::I256(_) => {
                return Err(ScriptError::AmountParsing(format!(
                    "{value}: amount must not be negative"
                )))
            }
        };

        if base_units.is_zero() {
            return Err(ScriptError::AmountParsing(format!(
                "{value}: amount must be greater than zero"
            )));
        }

        Ok(Self(base_units))
    }

    /// The amount in base units
    pub fn base_units(&self) -> U256 {
        self.0
    }

    /// Render the amount as a decimal string with the given precision
    pub fn format(&self, decimals: u8) -> Result<String, ScriptError> {
        format_units(self.0, decimals).map_err(|e| ScriptError::AmountParsing(e.to_string()))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The address at which a contract was deployed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    /// The deployed contract
    pub contract: LendingContract,
    /// The address of the deployed contract
    pub address: Address,
}

impl DeploymentRecord {
    /// Create a record for a contract at the given address
    pub fn new(contract: LendingContract, address: Address) -> Self {
        Self { contract, address }
    }
}

// ----------
// | Stages |
// ----------

/// The signing identity that pays for and authorizes every transaction
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Operator {
    /// The operator's address
    pub address: Address,
}

/// The state after the token contract has been deployed
#[derive(Debug, Clone)]
pub struct TokenDeployed {
    /// The operator
    pub operator: Operator,
    /// The token deployment
    pub token: DeploymentRecord,
}

impl TokenDeployed {
    /// Resume from a token that was deployed by a previous run
    pub fn existing(operator: Operator, token: Address) -> Self {
        Self {
            operator,
            token: DeploymentRecord::new(LendingContract::MockDai, token),
        }
    }
}

/// The state after both contracts have been deployed
#[derive(Debug, Clone)]
pub struct LendingDeployed {
    /// The operator
    pub operator: Operator,
    /// The token deployment
    pub token: DeploymentRecord,
    /// The lending pool deployment
    pub lending: DeploymentRecord,
}

impl LendingDeployed {
    /// Resume from contracts that were deployed by a previous run
    pub fn existing(operator: Operator, token: Address, lending: Address) -> Self {
        Self {
            operator,
            token: DeploymentRecord::new(LendingContract::MockDai, token),
            lending: DeploymentRecord::new(LendingContract::Lending, lending),
        }
    }
}

/// The state after the lending pool has been approved to pull liquidity
#[derive(Debug, Clone)]
pub struct LiquidityApproved {
    /// The deployed contracts
    pub deployed: LendingDeployed,
    /// The approved amount, which is also the amount seeded
    pub amount: Amount,
}

/// The outcome of a complete provisioning run
#[derive(Debug, Clone)]
pub struct ProvisioningReport {
    /// The operator
    pub operator: Operator,
    /// The token deployment
    pub token: DeploymentRecord,
    /// The lending pool deployment
    pub lending: DeploymentRecord,
    /// The liquidity seeded into the pool
    pub liquidity: Amount,
}
