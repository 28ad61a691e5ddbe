//! Constants used in the provisioning scripts

/// The default RPC URL, that of a local Hardhat or Anvil node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default directory containing the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The subdirectory of the artifacts directory holding per-source artifacts
pub const CONTRACTS_PATH_SEGMENT: &str = "contracts";

/// The extension of a Solidity source file, used in artifact paths
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of an artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The number of confirmations to wait for on each transaction
pub const DEFAULT_NUM_CONFIRMATIONS: u64 = 1;

/// How long to wait for a transaction to confirm before giving up, in seconds
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 120;

/// The name of the token contract
pub const MOCK_DAI_CONTRACT_NAME: &str = "MockDAI";

/// The name of the lending contract
pub const LENDING_CONTRACT_NAME: &str = "Lending";

/// The number of decimals of the mock DAI token
pub const MOCK_DAI_DECIMALS: u8 = 18;

/// The amount of mock DAI seeded into the lending pool, in whole tokens
pub const DEFAULT_LIQUIDITY_AMOUNT: &str = "10000";
