//! Definitions of Solidity functions called during provisioning

use alloy::sol;

sol! {
    /// The subset of the ERC20 interface used to approve the lending pool
    #[sol(rpc)]
    interface MockDAI {
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

sol! {
    /// The lending pool entry point used to seed liquidity
    #[sol(rpc)]
    interface Lending {
        function addLiquidity(uint256 amount) external;
    }
}
