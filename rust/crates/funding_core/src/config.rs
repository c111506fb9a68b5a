//! Compiled-in configuration for the funding panel.

use std::fmt;

use serde::Serialize;

/// Address of the demo crowdfunding contract on the local dev chain.
pub const DEMO_CONTRACT: &str = "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0";

/// Local JSON-RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Milliseconds between background refreshes.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10_000;

/// An on-chain contract address, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContractAddress(&'static str);

impl ContractAddress {
    /// Wrap a compiled-in address literal.
    pub const fn new(address: &'static str) -> Self {
        Self(address)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Configuration for the funding panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingConfig {
    /// JSON-RPC endpoint (default: http://localhost:8545)
    pub rpc_url: String,
    /// Target contract
    pub contract_address: ContractAddress,
    /// Refresh period in milliseconds (default: 10000)
    pub poll_interval_ms: u32,
}

impl Default for FundingConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            contract_address: ContractAddress::new(DEMO_CONTRACT),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}
