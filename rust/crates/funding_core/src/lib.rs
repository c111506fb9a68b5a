//! Core logic for the project funding panel.
//!
//! This crate provides:
//! - Function selectors and JSON-RPC wire types for the two contract reads
//! - Hex quantity and wei conversions
//! - FundingReader: the paired `eth_call` reads behind each refresh
//! - fund_project / connect_wallet: the wallet-mediated flows
//! - Polling: refresh on start and on every timer period until stopped
//!
//! Nothing here touches the browser. Network and wallet access go through
//! the [`RpcTransport`] and [`WalletProvider`] traits so the frontend can
//! plug in `gloo-net` and `window.ethereum`.

pub mod abi;
pub mod config;
pub mod display;
pub mod funding;
pub mod poll;
pub mod progress;
pub mod rpc;
pub mod sequence;
pub mod units;

use thiserror::Error;

pub use abi::Selector;
pub use config::{ContractAddress, FundingConfig};
pub use funding::{FundingReader, TransactionRequest, WalletProvider, connect_wallet, fund_project};
pub use poll::{IntervalTimer, Polling};
pub use progress::{FundingSnapshot, FundingState, progress_percent};
pub use rpc::RpcTransport;
pub use sequence::{RefreshSequencer, Ticket};

/// Errors from funding operations.
#[derive(Error, Debug)]
pub enum FundingError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("RPC response carried no result")]
    MissingResult,

    #[error("Invalid hex quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("Invalid ETH amount: {0:?}")]
    InvalidAmount(String),

    #[error("Amount is empty")]
    EmptyAmount,

    #[error("No wallet provider injected")]
    NoProvider,

    #[error("Wallet returned no accounts")]
    NoAccounts,

    #[error("Wallet request failed: {0}")]
    Wallet(String),
}

/// Result type for funding operations.
pub type Result<T> = std::result::Result<T, FundingError>;
