//! Contract reads and wallet-mediated funding.

use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::abi::{FUNDS_NEEDED_SIGNATURE, FUNDS_RAISED_SIGNATURE, Selector};
use crate::config::ContractAddress;
use crate::progress::FundingSnapshot;
use crate::rpc::{JsonRpcRequest, RpcTransport, parse_quantity};
use crate::units::eth_to_hex_quantity;
use crate::{FundingError, Result};

/// Reads raised and needed funds from the contract.
pub struct FundingReader<T> {
    transport: T,
    contract: ContractAddress,
    raised_data: String,
    needed_data: String,
}

impl<T: RpcTransport> FundingReader<T> {
    /// Create a reader for `contract` over the given transport.
    pub fn new(transport: T, contract: ContractAddress) -> Self {
        Self {
            transport,
            contract,
            raised_data: Selector::of(FUNDS_RAISED_SIGNATURE).to_call_data(),
            needed_data: Selector::of(FUNDS_NEEDED_SIGNATURE).to_call_data(),
        }
    }

    pub fn contract(&self) -> &ContractAddress {
        &self.contract
    }

    /// Call `getFundsRaised()` then `fundsNeeded()` and derive progress.
    ///
    /// The two reads are sequential. Any failure aborts the whole refresh so
    /// callers never see half of a snapshot.
    pub async fn fetch_snapshot(&self) -> Result<FundingSnapshot> {
        let raised = self.read(&self.raised_data).await?;
        let needed = self.read(&self.needed_data).await?;
        debug!("Read funds raised={} needed={}", raised, needed);
        Ok(FundingSnapshot::new(raised, needed))
    }

    async fn read(&self, data: &str) -> Result<f64> {
        let request = JsonRpcRequest::eth_call(&self.contract, data);
        let hex = self.transport.send(&request).await?.into_result()?;
        parse_quantity(&hex)
    }
}

/// A plain value transfer. No `data` payload is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    /// Hex wei quantity, e.g. `0xde0b6b3a7640000`
    pub value: String,
}

/// An injected wallet able to share accounts and sign transactions.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// `eth_requestAccounts`; may prompt the user.
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// `eth_sendTransaction`; resolves with the transaction hash once submitted.
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String>;
}

/// Decode the JSON text a wallet request resolved with.
///
/// `None` stands for a promise that resolved to `undefined`.
pub fn decode_wallet_reply<R: DeserializeOwned>(method: &str, reply: Option<&str>) -> Result<R> {
    let text = reply
        .ok_or_else(|| FundingError::Wallet(format!("{} resolved with no value", method)))?;
    Ok(serde_json::from_str(text)?)
}

/// Ask the wallet for account access. A missing wallet is a no-op.
pub async fn connect_wallet<W: WalletProvider>(wallet: Option<&W>) -> Result<()> {
    let Some(wallet) = wallet else {
        debug!("No wallet provider; skipping connect");
        return Ok(());
    };
    let accounts = wallet.request_accounts().await?;
    info!("Wallet connected with {} account(s)", accounts.len());
    Ok(())
}

/// Send `amount` ETH from the wallet's first account to `contract`.
///
/// Nothing is sent to the wallet when `amount` is blank or not a number,
/// or when no wallet is present. Only submission is awaited, not inclusion in a block.
pub async fn fund_project<W: WalletProvider>(
    wallet: Option<&W>,
    contract: &ContractAddress,
    amount: &str,
) -> Result<String> {
    if amount.trim().is_empty() {
        return Err(FundingError::EmptyAmount);
    }
    let wallet = wallet.ok_or(FundingError::NoProvider)?;
    let value = eth_to_hex_quantity(amount)?;

    let accounts = wallet.request_accounts().await?;
    let from = accounts.into_iter().next().ok_or(FundingError::NoAccounts)?;

    let tx = TransactionRequest {
        from,
        to: contract.to_string(),
        value,
    };
    let hash = wallet.send_transaction(&tx).await?;
    info!("Submitted funding transaction {} ({} ETH)", hash, amount.trim());
    Ok(hash)
}
