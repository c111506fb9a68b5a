//! Binding to the wallet injected as `window.ethereum`.

use funding_core::funding::decode_wallet_reply;
use funding_core::{FundingError, Result, TransactionRequest, WalletProvider};
use js_sys::{Function, JSON, Promise, Reflect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Argument of the provider's `request` method.
#[derive(Serialize)]
struct ProviderRequest<'a, P> {
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<P>,
}

/// The browser-injected provider.
pub struct InjectedProvider {
    ethereum: JsValue,
    request: Function,
}

impl InjectedProvider {
    /// Look up `window.ethereum`; `None` when no wallet extension is present.
    pub fn detect() -> Option<Self> {
        let ethereum = Reflect::get(&js_sys::global(), &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        let request = Reflect::get(&ethereum, &JsValue::from_str("request"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some(Self { ethereum, request })
    }

    async fn call<P, R>(&self, method: &str, params: Option<P>) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(&ProviderRequest { method, params })?;
        let arg = JSON::parse(&body).map_err(js_error)?;

        let promise = self
            .request
            .call1(&self.ethereum, &arg)
            .map_err(js_error)?
            .dyn_into::<Promise>()
            .map_err(js_error)?;
        let value = JsFuture::from(promise).await.map_err(js_error)?;

        // JSON.stringify(undefined) is undefined, not a string.
        let text: Option<String> = if value.is_undefined() {
            None
        } else {
            Some(JSON::stringify(&value).map_err(js_error)?.into())
        };
        decode_wallet_reply(method, text.as_deref())
    }
}

/// Wallet rejections arrive as `{ code, message }` objects.
fn js_error(value: JsValue) -> FundingError {
    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    FundingError::Wallet(message)
}

impl WalletProvider for InjectedProvider {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        self.call::<(), _>("eth_requestAccounts", None).await
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String> {
        self.call("eth_sendTransaction", Some([tx])).await
    }
}
