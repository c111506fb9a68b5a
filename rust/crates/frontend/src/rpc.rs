//! JSON-RPC over `fetch`.

use funding_core::rpc::{JsonRpcRequest, JsonRpcResponse, RpcTransport};
use funding_core::{FundingError, Result};
use gloo_net::http::Request;

/// Posts JSON-RPC requests to a fixed endpoint.
pub struct GlooTransport {
    url: String,
}

impl GlooTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

fn http_error(e: gloo_net::Error) -> FundingError {
    FundingError::Http(e.to_string())
}

impl RpcTransport for GlooTransport {
    async fn send(&self, request: &JsonRpcRequest<'_>) -> Result<JsonRpcResponse> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(http_error)?
            .send()
            .await
            .map_err(http_error)?;

        response
            .json::<JsonRpcResponse>()
            .await
            .map_err(http_error)
    }
}
