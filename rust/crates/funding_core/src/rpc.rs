//! JSON-RPC wire types and the transport seam.

use serde::{Deserialize, Serialize};

use crate::config::ContractAddress;
use crate::{FundingError, Result};

/// Block tag used for every read.
pub const LATEST_BLOCK: &str = "latest";

/// Call object passed as the first `eth_call` parameter.
#[derive(Debug, Clone, Serialize)]
pub struct CallParams<'a> {
    pub to: &'a ContractAddress,
    pub data: &'a str,
}

/// Request body for a JSON-RPC 2.0 `eth_call`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: (CallParams<'a>, &'static str),
    pub id: u32,
}

impl<'a> JsonRpcRequest<'a> {
    /// Build a read-only call against `to` at the latest block.
    pub fn eth_call(to: &'a ContractAddress, data: &'a str) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "eth_call",
            params: (CallParams { to, data }, LATEST_BLOCK),
            id: 1,
        }
    }

    /// Selector data carried by this call.
    pub fn data(&self) -> &str {
        self.params.0.data
    }
}

/// Error object of a failed JSON-RPC call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Response from a JSON-RPC endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JsonRpcResponse {
    /// Hex-encoded return data
    #[serde(default)]
    pub result: Option<String>,
    /// Set instead of `result` when the call failed
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Successful response carrying `result`.
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
            error: None,
        }
    }

    /// Extract the raw hex result, turning an error object into an `Err`.
    pub fn into_result(self) -> Result<String> {
        if let Some(error) = self.error {
            return Err(FundingError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        self.result.ok_or(FundingError::MissingResult)
    }
}

/// Anything that can deliver a JSON-RPC request and return the decoded body.
///
/// The browser build posts with `gloo-net`; tests use in-memory mocks.
#[allow(async_fn_in_trait)]
pub trait RpcTransport {
    async fn send(&self, request: &JsonRpcRequest<'_>) -> Result<JsonRpcResponse>;
}

/// Parse a hex quantity such as `0x0de0b6b3a7640000` into a float.
///
/// The `0x` prefix is optional and leading zeros are ignored. The result is
/// the nearest f64 (ties to even): values up to 128 bits are read exactly,
/// wider values keep their top 128 bits plus a sticky bit for any non-zero
/// digits below them. Empty data (`"0x"`, the answer of an address with no
/// code) is rejected.
pub fn parse_quantity(hex: &str) -> Result<f64> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FundingError::InvalidQuantity(hex.to_string()));
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0.0);
    }

    let invalid = |_| FundingError::InvalidQuantity(hex.to_string());
    if significant.len() <= 32 {
        let value = u128::from_str_radix(significant, 16).map_err(invalid)?;
        return Ok(value as f64);
    }

    let (head, tail) = significant.split_at(32);
    let mut top = u128::from_str_radix(head, 16).map_err(invalid)?;
    if tail.bytes().any(|b| b != b'0') {
        top |= 1;
    }
    Ok(top as f64 * 16f64.powi(tail.len() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEMO_CONTRACT;

    #[test]
    fn test_eth_call_request_serialization() {
        let contract = ContractAddress::new(DEMO_CONTRACT);
        let request = JsonRpcRequest::eth_call(&contract, "0x12345678");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "eth_call",
                "params": [{ "to": DEMO_CONTRACT, "data": "0x12345678" }, "latest"],
                "id": 1
            })
        );
    }

    #[test]
    fn test_response_with_result() {
        let json = r#"{"jsonrpc":"2.0","id":1,"result":"0x2a"}"#;
        let response: JsonRpcResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_result().unwrap(), "0x2a");
    }

    #[test]
    fn test_response_with_error() {
        let json = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#;
        let response: JsonRpcResponse = serde_json::from_str(json).unwrap();

        match response.into_result() {
            Err(FundingError::Rpc { code, message }) => {
                assert_eq!(code, -32000);
                assert_eq!(message, "execution reverted");
            }
            other => panic!("expected RPC error, got {:?}", other),
        }
    }

    #[test]
    fn test_response_without_result() {
        let response: JsonRpcResponse = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert!(matches!(
            response.into_result(),
            Err(FundingError::MissingResult)
        ));
    }

    #[test]
    fn test_parse_quantity_padded_word() {
        let word = format!("0x{:0>64}", "de0b6b3a7640000");
        assert_eq!(parse_quantity(&word).unwrap(), 1e18);
    }

    #[test]
    fn test_parse_quantity_prefix_optional() {
        assert_eq!(parse_quantity("ff").unwrap(), 255.0);
        assert_eq!(parse_quantity("0XFF").unwrap(), 255.0);
        assert_eq!(parse_quantity("0x0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_quantity_wider_than_128_bits() {
        // 2^200
        let hex = format!("0x1{}", "0".repeat(50));
        assert_eq!(parse_quantity(&hex).unwrap(), 2f64.powi(200));
    }

    #[test]
    fn test_parse_quantity_wide_value_rounds_past_tie() {
        // Top 128 bits are (2^53 + 1) * 2^71, exactly halfway between two
        // doubles; the non-zero trailing digit tips it upwards.
        let hex = "0x100000000000008000000000000000001";
        assert_eq!(
            parse_quantity(hex).unwrap(),
            (2f64.powi(53) + 2.0) * 2f64.powi(75)
        );

        // Without trailing bits the tie goes to even.
        let hex = "0x100000000000008000000000000000000";
        assert_eq!(parse_quantity(hex).unwrap(), 2f64.powi(128));
    }

    #[test]
    fn test_parse_quantity_rejects_empty_and_garbage() {
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("0xzz").is_err());
        assert!(parse_quantity("-0x1").is_err());
    }
}
