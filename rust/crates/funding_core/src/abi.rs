//! Function selectors for the two contract reads.

use std::fmt::Write;

use sha3::{Digest, Keccak256};

/// Signature of the contract's raised-funds getter.
pub const FUNDS_RAISED_SIGNATURE: &str = "getFundsRaised()";

/// Signature of the contract's goal getter.
pub const FUNDS_NEEDED_SIGNATURE: &str = "fundsNeeded()";

/// First four bytes of the Keccak-256 hash of a function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector([u8; 4]);

impl Selector {
    /// Compute the selector for a canonical signature such as `"fundsNeeded()"`.
    pub fn of(signature: &str) -> Self {
        let digest = Keccak256::digest(signature.as_bytes());
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&digest[..4]);
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 4] {
        self.0
    }

    /// Render as `eth_call` data: `0x` followed by 8 lowercase hex digits.
    pub fn to_call_data(&self) -> String {
        let mut data = String::with_capacity(10);
        data.push_str("0x");
        for byte in self.0 {
            let _ = write!(data, "{:02x}", byte);
        }
        data
    }
}
