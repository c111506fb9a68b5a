//! ETH / wei conversions for transaction values.

use crate::{FundingError, Result};

/// Decimal places between ETH and wei.
pub const WEI_DECIMALS: usize = 18;

/// Wei in one ETH.
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Convert a decimal ETH amount such as `"0.25"` or `"1e-3"` into wei.
///
/// Accepts what an HTML number field yields: digits with at most one `.`,
/// optionally followed by `e`/`E` and a signed integer exponent. Arithmetic
/// is exact; digits past the 18th decimal place are truncated rather than
/// rounded. Signs on the amount itself are rejected.
pub fn eth_to_wei(amount: &str) -> Result<u128> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(FundingError::EmptyAmount);
    }

    let invalid = || FundingError::InvalidAmount(amount.to_string());

    let (mantissa, exponent) = match amount.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => {
            let exponent = exponent.strip_prefix('+').unwrap_or(exponent);
            (mantissa, exponent.parse::<i32>().map_err(|_| invalid())?)
        }
        None => (amount, 0),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // value = digits * 10^(exponent - fraction.len()); wei = value * 10^18
    let digits = format!("{}{}", whole, fraction);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }

    let shift = WEI_DECIMALS as i64 + exponent as i64 - fraction.len() as i64;
    if shift >= 0 {
        let base = digits.parse::<u128>().map_err(|_| invalid())?;
        u32::try_from(shift)
            .ok()
            .and_then(|shift| 10u128.checked_pow(shift))
            .and_then(|scale| base.checked_mul(scale))
            .ok_or_else(invalid)
    } else {
        let dropped = usize::try_from(-shift).unwrap_or(usize::MAX);
        if dropped >= digits.len() {
            return Ok(0);
        }
        digits[..digits.len() - dropped]
            .parse::<u128>()
            .map_err(|_| invalid())
    }
}

/// Render wei as an RPC quantity: `0x` plus lowercase hex without padding.
pub fn wei_to_hex_quantity(wei: u128) -> String {
    format!("0x{:x}", wei)
}

/// Convert a decimal ETH amount straight into a transaction `value` field.
pub fn eth_to_hex_quantity(amount: &str) -> Result<String> {
    eth_to_wei(amount).map(wei_to_hex_quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_eth() {
        assert_eq!(eth_to_hex_quantity("1").unwrap(), "0xde0b6b3a7640000");
    }

    #[test]
    fn test_half_eth() {
        assert_eq!(eth_to_wei("0.5").unwrap(), 500_000_000_000_000_000);
        assert_eq!(eth_to_hex_quantity("0.5").unwrap(), "0x6f05b59d3b20000");
    }

    #[test]
    fn test_leading_and_trailing_point() {
        assert_eq!(eth_to_wei(".5").unwrap(), WEI_PER_ETH / 2);
        assert_eq!(eth_to_wei("2.").unwrap(), 2 * WEI_PER_ETH);
        assert_eq!(eth_to_wei(" 3 ").unwrap(), 3 * WEI_PER_ETH);
    }

    #[test]
    fn test_sub_wei_digits_truncated() {
        assert_eq!(eth_to_wei("0.000000000000000001").unwrap(), 1);
        assert_eq!(eth_to_wei("0.0000000000000000015").unwrap(), 1);
        assert_eq!(eth_to_hex_quantity("0.0000000000000000009").unwrap(), "0x0");
    }

    #[test]
    fn test_fraction_not_subject_to_float_error() {
        assert_eq!(eth_to_wei("0.1").unwrap(), 100_000_000_000_000_000);
        assert_eq!(eth_to_wei("1.23456789").unwrap(), 1_234_567_890_000_000_000);
    }

    #[test]
    fn test_rejects_bad_amounts() {
        assert!(matches!(eth_to_wei(""), Err(FundingError::EmptyAmount)));
        assert!(matches!(eth_to_wei("   "), Err(FundingError::EmptyAmount)));
        for bad in [".", "-1", "+1", "e5", "1e", "1e1.5", "abc", "1.2.3", "0x10"] {
            assert!(
                matches!(eth_to_wei(bad), Err(FundingError::InvalidAmount(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_exponent_forms() {
        assert_eq!(eth_to_wei("1e-3").unwrap(), 1_000_000_000_000_000);
        assert_eq!(eth_to_wei("2E3").unwrap(), 2_000 * WEI_PER_ETH);
        assert_eq!(eth_to_wei("1.5e+1").unwrap(), 15 * WEI_PER_ETH);
        assert_eq!(eth_to_hex_quantity("5e-1").unwrap(), "0x6f05b59d3b20000");
        assert_eq!(eth_to_wei("1e-18").unwrap(), 1);
        assert_eq!(eth_to_wei("1e-19").unwrap(), 0);
        assert_eq!(eth_to_wei("0e99").unwrap(), 0);
    }

    #[test]
    fn test_overflow_rejected() {
        let huge = "9".repeat(40);
        for amount in [huge.as_str(), "1e30", "1e2147483647"] {
            assert!(matches!(
                eth_to_wei(amount),
                Err(FundingError::InvalidAmount(_))
            ));
        }
    }
}
