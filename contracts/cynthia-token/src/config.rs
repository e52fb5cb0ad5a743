use crate::error::LedgerError;

pub const NAME: &str = "CynthiaToken";
pub const SYMBOL: &str = "CYNTHIA";
pub const DECIMALS: u32 = 18;

/// Supply in whole tokens, before scaling by `DECIMALS`.
pub const WHOLE_SUPPLY: u128 = 100_000_000;

/// Fixed-point supply minted to the initial owner.
pub fn total_supply_units() -> Result<u128, LedgerError> {
    10u128
        .checked_pow(DECIMALS)
        .and_then(|scale| WHOLE_SUPPLY.checked_mul(scale))
        .ok_or(LedgerError::ArithmeticOverflow)
}
