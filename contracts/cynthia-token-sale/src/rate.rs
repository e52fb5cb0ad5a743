use crate::error::SaleError;

/// Converts a settlement-asset payment into token units at one whole
/// settlement unit per whole token.
///
/// Both sides are fixed-point integers, so the conversion only shifts the
/// payment by the difference in decimals. When the precisions match the
/// result is the payment itself.
pub fn tokens_for_payment(
    payment: i128,
    asset_decimals: u32,
    token_decimals: u32,
) -> Result<u128, SaleError> {
    if payment <= 0 {
        return Err(SaleError::InsufficientPayment);
    }
    let payment = u128::try_from(payment).map_err(|_| SaleError::InsufficientPayment)?;

    let shift = token_decimals
        .checked_sub(asset_decimals)
        .ok_or(SaleError::UnsupportedPrecision)?;
    let scale = 10u128
        .checked_pow(shift)
        .ok_or(SaleError::ArithmeticOverflow)?;

    payment
        .checked_mul(scale)
        .ok_or(SaleError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_precision_is_identity() {
        assert_eq!(tokens_for_payment(1, 18, 18), Ok(1));
        assert_eq!(
            tokens_for_payment(500_000_000_000_000_000, 18, 18),
            Ok(500_000_000_000_000_000)
        );
    }

    #[test]
    fn test_native_precision_scales_up() {
        // One whole 7-decimal unit buys one whole 18-decimal token.
        assert_eq!(
            tokens_for_payment(10_000_000, 7, 18),
            Ok(1_000_000_000_000_000_000)
        );
        assert_eq!(tokens_for_payment(1, 7, 18), Ok(100_000_000_000));
    }

    #[test]
    fn test_non_positive_payment() {
        assert_eq!(tokens_for_payment(0, 7, 18), Err(SaleError::InsufficientPayment));
        assert_eq!(tokens_for_payment(-5, 7, 18), Err(SaleError::InsufficientPayment));
    }

    #[test]
    fn test_finer_asset_is_rejected() {
        assert_eq!(
            tokens_for_payment(1, 19, 18),
            Err(SaleError::UnsupportedPrecision)
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            tokens_for_payment(i128::MAX, 0, 18),
            Err(SaleError::ArithmeticOverflow)
        );
        assert_eq!(tokens_for_payment(1, 0, 39), Err(SaleError::ArithmeticOverflow));
    }
}
