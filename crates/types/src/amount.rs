use crate::error::AmountError;

/// Convert a human-readable amount into minimal on-chain units.
///
/// `unity` is the declared granularity of the token (or [`crate::UNITY`]
/// for the chain coin). Amounts finer than the granularity are refused
/// rather than rounded; rounding here would silently move money.
pub fn to_token_units(amount: f64, unity: u64) -> Result<u64, AmountError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(AmountError::OutOfRange { amount, unity });
    }
    let scaled = amount * unity as f64;
    // u64::MAX as f64 rounds up to 2^64 exactly; anything at or past it
    // would saturate the closing cast
    if scaled >= u64::MAX as f64 {
        return Err(AmountError::OutOfRange { amount, unity });
    }
    if scaled.fract() != 0.0 {
        return Err(AmountError::BelowGranularity { amount, unity });
    }
    Ok(scaled as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::UNITY;

    #[test]
    fn whole_multiples_scale_exactly() {
        assert_eq!(to_token_units(1.5, 100), Ok(150));
        assert_eq!(to_token_units(2.0, UNITY), Ok(200_000_000));
        assert_eq!(to_token_units(0.0, UNITY), Ok(0));
    }

    #[test]
    fn sub_granularity_amounts_are_refused() {
        assert_eq!(
            to_token_units(0.001, 100),
            Err(AmountError::BelowGranularity {
                amount: 0.001,
                unity: 100
            })
        );
        assert!(to_token_units(1.23, 10).is_err());
    }

    #[test]
    fn out_of_range_amounts_are_refused() {
        assert!(to_token_units(-1.0, 100).is_err());
        assert!(to_token_units(f64::NAN, 100).is_err());
        assert!(to_token_units(f64::INFINITY, 100).is_err());
        assert!(to_token_units(1e30, UNITY).is_err());
    }

    #[test]
    fn the_u64_boundary_is_refused_not_saturated() {
        // 2^64, the first value the closing cast cannot represent
        let boundary = 18_446_744_073_709_551_616.0;
        assert_eq!(
            to_token_units(boundary, 1),
            Err(AmountError::OutOfRange {
                amount: boundary,
                unity: 1
            })
        );
        // scaling can land on the boundary too
        assert!(to_token_units(9_007_199_254_740_992.0, 2048).is_err());
        // the largest f64 below 2^64 still converts exactly
        assert_eq!(
            to_token_units(18_446_744_073_709_549_568.0, 1),
            Ok(18_446_744_073_709_549_568)
        );
    }
}
