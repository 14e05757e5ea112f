//! Discount math shown on product cards.

/// Percentage saved going from `original` to `current`, rounded half-up.
///
/// Returns 0 when there is no original price, when it is zero, or when it
/// does not exceed the current price. The card shows a discount badge only
/// for values above zero.
pub fn discount_percent(original: Option<i64>, current: i64) -> u32 {
    let original = match original {
        Some(original) if original > 0 && original > current => original,
        _ => return 0,
    };

    // Integer half-up rounding of 100 * (original - current) / original.
    let saved = i128::from(original) - i128::from(current);
    let original = i128::from(original);
    let percent = (200 * saved + original) / (2 * original);
    u32::try_from(percent).unwrap_or(u32::MAX)
}
