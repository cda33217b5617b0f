//! Bid share arithmetic.
//!
//! Percentages are fixed-point integers scaled by PERCENT_SCALE (10^7), so
//! 100% is ONE_HUNDRED_PERCENT. Every computation is checked integer math.
//!
//! An amount is split-safe when each of the three shares takes an exact
//! portion of it: `amount * share` must be divisible by 100% for every role,
//! so no fraction of the smallest currency unit is dropped.

use crate::error::ExchangeError;
use crate::storage::ONE_HUNDRED_PERCENT;
use crate::types::{BidShares, Decimal};

/// True when `share` lies within 0%..=100%.
pub fn is_valid_percentage(share: &Decimal) -> bool {
    share.value >= 0 && share.value <= ONE_HUNDRED_PERCENT
}

/// Shares are valid when none is negative and they add up to exactly 100%.
pub fn is_valid_bid_shares(bid_shares: &BidShares) -> bool {
    let parts = [bid_shares.prev_owner, bid_shares.creator, bid_shares.owner];
    if parts.iter().any(|share| share.value < 0) {
        return false;
    }

    let total = parts
        .iter()
        .try_fold(0i128, |acc, share| acc.checked_add(share.value));

    total == Some(ONE_HUNDRED_PERCENT)
}

/// Portion of `amount` owed to `share`, rounded down.
pub fn split_share(share: &Decimal, amount: i128) -> Result<i128, ExchangeError> {
    amount
        .checked_mul(share.value)
        .ok_or(ExchangeError::Overflow)?
        .checked_div(ONE_HUNDRED_PERCENT)
        .ok_or(ExchangeError::Overflow)
}

fn splits_exactly(share: &Decimal, amount: i128) -> Result<bool, ExchangeError> {
    let scaled = amount
        .checked_mul(share.value)
        .ok_or(ExchangeError::Overflow)?;
    let remainder = scaled
        .checked_rem(ONE_HUNDRED_PERCENT)
        .ok_or(ExchangeError::Overflow)?;
    Ok(remainder == 0)
}

/// Whether `amount` can be divided among `bid_shares` without a remainder.
/// Non-positive amounts are never split-safe.
pub fn is_split_safe(bid_shares: &BidShares, amount: i128) -> Result<bool, ExchangeError> {
    if amount <= 0 {
        return Ok(false);
    }

    for share in [&bid_shares.prev_owner, &bid_shares.creator, &bid_shares.owner] {
        if !splits_exactly(share, amount)? {
            return Ok(false);
        }
    }

    Ok(true)
}
