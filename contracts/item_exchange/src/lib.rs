#![no_std]

mod error;
mod escrow;
mod events;
mod shares;
mod storage;
mod types;


pub use error::ExchangeError;
pub use types::{Ask, Bid, BidShares, Decimal};

use soroban_sdk::{contract, contractimpl, Address, Env};

/// Item Exchange Contract
///
/// Keeps the market for items minted by a single item contract:
/// - Bid shares: how sale proceeds split between previous owner, creator and owner
/// - Asks: the current price a seller wants for an item
/// - Bids: escrowed offers, one per bidder and item, refunded when replaced
///
/// The deploying owner binds the item contract once via `configure`; from then
/// on only the item contract may call the mutating entry points.
#[contract]
pub struct ItemExchange;

#[contractimpl]
impl ItemExchange {
    /// Constructor: records the deploying owner.
    pub fn __constructor(env: Env, owner: Address) {
        storage::set_owner(&env, &owner);
        storage::extend_instance_ttl(&env);
    }

    /// Bind the item contract (owner only, once).
    ///
    /// # Arguments
    /// * `caller` - Must match the owner set at deployment
    /// * `item_contract` - Address allowed to drive asks, bids and bid shares
    pub fn configure(env: Env, caller: Address, item_contract: Address) -> Result<(), ExchangeError> {
        // Once bound, nobody (owner included) can rebind
        if storage::has_item_contract(&env) {
            return Err(ExchangeError::AlreadyConfigured);
        }

        let owner = storage::get_owner(&env).ok_or(ExchangeError::StorageCorrupted)?;
        if caller != owner {
            return Err(ExchangeError::OnlyOwner);
        }
        caller.require_auth();

        storage::set_item_contract(&env, &item_contract);
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    /// Set the bid shares for a token (item contract only).
    ///
    /// The three shares must be non-negative and sum to exactly 100%.
    /// Overwrites any shares previously recorded for the token.
    pub fn set_bid_shares(
        env: Env,
        caller: Address,
        token_id: u128,
        bid_shares: BidShares,
    ) -> Result<(), ExchangeError> {
        Self::require_item_contract(&env, &caller)?;

        if !shares::is_valid_bid_shares(&bid_shares) {
            return Err(ExchangeError::InvalidBidShares);
        }

        storage::set_bid_shares(&env, token_id, &bid_shares);
        events::emit_bid_share_updated(&env, token_id, &bid_shares);

        Ok(())
    }

    /// Set the current ask for a token (item contract only).
    ///
    /// Requires bid shares for the token, and an amount that splits exactly
    /// across them.
    pub fn set_ask(env: Env, caller: Address, token_id: u128, ask: Ask) -> Result<(), ExchangeError> {
        Self::require_item_contract(&env, &caller)?;

        let bid_shares =
            storage::get_bid_shares(&env, token_id).ok_or(ExchangeError::BidSharesNotSet)?;

        if !shares::is_split_safe(&bid_shares, ask.amount)? {
            return Err(ExchangeError::AskInvalidForShareSplitting);
        }

        storage::set_ask(&env, token_id, &ask);
        events::emit_ask_created(&env, token_id, &ask);

        Ok(())
    }

    /// Remove the current ask for a token (item contract only).
    /// Does nothing when no ask is recorded.
    pub fn remove_ask(env: Env, caller: Address, token_id: u128) -> Result<(), ExchangeError> {
        Self::require_item_contract(&env, &caller)?;

        if let Some(ask) = storage::get_ask(&env, token_id) {
            storage::remove_ask(&env, token_id);
            events::emit_ask_removed(&env, token_id, &ask);
        }

        Ok(())
    }

    /// Place or replace a bid (item contract only).
    ///
    /// Pulls `bid.amount` of `bid.currency` from `spender` into escrow using
    /// the allowance `spender` granted to this contract. A previous bid by the
    /// same bidder on the same token is refunded in full to that bidder.
    ///
    /// # Arguments
    /// * `caller` - Must match the configured item contract
    /// * `token_id` - Token the bid is for
    /// * `bid` - The new bid; `bid.bidder` keys the record
    /// * `spender` - Account the escrowed funds are taken from
    pub fn set_bid(
        env: Env,
        caller: Address,
        token_id: u128,
        bid: Bid,
        spender: Address,
    ) -> Result<(), ExchangeError> {
        Self::require_item_contract(&env, &caller)?;

        if types::is_null_address(&env, &bid.currency) {
            return Err(ExchangeError::BidCurrencyZeroAddress);
        }
        if types::is_null_address(&env, &bid.recipient) {
            return Err(ExchangeError::BidRecipientZeroAddress);
        }
        if bid.amount <= 0 {
            return Err(ExchangeError::ZeroBidAmount);
        }
        if !shares::is_valid_percentage(&bid.sell_on_share) {
            return Err(ExchangeError::InvalidSellOnShare);
        }

        // Record the new bid before any token moves, so the superseded
        // escrow can only be released once
        let previous = storage::get_bid(&env, token_id, &bid.bidder);
        storage::set_bid(&env, token_id, &bid);

        escrow::pull(&env, &bid.currency, &spender, bid.amount)?;

        if let Some(previous) = previous {
            escrow::release(&env, &previous.currency, &previous.bidder, previous.amount)?;
        }

        events::emit_bid_created(&env, token_id, &bid);

        Ok(())
    }

    /// Withdraw a bid and refund its escrow to the bidder (item contract only).
    pub fn remove_bid(
        env: Env,
        caller: Address,
        token_id: u128,
        bidder: Address,
    ) -> Result<(), ExchangeError> {
        Self::require_item_contract(&env, &caller)?;

        let bid = storage::get_bid(&env, token_id, &bidder).ok_or(ExchangeError::BidNotFound)?;
        storage::remove_bid(&env, token_id, &bidder);

        escrow::release(&env, &bid.currency, &bid.bidder, bid.amount)?;

        events::emit_bid_removed(&env, token_id, &bid);

        Ok(())
    }

    /// Get the bid shares for a token (all zero when unset).
    pub fn bid_shares_for_token(env: Env, token_id: u128) -> BidShares {
        storage::get_bid_shares(&env, token_id).unwrap_or_default()
    }

    /// Get the current ask for a token.
    pub fn current_ask_for_token(env: Env, token_id: u128) -> Option<Ask> {
        storage::get_ask(&env, token_id)
    }

    /// Get the open bid of `bidder` on a token.
    pub fn bid_for_token_bidder(env: Env, token_id: u128, bidder: Address) -> Option<Bid> {
        storage::get_bid(&env, token_id, &bidder)
    }

    /// Whether `amount` splits exactly across the token's bid shares.
    /// False when the token has no bid shares.
    pub fn is_valid_bid(env: Env, token_id: u128, amount: i128) -> bool {
        match storage::get_bid_shares(&env, token_id) {
            Some(bid_shares) => shares::is_split_safe(&bid_shares, amount).unwrap_or(false),
            None => false,
        }
    }

    /// Whether the shares are non-negative and sum to exactly 100%.
    pub fn is_valid_bid_shares(_env: Env, bid_shares: BidShares) -> bool {
        shares::is_valid_bid_shares(&bid_shares)
    }

    /// Portion of `amount` owed to `share`, rounded down.
    pub fn split_share(_env: Env, share: Decimal, amount: i128) -> Result<i128, ExchangeError> {
        shares::split_share(&share, amount)
    }

    /// Get the owner address.
    pub fn owner(env: Env) -> Result<Address, ExchangeError> {
        storage::get_owner(&env).ok_or(ExchangeError::StorageCorrupted)
    }

    /// Get the configured item contract address.
    pub fn item_contract(env: Env) -> Result<Address, ExchangeError> {
        storage::get_item_contract(&env).ok_or(ExchangeError::NotConfigured)
    }

    // --- Internal helpers ---

    fn require_item_contract(env: &Env, caller: &Address) -> Result<(), ExchangeError> {
        let item_contract =
            storage::get_item_contract(env).ok_or(ExchangeError::NotConfigured)?;
        if *caller != item_contract {
            return Err(ExchangeError::OnlyItemContract);
        }
        caller.require_auth();
        storage::extend_instance_ttl(env);
        Ok(())
    }
}
