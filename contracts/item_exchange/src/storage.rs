use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Ask, Bid, BidShares};

/// Storage keys for the contract.
/// Configuration lives in instance storage; per-token records are persistent.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Deploying owner (can bind the item contract once)
    Owner,
    /// Item contract allowed to drive every mutating entry point
    ItemContract,
    /// Bid shares for a token: BidShares(token_id)
    BidShares(u128),
    /// Current ask for a token: Ask(token_id)
    Ask(u128),
    /// Open bid for a token and bidder: Bid(token_id, bidder)
    Bid(u128, Address),
}

/// Scale factor for percentages (1% == PERCENT_SCALE).
/// Same 7 decimal places as Stellar token amounts.
pub const PERCENT_SCALE: i128 = 10_000_000; // 10^7

/// 100% in scaled representation.
pub const ONE_HUNDRED_PERCENT: i128 = 100 * PERCENT_SCALE;

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const RECORD_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_record_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// --- Configuration ---

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_item_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::ItemContract)
}

pub fn has_item_contract(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::ItemContract)
}

pub fn set_item_contract(env: &Env, item_contract: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::ItemContract, item_contract);
}

// --- Per-token records ---

pub fn get_bid_shares(env: &Env, token_id: u128) -> Option<BidShares> {
    env.storage().persistent().get(&DataKey::BidShares(token_id))
}

pub fn set_bid_shares(env: &Env, token_id: u128, bid_shares: &BidShares) {
    let key = DataKey::BidShares(token_id);
    env.storage().persistent().set(&key, bid_shares);
    extend_record_ttl(env, &key);
}

pub fn get_ask(env: &Env, token_id: u128) -> Option<Ask> {
    env.storage().persistent().get(&DataKey::Ask(token_id))
}

pub fn set_ask(env: &Env, token_id: u128, ask: &Ask) {
    let key = DataKey::Ask(token_id);
    env.storage().persistent().set(&key, ask);
    extend_record_ttl(env, &key);
}

pub fn remove_ask(env: &Env, token_id: u128) {
    env.storage().persistent().remove(&DataKey::Ask(token_id));
}

pub fn get_bid(env: &Env, token_id: u128, bidder: &Address) -> Option<Bid> {
    env.storage()
        .persistent()
        .get(&DataKey::Bid(token_id, bidder.clone()))
}

pub fn set_bid(env: &Env, token_id: u128, bid: &Bid) {
    let key = DataKey::Bid(token_id, bid.bidder.clone());
    env.storage().persistent().set(&key, bid);
    extend_record_ttl(env, &key);
}

pub fn remove_bid(env: &Env, token_id: u128, bidder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Bid(token_id, bidder.clone()));
}
