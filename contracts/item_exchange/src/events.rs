use soroban_sdk::{symbol_short, Env};

use crate::types::{Ask, Bid, BidShares};

pub fn emit_bid_share_updated(env: &Env, token_id: u128, bid_shares: &BidShares) {
    env.events()
        .publish((symbol_short!("bid_share"), token_id), bid_shares.clone());
}

pub fn emit_ask_created(env: &Env, token_id: u128, ask: &Ask) {
    env.events()
        .publish((symbol_short!("ask_new"), token_id), ask.clone());
}

pub fn emit_ask_removed(env: &Env, token_id: u128, ask: &Ask) {
    env.events()
        .publish((symbol_short!("ask_rm"), token_id), ask.clone());
}

pub fn emit_bid_created(env: &Env, token_id: u128, bid: &Bid) {
    env.events()
        .publish((symbol_short!("bid_new"), token_id), bid.clone());
}

pub fn emit_bid_removed(env: &Env, token_id: u128, bid: &Bid) {
    env.events()
        .publish((symbol_short!("bid_rm"), token_id), bid.clone());
}
