//! Token movements into and out of escrow.
//!
//! Every call goes through the `try_` token client so a failed transfer
//! surfaces as `EscrowTransferFailed` instead of an opaque host panic. The
//! caller returns that error, which rolls back the whole invocation.

use soroban_sdk::{log, token, Address, Env};

use crate::error::ExchangeError;

/// Pull `amount` of `currency` from `from` into the exchange.
///
/// Uses the allowance `from` granted to the exchange, so `from` does not have
/// to sign this invocation.
pub fn pull(env: &Env, currency: &Address, from: &Address, amount: i128) -> Result<(), ExchangeError> {
    let token_client = token::Client::new(env, currency);
    let exchange = env.current_contract_address();

    match token_client.try_transfer_from(&exchange, from, &exchange, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Escrow pull failed. From: {}, Amount: {}", from, amount);
            Err(ExchangeError::EscrowTransferFailed)
        }
    }
}

/// Return `amount` of `currency` held by the exchange to `to`.
pub fn release(env: &Env, currency: &Address, to: &Address, amount: i128) -> Result<(), ExchangeError> {
    let token_client = token::Client::new(env, currency);

    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Escrow release failed. To: {}, Amount: {}", to, amount);
            Err(ExchangeError::EscrowTransferFailed)
        }
    }
}
