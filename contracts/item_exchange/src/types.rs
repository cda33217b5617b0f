use soroban_sdk::{contracttype, Address, Env, String};

/// Fixed-point percentage scaled by `PERCENT_SCALE` (100% == `ONE_HUNDRED_PERCENT`).
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Decimal {
    pub value: i128,
}

impl Decimal {
    pub const fn zero() -> Self {
        Decimal { value: 0 }
    }

    #[cfg(test)]
    pub const fn from_percent(percent: i128) -> Self {
        Decimal {
            value: percent * crate::storage::PERCENT_SCALE,
        }
    }
}

/// Split of sale proceeds between the three stakeholder roles.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BidShares {
    /// Share for the previous owner
    pub prev_owner: Decimal,
    /// Share for the creator
    pub creator: Decimal,
    /// Share for the current owner
    pub owner: Decimal,
}

/// Price a seller is asking for a token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ask {
    /// Token contract the ask is denominated in
    pub currency: Address,
    pub amount: i128,
}

/// Escrowed offer for a token. The exchange holds `amount` of `currency`
/// for as long as the bid is open.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    /// Token contract the bid is paid in
    pub currency: Address,
    pub amount: i128,
    /// Address that placed the bid and receives refunds
    pub bidder: Address,
    /// Address that would receive the token if the bid is accepted
    pub recipient: Address,
    /// Share of the next sale the bidder asks to keep as previous owner
    pub sell_on_share: Decimal,
}

/// Strkey of the all-zero ed25519 account.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Strkey of the all-zero contract id.
pub const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Soroban has no zero address; the all-zero account and contract ids stand in for it.
pub fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_string(&String::from_str(env, NULL_ACCOUNT))
        || *address == Address::from_string(&String::from_str(env, NULL_CONTRACT))
}
