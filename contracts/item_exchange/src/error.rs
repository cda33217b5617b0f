use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExchangeError {
    /// Item contract already bound
    AlreadyConfigured = 1,
    /// Item contract not bound yet
    NotConfigured = 2,
    /// Only the owner can perform this action
    OnlyOwner = 3,
    /// Only the item contract can perform this action
    OnlyItemContract = 4,
    /// Bid shares must be non-negative and sum to 100
    InvalidBidShares = 5,
    /// No bid shares recorded for the token
    BidSharesNotSet = 6,
    /// Ask amount cannot be split across the bid shares without remainder
    AskInvalidForShareSplitting = 7,
    /// Bid currency cannot be the null address
    BidCurrencyZeroAddress = 8,
    /// Bid recipient cannot be the null address
    BidRecipientZeroAddress = 9,
    /// Bid amount must be positive
    ZeroBidAmount = 10,
    /// Sell-on share must be within 0..=100
    InvalidSellOnShare = 11,
    /// Token transfer into or out of escrow did not succeed
    EscrowTransferFailed = 12,
    /// No bid recorded for the token and bidder
    BidNotFound = 13,
    /// Arithmetic overflow
    Overflow = 14,
    /// Critical storage data missing (contract state corrupted)
    StorageCorrupted = 15,
}
