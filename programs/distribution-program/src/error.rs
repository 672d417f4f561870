use anchor_lang::prelude::*;

#[error_code]
pub enum TreasuryError {
    #[msg("No bump seed produces a valid program address for the treasury")]
    DerivationExhausted,
    #[msg("Supplied address does not match the derived treasury address")]
    AddressMismatch,
    #[msg("Treasury is already initialized for this authority")]
    AlreadyInitialized,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Insufficient funds for the requested transfer")]
    InsufficientFunds,
    #[msg("Only the treasury authority can perform this action")]
    Unauthorized,
    #[msg("Recipient account does not match the recipient argument")]
    RecipientMismatch,
}
