//! Balance checks shared by the instruction handlers. Every check runs before
//! any lamports move so a failing instruction leaves balances untouched.

use crate::error::TreasuryError;
use anchor_lang::prelude::*;

pub fn ensure_nonzero(amount: u64) -> Result<()> {
    if amount == 0 {
        msg!("Amount cannot be zero");
        return err!(TreasuryError::InvalidAmount);
    }

    Ok(())
}

/// Lamports that can leave an account while keeping `reserve` in place.
pub fn withdrawable(balance: u64, reserve: u64) -> u64 {
    balance.saturating_sub(reserve)
}

/// Balance left after debiting `amount`, keeping at least `reserve` behind.
pub fn checked_debit(balance: u64, reserve: u64, amount: u64) -> Result<u64> {
    let available = withdrawable(balance, reserve);
    if available < amount {
        msg!("Requested {} lamports but only {} are available", amount, available);
        return err!(TreasuryError::InsufficientFunds);
    }

    balance
        .checked_sub(amount)
        .ok_or_else(|| error!(TreasuryError::InsufficientFunds))
}

/// Balance after crediting `amount`.
pub fn checked_credit(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_add(amount)
        .ok_or::<anchor_lang::error::Error>(ProgramError::ArithmeticOverflow.into())
}
