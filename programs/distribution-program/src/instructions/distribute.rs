use crate::events::Distributed;
use crate::state::{Treasury, TreasuryAccount};
use crate::{error::TreasuryError, validation};
use anchor_lang::prelude::*;

/// Send lamports from the treasury to `recipient` (authority only).
///
/// Accounts expected:
/// 0. `[signer]` The `authority` recorded in the treasury.
/// 1. `[writable]` The `treasury_account` PDA holding the funds.
/// 2. `[]` The `treasury` PDA.
/// 3. `[writable]` The `recipient` account, must match the `recipient` argument.
#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(address = treasury.authority @ TreasuryError::Unauthorized)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            TreasuryAccount::SEED_PREFIX,
            treasury.authority.as_ref(),
        ],
        bump = treasury_account.bump,
    )]
    pub treasury_account: Account<'info, TreasuryAccount>,

    #[account(
        seeds = [
            Treasury::SEED_PREFIX,
            treasury.authority.as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: Can be any account to receive funds
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,
}

pub fn distribute(ctx: Context<Distribute>, amount: u64, recipient: Pubkey) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.recipient.key(),
        recipient,
        TreasuryError::RecipientMismatch
    );
    validation::ensure_nonzero(amount)?;

    // The funds account must stay rent exempt after the transfer.
    let reserve = Rent::get()?.minimum_balance(TreasuryAccount::SPACE);
    validation::checked_debit(ctx.accounts.treasury_account.get_lamports(), reserve, amount)?;
    validation::checked_credit(ctx.accounts.recipient.get_lamports(), amount)?;

    ctx.accounts.treasury_account.sub_lamports(amount)?;
    ctx.accounts.recipient.add_lamports(amount)?;

    emit!(Distributed {
        treasury: ctx.accounts.treasury.key(),
        recipient,
        amount,
    });

    Ok(())
}
