use crate::events::Deposited;
use crate::state::{Treasury, TreasuryAccount};
use crate::{error::TreasuryError, validation};
use anchor_lang::{prelude::*, system_program};

/// Deposit native SOL into a treasury. Anyone may deposit.
///
/// Accounts expected:
/// 0. `[signer, writable]` The `depositor` funding the deposit.
/// 1. `[writable]` The `treasury_account` PDA receiving the lamports.
/// 2. `[]` The `treasury` PDA the funds account belongs to.
/// 3. `[]` The system program.
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    validation::ensure_nonzero(amount)?;

    let depositor = ctx.accounts.depositor.to_account_info();
    let treasury_account = ctx.accounts.treasury_account.to_account_info();

    if depositor.lamports() < amount {
        msg!(
            "Depositor holds {} lamports, cannot deposit {}",
            depositor.lamports(),
            amount
        );
        return err!(TreasuryError::InsufficientFunds);
    }
    validation::checked_credit(treasury_account.lamports(), amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: depositor,
                to: treasury_account,
            },
        ),
        amount,
    )?;

    emit!(Deposited {
        treasury: ctx.accounts.treasury.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
    });

    Ok(())
}
