use crate::error::TreasuryError;
use crate::events::TreasuryInitialized;
use crate::state::{Treasury, TreasuryAccount};
use anchor_lang::{prelude::*, system_program};

/// Create the treasury metadata and funds PDAs for `authority`.
///
/// Accounts expected:
/// 0. `[signer, writable]` The `authority` that will control the treasury and pays for rent.
/// 1. `[writable]` The `treasury` PDA, seeds `["treasury", authority]`.
/// 2. `[writable]` The `treasury_account` PDA, seeds `["treasury_account", authority]`.
/// 3. `[]` The system program.
#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Compared against the derived PDA and created by the handler.
    #[account(mut)]
    pub treasury: UncheckedAccount<'info>,

    /// CHECK: Compared against the derived PDA and created by the handler.
    #[account(mut)]
    pub treasury_account: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_treasury(ctx: Context<InitializeTreasury>) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    let (treasury_pda, treasury_bump) = Treasury::find_pda(&authority)?;
    require_keys_eq!(
        ctx.accounts.treasury.key(),
        treasury_pda,
        TreasuryError::AddressMismatch
    );

    let (treasury_account_pda, treasury_account_bump) = TreasuryAccount::find_pda(&authority)?;
    require_keys_eq!(
        ctx.accounts.treasury_account.key(),
        treasury_account_pda,
        TreasuryError::AddressMismatch
    );

    if is_initialized(&ctx.accounts.treasury) || is_initialized(&ctx.accounts.treasury_account) {
        msg!("Treasury already exists for authority {}", authority);
        return err!(TreasuryError::AlreadyInitialized);
    }

    let [tag, key] = Treasury::pda_seeds(&authority);
    create_pda_account(
        &ctx.accounts.authority,
        &ctx.accounts.treasury,
        &ctx.accounts.system_program,
        Treasury::SPACE,
        &[tag, key, &[treasury_bump]],
    )?;
    let treasury = Treasury {
        authority,
        bump: treasury_bump,
    };
    {
        let mut data = ctx.accounts.treasury.try_borrow_mut_data()?;
        treasury.try_serialize(&mut &mut data[..])?;
    }

    let [tag, key] = TreasuryAccount::pda_seeds(&authority);
    create_pda_account(
        &ctx.accounts.authority,
        &ctx.accounts.treasury_account,
        &ctx.accounts.system_program,
        TreasuryAccount::SPACE,
        &[tag, key, &[treasury_account_bump]],
    )?;
    let treasury_account = TreasuryAccount {
        bump: treasury_account_bump,
    };
    {
        let mut data = ctx.accounts.treasury_account.try_borrow_mut_data()?;
        treasury_account.try_serialize(&mut &mut data[..])?;
    }

    emit!(TreasuryInitialized {
        treasury: treasury_pda,
        treasury_account: treasury_account_pda,
        authority,
    });

    Ok(())
}

fn is_initialized(account: &AccountInfo<'_>) -> bool {
    account.owner == &crate::ID || !account.data_is_empty()
}

/// Create a rent-exempt account owned by this program at a PDA.
///
/// Lamports may already have been sent to the address, in which case
/// `create_account` would fail. Only the missing rent is transferred and the
/// account is allocated and assigned instead.
fn create_pda_account<'info>(
    payer: &Signer<'info>,
    target: &UncheckedAccount<'info>,
    system_program: &Program<'info, System>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let rent = Rent::get()?.minimum_balance(space);
    let current_lamports = target.lamports();

    if current_lamports == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                system_program::CreateAccount {
                    from: payer.to_account_info(),
                    to: target.to_account_info(),
                },
                &[signer_seeds],
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let shortfall = rent.saturating_sub(current_lamports);
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.to_account_info(),
                system_program::Transfer {
                    from: payer.to_account_info(),
                    to: target.to_account_info(),
                },
            ),
            shortfall,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            system_program::Allocate {
                account_to_allocate: target.to_account_info(),
            },
            &[signer_seeds],
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            system_program::Assign {
                account_to_assign: target.to_account_info(),
            },
            &[signer_seeds],
        ),
        &crate::ID,
    )
}
