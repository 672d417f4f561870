//! Treasury distribution program for the Solana blockchain
//!
//! An authority creates a treasury, anyone can deposit SOL into it and only
//! the authority can distribute the deposited SOL to a recipient.
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod validation;

use instructions::*;

pub use error::TreasuryError;
pub use state::*;

use anchor_lang::prelude::*;

use program_utils::ensure_single_feature;

ensure_single_feature!("localnet", "devnet", "testnet", "mainnet");

#[cfg(feature = "localnet")]
declare_id!("4tXE3MBtiraiLALMezP1YmMm22QFofDraqzRAeUqB8dx");

#[cfg(feature = "devnet")]
declare_id!("dstd3v1111111111111111111111111111111111111");

#[cfg(feature = "testnet")]
declare_id!("dsttest111111111111111111111111111111111111");

#[cfg(feature = "mainnet")]
declare_id!("dist111111111111111111111111111111111111111");

#[program]
pub mod distribution_program {
    use super::*;

    pub fn initialize_treasury(ctx: Context<InitializeTreasury>) -> Result<()> {
        instructions::initialize_treasury::initialize_treasury(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit(ctx, amount)
    }

    pub fn distribute(ctx: Context<Distribute>, amount: u64, recipient: Pubkey) -> Result<()> {
        instructions::distribute::distribute(ctx, amount, recipient)
    }
}
