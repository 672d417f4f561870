use crate::pda;
use anchor_lang::prelude::*;

/// Treasury metadata. Records the only key allowed to move funds out of the
/// paired [`TreasuryAccount`](super::TreasuryAccount).
#[account]
#[derive(InitSpace, PartialEq, Eq, Debug)]
pub struct Treasury {
    /// Authority permitted to distribute funds. Set once at creation.
    pub authority: Pubkey,
    /// The bump seed used to derive the PDA, ensuring the address is valid.
    pub bump: u8,
}

impl Treasury {
    pub const SEED_PREFIX: &'static [u8] = b"treasury";
    pub const SPACE: usize = Self::DISCRIMINATOR.len() + Self::INIT_SPACE;

    pub fn pda_seeds(authority: &Pubkey) -> [&[u8]; 2] {
        pda::seeds(Self::SEED_PREFIX, authority)
    }

    pub fn try_find_pda(authority: &Pubkey) -> Option<(Pubkey, u8)> {
        pda::try_find(Self::SEED_PREFIX, authority, &crate::ID)
    }

    pub fn find_pda(authority: &Pubkey) -> Result<(Pubkey, u8)> {
        pda::find(Self::SEED_PREFIX, authority, &crate::ID)
    }

    /// Recomputes the address from a stored bump.
    pub fn create_pda(authority: &Pubkey, bump: u8) -> Result<Pubkey> {
        pda::create(Self::SEED_PREFIX, authority, bump, &crate::ID)
    }

    /// Address of this treasury, recomputed from the stored bump.
    pub fn pda(&self) -> Result<Pubkey> {
        Self::create_pda(&self.authority, self.bump)
    }
}
