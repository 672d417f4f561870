//! Program derived addresses for the treasury accounts.
//!
//! Every treasury address is derived from a tag and the authority key. The
//! runtime picks the first bump, counting down from 255, that pushes the
//! address off the ed25519 curve, so no private key can ever sign for it.

use crate::error::TreasuryError;
use anchor_lang::prelude::*;

/// Seeds used during the bump search. The bump is appended when signing.
pub fn seeds<'a>(tag: &'a [u8], authority: &'a Pubkey) -> [&'a [u8]; 2] {
    [tag, authority.as_ref()]
}

pub fn try_find(tag: &[u8], authority: &Pubkey, program_id: &Pubkey) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&seeds(tag, authority), program_id)
}

/// Finds the canonical address and bump for `tag` and `authority`.
pub fn find(tag: &[u8], authority: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    try_find(tag, authority, program_id).ok_or_else(|| {
        msg!("No valid bump for authority {}", authority);
        error!(TreasuryError::DerivationExhausted)
    })
}

/// Recomputes an address from a previously stored bump without searching.
pub fn create(tag: &[u8], authority: &Pubkey, bump: u8, program_id: &Pubkey) -> Result<Pubkey> {
    Pubkey::create_program_address(&[tag, authority.as_ref(), &[bump]], program_id)
        .map_err(|_| error!(TreasuryError::AddressMismatch))
}
