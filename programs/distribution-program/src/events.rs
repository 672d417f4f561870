use anchor_lang::prelude::*;

#[event]
pub struct TreasuryInitialized {
    pub treasury: Pubkey,
    pub treasury_account: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct Deposited {
    pub treasury: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Distributed {
    pub treasury: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}
