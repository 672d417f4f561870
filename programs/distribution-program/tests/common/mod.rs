#![allow(dead_code)]

use distribution_program::{Treasury, TreasuryAccount, TreasuryError};
use mollusk_svm::{program::keyed_account_for_system_program, result::Check, Mollusk};
use {
    anchor_lang::{
        prelude::ProgramError, solana_program::instruction::Instruction, system_program,
        AccountDeserialize, InstructionData, ToAccountMetas,
    },
    solana_sdk::{account::Account, pubkey::Pubkey},
};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub fn setup_mollusk() -> Mollusk {
    std::env::set_var("SBF_OUT_DIR", "../../target/deploy");
    Mollusk::new(&distribution_program::id(), "distribution_program")
}

pub fn funded_account(lamports: u64) -> Account {
    Account::new(lamports, 0, &system_program::ID)
}

pub fn custom_error(err: TreasuryError) -> ProgramError {
    ProgramError::Custom(err.into())
}

/// A treasury as it exists on chain after `initialize_treasury`.
pub struct TestTreasury {
    pub authority: Pubkey,
    pub authority_account: Account,
    pub treasury: Pubkey,
    pub treasury_pda: Account,
    pub treasury_account: Pubkey,
    pub treasury_account_pda: Account,
}

pub fn initialize_treasury_ix(authority: Pubkey, treasury: Pubkey, treasury_account: Pubkey) -> Instruction {
    Instruction {
        program_id: distribution_program::id(),
        accounts: distribution_program::accounts::InitializeTreasury {
            authority,
            treasury,
            treasury_account,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: distribution_program::instruction::InitializeTreasury {}.data(),
    }
}

pub fn deposit_ix(depositor: Pubkey, treasury: &TestTreasury, amount: u64) -> Instruction {
    Instruction {
        program_id: distribution_program::id(),
        accounts: distribution_program::accounts::Deposit {
            depositor,
            treasury_account: treasury.treasury_account,
            treasury: treasury.treasury,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: distribution_program::instruction::Deposit { amount }.data(),
    }
}

pub fn distribute_ix(
    authority: Pubkey,
    treasury: &TestTreasury,
    recipient: Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: distribution_program::id(),
        accounts: distribution_program::accounts::Distribute {
            authority,
            treasury_account: treasury.treasury_account,
            treasury: treasury.treasury,
            recipient,
        }
        .to_account_metas(None),
        data: distribution_program::instruction::Distribute { amount, recipient }.data(),
    }
}

pub fn init_treasury(mollusk: &Mollusk, authority: Pubkey, authority_account: &Account) -> TestTreasury {
    let (treasury, _) = Treasury::find_pda(&authority).expect("treasury PDA");
    let (treasury_account, _) = TreasuryAccount::find_pda(&authority).expect("treasury account PDA");

    let ix = initialize_treasury_ix(authority, treasury, treasury_account);

    let accounts = vec![
        (authority, authority_account.clone()),
        (treasury, Account::new(0, 0, &system_program::ID)),
        (treasury_account, Account::new(0, 0, &system_program::ID)),
        keyed_account_for_system_program(),
    ];

    let checks = vec![
        Check::success(),
        Check::account(&treasury)
            .owner(&distribution_program::ID)
            .space(Treasury::SPACE)
            .build(),
        Check::account(&treasury_account)
            .owner(&distribution_program::ID)
            .space(TreasuryAccount::SPACE)
            .build(),
        Check::all_rent_exempt(),
    ];

    let result = mollusk.process_and_validate_instruction(&ix, &accounts, &checks);

    let get = |key: &Pubkey| {
        result
            .get_account(key)
            .expect("account should exist")
            .clone()
    };

    let treasury_pda = get(&treasury);
    let treasury_account_pda = get(&treasury_account);

    // Stored bumps recreate both addresses without a search
    let record = Treasury::try_deserialize(&mut treasury_pda.data.as_slice()).expect("treasury record");
    let funds = TreasuryAccount::try_deserialize(&mut treasury_account_pda.data.as_slice())
        .expect("treasury account record");
    assert_eq!(record.authority, authority);
    assert_eq!(
        Treasury::create_pda(&authority, record.bump).expect("treasury PDA"),
        treasury
    );
    assert_eq!(
        TreasuryAccount::create_pda(&authority, funds.bump).expect("treasury account PDA"),
        treasury_account
    );

    TestTreasury {
        authority,
        authority_account: get(&authority),
        treasury,
        treasury_pda,
        treasury_account,
        treasury_account_pda,
    }
}

/// Pairs the metadata record of `owner` with the funds account of `victim`.
pub fn mismatched_treasury(owner: &TestTreasury, victim: &TestTreasury) -> TestTreasury {
    TestTreasury {
        authority: owner.authority,
        authority_account: owner.authority_account.clone(),
        treasury: owner.treasury,
        treasury_pda: owner.treasury_pda.clone(),
        treasury_account: victim.treasury_account,
        treasury_account_pda: victim.treasury_account_pda.clone(),
    }
}

/// Runs a successful deposit and returns the updated funds account.
pub fn deposit_into(
    mollusk: &Mollusk,
    treasury: &TestTreasury,
    depositor: Pubkey,
    depositor_account: &Account,
    amount: u64,
) -> Account {
    let ix = deposit_ix(depositor, treasury, amount);

    let accounts = vec![
        (depositor, depositor_account.clone()),
        (treasury.treasury_account, treasury.treasury_account_pda.clone()),
        (treasury.treasury, treasury.treasury_pda.clone()),
        keyed_account_for_system_program(),
    ];

    let checks = vec![
        Check::success(),
        Check::account(&treasury.treasury_account)
            .lamports(treasury.treasury_account_pda.lamports + amount)
            .build(),
    ];

    let result = mollusk.process_and_validate_instruction(&ix, &accounts, &checks);

    result
        .get_account(&treasury.treasury_account)
        .expect("treasury account should exist")
        .clone()
}
