use solana_pubkey::Pubkey;
use solsign_instruction_decoder::{
    programs::{STAKE_PROGRAM_ID, SYSTEM_PROGRAM_ID},
    StructuredInstruction,
};
use tracing::debug;

use super::{push_distinct, same_account, StakeDeactivate, StakeDelegate, StakeWithdraw};

/// `CreateAccountWithSeed`, `Initialize`, `DelegateStake` of one new stake
/// account, funded, owned and delegated by the signer without a lockup
/// custodian.
pub(super) fn stake_delegate(
    instructions: &[StructuredInstruction],
    signer: &Pubkey,
) -> Option<StakeDelegate> {
    let [create, initialize, delegate] = instructions else {
        return None;
    };
    let create = create.as_system_create_account_with_seed()?;
    let initialize = initialize.as_stake_initialize()?;
    let delegate = delegate.as_stake_delegate()?;

    let signer_funds_and_seeds = create.funding_account.is(signer)
        && create.base == *signer
        && create
            .base_account
            .map_or(true, |base_account| base_account.is(signer))
        && create.owner == STAKE_PROGRAM_ID;
    if !signer_funds_and_seeds {
        debug!("Stake account is not created by the signer");
        return None;
    }
    let stake_account = &initialize.uninitialized_stake_account;
    if !same_account(&create.created_account, stake_account)
        || !same_account(stake_account, &delegate.initialized_stake_account)
    {
        debug!("Stake instructions refer to different stake accounts");
        return None;
    }
    if initialize.staker != *signer
        || initialize.withdrawer != *signer
        || !delegate.stake_authority.is(signer)
    {
        debug!("Signer is not the stake authority");
        return None;
    }
    if initialize.custodian != SYSTEM_PROGRAM_ID {
        debug!(custodian = %initialize.custodian, "Stake account has a lockup custodian");
        return None;
    }

    Some(StakeDelegate {
        stake_account: delegate.initialized_stake_account,
        vote_account: delegate.vote_account,
        lamports: create.lamports,
    })
}

/// Only `Deactivate` instructions, each authorized by the signer.
pub(super) fn stake_deactivate(
    instructions: &[StructuredInstruction],
    signer: &Pubkey,
) -> Option<StakeDeactivate> {
    let mut stake_accounts = Vec::new();
    for instruction in instructions {
        let deactivate = instruction.as_stake_deactivate()?;
        if !deactivate.stake_authority.is(signer) {
            debug!("Signer is not the stake authority");
            return None;
        }
        push_distinct(&mut stake_accounts, deactivate.delegated_stake_account);
    }
    Some(StakeDeactivate { stake_accounts })
}

/// Only `Withdraw` instructions, each authorized by the signer.
pub(super) fn stake_withdraw(
    instructions: &[StructuredInstruction],
    signer: &Pubkey,
) -> Option<StakeWithdraw> {
    let mut lamports = 0u64;
    let mut recipients = Vec::new();
    for instruction in instructions {
        let withdraw = instruction.as_stake_withdraw()?;
        if !withdraw.withdrawal_authority.is(signer) {
            debug!("Signer is not the withdrawal authority");
            return None;
        }
        lamports = lamports.checked_add(withdraw.lamports)?;
        push_distinct(&mut recipients, withdraw.recipient_account);
    }
    Some(StakeWithdraw {
        lamports,
        recipients,
    })
}
