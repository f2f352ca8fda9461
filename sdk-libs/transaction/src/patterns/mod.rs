//! Recognition of common instruction sequences.
//!
//! A recognized pattern replaces the per-instruction confirmation with a
//! single summary. Each matcher either accepts the whole instruction list or
//! returns `None`; rejections are logged at debug level and never surface as
//! errors.

mod stake;
mod token;
mod transfer;

use solana_pubkey::Pubkey;
use solsign_account_checks::Account;
use solsign_instruction_decoder::StructuredInstruction;
use tracing::debug;

pub use token::{create_program_address, is_associated_token_account, TokenAccountHint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    NativeTransfer(NativeTransfer),
    TokenTransfer(TokenTransfer),
    StakeDelegate(StakeDelegate),
    StakeDeactivate(StakeDeactivate),
    StakeWithdraw(StakeWithdraw),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeTransfer {
    pub recipient: Account,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransfer {
    pub token_program: Pubkey,
    pub token_mint: Account,
    /// Destination token account.
    pub token_account: Account,
    /// Wallet owning `token_account`, when it could be verified.
    pub base_owner: Option<Pubkey>,
    /// Sum over all transfers.
    pub amount: u64,
    /// Decimals of the first transfer.
    pub decimals: u8,
    pub creates_token_account: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeDelegate {
    pub stake_account: Account,
    pub vote_account: Account,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeDeactivate {
    pub stake_accounts: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeWithdraw {
    pub lamports: u64,
    pub recipients: Vec<Account>,
}

/// Matches `instructions` against the known patterns, signed by `signer`.
pub fn recognize(
    instructions: &[StructuredInstruction],
    signer: &Pubkey,
    hints: &[TokenAccountHint],
) -> Option<Pattern> {
    if instructions.is_empty() {
        return None;
    }
    if let Some(i) = instructions.iter().position(|i| !i.is_supported()) {
        debug!(instruction = i, "No pattern for unsupported instruction");
        return None;
    }
    if let Some(i) = instructions.iter().position(|i| i.is_multisig()) {
        debug!(instruction = i, "No pattern for multisig instruction");
        return None;
    }

    transfer::native_transfer(instructions, signer)
        .map(Pattern::NativeTransfer)
        .or_else(|| token::token_transfer(instructions, signer, hints).map(Pattern::TokenTransfer))
        .or_else(|| stake::stake_delegate(instructions, signer).map(Pattern::StakeDelegate))
        .or_else(|| stake::stake_deactivate(instructions, signer).map(Pattern::StakeDeactivate))
        .or_else(|| stake::stake_withdraw(instructions, signer).map(Pattern::StakeWithdraw))
}

/// Same account regardless of access rights. Lookup table entries only equal
/// entries at the same table index.
pub(crate) fn same_account(a: &Account, b: &Account) -> bool {
    match (a, b) {
        (Account::Direct(a), Account::Direct(b)) => a.pubkey == b.pubkey,
        (Account::LookupTable(a), Account::LookupTable(b)) => {
            a.table == b.table && a.index == b.index
        }
        _ => false,
    }
}

/// Appends `account` unless the same account is already listed.
pub(crate) fn push_distinct(accounts: &mut Vec<Account>, account: Account) {
    if !accounts.iter().any(|a| same_account(a, &account)) {
        accounts.push(account);
    }
}

#[cfg(test)]
mod tests {
    use solsign_account_checks::{AccessTag, Address, AddressReference};

    use super::*;

    #[test]
    fn test_same_account_ignores_tag() {
        let key = Pubkey::new_from_array([1; 32]);
        let a = Account::Direct(Address::new(key, AccessTag::Writable));
        let b = Account::Direct(Address::new(key, AccessTag::SignerWritable));
        assert!(same_account(&a, &b));

        let reference = Account::LookupTable(AddressReference {
            table: key,
            index: 0,
            tag: AccessTag::Writable,
        });
        assert!(!same_account(&a, &reference));
        assert!(same_account(&reference, &reference));
    }

    #[test]
    fn test_empty_list_has_no_pattern() {
        assert_eq!(recognize(&[], &Pubkey::default(), &[]), None);
    }
}
