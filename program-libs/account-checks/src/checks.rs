use tracing::debug;

use crate::{address::Account, AccountError};

/// Checks that `account` carries a signer access tag.
/// Lookup table accounts never sign.
pub fn check_signer(account: &Account, role: &'static str) -> Result<(), AccountError> {
    if !account.is_signer() {
        debug!("Account '{}' ({}) is not a signer", role, account);
        return Err(AccountError::InvalidSigner(role));
    }
    Ok(())
}

/// Checks that every account of a multisig tail signs.
pub fn check_signers(accounts: &[Account], role: &'static str) -> Result<(), AccountError> {
    accounts
        .iter()
        .try_for_each(|account| check_signer(account, role))
}

#[inline]
pub fn check_index(index: usize, len: usize) -> Result<(), AccountError> {
    if index >= len {
        return Err(AccountError::InvalidAccountIndex { index, len });
    }
    Ok(())
}
