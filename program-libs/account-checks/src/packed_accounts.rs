use std::panic::Location;

use tracing::debug;

use crate::{address::Account, checks::check_index, AccountError};

/// The combined account list of a message: static addresses followed by
/// lookup table writable entries, then lookup table read-only entries.
/// Instructions refer to accounts by u8 index into this list.
pub struct PackedAccounts<'a> {
    pub accounts: &'a [Account],
}

impl<'a> PackedAccounts<'a> {
    pub fn new(accounts: &'a [Account]) -> Self {
        Self { accounts }
    }

    /// Get account by u8 index with bounds checking
    #[track_caller]
    #[inline(always)]
    pub fn get_u8(&self, index: u8) -> Result<&'a Account, AccountError> {
        let index = index as usize;
        if let Err(e) = check_index(index, self.accounts.len()) {
            let location = Location::caller();
            debug!(
                "Account index {} out of bounds, {} accounts available. {}:{}:{}",
                index,
                self.accounts.len(),
                location.file(),
                location.line(),
                location.column()
            );
            return Err(e);
        }
        Ok(&self.accounts[index])
    }

    /// Resolves a list of instruction account indices.
    pub fn resolve(&self, indices: &[u8]) -> Result<Vec<Account>, AccountError> {
        indices
            .iter()
            .map(|index| self.get_u8(*index).copied())
            .collect()
    }
}
