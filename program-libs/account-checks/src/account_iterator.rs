use std::panic::Location;

use tracing::debug;

use crate::{address::Account, AccountError};

/// Iterator over the accounts of one instruction, consumed role by role.
///
/// Every request names the role it fills so that a short account list reports
/// which role was missing.
pub struct AccountIterator<'a> {
    accounts: &'a [Account],
    position: usize,
}

impl<'a> AccountIterator<'a> {
    pub fn new(accounts: &'a [Account]) -> Self {
        Self {
            accounts,
            position: 0,
        }
    }

    /// Get the next account for a required role.
    ///
    /// # Returns
    /// * `Ok(&Account)` - The next account in the iterator
    /// * `Err(AccountError::NotEnoughAccountKeys)` - If no more accounts are available
    #[track_caller]
    pub fn next_account(&mut self, role: &'static str) -> Result<&'a Account, AccountError> {
        let location = Location::caller();

        if self.position >= self.accounts.len() {
            debug!(
                "Not enough accounts. Requested '{}' at index {} but only {} accounts available. {}:{}:{}",
                role,
                self.position,
                self.accounts.len(),
                location.file(),
                location.line(),
                location.column()
            );
            return Err(AccountError::NotEnoughAccountKeys(role));
        }

        let account = &self.accounts[self.position];
        self.position += 1;

        Ok(account)
    }

    /// Get the next account for an optional role, `None` once exhausted.
    pub fn next_optional(&mut self) -> Option<&'a Account> {
        let account = self.accounts.get(self.position)?;
        self.position += 1;
        Some(account)
    }

    /// Consume and return every account not yet handed out. May be empty.
    pub fn remaining(&mut self) -> &'a [Account] {
        let rest = &self.accounts[self.position..];
        self.position = self.accounts.len();
        rest
    }

    /// Fails if accounts are left over.
    pub fn finish(&self) -> Result<(), AccountError> {
        match self.accounts.len() - self.position {
            0 => Ok(()),
            extra => Err(AccountError::UnexpectedAccounts(extra)),
        }
    }
}

#[cfg(test)]
mod tests {
    use solana_pubkey::Pubkey;

    use super::*;
    use crate::address::{AccessTag, Address};

    fn account(byte: u8, tag: AccessTag) -> Account {
        Account::Direct(Address::new(Pubkey::new_from_array([byte; 32]), tag))
    }

    #[test]
    fn test_next_account_names_missing_role() {
        let accounts = [account(1, AccessTag::SignerWritable)];
        let mut iter = AccountIterator::new(&accounts);
        assert!(iter.next_account("funding_account").is_ok());
        assert_eq!(
            iter.next_account("recipient_account"),
            Err(AccountError::NotEnoughAccountKeys("recipient_account"))
        );
        assert_eq!(iter.finish(), Ok(()));
    }

    #[test]
    fn test_optional_and_remaining() {
        let accounts = [
            account(1, AccessTag::Writable),
            account(2, AccessTag::SignerReadOnly),
            account(3, AccessTag::SignerReadOnly),
        ];
        let mut iter = AccountIterator::new(&accounts);
        iter.next_account("source").unwrap();
        assert_eq!(iter.finish(), Err(AccountError::UnexpectedAccounts(2)));
        assert_eq!(iter.remaining().len(), 2);
        assert!(iter.remaining().is_empty());
        assert!(iter.next_optional().is_none());
        assert_eq!(iter.finish(), Ok(()));
    }
}
