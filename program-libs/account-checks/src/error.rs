use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AccountError {
    #[error("Not enough account keys, '{0}' is missing.")]
    NotEnoughAccountKeys(&'static str),
    #[error("Account index {index} is out of bounds for {len} accounts.")]
    InvalidAccountIndex { index: usize, len: usize },
    #[error("Account '{0}' must be a signer.")]
    InvalidSigner(&'static str),
    #[error("{0} accounts beyond the declared roles.")]
    UnexpectedAccounts(usize),
}

impl From<AccountError> for u32 {
    fn from(e: AccountError) -> u32 {
        match e {
            AccountError::NotEnoughAccountKeys(_) => 17001,
            AccountError::InvalidAccountIndex { .. } => 17002,
            AccountError::InvalidSigner(_) => 17003,
            AccountError::UnexpectedAccounts(_) => 17004,
        }
    }
}
