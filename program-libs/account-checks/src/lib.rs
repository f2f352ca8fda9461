//! # solsign-account-checks
//!
//! Account model of a parsed message and the checks applied to instruction
//! accounts.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`AccessTag`] | signer / writable rights derived from header position |
//! | [`Account`] | direct address or lookup table reference |
//! | [`AccountIterator`] | role-by-role consumption of instruction accounts |
//! | [`PackedAccounts`] | u8 index resolution into the combined account list |
//! | [`checks`] | signer and index checks |

pub mod account_iterator;
pub mod address;
pub mod checks;
pub mod error;
pub mod packed_accounts;

pub use account_iterator::AccountIterator;
pub use address::{AccessTag, Account, Address, AddressReference};
pub use error::AccountError;
pub use packed_accounts::PackedAccounts;
pub use solana_pubkey::Pubkey;
