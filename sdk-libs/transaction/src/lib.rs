//! # solsign-transaction
//!
//! Parses serialized Solana transaction messages (legacy and v0), decodes
//! every instruction against the registry and drives the confirmation and
//! signing flow of a hardware signer.
//!
//! | Export | Description |
//! |--------|-------------|
//! | [`Transaction`] | Parsed message, constructed in one step |
//! | [`Fee`] | Base, priority and rent breakdown |
//! | [`patterns`] | Recognition of transfers and staking sequences |
//! | [`layout`] | Confirmation pages |
//! | [`signing`] | `sign_transaction` and `sign_offchain_message` |
//! | [`TransactionConfig`] | Size bound and network constants |
//!
//! ## Wire layout
//!
//! ```text
//! [0x80 | version]?            versioned messages only
//! header                       3 bytes
//! addresses                    compact-u16 count, 32 bytes each
//! blockhash                    32 bytes
//! instructions                 compact-u16 count
//! address table lookups        compact-u16 count, versioned messages only
//! ```

pub mod config;
pub mod errors;
pub mod fee;
pub mod header;
pub mod instructions;
pub mod layout;
pub mod lookup_tables;
pub mod patterns;
pub mod signing;
pub mod transaction;

pub use config::{NetworkConstants, TransactionConfig, PACKET_DATA_SIZE};
pub use errors::{ParseError, SigningError, TransactionError};
pub use fee::Fee;
pub use patterns::{recognize, Pattern, TokenAccountHint};
pub use signing::{sign_offchain_message, sign_transaction, Confirm, SigningBackend};
pub use transaction::Transaction;
