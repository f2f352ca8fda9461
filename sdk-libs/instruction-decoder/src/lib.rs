//! # solsign-instruction-decoder
//!
//! Static instruction registry and schema interpreter for the programs a
//! signing device explains to its user.
//!
//! | Export | Description |
//! |--------|-------------|
//! | [`decode_instruction`] | Interpret one instruction against the registry |
//! | [`StructuredInstruction`] | Typed fields and role-bound accounts |
//! | [`InstructionKind`] | Closed classification of registry entries |
//! | [`Program`] | Known programs, ids and discriminator sizes |
//! | [`formatter`] | Amount, address and date formatting |
//!
//! Programs or instructions missing from the registry are not errors. They
//! decode to an unsupported instruction that keeps only raw data and accounts.

#[macro_use]
pub mod schema;

pub mod core;
pub mod errors;
pub mod formatter;
pub mod kind;
pub mod programs;
pub mod registry;
pub mod views;

pub use core::{AccountRole, Field, FieldValue, StructuredInstruction, UNSUPPORTED_PROGRAM};

pub use errors::DecoderError;
pub use kind::InstructionKind;
pub use programs::Program;
pub use registry::{decode_instruction, lookup};
pub use solana_pubkey;
