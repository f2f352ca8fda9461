//! Memo and Memo-legacy programs. No discriminator, the whole data is the
//! memo text.

use crate::{kind::InstructionKind, schema::*};

pub const INSTRUCTIONS: &[InstructionSchema] = &[schema!(
    None,
    InstructionKind::Memo,
    "Memo",
    [field("memo", "Memo", FieldType::Memo, Presentation::Text)],
    [optional_signer("signer_accounts", "Signer accounts")]
)];
