//! Associated Token Account Program instructions.
//!
//! 1-byte discriminator, except that empty data is the original `Create`
//! instruction without any discriminator.

use crate::{
    kind::{AssociatedTokenAccountInstruction, InstructionKind},
    schema::*,
};

const CREATE: InstructionSchema = schema!(
    None,
    InstructionKind::AssociatedTokenAccount(AssociatedTokenAccountInstruction::Create),
    "Create",
    [],
    [
        signer("funding_account", "Funding account"),
        account("associated_token_account", "Associated token account"),
        account("wallet_address", "Wallet address"),
        account("token_mint", "The token mint"),
        account("system_program", "System program"),
        account("spl_token", "SPL token program"),
    ]
);

pub const INSTRUCTIONS: &[InstructionSchema] = &[
    CREATE,
    InstructionSchema {
        id: Some(0),
        ..CREATE
    },
    InstructionSchema {
        id: Some(1),
        kind: InstructionKind::AssociatedTokenAccount(
            AssociatedTokenAccountInstruction::CreateIdempotent,
        ),
        ui_name: "Create Idempotent",
        ..CREATE
    },
    schema!(
        Some(2),
        InstructionKind::AssociatedTokenAccount(AssociatedTokenAccountInstruction::RecoverNested),
        "Recover Nested",
        [],
        [
            signer("nested_account", "Nested associated token account"),
            account("token_mint_nested", "Token mint for the nested account"),
            account("associated_token_account", "Associated token account"),
            account("owner", "Owner"),
            account("token_mint_owner", "Token mint for the owner account"),
            signer("wallet_address", "Wallet address"),
            account("spl_token", "SPL token program"),
        ]
    ),
];
