//! System Program instructions.
//!
//! 4-byte (u32 little-endian) discriminator. Optional fields are present
//! when enough data remains.

use crate::{
    kind::{InstructionKind, SystemInstruction},
    schema::*,
};

pub const INSTRUCTIONS: &[InstructionSchema] = &[
    schema!(
        Some(0),
        InstructionKind::System(SystemInstruction::CreateAccount),
        "Create Account",
        [
            lamports("lamports", "Lamports"),
            number("space", "Space", FieldType::U64),
            pubkey("owner", "Owner"),
        ],
        [
            signer("funding_account", "Funding account"),
            account("new_account", "New account"),
        ],
    ),
    schema!(
        Some(1),
        InstructionKind::System(SystemInstruction::Assign),
        "Assign",
        [pubkey("owner", "Owner")],
        [signer("assigned_account", "Assigned account")],
    ),
    schema!(
        Some(2),
        InstructionKind::System(SystemInstruction::Transfer),
        "Transfer",
        [lamports("lamports", "Lamports")],
        [
            signer("funding_account", "Funding account"),
            account("recipient_account", "Recipient account"),
        ],
    ),
    schema!(
        Some(3),
        InstructionKind::System(SystemInstruction::CreateAccountWithSeed),
        "Create Account With Seed",
        [
            pubkey("base", "Base"),
            seed("seed", "Seed"),
            lamports("lamports", "Lamports"),
            number("space", "Space", FieldType::U64),
            pubkey("owner", "Owner"),
        ],
        [
            signer("funding_account", "Funding account"),
            account("created_account", "Created account"),
            optional_signer("base_account", "Base account"),
        ],
    ),
    schema!(
        Some(4),
        InstructionKind::System(SystemInstruction::AdvanceNonceAccount),
        "Advance Nonce Account",
        [],
        [
            account("nonce_account", "Nonce account"),
            account("recent_blockhashes_sysvar", "Recent blockhashes sysvar"),
            signer("nonce_authority", "Nonce authority"),
        ],
    ),
    schema!(
        Some(5),
        InstructionKind::System(SystemInstruction::WithdrawNonceAccount),
        "Withdraw Nonce Account",
        [lamports("lamports", "Lamports")],
        [
            account("nonce_account", "Nonce account"),
            account("recipient_account", "Recipient account"),
            account("recent_blockhashes_sysvar", "Recent blockhashes sysvar"),
            account("rent_sysvar", "Rent sysvar"),
            signer("nonce_authority", "Nonce authority"),
        ],
    ),
    schema!(
        Some(6),
        InstructionKind::System(SystemInstruction::InitializeNonceAccount),
        "Initialize Nonce Account",
        [pubkey("nonce_authority", "Nonce authority")],
        [
            account("nonce_account", "Nonce account"),
            account("recent_blockhashes_sysvar", "Recent blockhashes sysvar"),
            account("rent_sysvar", "Rent sysvar"),
        ],
    ),
    schema!(
        Some(7),
        InstructionKind::System(SystemInstruction::AuthorizeNonceAccount),
        "Authorize Nonce Account",
        [pubkey("new_authority", "New authority")],
        [
            account("nonce_account", "Nonce account"),
            signer("nonce_authority", "Nonce authority"),
        ],
    ),
    schema!(
        Some(8),
        InstructionKind::System(SystemInstruction::Allocate),
        "Allocate",
        [number("space", "Space", FieldType::U64)],
        [signer("new_account", "New account")],
    ),
    schema!(
        Some(9),
        InstructionKind::System(SystemInstruction::AllocateWithSeed),
        "Allocate With Seed",
        [
            pubkey("base", "Base"),
            seed("seed", "Seed"),
            number("space", "Space", FieldType::U64),
            pubkey("owner", "Owner"),
        ],
        [
            account("allocated_account", "Allocated account"),
            signer("base_account", "Base account"),
        ],
    ),
    schema!(
        Some(10),
        InstructionKind::System(SystemInstruction::AssignWithSeed),
        "Assign With Seed",
        [
            pubkey("base", "Base"),
            seed("seed", "Seed"),
            pubkey("owner", "Owner"),
        ],
        [
            account("assigned_account", "Assigned account"),
            signer("base_account", "Base account"),
        ],
    ),
    schema!(
        Some(11),
        InstructionKind::System(SystemInstruction::TransferWithSeed),
        "Transfer With Seed",
        [
            lamports("lamports", "Lamports"),
            seed("from_seed", "From seed"),
            pubkey("from_owner", "From owner"),
        ],
        [
            account("funding_account", "Funding account"),
            signer("base_account", "Base account"),
            account("recipient_account", "Recipient account"),
        ],
    ),
    schema!(
        Some(12),
        InstructionKind::System(SystemInstruction::UpgradeNonceAccount),
        "Upgrade Nonce Account",
        [],
        [account("nonce_account", "Nonce account")],
    ),
];
