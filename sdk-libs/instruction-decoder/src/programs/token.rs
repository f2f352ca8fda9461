//! SPL Token instructions, shared by the Token and Token-2022 programs.
//!
//! 1-byte discriminator. Optional fields carry a presence flag byte.
//! Instructions that accept a multisig authority take the signers as
//! trailing accounts.

use crate::{
    kind::{InstructionKind, TokenInstruction},
    schema::*,
};

const DEPRECATED_UNCHECKED: &str =
    "This instruction does not verify the token mint or decimals, prefer the checked variant.";

const AMOUNT: FieldSchema = number("amount", "Amount", FieldType::U64);
const CHECKED_AMOUNT: FieldSchema = field(
    "amount",
    "Amount",
    FieldType::U64,
    Presentation::TokenAmount,
);
const DECIMALS: FieldSchema = number("decimals", "Decimals", FieldType::U8);
const OWNER: AccountSchema = signer("owner", "Owner");
const TOKEN_MINT: AccountSchema = account("token_mint", "The token mint");
const RENT_SYSVAR: AccountSchema = account("rent_sysvar", "Rent sysvar");
const ACCOUNT_TO_INITIALIZE: AccountSchema =
    account("account_to_initialize", "Account to initialize");
const MINT_ACCOUNT: AccountSchema = account("mint_account", "Mint account");

pub const INSTRUCTIONS: &[InstructionSchema] = &[
    schema!(
        Some(1),
        InstructionKind::Token(TokenInstruction::InitializeAccount),
        "Initialize Account",
        [],
        [
            ACCOUNT_TO_INITIALIZE,
            MINT_ACCOUNT,
            account("owner", "Owner"),
            RENT_SYSVAR,
        ]
    ),
    schema!(
        Some(2),
        InstructionKind::Token(TokenInstruction::InitializeMultisig),
        "Initialize Multisig",
        [number("number_of_signers", "Number of signers", FieldType::U8)],
        [
            account("multisig_account", "Multisig account"),
            RENT_SYSVAR,
            account("signer_accounts", "Signer accounts"),
        ]
    ),
    schema!(
        Some(3),
        InstructionKind::Token(TokenInstruction::Transfer),
        "Transfer",
        [AMOUNT],
        [
            account("source_account", "Source account"),
            account("destination_account", "Destination account"),
            OWNER,
        ],
        multisig = true,
        deprecation = Some(DEPRECATED_UNCHECKED)
    ),
    schema!(
        Some(4),
        InstructionKind::Token(TokenInstruction::Approve),
        "Approve",
        [AMOUNT],
        [
            account("source_account", "Source account"),
            account("delegate_account", "Delegate account"),
            OWNER,
        ],
        multisig = true,
        deprecation = Some(DEPRECATED_UNCHECKED)
    ),
    schema!(
        Some(5),
        InstructionKind::Token(TokenInstruction::Revoke),
        "Revoke",
        [],
        [account("source_account", "Source account"), OWNER],
        multisig = true
    ),
    schema!(
        Some(6),
        InstructionKind::Token(TokenInstruction::SetAuthority),
        "Set Authority",
        [
            field(
                "authority_type",
                "Authority type",
                FieldType::AuthorityType,
                Presentation::Text,
            ),
            optional_field(
                "new_authority",
                "New authority",
                FieldType::Pubkey,
                Presentation::Pubkey,
            ),
        ],
        [
            account("mint_account", "Mint or account to change"),
            signer("current_authority", "Current authority"),
        ],
        multisig = true
    ),
    schema!(
        Some(7),
        InstructionKind::Token(TokenInstruction::MintTo),
        "Mint To",
        [AMOUNT],
        [
            account("mint", "The mint"),
            account("account_to_mint", "Account to mint tokens to"),
            signer("minting_authority", "Minting authority"),
        ],
        multisig = true,
        deprecation = Some(DEPRECATED_UNCHECKED)
    ),
    schema!(
        Some(8),
        InstructionKind::Token(TokenInstruction::Burn),
        "Burn",
        [AMOUNT],
        [
            account("account_to_burn_from", "Account to burn from"),
            TOKEN_MINT,
            OWNER,
        ],
        multisig = true,
        deprecation = Some(DEPRECATED_UNCHECKED)
    ),
    schema!(
        Some(9),
        InstructionKind::Token(TokenInstruction::CloseAccount),
        "Close Account",
        [],
        [
            account("account_to_close", "Account to close"),
            account("destination_account", "Destination account"),
            OWNER,
        ],
        multisig = true
    ),
    schema!(
        Some(10),
        InstructionKind::Token(TokenInstruction::FreezeAccount),
        "Freeze Account",
        [],
        [
            account("account_to_freeze", "Account to freeze"),
            TOKEN_MINT,
            signer("freeze_authority", "Freeze authority"),
        ],
        multisig = true
    ),
    schema!(
        Some(11),
        InstructionKind::Token(TokenInstruction::ThawAccount),
        "Thaw Account",
        [],
        [
            account("account_to_freeze", "Account to thaw"),
            TOKEN_MINT,
            signer("freeze_authority", "Freeze authority"),
        ],
        multisig = true
    ),
    schema!(
        Some(12),
        InstructionKind::Token(TokenInstruction::TransferChecked),
        "Transfer Checked",
        [CHECKED_AMOUNT, DECIMALS],
        [
            account("source_account", "Source account"),
            TOKEN_MINT,
            account("destination_account", "Destination account"),
            OWNER,
        ],
        multisig = true
    ),
    schema!(
        Some(13),
        InstructionKind::Token(TokenInstruction::ApproveChecked),
        "Approve Checked",
        [CHECKED_AMOUNT, DECIMALS],
        [
            account("source_account", "Source account"),
            TOKEN_MINT,
            account("delegate", "The delegate"),
            OWNER,
        ],
        multisig = true
    ),
    schema!(
        Some(14),
        InstructionKind::Token(TokenInstruction::MintToChecked),
        "Mint To Checked",
        [CHECKED_AMOUNT, DECIMALS],
        [
            account("mint", "The mint"),
            account("account_to_mint", "Account to mint tokens to"),
            signer("minting_authority", "Minting authority"),
        ],
        multisig = true
    ),
    schema!(
        Some(15),
        InstructionKind::Token(TokenInstruction::BurnChecked),
        "Burn Checked",
        [CHECKED_AMOUNT, DECIMALS],
        [
            account("account_to_burn_from", "Account to burn from"),
            TOKEN_MINT,
            OWNER,
        ],
        multisig = true
    ),
    schema!(
        Some(16),
        InstructionKind::Token(TokenInstruction::InitializeAccount2),
        "Initialize Account 2",
        [pubkey("owner", "Owner")],
        [ACCOUNT_TO_INITIALIZE, MINT_ACCOUNT, RENT_SYSVAR]
    ),
    schema!(
        Some(17),
        InstructionKind::Token(TokenInstruction::SyncNative),
        "Sync Native",
        [],
        [account("token_account", "Native token account")]
    ),
    schema!(
        Some(18),
        InstructionKind::Token(TokenInstruction::InitializeAccount3),
        "Initialize Account 3",
        [pubkey("owner", "Owner")],
        [ACCOUNT_TO_INITIALIZE, MINT_ACCOUNT]
    ),
    schema!(
        Some(22),
        InstructionKind::Token(TokenInstruction::InitializeImmutableOwner),
        "Initialize Immutable Owner",
        [],
        [ACCOUNT_TO_INITIALIZE]
    ),
];
