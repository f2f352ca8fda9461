//! Stake Program instructions.
//!
//! 4-byte (u32 little-endian) discriminator. The lockup fields of
//! `SetLockup*` are optional and present when enough data remains.

use crate::{
    kind::{InstructionKind, StakeInstruction},
    schema::*,
};

const STAKE_AUTHORIZE: FieldSchema = field(
    "stake_authorize",
    "Stake authorize",
    FieldType::StakeAuthorize,
    Presentation::Text,
);
const UNIX_TIMESTAMP: FieldSchema = field(
    "unix_timestamp",
    "Unix timestamp",
    FieldType::I64,
    Presentation::Timestamp,
);
const CLOCK_SYSVAR: AccountSchema = account("clock_sysvar", "Clock sysvar");
const STAKE_HISTORY_SYSVAR: AccountSchema =
    account("stake_history_sysvar", "Stake history sysvar");
const RENT_SYSVAR: AccountSchema = account("rent_sysvar", "Rent sysvar");
const LOCKUP_AUTHORITY: AccountSchema = optional_signer("lockup_authority", "Lockup authority");
const STAKE_OR_WITHDRAW_AUTHORITY: AccountSchema =
    signer("stake_or_withdraw_authority", "Stake or withdraw authority");
const NEW_STAKE_OR_WITHDRAW_AUTHORITY: AccountSchema = signer(
    "new_stake_or_withdraw_authority",
    "New stake or withdraw authority",
);
const LOCKUP_OR_WITHDRAW_AUTHORITY: AccountSchema = signer(
    "lockup_or_withdraw_authority",
    "Lockup authority or withdraw authority",
);

pub const INSTRUCTIONS: &[InstructionSchema] = &[
    schema!(
        Some(0),
        InstructionKind::Stake(StakeInstruction::Initialize),
        "Initialize",
        [
            pubkey("staker", "Staker"),
            pubkey("withdrawer", "Withdrawer"),
            UNIX_TIMESTAMP,
            number("epoch", "Epoch", FieldType::U64),
            pubkey("custodian", "Custodian"),
        ],
        [
            account("uninitialized_stake_account", "Uninitialized stake account"),
            RENT_SYSVAR,
        ],
    ),
    schema!(
        Some(1),
        InstructionKind::Stake(StakeInstruction::Authorize),
        "Authorize",
        [pubkey("pubkey", "Pubkey"), STAKE_AUTHORIZE],
        [
            account("stake_account", "Stake account"),
            CLOCK_SYSVAR,
            STAKE_OR_WITHDRAW_AUTHORITY,
            LOCKUP_AUTHORITY,
        ],
    ),
    schema!(
        Some(2),
        InstructionKind::Stake(StakeInstruction::DelegateStake),
        "Delegate Stake",
        [],
        [
            account("initialized_stake_account", "Initialized stake account"),
            account("vote_account", "Vote account"),
            CLOCK_SYSVAR,
            STAKE_HISTORY_SYSVAR,
            account("config_account", "Config account"),
            signer("stake_authority", "Stake authority"),
        ],
    ),
    schema!(
        Some(3),
        InstructionKind::Stake(StakeInstruction::Split),
        "Split",
        [lamports("lamports", "Lamports")],
        [
            account("stake_account", "Stake account"),
            account("uninitialized_stake_account", "Uninitialized stake account"),
            signer("stake_authority", "Stake authority"),
        ],
    ),
    schema!(
        Some(4),
        InstructionKind::Stake(StakeInstruction::Withdraw),
        "Withdraw",
        [lamports("lamports", "Lamports")],
        [
            account("stake_account", "Stake account"),
            account("recipient_account", "Recipient account"),
            CLOCK_SYSVAR,
            STAKE_HISTORY_SYSVAR,
            signer("withdrawal_authority", "Withdraw authority"),
            LOCKUP_AUTHORITY,
        ],
    ),
    schema!(
        Some(5),
        InstructionKind::Stake(StakeInstruction::Deactivate),
        "Deactivate",
        [],
        [
            account("delegated_stake_account", "Delegated stake account"),
            CLOCK_SYSVAR,
            signer("stake_authority", "Stake authority"),
        ],
    ),
    schema!(
        Some(6),
        InstructionKind::Stake(StakeInstruction::SetLockup),
        "Set Lockup",
        [
            optional_field(
                "unix_timestamp",
                "Unix timestamp",
                FieldType::I64,
                Presentation::Timestamp,
            ),
            optional_field("epoch", "Epoch", FieldType::U64, Presentation::Number),
            optional_field(
                "custodian",
                "Custodian",
                FieldType::Pubkey,
                Presentation::Pubkey,
            ),
        ],
        [
            account("initialized_stake_account", "Initialized stake account"),
            LOCKUP_OR_WITHDRAW_AUTHORITY,
        ],
    ),
    schema!(
        Some(7),
        InstructionKind::Stake(StakeInstruction::Merge),
        "Merge",
        [],
        [
            account("destination_stake_account", "Destination stake account"),
            account("source_stake_account", "Source stake account"),
            CLOCK_SYSVAR,
            STAKE_HISTORY_SYSVAR,
            signer("stake_authority", "Stake authority"),
        ],
    ),
    schema!(
        Some(8),
        InstructionKind::Stake(StakeInstruction::AuthorizeWithSeed),
        "Authorize With Seed",
        [
            pubkey("new_authorized_pubkey", "New authorized pubkey"),
            STAKE_AUTHORIZE,
            seed("authority_seed", "Authority seed"),
            pubkey("authority_owner", "Authority owner"),
        ],
        [
            account("stake_account", "Stake account"),
            STAKE_OR_WITHDRAW_AUTHORITY,
            CLOCK_SYSVAR,
            LOCKUP_AUTHORITY,
        ],
    ),
    schema!(
        Some(9),
        InstructionKind::Stake(StakeInstruction::InitializeChecked),
        "Initialize Checked",
        [],
        [
            account("uninitialized_stake_account", "Uninitialized stake account"),
            RENT_SYSVAR,
            account("stake_authority", "Stake authority"),
            signer("withdrawal_authority", "Withdraw authority"),
        ],
    ),
    schema!(
        Some(10),
        InstructionKind::Stake(StakeInstruction::AuthorizeChecked),
        "Authorize Checked",
        [STAKE_AUTHORIZE],
        [
            account("stake_account", "Stake account"),
            CLOCK_SYSVAR,
            STAKE_OR_WITHDRAW_AUTHORITY,
            NEW_STAKE_OR_WITHDRAW_AUTHORITY,
            LOCKUP_AUTHORITY,
        ],
    ),
    schema!(
        Some(11),
        InstructionKind::Stake(StakeInstruction::AuthorizeCheckedWithSeed),
        "Authorize Checked With Seed",
        [
            STAKE_AUTHORIZE,
            seed("authority_seed", "Authority seed"),
            pubkey("authority_owner", "Authority owner"),
        ],
        [
            account("stake_account", "Stake account"),
            STAKE_OR_WITHDRAW_AUTHORITY,
            CLOCK_SYSVAR,
            NEW_STAKE_OR_WITHDRAW_AUTHORITY,
            LOCKUP_AUTHORITY,
        ],
    ),
    schema!(
        Some(12),
        InstructionKind::Stake(StakeInstruction::SetLockupChecked),
        "Set Lockup Checked",
        [
            optional_field(
                "unix_timestamp",
                "Unix timestamp",
                FieldType::I64,
                Presentation::Timestamp,
            ),
            optional_field("epoch", "Epoch", FieldType::U64, Presentation::Number),
        ],
        [
            account("stake_account", "Stake account"),
            LOCKUP_OR_WITHDRAW_AUTHORITY,
            optional_signer("new_lockup_authority", "New lockup authority"),
        ],
    ),
];
