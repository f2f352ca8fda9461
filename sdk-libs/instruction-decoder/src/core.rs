//! Core types for decoded instructions.

use solana_pubkey::Pubkey;
use solsign_account_checks::Account;

use crate::{
    kind::{AuthorityType, InstructionKind, StakeAuthorize},
    programs::Program,
    schema::{AccountSchema, FieldSchema, InstructionSchema},
};

/// Display name of instructions of programs outside the registry.
pub const UNSUPPORTED_PROGRAM: &str = "Unsupported program";

/// A typed instruction data value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    U32(u32),
    U64(u64),
    I64(i64),
    Pubkey(Pubkey),
    String(String),
    StakeAuthorize(StakeAuthorize),
    AuthorityType(AuthorityType),
}

impl FieldValue {
    /// Unsigned integers widened to u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::U8(value) => Some(*value as u64),
            FieldValue::U32(value) => Some(*value as u64),
            FieldValue::U64(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::I64(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_pubkey(&self) -> Option<&Pubkey> {
        match self {
            FieldValue::Pubkey(pubkey) => Some(pubkey),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(value) => Some(value),
            _ => None,
        }
    }
}

/// A decoded field, `value` is `None` for an absent optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub schema: &'static FieldSchema,
    pub value: Option<FieldValue>,
}

/// An account bound to its role, `account` is `None` for an absent optional
/// role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRole {
    pub schema: &'static AccountSchema,
    pub account: Option<Account>,
}

/// An instruction interpreted against the registry.
///
/// Fields and accounts keep the schema order. Unsupported instructions have
/// neither, only the raw data and accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredInstruction {
    pub program_id: Pubkey,
    pub program: Option<Program>,
    pub instruction_id: Option<u32>,
    pub kind: InstructionKind,
    pub ui_name: &'static str,
    pub is_program_supported: bool,
    pub is_instruction_supported: bool,
    pub is_deprecated_warning: Option<&'static str>,
    pub fields: Vec<Field>,
    pub accounts: Vec<AccountRole>,
    pub multisig_signers: Vec<Account>,
    pub raw_data: Vec<u8>,
    pub raw_accounts: Vec<Account>,
}

impl StructuredInstruction {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn supported(
        program_id: Pubkey,
        program: Program,
        schema: &'static InstructionSchema,
        instruction_id: Option<u32>,
        fields: Vec<Field>,
        accounts: Vec<AccountRole>,
        multisig_signers: Vec<Account>,
        data: &[u8],
        raw_accounts: &[Account],
    ) -> Self {
        Self {
            program_id,
            program: Some(program),
            instruction_id,
            kind: schema.kind,
            ui_name: schema.ui_name,
            is_program_supported: true,
            is_instruction_supported: true,
            is_deprecated_warning: schema.deprecation,
            fields,
            accounts,
            multisig_signers,
            raw_data: data.to_vec(),
            raw_accounts: raw_accounts.to_vec(),
        }
    }

    pub(crate) fn unsupported(
        program_id: Pubkey,
        program: Option<Program>,
        instruction_id: Option<u32>,
        data: &[u8],
        raw_accounts: &[Account],
    ) -> Self {
        Self {
            program_id,
            program,
            instruction_id,
            kind: InstructionKind::Unsupported,
            ui_name: program.map_or(UNSUPPORTED_PROGRAM, |program| program.name()),
            is_program_supported: program.is_some(),
            is_instruction_supported: false,
            is_deprecated_warning: None,
            fields: Vec::new(),
            accounts: Vec::new(),
            multisig_signers: Vec::new(),
            raw_data: data.to_vec(),
            raw_accounts: raw_accounts.to_vec(),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.is_program_supported && self.is_instruction_supported
    }

    pub fn is_multisig(&self) -> bool {
        !self.multisig_signers.is_empty()
    }

    pub fn program_name(&self) -> &'static str {
        self.program
            .map_or(UNSUPPORTED_PROGRAM, |program| program.name())
    }

    /// Value of a present field.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.schema.name == name)
            .and_then(|field| field.value.as_ref())
    }

    /// Account bound to a present role.
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|role| role.schema.name == name)
            .and_then(|role| role.account.as_ref())
    }

    pub fn u64_field(&self, name: &str) -> Option<u64> {
        self.field(name).and_then(FieldValue::as_u64)
    }

    pub fn pubkey_field(&self, name: &str) -> Option<&Pubkey> {
        self.field(name).and_then(FieldValue::as_pubkey)
    }
}
