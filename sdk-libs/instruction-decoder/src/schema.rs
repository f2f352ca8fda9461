//! Instruction schemas as compile-time constant data.
//!
//! A schema never embeds code. Each field names a [`FieldType`], which selects
//! the decoder, and a [`Presentation`], which selects the formatter.

use crate::kind::InstructionKind;

/// Wire encoding of an instruction data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U8,
    U32,
    U64,
    I64,
    Pubkey,
    /// u32 length, 4 padding bytes, UTF-8 payload.
    String,
    /// Every remaining byte, as UTF-8.
    Memo,
    /// Single byte, see [`crate::kind::StakeAuthorize`].
    StakeAuthorize,
    /// Single byte, see [`crate::kind::AuthorityType`].
    AuthorityType,
}

impl FieldType {
    /// Encoded size of fixed-width types.
    pub const fn fixed_size(&self) -> Option<usize> {
        match self {
            FieldType::U8 | FieldType::StakeAuthorize | FieldType::AuthorityType => Some(1),
            FieldType::U32 => Some(4),
            FieldType::U64 | FieldType::I64 => Some(8),
            FieldType::Pubkey => Some(32),
            FieldType::String | FieldType::Memo => None,
        }
    }
}

/// How a decoded value is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Plain decimal integer.
    Number,
    /// Lamports shown as SOL with 9 decimals.
    Lamports,
    /// Token amount scaled by the instruction's `decimals` field.
    TokenAmount,
    /// Base58 address.
    Pubkey,
    /// Unix timestamp shown as a UTC date.
    Timestamp,
    /// Text or enum name as is.
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub ui_name: &'static str,
    pub ty: FieldType,
    pub presentation: Presentation,
    pub optional: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSchema {
    pub name: &'static str,
    pub ui_name: &'static str,
    pub signer: bool,
    pub optional: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionSchema {
    /// Discriminant selecting this instruction, `None` when the data carries
    /// none.
    pub id: Option<u32>,
    pub kind: InstructionKind,
    pub ui_name: &'static str,
    pub fields: &'static [FieldSchema],
    pub accounts: &'static [AccountSchema],
    /// Accounts beyond the declared roles are multisig signers.
    pub multisig: bool,
    pub deprecation: Option<&'static str>,
}

impl InstructionSchema {
    pub const EMPTY: InstructionSchema = InstructionSchema {
        id: None,
        kind: InstructionKind::Unsupported,
        ui_name: "",
        fields: &[],
        accounts: &[],
        multisig: false,
        deprecation: None,
    };

    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn account(&self, name: &str) -> Option<&'static AccountSchema> {
        self.accounts.iter().find(|account| account.name == name)
    }
}

pub const fn field(
    name: &'static str,
    ui_name: &'static str,
    ty: FieldType,
    presentation: Presentation,
) -> FieldSchema {
    FieldSchema {
        name,
        ui_name,
        ty,
        presentation,
        optional: false,
    }
}

pub const fn optional_field(
    name: &'static str,
    ui_name: &'static str,
    ty: FieldType,
    presentation: Presentation,
) -> FieldSchema {
    FieldSchema {
        optional: true,
        ..field(name, ui_name, ty, presentation)
    }
}

pub const fn lamports(name: &'static str, ui_name: &'static str) -> FieldSchema {
    field(name, ui_name, FieldType::U64, Presentation::Lamports)
}

pub const fn pubkey(name: &'static str, ui_name: &'static str) -> FieldSchema {
    field(name, ui_name, FieldType::Pubkey, Presentation::Pubkey)
}

pub const fn seed(name: &'static str, ui_name: &'static str) -> FieldSchema {
    field(name, ui_name, FieldType::String, Presentation::Text)
}

pub const fn number(name: &'static str, ui_name: &'static str, ty: FieldType) -> FieldSchema {
    field(name, ui_name, ty, Presentation::Number)
}

pub const fn account(name: &'static str, ui_name: &'static str) -> AccountSchema {
    AccountSchema {
        name,
        ui_name,
        signer: false,
        optional: false,
    }
}

pub const fn signer(name: &'static str, ui_name: &'static str) -> AccountSchema {
    AccountSchema {
        signer: true,
        ..account(name, ui_name)
    }
}

pub const fn optional_signer(name: &'static str, ui_name: &'static str) -> AccountSchema {
    AccountSchema {
        signer: true,
        optional: true,
        ..account(name, ui_name)
    }
}

/// Builds an [`InstructionSchema`] literal.
///
/// `schema!(id, kind, ui_name, [fields..], [accounts..], key = value..)`
/// where the trailing keys override `multisig` and `deprecation`.
macro_rules! schema {
    (
        $id:expr, $kind:expr, $ui_name:expr,
        [$($field:expr),* $(,)?],
        [$($account:expr),* $(,)?]
        $(, $key:ident = $value:expr)* $(,)?
    ) => {
        $crate::schema::InstructionSchema {
            id: $id,
            kind: $kind,
            ui_name: $ui_name,
            fields: &[$($field),*],
            accounts: &[$($account),*],
            $($key: $value,)*
            ..$crate::schema::InstructionSchema::EMPTY
        }
    };
}
