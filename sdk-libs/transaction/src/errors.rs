use solsign_account_checks::AccountError;
use solsign_instruction_decoder::DecoderError;
use solsign_offchain_message::errors::OffchainMessageError;
use solsign_wire_reader::errors::WireReaderError;
use thiserror::Error;

/// Why a transaction buffer could not be parsed.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("Requested {requested} bytes, but only {remaining} bytes remain")]
    TruncatedInput { requested: usize, remaining: usize },
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(String),
    #[error("Index {index} is out of bounds for {len} entries")]
    InvalidReference { index: usize, len: usize },
    #[error("Invalid encoding of {0}")]
    InvalidEncoding(&'static str),
    #[error("Invalid value {value} for '{field}'")]
    InvalidEnumValue { field: &'static str, value: u8 },
    #[error("Account '{0}' must be a signer")]
    AuthorizationError(&'static str),
    #[error("{0} unexpected accounts")]
    UnexpectedAccounts(usize),
}

impl From<WireReaderError> for ParseError {
    fn from(e: WireReaderError) -> Self {
        match e {
            WireReaderError::TruncatedInput {
                requested,
                remaining,
            } => ParseError::TruncatedInput {
                requested,
                remaining,
            },
            WireReaderError::LengthExceedsInput { length, remaining } => {
                ParseError::TruncatedInput {
                    requested: length,
                    remaining,
                }
            }
            WireReaderError::SeekOutOfBounds { .. } | WireReaderError::InvalidCompactInteger => {
                ParseError::MalformedTransaction(e.to_string())
            }
            WireReaderError::InvalidEncoding => ParseError::InvalidEncoding("string"),
        }
    }
}

impl From<AccountError> for ParseError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::NotEnoughAccountKeys(_) => {
                ParseError::MalformedTransaction(e.to_string())
            }
            AccountError::InvalidAccountIndex { index, len } => {
                ParseError::InvalidReference { index, len }
            }
            AccountError::InvalidSigner(role) => ParseError::AuthorizationError(role),
            AccountError::UnexpectedAccounts(extra) => ParseError::UnexpectedAccounts(extra),
        }
    }
}

impl From<DecoderError> for ParseError {
    fn from(e: DecoderError) -> Self {
        match e {
            DecoderError::InstructionTooShort { .. }
            | DecoderError::MissingField(_)
            | DecoderError::TrailingData(_)
            | DecoderError::InvalidOptionFlag { .. } => {
                ParseError::MalformedTransaction(e.to_string())
            }
            DecoderError::InvalidEncoding(field) => ParseError::InvalidEncoding(field),
            DecoderError::InvalidEnumValue { field, value } => {
                ParseError::InvalidEnumValue { field, value }
            }
            DecoderError::Account(e) => e.into(),
            DecoderError::Reader(e) => e.into(),
        }
    }
}

impl From<ParseError> for u32 {
    fn from(e: ParseError) -> u32 {
        match e {
            ParseError::TruncatedInput { .. } => 19001,
            ParseError::MalformedTransaction(_) => 19002,
            ParseError::InvalidReference { .. } => 19003,
            ParseError::InvalidEncoding(_) => 19004,
            ParseError::InvalidEnumValue { .. } => 19005,
            ParseError::AuthorizationError(_) => 19006,
            ParseError::UnexpectedAccounts(_) => 19007,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TransactionError {
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(#[from] ParseError),
}

impl From<TransactionError> for u32 {
    fn from(e: TransactionError) -> u32 {
        match e {
            TransactionError::InvalidTransaction(e) => e.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SigningError {
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error("Invalid message: {0}")]
    Message(#[from] OffchainMessageError),
    #[error("Signing key is not a signer of this transaction")]
    SignerNotInTransaction,
    #[error("Key derivation failed")]
    DerivationFailed,
    #[error("Signing failed")]
    SigningFailed,
    #[error("Cancelled by the user")]
    Cancelled,
}

impl From<SigningError> for u32 {
    fn from(e: SigningError) -> u32 {
        match e {
            SigningError::Transaction(e) => e.into(),
            SigningError::Message(e) => e.into(),
            SigningError::SignerNotInTransaction => 19101,
            SigningError::DerivationFailed => 19102,
            SigningError::SigningFailed => 19103,
            SigningError::Cancelled => 19104,
        }
    }
}
