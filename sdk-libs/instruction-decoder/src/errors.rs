use solsign_account_checks::AccountError;
use solsign_wire_reader::errors::WireReaderError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DecoderError {
    #[error("Instruction data of {actual} bytes is shorter than the {expected} byte discriminant")]
    InstructionTooShort { expected: usize, actual: usize },
    #[error("Not enough instruction data for field '{0}'")]
    MissingField(&'static str),
    #[error("{0} bytes of instruction data left after the last field")]
    TrailingData(usize),
    #[error("Invalid presence flag {value} for optional field '{field}'")]
    InvalidOptionFlag { field: &'static str, value: u8 },
    #[error("Field '{0}' is not valid UTF-8")]
    InvalidEncoding(&'static str),
    #[error("Invalid value {value} for enum field '{field}'")]
    InvalidEnumValue { field: &'static str, value: u8 },
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
    #[error("Reader error: {0}")]
    Reader(#[from] WireReaderError),
}

impl From<DecoderError> for u32 {
    fn from(e: DecoderError) -> u32 {
        match e {
            DecoderError::InstructionTooShort { .. } => 18001,
            DecoderError::MissingField(_) => 18002,
            DecoderError::TrailingData(_) => 18003,
            DecoderError::InvalidOptionFlag { .. } => 18004,
            DecoderError::InvalidEncoding(_) => 18005,
            DecoderError::InvalidEnumValue { .. } => 18006,
            DecoderError::Account(e) => e.into(),
            DecoderError::Reader(e) => e.into(),
        }
    }
}
