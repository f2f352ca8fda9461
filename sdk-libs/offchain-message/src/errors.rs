use solsign_wire_reader::errors::WireReaderError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum OffchainMessageError {
    #[error("Invalid message: signing domain mismatch")]
    InvalidDomain,
    #[error("Invalid message: unsupported version {0}")]
    UnsupportedVersion(u8),
    #[error("Invalid message: unknown format {0}")]
    InvalidFormat(u8),
    #[error("Invalid message: declared length {declared} but {remaining} bytes follow")]
    LengthMismatch { declared: usize, remaining: usize },
    #[error("Message is not valid {0}")]
    InvalidEncoding(&'static str),
    #[error("Message is truncated: {0}")]
    Truncated(#[from] WireReaderError),
}

impl From<OffchainMessageError> for u32 {
    fn from(e: OffchainMessageError) -> u32 {
        match e {
            OffchainMessageError::InvalidDomain => 20001,
            OffchainMessageError::UnsupportedVersion(_) => 20002,
            OffchainMessageError::InvalidFormat(_) => 20003,
            OffchainMessageError::LengthMismatch { .. } => 20004,
            OffchainMessageError::InvalidEncoding(_) => 20005,
            OffchainMessageError::Truncated(e) => e.into(),
        }
    }
}
