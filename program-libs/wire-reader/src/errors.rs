use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WireReaderError {
    #[error("Requested {requested} bytes, but only {remaining} bytes remain")]
    TruncatedInput { requested: usize, remaining: usize },
    #[error("Seek position {position} is past the end of a {len} byte buffer")]
    SeekOutOfBounds { position: usize, len: usize },
    #[error("Compact integer is not minimally encoded or overflows")]
    InvalidCompactInteger,
    #[error("Length {length} exceeds the {remaining} remaining bytes")]
    LengthExceedsInput { length: usize, remaining: usize },
    #[error("String is not valid UTF-8")]
    InvalidEncoding,
}

impl From<WireReaderError> for u32 {
    fn from(e: WireReaderError) -> u32 {
        match e {
            WireReaderError::TruncatedInput { .. } => 16001,
            WireReaderError::SeekOutOfBounds { .. } => 16002,
            WireReaderError::InvalidCompactInteger => 16003,
            WireReaderError::LengthExceedsInput { .. } => 16004,
            WireReaderError::InvalidEncoding => 16005,
        }
    }
}
