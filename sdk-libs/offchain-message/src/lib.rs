//! # solsign-offchain-message
//!
//! Parser for off-chain messages, arbitrary text signed with a Solana key
//! under a signing domain that can never be mistaken for a transaction.
//!
//! Layout: `[16B domain][1B version = 0][1B format][u16 LE length][payload]`.
//! The payload must fill the rest of the buffer exactly.

pub mod errors;

use core::fmt;

use errors::OffchainMessageError;
use solsign_wire_reader::ByteReader;
use tracing::{debug, trace};

/// Signing domain prefix, `0xff` followed by `solana offchain`.
pub const SIGNING_DOMAIN: [u8; 16] = *b"\xffsolana offchain";

/// The only supported message version.
pub const MESSAGE_VERSION: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    /// Printable ASCII, 0x20..=0x7e.
    Ascii,
    Utf8,
}

impl MessageFormat {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(MessageFormat::Ascii),
            1 => Some(MessageFormat::Utf8),
            _ => None,
        }
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageFormat::Ascii => write!(f, "ASCII"),
            MessageFormat::Utf8 => write!(f, "UTF-8"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffchainMessage {
    pub version: u8,
    pub format: MessageFormat,
    pub message: String,
}

impl OffchainMessage {
    pub fn parse(bytes: &[u8]) -> Result<Self, OffchainMessageError> {
        let mut reader = ByteReader::new(bytes);

        if reader.read(SIGNING_DOMAIN.len())? != SIGNING_DOMAIN {
            debug!("Off-chain message without signing domain");
            return Err(OffchainMessageError::InvalidDomain);
        }
        let version = reader.get_byte()?;
        if version != MESSAGE_VERSION {
            return Err(OffchainMessageError::UnsupportedVersion(version));
        }
        let format_byte = reader.get_byte()?;
        let format = MessageFormat::from_u8(format_byte)
            .ok_or(OffchainMessageError::InvalidFormat(format_byte))?;
        let declared = reader.read_u16_le()? as usize;
        if reader.remaining() != declared {
            return Err(OffchainMessageError::LengthMismatch {
                declared,
                remaining: reader.remaining(),
            });
        }

        let payload = reader.read_rest();
        let message = decode_payload(payload, format)?;
        trace!(%format, len = declared, "Parsed off-chain message");
        Ok(Self {
            version,
            format,
            message: message.to_string(),
        })
    }
}

fn decode_payload(payload: &[u8], format: MessageFormat) -> Result<&str, OffchainMessageError> {
    let encoding = match format {
        MessageFormat::Ascii => {
            if !payload.iter().all(|b| (0x20..=0x7e).contains(b)) {
                return Err(OffchainMessageError::InvalidEncoding("printable ASCII"));
            }
            "printable ASCII"
        }
        MessageFormat::Utf8 => "UTF-8",
    };
    // Rejects overlong encodings, surrogates and code points above U+10FFFF.
    core::str::from_utf8(payload).map_err(|_| OffchainMessageError::InvalidEncoding(encoding))
}
