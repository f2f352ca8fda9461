use solana_pubkey::Pubkey;
use solsign_account_checks::{AccessTag, Address};
use solsign_wire_reader::ByteReader;
use tracing::trace;

use crate::errors::ParseError;

/// High bit of the first byte marks a versioned message.
pub const VERSION_PREFIX_MASK: u8 = 0x80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub is_legacy: bool,
    pub version: u8,
    pub num_required_signatures: u8,
    pub num_readonly_signed_accounts: u8,
    pub num_readonly_unsigned_accounts: u8,
}

impl MessageHeader {
    pub fn parse(reader: &mut ByteReader) -> Result<Self, ParseError> {
        let first = reader.peek_byte()?;
        let (is_legacy, version) = if first & VERSION_PREFIX_MASK != 0 {
            reader.get_byte()?;
            (false, first & !VERSION_PREFIX_MASK)
        } else {
            (true, 0)
        };
        let [
            num_required_signatures,
            num_readonly_signed_accounts,
            num_readonly_unsigned_accounts,
        ] = reader.read_array::<3>()?;

        let header = Self {
            is_legacy,
            version,
            num_required_signatures,
            num_readonly_signed_accounts,
            num_readonly_unsigned_accounts,
        };
        trace!(?header, "Parsed message header");
        Ok(header)
    }

    /// Writable and read-only signers.
    pub fn required_signers_count(&self) -> usize {
        self.num_required_signatures as usize + self.num_readonly_signed_accounts as usize
    }

    /// Reads the static address list and tags each address by position.
    pub fn parse_addresses(&self, reader: &mut ByteReader) -> Result<Vec<Address>, ParseError> {
        let count = reader.read_count(32)?;
        let signers = self.num_required_signatures as usize;
        let readonly_signers = self.num_readonly_signed_accounts as usize;
        let readonly = self.num_readonly_unsigned_accounts as usize;

        if signers == 0 {
            return Err(ParseError::MalformedTransaction("transaction has no signer".to_string()));
        }
        if count < signers + readonly_signers + readonly {
            return Err(ParseError::MalformedTransaction(format!(
                "{} addresses, header requires at least {}",
                count,
                signers + readonly_signers + readonly
            )));
        }

        (0..count)
            .map(|index| -> Result<Address, ParseError> {
                let pubkey = Pubkey::new_from_array(reader.read_array()?);
                let tag =
                    AccessTag::from_position(index, count, signers, readonly_signers, readonly);
                Ok(Address::new(pubkey, tag))
            })
            .collect()
    }
}
