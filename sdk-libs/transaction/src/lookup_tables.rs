use solana_pubkey::Pubkey;
use solsign_account_checks::{AccessTag, Account, Address, AddressReference};
use solsign_wire_reader::ByteReader;
use tracing::trace;

use crate::errors::ParseError;

/// Address lookup table entries loaded by a versioned message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressTableLookup {
    pub account_key: Pubkey,
    pub writable_indexes: Vec<u8>,
    pub readonly_indexes: Vec<u8>,
}

impl AddressTableLookup {
    pub fn writable(&self) -> impl Iterator<Item = AddressReference> + '_ {
        self.references(&self.writable_indexes, AccessTag::Writable)
    }

    pub fn readonly(&self) -> impl Iterator<Item = AddressReference> + '_ {
        self.references(&self.readonly_indexes, AccessTag::ReadOnly)
    }

    fn references<'a>(
        &'a self,
        indexes: &'a [u8],
        tag: AccessTag,
    ) -> impl Iterator<Item = AddressReference> + 'a {
        indexes.iter().map(move |index| AddressReference {
            table: self.account_key,
            index: *index,
            tag,
        })
    }
}

pub fn parse_lookup_tables(reader: &mut ByteReader) -> Result<Vec<AddressTableLookup>, ParseError> {
    // Key plus two empty index lists.
    let count = reader.read_count(34)?;
    (0..count)
        .map(|_| -> Result<AddressTableLookup, ParseError> {
            let account_key = Pubkey::new_from_array(reader.read_array()?);
            let writable = reader.read_count(1)?;
            let writable_indexes = reader.read(writable)?.to_vec();
            let readonly = reader.read_count(1)?;
            let readonly_indexes = reader.read(readonly)?.to_vec();
            trace!(%account_key, writable, readonly, "Parsed address table lookup");
            Ok(AddressTableLookup {
                account_key,
                writable_indexes,
                readonly_indexes,
            })
        })
        .collect()
}

/// Static addresses, then every table's writable entries, then every
/// table's read-only entries.
pub fn combined_accounts(
    addresses: &[Address],
    lookup_tables: &[AddressTableLookup],
) -> Vec<Account> {
    let writable = lookup_tables.iter().flat_map(AddressTableLookup::writable);
    let readonly = lookup_tables.iter().flat_map(AddressTableLookup::readonly);
    addresses
        .iter()
        .copied()
        .map(Account::from)
        .chain(writable.map(Account::from))
        .chain(readonly.map(Account::from))
        .collect()
}
