use core::fmt;

use solana_pubkey::Pubkey;

/// Access rights of an address, assigned positionally from the message
/// header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessTag {
    SignerWritable,
    SignerReadOnly,
    Writable,
    ReadOnly,
}

impl AccessTag {
    /// Tag of the address at `index` in a static address list of `total`
    /// entries.
    ///
    /// Layout: `num_signers` writable signers, then `num_readonly_signers`
    /// read-only signers, then writable non-signers, and the last
    /// `num_readonly` addresses are read-only non-signers.
    pub fn from_position(
        index: usize,
        total: usize,
        num_signers: usize,
        num_readonly_signers: usize,
        num_readonly: usize,
    ) -> Self {
        if index < num_signers {
            AccessTag::SignerWritable
        } else if index < num_signers + num_readonly_signers {
            AccessTag::SignerReadOnly
        } else if index < total.saturating_sub(num_readonly) {
            AccessTag::Writable
        } else {
            AccessTag::ReadOnly
        }
    }

    pub fn is_signer(&self) -> bool {
        matches!(self, AccessTag::SignerWritable | AccessTag::SignerReadOnly)
    }

    pub fn is_writable(&self) -> bool {
        matches!(self, AccessTag::SignerWritable | AccessTag::Writable)
    }

    pub fn text(&self) -> &'static str {
        match self {
            AccessTag::SignerWritable => "(writable, signer)",
            AccessTag::SignerReadOnly => "(signer)",
            AccessTag::Writable => "(writable)",
            AccessTag::ReadOnly => "",
        }
    }
}

/// An address listed directly in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub pubkey: Pubkey,
    pub tag: AccessTag,
}

impl Address {
    pub fn new(pubkey: Pubkey, tag: AccessTag) -> Self {
        Self { pubkey, tag }
    }
}

/// An address loaded indirectly from an address lookup table.
///
/// The table contents are not part of the transaction, so only the table
/// address and the index within it are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressReference {
    pub table: Pubkey,
    pub index: u8,
    pub tag: AccessTag,
}

/// An account as referenced by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Account {
    Direct(Address),
    LookupTable(AddressReference),
}

impl Account {
    /// Public key of a directly listed account. Lookup table entries have no
    /// known key.
    pub fn pubkey(&self) -> Option<&Pubkey> {
        match self {
            Account::Direct(address) => Some(&address.pubkey),
            Account::LookupTable(_) => None,
        }
    }

    pub fn tag(&self) -> AccessTag {
        match self {
            Account::Direct(address) => address.tag,
            Account::LookupTable(reference) => reference.tag,
        }
    }

    pub fn is_signer(&self) -> bool {
        self.tag().is_signer()
    }

    /// True when this is a direct account with key `pubkey`.
    pub fn is(&self, pubkey: &Pubkey) -> bool {
        self.pubkey() == Some(pubkey)
    }
}

impl From<Address> for Account {
    fn from(address: Address) -> Self {
        Account::Direct(address)
    }
}

impl From<AddressReference> for Account {
    fn from(reference: AddressReference) -> Self {
        Account::LookupTable(reference)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Account::Direct(address) => write!(f, "{}", address.pubkey),
            Account::LookupTable(reference) => {
                write!(f, "{}[{}]", reference.table, reference.index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_position() {
        // 2 signers, 1 read-only signer, 2 read-only of 7 addresses
        let tags: Vec<AccessTag> = (0..7)
            .map(|i| AccessTag::from_position(i, 7, 2, 1, 2))
            .collect();
        assert_eq!(
            tags,
            vec![
                AccessTag::SignerWritable,
                AccessTag::SignerWritable,
                AccessTag::SignerReadOnly,
                AccessTag::Writable,
                AccessTag::Writable,
                AccessTag::ReadOnly,
                AccessTag::ReadOnly,
            ]
        );
    }

    #[test]
    fn test_lookup_table_accounts_have_no_pubkey() {
        let table = Pubkey::new_from_array([7; 32]);
        let account = Account::from(AddressReference {
            table,
            index: 3,
            tag: AccessTag::Writable,
        });
        assert!(account.pubkey().is_none());
        assert!(!account.is_signer());
        assert!(!account.is(&table));
        assert_eq!(account.to_string(), format!("{}[3]", table));
    }
}
