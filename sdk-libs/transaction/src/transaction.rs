use solana_pubkey::Pubkey;
use solsign_account_checks::{Address, PackedAccounts};
use solsign_instruction_decoder::{decode_instruction, StructuredInstruction};
use solsign_wire_reader::ByteReader;
use tracing::{debug, warn};

use crate::{
    config::{NetworkConstants, TransactionConfig},
    errors::{ParseError, TransactionError},
    fee::Fee,
    header::MessageHeader,
    instructions::parse_instructions,
    lookup_tables::{combined_accounts, parse_lookup_tables, AddressTableLookup},
};

/// A parsed transaction message.
///
/// Built once from the complete wire buffer. Any parse failure rejects the
/// whole buffer, so a `Transaction` never holds partially decoded data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    header: MessageHeader,
    addresses: Vec<Address>,
    blockhash: [u8; 32],
    lookup_tables: Vec<AddressTableLookup>,
    instructions: Vec<StructuredInstruction>,
    blind_signing: bool,
    network: NetworkConstants,
}

impl Transaction {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        Self::parse_with_config(bytes, &TransactionConfig::default())
    }

    pub fn parse_with_config(
        bytes: &[u8],
        config: &TransactionConfig,
    ) -> Result<Self, TransactionError> {
        Self::parse(bytes, config).map_err(|e| {
            debug!(error = %e, len = bytes.len(), "Rejected transaction");
            TransactionError::InvalidTransaction(e)
        })
    }

    fn parse(bytes: &[u8], config: &TransactionConfig) -> Result<Self, ParseError> {
        if bytes.len() > config.max_transaction_size {
            return Err(ParseError::MalformedTransaction(format!(
                "{} bytes exceed the {} byte limit",
                bytes.len(),
                config.max_transaction_size
            )));
        }
        let mut reader = ByteReader::new(bytes);

        let header = MessageHeader::parse(&mut reader)?;
        let addresses = header.parse_addresses(&mut reader)?;
        let blockhash = reader.read_array()?;
        let raw_instructions = parse_instructions(&mut reader, addresses.len())?;
        let lookup_tables = if header.is_legacy {
            Vec::new()
        } else {
            parse_lookup_tables(&mut reader)?
        };
        if !reader.is_empty() {
            return Err(ParseError::MalformedTransaction(format!(
                "{} trailing bytes",
                reader.remaining()
            )));
        }

        let combined = combined_accounts(&addresses, &lookup_tables);
        let packed = PackedAccounts::new(&combined);
        let instructions = raw_instructions
            .iter()
            .map(|raw| -> Result<StructuredInstruction, ParseError> {
                let accounts = packed.resolve(raw.accounts)?;
                let program_id = &addresses[raw.program_index as usize].pubkey;
                Ok(decode_instruction(program_id, raw.data, &accounts)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let blind_signing = instructions.iter().any(|i| !i.is_supported());
        if blind_signing {
            warn!(
                unsupported = instructions.iter().filter(|i| !i.is_supported()).count(),
                "Transaction requires blind signing"
            );
        }
        debug!(
            version = header.version,
            legacy = header.is_legacy,
            addresses = addresses.len(),
            lookup_tables = lookup_tables.len(),
            instructions = instructions.len(),
            "Parsed transaction"
        );

        Ok(Self {
            header,
            addresses,
            blockhash,
            lookup_tables,
            instructions,
            blind_signing,
            network: config.network,
        })
    }

    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn lookup_tables(&self) -> &[AddressTableLookup] {
        &self.lookup_tables
    }

    pub fn blockhash(&self) -> &[u8; 32] {
        &self.blockhash
    }

    pub fn is_legacy(&self) -> bool {
        self.header.is_legacy
    }

    pub fn version(&self) -> u8 {
        self.header.version
    }

    pub fn blind_signing(&self) -> bool {
        self.blind_signing
    }

    pub fn required_signers_count(&self) -> usize {
        self.header.required_signers_count()
    }

    /// Addresses that sign the transaction.
    pub fn signers(&self) -> impl Iterator<Item = &Pubkey> {
        self.addresses
            .iter()
            .take(self.required_signers_count())
            .map(|address| &address.pubkey)
    }

    pub fn is_signer(&self, pubkey: &Pubkey) -> bool {
        self.signers().any(|signer| signer == pubkey)
    }

    /// Instructions shown to the user, currently all of them.
    pub fn get_visible_instructions(&self) -> &[StructuredInstruction] {
        &self.instructions
    }

    /// Signature fee plus priority fee in lamports.
    pub fn calculate_fee(&self) -> u64 {
        self.fee().network_fee()
    }

    pub fn fee(&self) -> Fee {
        Fee::calculate(
            &self.instructions,
            self.required_signers_count(),
            &self.network,
        )
    }

    pub fn network(&self) -> &NetworkConstants {
        &self.network
    }
}
