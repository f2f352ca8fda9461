#![allow(dead_code)]

use borsh::BorshSerialize;
use solana_pubkey::Pubkey;
use solsign_instruction_decoder::programs::{
    ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID, COMPUTE_BUDGET_PROGRAM_ID, STAKE_PROGRAM_ID,
    SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
use solsign_transaction::layout::HARDENED;
use tracing_subscriber::EnvFilter;

pub const SIGNER_PATH: [u32; 4] = [44 | HARDENED, 501 | HARDENED, HARDENED, HARDENED];

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn key(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

/// Serializes messages byte by byte, in wire order.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    version: Option<u8>,
    header: [u8; 3],
    keys: Vec<Pubkey>,
    blockhash: [u8; 32],
    instructions: Vec<(u8, Vec<u8>, Vec<u8>)>,
    lookup_tables: Vec<(Pubkey, Vec<u8>, Vec<u8>)>,
}

impl MessageBuilder {
    pub fn legacy(header: [u8; 3], keys: &[Pubkey]) -> Self {
        Self {
            header,
            keys: keys.to_vec(),
            blockhash: [9; 32],
            ..Default::default()
        }
    }

    pub fn versioned(version: u8, header: [u8; 3], keys: &[Pubkey]) -> Self {
        Self {
            version: Some(version),
            ..Self::legacy(header, keys)
        }
    }

    pub fn instruction(mut self, program_index: u8, accounts: &[u8], data: Vec<u8>) -> Self {
        self.instructions
            .push((program_index, accounts.to_vec(), data));
        self
    }

    pub fn lookup_table(mut self, table: Pubkey, writable: &[u8], readonly: &[u8]) -> Self {
        self.lookup_tables
            .push((table, writable.to_vec(), readonly.to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        if let Some(version) = self.version {
            bytes.push(0x80 | version);
        }
        bytes.extend(self.header);
        push_compact_u16(&mut bytes, self.keys.len());
        for key in &self.keys {
            bytes.extend(key.to_bytes());
        }
        bytes.extend(self.blockhash);
        push_compact_u16(&mut bytes, self.instructions.len());
        for (program_index, accounts, data) in &self.instructions {
            bytes.push(*program_index);
            push_compact_u16(&mut bytes, accounts.len());
            bytes.extend(accounts);
            push_compact_u16(&mut bytes, data.len());
            bytes.extend(data);
        }
        if self.version.is_some() {
            push_compact_u16(&mut bytes, self.lookup_tables.len());
            for (table, writable, readonly) in &self.lookup_tables {
                bytes.extend(table.to_bytes());
                push_compact_u16(&mut bytes, writable.len());
                bytes.extend(writable);
                push_compact_u16(&mut bytes, readonly.len());
                bytes.extend(readonly);
            }
        }
        bytes
    }
}

pub fn push_compact_u16(bytes: &mut Vec<u8>, value: usize) {
    let mut value = value as u16;
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            bytes.push(byte);
            return;
        }
        byte |= 0x80;
        bytes.push(byte);
    }
}

#[derive(BorshSerialize)]
struct LamportsData {
    discriminant: u32,
    lamports: u64,
}

#[derive(BorshSerialize)]
struct StakeInitializeData {
    discriminant: u32,
    staker: [u8; 32],
    withdrawer: [u8; 32],
    unix_timestamp: i64,
    epoch: u64,
    custodian: [u8; 32],
}

#[derive(BorshSerialize)]
struct TokenAmountData {
    discriminant: u8,
    amount: u64,
    decimals: u8,
}

pub fn system_transfer(lamports: u64) -> Vec<u8> {
    LamportsData {
        discriminant: 2,
        lamports,
    }
    .try_to_vec()
    .unwrap()
}

pub fn system_create_account(lamports: u64, space: u64, owner: &Pubkey) -> Vec<u8> {
    let mut data = 0u32.to_le_bytes().to_vec();
    data.extend(lamports.to_le_bytes());
    data.extend(space.to_le_bytes());
    data.extend(owner.to_bytes());
    data
}

/// The seed is a u32 length, 4 padding bytes and the UTF-8 payload.
pub fn system_create_account_with_seed(
    base: &Pubkey,
    seed: &str,
    lamports: u64,
    space: u64,
    owner: &Pubkey,
) -> Vec<u8> {
    let mut data = 3u32.to_le_bytes().to_vec();
    data.extend(base.to_bytes());
    data.extend((seed.len() as u32).to_le_bytes());
    data.extend([0u8; 4]);
    data.extend(seed.as_bytes());
    data.extend(lamports.to_le_bytes());
    data.extend(space.to_le_bytes());
    data.extend(owner.to_bytes());
    data
}

pub fn stake_initialize(staker: &Pubkey, withdrawer: &Pubkey, custodian: &Pubkey) -> Vec<u8> {
    StakeInitializeData {
        discriminant: 0,
        staker: staker.to_bytes(),
        withdrawer: withdrawer.to_bytes(),
        unix_timestamp: 0,
        epoch: 0,
        custodian: custodian.to_bytes(),
    }
    .try_to_vec()
    .unwrap()
}

pub fn stake_delegate() -> Vec<u8> {
    2u32.to_le_bytes().to_vec()
}

pub fn stake_withdraw(lamports: u64) -> Vec<u8> {
    LamportsData {
        discriminant: 4,
        lamports,
    }
    .try_to_vec()
    .unwrap()
}

pub fn stake_deactivate() -> Vec<u8> {
    5u32.to_le_bytes().to_vec()
}

pub fn token_transfer_checked(amount: u64, decimals: u8) -> Vec<u8> {
    TokenAmountData {
        discriminant: 12,
        amount,
        decimals,
    }
    .try_to_vec()
    .unwrap()
}

pub fn set_compute_unit_limit(units: u32) -> Vec<u8> {
    let mut data = vec![2];
    data.extend(units.to_le_bytes());
    data
}

pub fn set_compute_unit_price(micro_lamports: u64) -> Vec<u8> {
    let mut data = vec![3];
    data.extend(micro_lamports.to_le_bytes());
    data
}

/// Program ids used across the fixtures.
pub const SYSTEM: Pubkey = SYSTEM_PROGRAM_ID;
pub const STAKE: Pubkey = STAKE_PROGRAM_ID;
pub const COMPUTE_BUDGET: Pubkey = COMPUTE_BUDGET_PROGRAM_ID;
pub const TOKEN: Pubkey = TOKEN_PROGRAM_ID;
pub const ASSOCIATED_TOKEN: Pubkey = ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID;
