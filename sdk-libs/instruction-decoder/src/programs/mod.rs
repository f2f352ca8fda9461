//! Programs known to the registry.
//!
//! Discriminator sizes:
//! - 4-byte: System, Stake
//! - 1-byte: Compute Budget, Token, Token-2022, Associated Token Account
//!   (which also accepts empty data)
//! - none: Memo, Memo-legacy

pub mod associated_token_account;
pub mod compute_budget;
pub mod memo;
pub mod stake;
pub mod system;
pub mod token;

use solana_pubkey::Pubkey;
use solsign_wire_reader::ByteReader;

use crate::{errors::DecoderError, schema::InstructionSchema};

pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0; 32]);
pub const STAKE_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    6, 161, 216, 23, 145, 55, 84, 42, 152, 52, 55, 189, 254, 42, 122, 178, 85, 127, 83, 92, 138,
    120, 114, 43, 104, 164, 157, 192, 0, 0, 0, 0,
]);
pub const COMPUTE_BUDGET_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    3, 6, 70, 111, 229, 33, 23, 50, 255, 236, 173, 186, 114, 195, 155, 231, 188, 140, 229, 187, 197,
    247, 18, 107, 44, 67, 155, 58, 64, 0, 0, 0,
]);
pub const TOKEN_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172, 28, 180, 133, 237,
    95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);
pub const TOKEN_2022_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    6, 221, 246, 225, 238, 117, 143, 222, 24, 66, 93, 188, 228, 108, 205, 218, 182, 26, 252, 77,
    131, 185, 13, 39, 254, 189, 249, 40, 216, 161, 139, 252,
]);
pub const ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    140, 151, 37, 143, 78, 36, 137, 241, 187, 61, 16, 41, 20, 142, 13, 131, 11, 90, 19, 153, 218,
    255, 16, 132, 4, 142, 123, 216, 219, 233, 248, 89,
]);
pub const MEMO_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    5, 74, 83, 90, 153, 41, 33, 6, 77, 36, 232, 113, 96, 218, 56, 124, 124, 53, 181, 221, 188, 146,
    187, 129, 228, 31, 168, 64, 65, 5, 68, 141,
]);
pub const MEMO_LEGACY_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    5, 74, 83, 80, 248, 93, 200, 130, 214, 20, 165, 86, 114, 120, 138, 41, 109, 223, 30, 171, 171,
    208, 166, 6, 120, 136, 73, 50, 244, 238, 246, 160,
]);

/// Leading instruction data bytes that select the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discriminator {
    U32,
    U8,
    /// u8, or no discriminator at all when the data is empty.
    OptionalU8,
    None,
}

impl Discriminator {
    /// Reads the discriminant from the start of `reader`.
    pub fn read(&self, reader: &mut ByteReader) -> Result<Option<u32>, DecoderError> {
        let actual = reader.remaining();
        let too_short = |expected| DecoderError::InstructionTooShort { expected, actual };
        match self {
            Discriminator::U32 => reader.read_u32_le().map(Some).map_err(|_| too_short(4)),
            Discriminator::U8 => reader
                .get_byte()
                .map(|b| Some(b as u32))
                .map_err(|_| too_short(1)),
            Discriminator::OptionalU8 if reader.is_empty() => Ok(None),
            Discriminator::OptionalU8 => Ok(Some(reader.get_byte()? as u32)),
            Discriminator::None => Ok(None),
        }
    }
}

/// Encoding of optional instruction fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalEncoding {
    /// Present iff the remaining data is long enough.
    RemainingBytes,
    /// Preceded by a 0/1 presence byte.
    PresenceFlag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    System,
    Stake,
    ComputeBudget,
    Token,
    Token2022,
    AssociatedTokenAccount,
    Memo,
    MemoLegacy,
}

impl Program {
    pub const ALL: [Program; 8] = [
        Program::System,
        Program::Stake,
        Program::ComputeBudget,
        Program::Token,
        Program::Token2022,
        Program::AssociatedTokenAccount,
        Program::Memo,
        Program::MemoLegacy,
    ];

    /// Base58 program id, the key programs are looked up by.
    pub const fn id(&self) -> &'static str {
        match self {
            Program::System => "11111111111111111111111111111111",
            Program::Stake => "Stake11111111111111111111111111111111111111",
            Program::ComputeBudget => "ComputeBudget111111111111111111111111111111",
            Program::Token => "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
            Program::Token2022 => "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb",
            Program::AssociatedTokenAccount => "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL",
            Program::Memo => "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr",
            Program::MemoLegacy => "Memo1UhkJRfHyvLMcVucJwxXeuD728EqVDDwQDxFMNo",
        }
    }

    pub const fn pubkey(&self) -> Pubkey {
        match self {
            Program::System => SYSTEM_PROGRAM_ID,
            Program::Stake => STAKE_PROGRAM_ID,
            Program::ComputeBudget => COMPUTE_BUDGET_PROGRAM_ID,
            Program::Token => TOKEN_PROGRAM_ID,
            Program::Token2022 => TOKEN_2022_PROGRAM_ID,
            Program::AssociatedTokenAccount => ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID,
            Program::Memo => MEMO_PROGRAM_ID,
            Program::MemoLegacy => MEMO_LEGACY_PROGRAM_ID,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|program| program.id() == id)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Program::System => "System Program",
            Program::Stake => "Stake Program",
            Program::ComputeBudget => "Compute Budget Program",
            Program::Token => "Token Program",
            Program::Token2022 => "Token 2022 Program",
            Program::AssociatedTokenAccount => "Associated Token Account Program",
            Program::Memo => "Memo Program",
            Program::MemoLegacy => "Memo Legacy Program",
        }
    }

    pub const fn discriminator(&self) -> Discriminator {
        match self {
            Program::System | Program::Stake => Discriminator::U32,
            Program::ComputeBudget | Program::Token | Program::Token2022 => Discriminator::U8,
            Program::AssociatedTokenAccount => Discriminator::OptionalU8,
            Program::Memo | Program::MemoLegacy => Discriminator::None,
        }
    }

    pub const fn optional_encoding(&self) -> OptionalEncoding {
        match self {
            Program::System | Program::Stake => OptionalEncoding::RemainingBytes,
            _ => OptionalEncoding::PresenceFlag,
        }
    }

    pub const fn instructions(&self) -> &'static [InstructionSchema] {
        match self {
            Program::System => system::INSTRUCTIONS,
            Program::Stake => stake::INSTRUCTIONS,
            Program::ComputeBudget => compute_budget::INSTRUCTIONS,
            Program::Token | Program::Token2022 => token::INSTRUCTIONS,
            Program::AssociatedTokenAccount => associated_token_account::INSTRUCTIONS,
            Program::Memo | Program::MemoLegacy => memo::INSTRUCTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_ids_match_pubkeys() {
        for program in Program::ALL {
            assert_eq!(program.pubkey().to_string(), program.id());
            assert_eq!(Program::from_id(program.id()), Some(program));
        }
        assert_eq!(
            Program::from_id("Vote111111111111111111111111111111111111111"),
            None
        );
    }

    #[test]
    fn test_discriminants_are_unique_per_program() {
        for program in Program::ALL {
            let table = program.instructions();
            for (i, a) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|b| b.id != a.id), "{:?}", a);
            }
        }
    }

    #[test]
    fn test_read_discriminator() {
        let mut reader = ByteReader::new(&[2, 0, 0, 0, 9]);
        assert_eq!(Discriminator::U32.read(&mut reader), Ok(Some(2)));
        assert_eq!(reader.remaining(), 1);

        let mut reader = ByteReader::new(&[2, 0, 0]);
        assert_eq!(
            Discriminator::U32.read(&mut reader),
            Err(DecoderError::InstructionTooShort {
                expected: 4,
                actual: 3
            })
        );

        let mut reader = ByteReader::new(&[]);
        assert_eq!(Discriminator::OptionalU8.read(&mut reader), Ok(None));
        assert_eq!(
            Discriminator::U8.read(&mut reader),
            Err(DecoderError::InstructionTooShort {
                expected: 1,
                actual: 0
            })
        );
        assert_eq!(Discriminator::None.read(&mut reader), Ok(None));
    }
}
