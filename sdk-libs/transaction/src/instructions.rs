use solsign_account_checks::checks::check_index;
use solsign_wire_reader::ByteReader;
use tracing::trace;

use crate::errors::ParseError;

/// An instruction as it appears on the wire, indices not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInstruction<'a> {
    /// Index into the static address list.
    pub program_index: u8,
    /// Indices into the combined account list.
    pub accounts: &'a [u8],
    pub data: &'a [u8],
}

/// Reads the instruction section.
///
/// Program indices are checked against the static address count here.
/// Account indices can only be checked once the lookup tables are known.
pub fn parse_instructions<'a>(
    reader: &mut ByteReader<'a>,
    address_count: usize,
) -> Result<Vec<RawInstruction<'a>>, ParseError> {
    // Every instruction takes at least 3 bytes.
    let count = reader.read_count(3)?;
    let mut instructions = Vec::with_capacity(count);
    for i in 0..count {
        let program_index = reader.get_byte()?;
        check_index(program_index as usize, address_count)?;
        let account_count = reader.read_count(1)?;
        let accounts = reader.read(account_count)?;
        let data_len = reader.read_count(1)?;
        let data = reader.read(data_len)?;
        trace!(
            instruction = i,
            program_index,
            accounts = account_count,
            data_len,
            "Parsed raw instruction"
        );
        instructions.push(RawInstruction {
            program_index,
            accounts,
            data,
        });
    }
    Ok(instructions)
}
