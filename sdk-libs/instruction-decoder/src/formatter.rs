//! Formatting of decoded values for confirmation screens.

use chrono::DateTime;

use crate::{
    core::{Field, FieldValue, StructuredInstruction},
    schema::Presentation,
};

/// Decimal places of one SOL in lamports.
pub const SOL_DECIMALS: u8 = 9;

/// Formats `amount` scaled down by `decimals`, with `,` thousands separators
/// and without trailing fractional zeros.
///
/// ```
/// use solsign_instruction_decoder::formatter::format_amount;
/// assert_eq!(format_amount(5_000_000_000, 9), "5");
/// assert_eq!(format_amount(1_234_567_890, 3), "1,234,567.89");
/// ```
pub fn format_amount(amount: u64, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;
    let (integer, fraction) = if digits.len() > decimals {
        digits.split_at(digits.len() - decimals)
    } else {
        ("0", digits.as_str())
    };

    let mut formatted = String::with_capacity(integer.len() + integer.len() / 3 + decimals + 1);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    let fraction = format!("{:0>width$}", fraction, width = decimals);
    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

pub fn format_lamports(lamports: u64) -> String {
    format!("{} SOL", format_amount(lamports, SOL_DECIMALS))
}

/// Unix timestamp as a UTC date, the raw number if out of range.
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(date) => date.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => timestamp.to_string(),
    }
}

/// Formats a present field value, `None` for absent optional fields.
///
/// Token amounts depend on the `decimals` field of the same instruction and
/// fall back to the raw integer when it is missing.
pub fn format_field(field: &Field, instruction: &StructuredInstruction) -> Option<String> {
    let value = field.value.as_ref()?;
    let formatted = match (field.schema.presentation, value) {
        (Presentation::Lamports, value) => match value.as_u64() {
            Some(lamports) => format_lamports(lamports),
            None => format_value(value),
        },
        (Presentation::TokenAmount, value) => {
            let decimals = instruction.u64_field("decimals");
            match (value.as_u64(), decimals) {
                (Some(amount), Some(decimals)) if decimals <= u8::MAX as u64 => {
                    format_amount(amount, decimals as u8)
                }
                _ => format_value(value),
            }
        }
        (Presentation::Timestamp, FieldValue::I64(timestamp)) => format_timestamp(*timestamp),
        (_, value) => format_value(value),
    };
    Some(formatted)
}

/// Plain rendering of a value.
pub fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::U8(value) => value.to_string(),
        FieldValue::U32(value) => value.to_string(),
        FieldValue::U64(value) => value.to_string(),
        FieldValue::I64(value) => value.to_string(),
        FieldValue::Pubkey(pubkey) => pubkey.to_string(),
        FieldValue::String(value) => value.clone(),
        FieldValue::StakeAuthorize(value) => value.name().to_string(),
        FieldValue::AuthorityType(value) => value.name().to_string(),
    }
}
