//! Registry lookup and the schema interpreter.

use solana_pubkey::Pubkey;
use solsign_account_checks::{
    checks::{check_signer, check_signers},
    Account, AccountError, AccountIterator,
};
use solsign_wire_reader::{errors::WireReaderError, ByteReader};
use tracing::{debug, trace};

use crate::{
    core::{AccountRole, Field, FieldValue, StructuredInstruction},
    errors::DecoderError,
    kind::{AuthorityType, StakeAuthorize},
    programs::{OptionalEncoding, Program},
    schema::{FieldSchema, FieldType, InstructionSchema},
};

/// Role name reported for trailing multisig signer accounts.
const MULTISIG_SIGNERS: &str = "multisig_signers";

/// Looks up the schema of `(program, discriminant)`.
pub fn lookup(program: Program, discriminant: Option<u32>) -> Option<&'static InstructionSchema> {
    program
        .instructions()
        .iter()
        .find(|schema| schema.id == discriminant)
}

/// Interprets one instruction against the registry.
///
/// Unknown programs and unknown discriminants are not errors, they produce
/// an unsupported [`StructuredInstruction`] carrying only the raw data and
/// accounts. Known instructions must match their schema exactly.
pub fn decode_instruction(
    program_id: &Pubkey,
    data: &[u8],
    accounts: &[Account],
) -> Result<StructuredInstruction, DecoderError> {
    let id = program_id.to_string();
    let Some(program) = Program::from_id(&id) else {
        debug!(program_id = %id, "Unsupported program");
        return Ok(StructuredInstruction::unsupported(*program_id, None, None, data, accounts));
    };

    let mut reader = ByteReader::new(data);
    let discriminant = program.discriminator().read(&mut reader)?;
    let Some(schema) = lookup(program, discriminant) else {
        debug!(
            program = program.name(),
            ?discriminant,
            "Unsupported instruction"
        );
        return Ok(StructuredInstruction::unsupported(
            *program_id,
            Some(program),
            discriminant,
            data,
            accounts,
        ));
    };
    trace!(
        program = program.name(),
        instruction = schema.ui_name,
        data_len = data.len(),
        accounts = accounts.len(),
        "Decoding instruction"
    );

    let fields = decode_fields(schema, program.optional_encoding(), &mut reader)?;
    if !reader.is_empty() {
        return Err(DecoderError::TrailingData(reader.remaining()));
    }
    let (roles, multisig_signers) = bind_accounts(schema, accounts)?;

    Ok(StructuredInstruction::supported(
        *program_id,
        program,
        schema,
        discriminant,
        fields,
        roles,
        multisig_signers,
        data,
        accounts,
    ))
}

fn decode_fields(
    schema: &'static InstructionSchema,
    encoding: OptionalEncoding,
    reader: &mut ByteReader,
) -> Result<Vec<Field>, DecoderError> {
    let mut fields = Vec::with_capacity(schema.fields.len());
    for field in schema.fields {
        let present = !field.optional || is_present(field, encoding, reader)?;
        let value = if present {
            Some(decode_field(field, reader)?)
        } else {
            None
        };
        fields.push(Field {
            schema: field,
            value,
        });
    }
    Ok(fields)
}

fn is_present(
    field: &FieldSchema,
    encoding: OptionalEncoding,
    reader: &mut ByteReader,
) -> Result<bool, DecoderError> {
    match encoding {
        OptionalEncoding::RemainingBytes => Ok(match field.ty.fixed_size() {
            Some(size) => reader.remaining() >= size,
            None => !reader.is_empty(),
        }),
        OptionalEncoding::PresenceFlag => {
            let flag = reader
                .get_byte()
                .map_err(|_| DecoderError::MissingField(field.name))?;
            match flag {
                0 => Ok(false),
                1 => Ok(true),
                value => Err(DecoderError::InvalidOptionFlag {
                    field: field.name,
                    value,
                }),
            }
        }
    }
}

fn decode_field(field: &FieldSchema, reader: &mut ByteReader) -> Result<FieldValue, DecoderError> {
    let name = field.name;
    let map_err = |e: WireReaderError| match e {
        WireReaderError::TruncatedInput { .. } | WireReaderError::LengthExceedsInput { .. } => {
            DecoderError::MissingField(name)
        }
        WireReaderError::InvalidEncoding => DecoderError::InvalidEncoding(name),
        e => DecoderError::Reader(e),
    };
    let value = match field.ty {
        FieldType::U8 => FieldValue::U8(reader.get_byte().map_err(map_err)?),
        FieldType::U32 => FieldValue::U32(reader.read_u32_le().map_err(map_err)?),
        FieldType::U64 => FieldValue::U64(reader.read_u64_le().map_err(map_err)?),
        FieldType::I64 => FieldValue::I64(reader.read_i64_le().map_err(map_err)?),
        FieldType::Pubkey => {
            let bytes = reader.read_array().map_err(map_err)?;
            FieldValue::Pubkey(Pubkey::new_from_array(bytes))
        }
        FieldType::String => FieldValue::String(
            reader
                .read_length_prefixed_string()
                .map_err(map_err)?
                .to_string(),
        ),
        FieldType::Memo => {
            let bytes = reader.read_rest();
            let memo =
                core::str::from_utf8(bytes).map_err(|_| DecoderError::InvalidEncoding(name))?;
            FieldValue::String(memo.to_string())
        }
        FieldType::StakeAuthorize => {
            let value = reader.get_byte().map_err(map_err)?;
            FieldValue::StakeAuthorize(
                StakeAuthorize::from_u8(value)
                    .ok_or(DecoderError::InvalidEnumValue { field: name, value })?,
            )
        }
        FieldType::AuthorityType => {
            let value = reader.get_byte().map_err(map_err)?;
            FieldValue::AuthorityType(
                AuthorityType::from_u8(value)
                    .ok_or(DecoderError::InvalidEnumValue { field: name, value })?,
            )
        }
    };
    Ok(value)
}

/// Binds accounts to roles in declared order.
///
/// Accounts beyond the declared roles are multisig signers, accepted only by
/// schemas that allow them. With multisig signers present, the authority
/// role is the multisig account itself and each trailing signer must sign
/// instead.
fn bind_accounts(
    schema: &'static InstructionSchema,
    accounts: &[Account],
) -> Result<(Vec<AccountRole>, Vec<Account>), AccountError> {
    let extra = accounts.len().saturating_sub(schema.accounts.len());
    if extra > 0 && !schema.multisig {
        debug!(
            instruction = schema.ui_name,
            extra, "Trailing accounts without multisig support"
        );
        return Err(AccountError::UnexpectedAccounts(extra));
    }
    let is_multisig = extra > 0;

    let mut iter = AccountIterator::new(accounts);
    let mut roles = Vec::with_capacity(schema.accounts.len());
    for role in schema.accounts {
        let account = if role.optional {
            iter.next_optional()
        } else {
            Some(iter.next_account(role.name)?)
        };
        if let (Some(account), true) = (account, role.signer && !is_multisig) {
            check_signer(account, role.name)?;
        }
        roles.push(AccountRole {
            schema: role,
            account: account.copied(),
        });
    }

    let multisig_signers = iter.remaining();
    check_signers(multisig_signers, MULTISIG_SIGNERS)?;
    iter.finish()?;
    Ok((roles, multisig_signers.to_vec()))
}
