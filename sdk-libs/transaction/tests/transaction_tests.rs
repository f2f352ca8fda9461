mod common;

use common::*;
use solsign_account_checks::{AccessTag, Account, AddressReference};
use solsign_instruction_decoder::{
    kind::{InstructionKind, SystemInstruction},
    UNSUPPORTED_PROGRAM,
};
use solsign_transaction::{
    layout::{pattern_pages, SignerInfo},
    recognize, Fee, NetworkConstants, ParseError, Pattern, Transaction, TransactionConfig,
    TransactionError, PACKET_DATA_SIZE,
};

fn transfer_message(lamports: u64) -> MessageBuilder {
    MessageBuilder::legacy([2, 0, 1], &[key(1), key(2), SYSTEM]).instruction(
        2,
        &[0, 1],
        system_transfer(lamports),
    )
}

fn parse_error(bytes: &[u8]) -> ParseError {
    match Transaction::from_bytes(bytes) {
        Err(TransactionError::InvalidTransaction(e)) => e,
        Ok(transaction) => panic!("expected a parse error, got {transaction:?}"),
    }
}

#[test]
fn test_native_transfer() {
    init_logging();
    let transaction = Transaction::from_bytes(&transfer_message(5_000_000_000).build()).unwrap();

    assert!(transaction.is_legacy());
    assert!(!transaction.blind_signing());
    assert_eq!(transaction.required_signers_count(), 2);
    assert!(transaction.is_signer(&key(1)));
    assert!(transaction.is_signer(&key(2)));
    assert!(!transaction.is_signer(&SYSTEM));
    assert_eq!(transaction.blockhash(), &[9; 32]);

    let instructions = transaction.get_visible_instructions();
    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].ui_name, "Transfer");
    assert_eq!(
        instructions[0].kind,
        InstructionKind::System(SystemInstruction::Transfer)
    );
    assert_eq!(instructions[0].u64_field("lamports"), Some(5_000_000_000));

    let Some(Pattern::NativeTransfer(transfer)) = recognize(instructions, &key(1), &[]) else {
        panic!("expected a native transfer");
    };
    assert!(transfer.recipient.is(&key(2)));
    assert_eq!(transfer.lamports, 5_000_000_000);

    let pages = pattern_pages(
        &Pattern::NativeTransfer(transfer),
        &transaction.fee(),
        transaction.blockhash(),
        SignerInfo {
            path: &SIGNER_PATH,
            pubkey: &key(1),
        },
    );
    let summary = pages.last().unwrap();
    assert_eq!(summary.value("Amount:"), Some("5 SOL"));
    assert_eq!(summary.value("Transaction fee:"), Some("0.00001 SOL"));
}

#[test]
fn test_unknown_program_requires_blind_signing() {
    init_logging();
    let bytes = MessageBuilder::legacy([1, 0, 1], &[key(1), key(0xEE)])
        .instruction(1, &[0], vec![1, 2, 3])
        .build();
    let transaction = Transaction::from_bytes(&bytes).unwrap();

    assert!(transaction.blind_signing());
    let instruction = &transaction.get_visible_instructions()[0];
    assert!(!instruction.is_program_supported);
    assert!(!instruction.is_supported());
    assert_eq!(instruction.ui_name, UNSUPPORTED_PROGRAM);
    assert_eq!(instruction.raw_data, vec![1, 2, 3]);
    assert_eq!(instruction.raw_accounts.len(), 1);
    assert_eq!(
        recognize(transaction.get_visible_instructions(), &key(1), &[]),
        None
    );
}

#[test]
fn test_truncated_instruction_data() {
    let mut data = system_transfer(5_000_000_000);
    data.truncate(7);
    let bytes = MessageBuilder::legacy([1, 0, 1], &[key(1), key(2), SYSTEM])
        .instruction(2, &[0, 1], data)
        .build();
    assert!(matches!(parse_error(&bytes), ParseError::MalformedTransaction(_)));
}

#[test]
fn test_every_truncation_is_rejected() {
    let bytes = transfer_message(1).build();
    for len in 0..bytes.len() {
        assert!(
            Transaction::from_bytes(&bytes[..len]).is_err(),
            "prefix of {len} bytes parsed"
        );
    }
}

#[test]
fn test_random_mutations_never_panic() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let bytes = MessageBuilder::versioned(0, [1, 0, 1], &[key(1), SYSTEM])
        .instruction(1, &[0, 2], system_transfer(1_000))
        .lookup_table(key(7), &[5], &[6])
        .build();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..2000 {
        let mut mutated = bytes.clone();
        for _ in 0..rng.gen_range(1..4) {
            let i = rng.gen_range(0..mutated.len());
            mutated[i] = rng.gen();
        }
        let len = rng.gen_range(0..=mutated.len());
        if let Ok(transaction) = Transaction::from_bytes(&mutated[..len]) {
            assert!(transaction.required_signers_count() >= 1);
            assert!(transaction.fee().total >= transaction.calculate_fee());
        }
    }
}

#[test]
fn test_trailing_bytes() {
    let mut bytes = transfer_message(1).build();
    bytes.push(0);
    assert!(matches!(parse_error(&bytes), ParseError::MalformedTransaction(_)));
}

#[test]
fn test_header_without_signer() {
    let bytes = MessageBuilder::legacy([0, 0, 1], &[key(1), SYSTEM]).build();
    assert!(matches!(parse_error(&bytes), ParseError::MalformedTransaction(_)));
}

#[test]
fn test_header_exceeds_address_count() {
    let bytes = MessageBuilder::legacy([1, 1, 1], &[key(1), SYSTEM]).build();
    assert!(matches!(parse_error(&bytes), ParseError::MalformedTransaction(_)));
}

#[test]
fn test_program_index_out_of_bounds() {
    let bytes = MessageBuilder::legacy([1, 0, 1], &[key(1), SYSTEM])
        .instruction(2, &[0], system_transfer(1))
        .build();
    assert_eq!(
        parse_error(&bytes),
        ParseError::InvalidReference { index: 2, len: 2 }
    );
}

#[test]
fn test_account_index_out_of_bounds() {
    let bytes = MessageBuilder::legacy([1, 0, 1], &[key(1), SYSTEM])
        .instruction(1, &[0, 7], system_transfer(1))
        .build();
    assert_eq!(
        parse_error(&bytes),
        ParseError::InvalidReference { index: 7, len: 2 }
    );
}

#[test]
fn test_funding_account_must_sign() {
    let bytes = MessageBuilder::legacy([1, 0, 1], &[key(1), key(2), SYSTEM])
        .instruction(2, &[1, 0], system_transfer(1))
        .build();
    assert_eq!(
        parse_error(&bytes),
        ParseError::AuthorizationError("funding_account")
    );
}

#[test]
fn test_unexpected_accounts() {
    let bytes = MessageBuilder::legacy([1, 0, 1], &[key(1), key(2), SYSTEM])
        .instruction(2, &[0, 1, 1], system_transfer(1))
        .build();
    assert_eq!(parse_error(&bytes), ParseError::UnexpectedAccounts(1));
}

#[test]
fn test_size_limit() {
    let bytes = transfer_message(1).build();
    let config = TransactionConfig::default().with_max_transaction_size(bytes.len() - 1);
    assert!(matches!(
        Transaction::parse_with_config(&bytes, &config),
        Err(TransactionError::InvalidTransaction(ParseError::MalformedTransaction(_)))
    ));

    let oversized = vec![0u8; PACKET_DATA_SIZE + 1];
    assert!(matches!(parse_error(&oversized), ParseError::MalformedTransaction(_)));
}

#[test]
fn test_lookup_table_accounts() {
    init_logging();
    let table = key(7);
    let bytes = MessageBuilder::versioned(0, [1, 0, 1], &[key(1), SYSTEM])
        .instruction(1, &[0, 2], system_transfer(1_000))
        .lookup_table(table, &[5], &[6])
        .build();
    let transaction = Transaction::from_bytes(&bytes).unwrap();

    assert!(!transaction.is_legacy());
    assert_eq!(transaction.version(), 0);
    assert_eq!(transaction.lookup_tables().len(), 1);

    let transfer = transaction.get_visible_instructions()[0]
        .as_system_transfer()
        .unwrap();
    assert_eq!(
        transfer.recipient_account,
        Account::LookupTable(AddressReference {
            table,
            index: 5,
            tag: AccessTag::Writable,
        })
    );
    assert_eq!(transfer.recipient_account.pubkey(), None);
}

#[test]
fn test_lookup_table_account_index_bound() {
    let bytes = MessageBuilder::versioned(0, [1, 0, 1], &[key(1), SYSTEM])
        .instruction(1, &[0, 4], system_transfer(1_000))
        .lookup_table(key(7), &[5], &[6])
        .build();
    assert_eq!(
        parse_error(&bytes),
        ParseError::InvalidReference { index: 4, len: 4 }
    );
}

#[test]
fn test_lookup_table_account_cannot_fund() {
    let bytes = MessageBuilder::versioned(0, [1, 0, 1], &[key(1), SYSTEM])
        .instruction(1, &[2, 0], system_transfer(1_000))
        .lookup_table(key(7), &[5], &[])
        .build();
    assert_eq!(
        parse_error(&bytes),
        ParseError::AuthorizationError("funding_account")
    );
}

#[test]
fn test_fee_with_priority() {
    let bytes = MessageBuilder::legacy([1, 0, 2], &[key(1), key(2), SYSTEM, COMPUTE_BUDGET])
        .instruction(3, &[], set_compute_unit_limit(300_000))
        .instruction(3, &[], set_compute_unit_price(10_000))
        .instruction(3, &[], set_compute_unit_price(99_999_999))
        .instruction(2, &[0, 1], system_transfer(1))
        .build();
    let transaction = Transaction::from_bytes(&bytes).unwrap();

    assert_eq!(
        transaction.fee(),
        Fee {
            base: 5_000,
            priority: 3_000,
            rent: 0,
            total: 8_000,
        }
    );
    assert_eq!(transaction.calculate_fee(), 8_000);
}

#[test]
fn test_priority_fee_rounds_up_with_default_limit() {
    let bytes = MessageBuilder::legacy([1, 0, 1], &[key(1), COMPUTE_BUDGET])
        .instruction(1, &[], set_compute_unit_price(1))
        .build();
    let transaction = Transaction::from_bytes(&bytes).unwrap();
    assert_eq!(transaction.fee().priority, 1);

    let config = TransactionConfig::default().with_default_compute_unit_limit(3_000_000);
    let transaction = Transaction::parse_with_config(&bytes, &config).unwrap();
    assert_eq!(transaction.fee().priority, 3);
}

#[test]
fn test_rent_is_not_part_of_the_network_fee() {
    let bytes = MessageBuilder::legacy([2, 0, 1], &[key(1), key(2), SYSTEM])
        .instruction(2, &[0, 1], system_create_account(1_000_000, 165, &TOKEN))
        .build();
    let config = TransactionConfig::new(NetworkConstants {
        lamports_per_signature: 10,
        ..NetworkConstants::default()
    });
    let transaction = Transaction::parse_with_config(&bytes, &config).unwrap();

    let fee = transaction.fee();
    assert_eq!(fee.base, 20);
    assert_eq!(fee.rent, 1_000_000);
    assert_eq!(fee.total, 1_000_020);
    assert_eq!(transaction.calculate_fee(), 20);
}

#[test]
fn test_error_codes() {
    assert_eq!(
        u32::from(TransactionError::InvalidTransaction(
            ParseError::MalformedTransaction(String::new())
        )),
        19002
    );
    assert_eq!(u32::from(ParseError::UnexpectedAccounts(1)), 19007);
}
