use borsh::BorshSerialize;
use rand::{thread_rng, Rng};
use solsign_wire_reader::{errors::WireReaderError, ByteReader};

fn length_prefixed(payload: &[u8], padding: [u8; 4]) -> Vec<u8> {
    let mut bytes = (payload.len() as u32).to_le_bytes().to_vec();
    bytes.extend_from_slice(&padding);
    bytes.extend_from_slice(payload);
    bytes
}

#[test]
fn test_length_prefixed_string() {
    let bytes = length_prefixed(b"stake:0", [0, 0, 0, 0]);
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_length_prefixed_string(), Ok("stake:0"));
    assert!(reader.is_empty());
}

#[test]
fn test_length_prefixed_string_ignores_padding_content() {
    let bytes = length_prefixed("grüße".as_bytes(), [0xde, 0xad, 0xbe, 0xef]);
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_length_prefixed_string(), Ok("grüße"));
}

#[test]
fn test_length_prefixed_string_failures_restore_cursor() {
    let bytes = length_prefixed(&[0xc0, 0x80], [0; 4]);
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(
        reader.read_length_prefixed_string(),
        Err(WireReaderError::InvalidEncoding)
    );
    assert_eq!(reader.position(), 0);

    let mut truncated = length_prefixed(b"seed", [0; 4]);
    truncated.pop();
    let mut reader = ByteReader::new(&truncated);
    assert!(matches!(
        reader.read_length_prefixed_string(),
        Err(WireReaderError::TruncatedInput { .. })
    ));
    assert_eq!(reader.position(), 0);
}

#[test]
fn test_reads_borsh_encoded_integers() {
    let bytes = (2u32, 5_000_000_000u64, 9u8).try_to_vec().unwrap();
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_u32_le(), Ok(2));
    assert_eq!(reader.read_u64_le(), Ok(5_000_000_000));
    assert_eq!(reader.get_byte(), Ok(9));
    assert!(reader.is_empty());
}

/// Random buffers and random read sequences never read past the end of the
/// buffer and never move the cursor on failure.
#[test]
fn test_random_reads_stay_in_bounds() {
    let mut rng = thread_rng();
    for _ in 0..10_000 {
        let len = rng.gen_range(0..64);
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let mut reader = ByteReader::new(&bytes);
        for _ in 0..16 {
            let before = reader.position();
            let result = match rng.gen_range(0..8) {
                0 => reader.get_byte().map(|_| ()),
                1 => reader.read_u32_le().map(|_| ()),
                2 => reader.read_u64_le().map(|_| ()),
                3 => reader.read_compact_u16().map(|_| ()),
                4 => reader.read_compact_uint().map(|_| ()),
                5 => reader.read_count(32).map(|_| ()),
                6 => reader.read_length_prefixed_string().map(|_| ()),
                _ => reader.read(rng.gen_range(0..40)).map(|_| ()),
            };
            assert!(reader.position() <= bytes.len());
            if result.is_err() {
                assert_eq!(reader.position(), before);
            }
        }
    }
}
