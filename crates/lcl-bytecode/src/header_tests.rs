use crate::{HEADER_SIZE, Header, MAGIC, VERSION, checksum};

#[test]
fn header_default() {
    let h = Header::default();
    assert!(h.validate_magic());
    assert!(h.validate_version());
    assert_eq!(h.payload_len, 0);
    assert_eq!(&h.to_bytes()[..4], b"LCL\x04");
}

#[test]
fn header_roundtrip() {
    let h = Header {
        magic: MAGIC,
        version: VERSION,
        payload_len: 0x0123,
        checksum: 0xAB,
        flags: 0,
    };

    let bytes = h.to_bytes();
    assert_eq!(bytes.len(), HEADER_SIZE);
    assert_eq!(bytes[4..6], [0x01, 0x23]);
    assert_eq!(Header::from_bytes(&bytes), h);
}

#[test]
fn header_for_payload() {
    let payload = [0x0F, 0xF0, 0x01];
    let h = Header::for_payload(&payload);
    assert_eq!(h.payload_len, 3);
    assert_eq!(h.checksum, 0xFE);
    assert_eq!(h.flags, 0);
}

#[test]
fn checksum_of_empty_is_zero() {
    assert_eq!(checksum(&[]), 0);
    assert_eq!(checksum(&[0x5A, 0x5A]), 0);
}
