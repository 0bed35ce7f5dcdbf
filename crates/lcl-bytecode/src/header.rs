//! Program header (8 bytes).
//!
//! Layout:
//! - 0-2: magic `LCL`
//! - 3: format version
//! - 4-5: payload length (bytes after the header), big-endian
//! - 6: checksum, XOR of every payload byte
//! - 7: flags (reserved, zero)

use super::{HEADER_SIZE, MAGIC, VERSION};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 3],
    pub version: u8,
    pub payload_len: u16,
    pub checksum: u8,
    pub flags: u8,
}

const _: () = assert!(HEADER_SIZE == 8);

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            payload_len: 0,
            checksum: 0,
            flags: 0,
        }
    }
}

impl Header {
    /// Build the header for a finished payload.
    pub fn for_payload(payload: &[u8]) -> Self {
        Self {
            payload_len: payload.len() as u16,
            checksum: checksum(payload),
            ..Self::default()
        }
    }

    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        Self {
            magic: [bytes[0], bytes[1], bytes[2]],
            version: bytes[3],
            payload_len: u16::from_be_bytes([bytes[4], bytes[5]]),
            checksum: bytes[6],
            flags: bytes[7],
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let len = self.payload_len.to_be_bytes();
        [
            self.magic[0],
            self.magic[1],
            self.magic[2],
            self.version,
            len[0],
            len[1],
            self.checksum,
            self.flags,
        ]
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn validate_version(&self) -> bool {
        self.version == VERSION
    }
}

/// XOR of all bytes.
pub fn checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0, |acc, b| acc ^ b)
}
