//! Hex text boundary for keys and blocks.
//!
//! Everything inside the crate works on fixed byte arrays; hex only appears at
//! the edges. Decoding is case-insensitive and ignores surrounding whitespace,
//! encoding always yields 32 lowercase characters.

use crate::block::{Block, BLOCK_LEN};
use crate::error::{Error, Result};

/// Decodes `text` into exactly 16 bytes.
///
/// `what` names the value in the resulting [`Error::InvalidLength`].
pub(crate) fn decode_16(text: &str, what: &'static str) -> Result<[u8; BLOCK_LEN]> {
    let bytes = hex::decode(text.trim())?;
    bytes.as_slice().try_into().map_err(|_| Error::InvalidLength {
        what,
        expected: BLOCK_LEN,
        actual: bytes.len(),
    })
}

/// Parses a 32-character hex string into a block.
pub fn block_from_hex(text: &str) -> Result<Block> {
    decode_16(text, "block")
}

/// Renders a block as lowercase hex.
pub fn block_to_hex(block: &Block) -> String {
    hex::encode(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_case_and_whitespace() {
        let block = block_from_hex("  00112233445566778899AABBCCDDEEFF\n").unwrap();
        assert_eq!(block[0], 0x00);
        assert_eq!(block[10], 0xaa);
        assert_eq!(block[15], 0xff);
        assert_eq!(block_to_hex(&block), "00112233445566778899aabbccddeeff");
    }

    #[test]
    fn wrong_decoded_length_is_invalid_length() {
        let err = block_from_hex("000102030405060708090a0b0c0d0e").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                what: "block",
                expected: 16,
                actual: 15
            }
        );
        let err = block_from_hex("000102030405060708090a0b0c0d0e0f10").unwrap_err();
        assert!(matches!(err, Error::InvalidLength { actual: 17, .. }));
    }

    #[test]
    fn bad_digits_are_invalid_encoding() {
        assert!(matches!(
            block_from_hex("zz0102030405060708090a0b0c0d0e0f"),
            Err(Error::InvalidEncoding(_))
        ));
        assert!(matches!(
            block_from_hex("000"),
            Err(Error::InvalidEncoding(hex::FromHexError::OddLength))
        ));
    }
}
