//! Forward and inverse AES S-boxes.
//!
//! Both tables are built by const evaluation: the forward box is the field
//! inverse followed by the FIPS-197 affine map, the inverse box is its exact
//! functional inverse.

use crate::gf;

const AFFINE_CONSTANT: u8 = 0x63;

const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(gf::inverse(i as u8));
        i += 1;
    }
    table
}

const fn invert(table: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[table[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

/// Forward substitution table.
pub static SBOX: [u8; 256] = build_sbox();

/// Inverse substitution table.
pub static INV_SBOX: [u8; 256] = invert(&build_sbox());

/// Applies the forward S-box to one byte.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Applies the inverse S-box to one byte.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries() {
        // FIPS-197 figure 7 and figure 14.
        assert_eq!(sbox(0x00), 0x63);
        assert_eq!(sbox(0x01), 0x7c);
        assert_eq!(sbox(0x53), 0xed);
        assert_eq!(sbox(0xff), 0x16);
        assert_eq!(inv_sbox(0x63), 0x00);
        assert_eq!(inv_sbox(0xed), 0x53);
        assert_eq!(inv_sbox(0x00), 0x52);
    }

    #[test]
    fn inverse_table_undoes_forward_table() {
        for b in 0..=255u8 {
            assert_eq!(inv_sbox(sbox(b)), b);
            assert_eq!(sbox(inv_sbox(b)), b);
        }
    }

    #[test]
    fn has_no_fixed_points() {
        for b in 0..=255u8 {
            assert_ne!(sbox(b), b);
            assert_ne!(sbox(b), !b);
        }
    }
}
