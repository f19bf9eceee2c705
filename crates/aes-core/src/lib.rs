//! From-scratch AES-128 block cipher.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - The AES-128 key schedule.
//! - Single-block encryption and decryption (the ECB primitive).
//! - Fixed-size key and block types with hex conversion at the boundary.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.
//!
//! ```
//! use aes_core::{block_from_hex, block_to_hex, Aes128, Aes128Key};
//!
//! let key = Aes128Key::from_hex("000102030405060708090a0b0c0d0e0f").unwrap();
//! let cipher = Aes128::new(&key);
//! let pt = block_from_hex("00112233445566778899aabbccddeeff").unwrap();
//! let ct = cipher.encrypt_block(&pt);
//! assert_eq!(block_to_hex(&ct), "69c4e0d86a7b0430d8cdb78070b4c55a");
//! assert_eq!(cipher.decrypt_block(&ct), pt);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod encoding;
mod error;
mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::{block_from_slice, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, Aes128};
pub use crate::encoding::{block_from_hex, block_to_hex};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
pub use crate::round::State;
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
