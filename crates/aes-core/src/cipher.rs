//! AES-128 key schedule and block encryption/decryption.

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::round::State;
use crate::sbox::sbox;

/// Rijndael round constants; `RCON[j]` is used for word `4 * (j + 1)`.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

const KEY_WORDS: usize = 4;
const SCHEDULE_WORDS: usize = 4 * ROUND_KEY_COUNT;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in KEY_WORDS..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / KEY_WORDS - 1]) << 24);
        }
        w[i] = w[i - KEY_WORDS] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    state.add_round_key(&round_keys[0]);

    for round in 1..10 {
        state.sub_bytes();
        state.shift_rows();
        state.mix_columns();
        state.add_round_key(&round_keys[round]);
    }

    state.sub_bytes();
    state.shift_rows();
    state.add_round_key(&round_keys[10]);

    state.into_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);

    state.add_round_key(&round_keys[10]);
    state.inv_shift_rows();
    state.inv_sub_bytes();

    for round in (1..10).rev() {
        state.add_round_key(&round_keys[round]);
        state.inv_mix_columns();
        state.inv_shift_rows();
        state.inv_sub_bytes();
    }

    state.add_round_key(&round_keys[0]);

    state.into_block()
}

/// An AES-128 cipher with its key schedule derived once up front.
///
/// The schedule is immutable, so one instance can be shared by reference
/// across threads; each call works on its own state.
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Derives the key schedule for `key`.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// The expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }

    /// Encrypts `input`, which must be exactly one block long.
    pub fn encrypt_slice(&self, input: &[u8]) -> Result<Block> {
        block_from_slice(input).map(|block| self.encrypt_block(&block))
    }

    /// Decrypts `input`, which must be exactly one block long.
    pub fn decrypt_slice(&self, input: &[u8]) -> Result<Block> {
        block_from_slice(input).map(|block| self.decrypt_block(&block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{block_from_hex, block_to_hex};
    use crate::error::Error;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    fn hex_key(text: &str) -> Aes128Key {
        Aes128Key::from_hex(text).unwrap()
    }

    #[test]
    fn encrypt_matches_nist_vector() {
        let round_keys = expand_key(&Aes128Key::from(NIST_KEY));
        assert_eq!(encrypt_block(&NIST_PLAIN, &round_keys), NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let round_keys = expand_key(&Aes128Key::from(NIST_KEY));
        assert_eq!(decrypt_block(&NIST_CIPHER, &round_keys), NIST_PLAIN);
    }

    #[test]
    fn all_zero_key_and_plaintext() {
        let cipher = Aes128::new(&Aes128Key::from([0u8; 16]));
        let ct = cipher.encrypt_block(&[0u8; 16]);
        assert_eq!(block_to_hex(&ct), "66e94bd4ef8a2c3b884cfa59ca342b2e");
        assert_eq!(cipher.decrypt_block(&ct), [0u8; 16]);
    }

    #[test]
    fn fips197_appendix_b() {
        let cipher = Aes128::new(&hex_key("2b7e151628aed2a6abf7158809cf4f3c"));
        let pt = block_from_hex("3243f6a8885a308d313198a2e0370734").unwrap();
        let ct = cipher.encrypt_block(&pt);
        assert_eq!(block_to_hex(&ct), "3925841d02dc09fbdc118597196a0b32");
        assert_eq!(cipher.decrypt_block(&ct), pt);
    }

    #[test]
    fn key_schedule_matches_fips197_appendix_a() {
        let round_keys = expand_key(&hex_key("2b7e151628aed2a6abf7158809cf4f3c"));
        assert_eq!(
            block_to_hex(&round_keys[0]),
            "2b7e151628aed2a6abf7158809cf4f3c"
        );
        assert_eq!(
            block_to_hex(&round_keys[1]),
            "a0fafe1788542cb123a339392a6c7605"
        );
        assert_eq!(
            block_to_hex(&round_keys[10]),
            "d014f9a8c9ee2589e13f0cc8b6630ca6"
        );
        assert_eq!(round_keys.iter().count(), 11);
    }

    #[test]
    fn key_schedule_is_deterministic() {
        let key = Aes128Key::from(NIST_KEY);
        assert_eq!(expand_key(&key), expand_key(&key));
        assert_eq!(Aes128::new(&key).round_keys(), &expand_key(&key));
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let rks = expand_key(&Aes128Key::from(key_bytes));
            let ct = encrypt_block(&block, &rks);
            assert_eq!(decrypt_block(&ct, &rks), block);
        }
    }

    fn differing_bits(a: &Block, b: &Block) -> u32 {
        a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
    }

    #[test]
    fn single_bit_flips_avalanche() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..32 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let base = Aes128::new(&Aes128Key::from(key_bytes)).encrypt_block(&block);

            let bit: usize = rng.gen_range(0..128);
            let mut flipped_block = block;
            flipped_block[bit / 8] ^= 1 << (bit % 8);
            let by_plaintext =
                Aes128::new(&Aes128Key::from(key_bytes)).encrypt_block(&flipped_block);

            let mut flipped_key = key_bytes;
            flipped_key[bit / 8] ^= 1 << (bit % 8);
            let by_key = Aes128::new(&Aes128Key::from(flipped_key)).encrypt_block(&block);

            for changed in [differing_bits(&base, &by_plaintext), differing_bits(&base, &by_key)] {
                assert!((32..=96).contains(&changed), "{changed} of 128 bits changed");
            }
        }
    }

    #[test]
    fn slice_helpers_reject_wrong_lengths() {
        let cipher = Aes128::new(&Aes128Key::from(NIST_KEY));
        assert_eq!(cipher.encrypt_slice(&NIST_PLAIN), Ok(NIST_CIPHER));
        assert_eq!(cipher.decrypt_slice(&NIST_CIPHER), Ok(NIST_PLAIN));
        assert!(matches!(
            cipher.encrypt_slice(&NIST_PLAIN[..15]),
            Err(Error::InvalidLength { actual: 15, .. })
        ));
        assert!(matches!(
            cipher.decrypt_slice(&[0u8; 17]),
            Err(Error::InvalidLength { actual: 17, .. })
        ));
    }

    #[test]
    fn schedule_is_shared_across_threads() {
        let cipher = Aes128::new(&Aes128Key::from(NIST_KEY));
        let blocks: Vec<Block> = (0..8u8).map(|i| [i; 16]).collect();
        let expected: Vec<Block> = blocks.iter().map(|b| cipher.encrypt_block(b)).collect();

        let shared = &cipher;
        let results: Vec<Block> = std::thread::scope(|scope| {
            let handles: Vec<_> = blocks
                .iter()
                .map(|block| scope.spawn(move || shared.encrypt_block(block)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, expected);
    }
}
