//! AES-128 key type and key schedule expansion.

use crate::error::Error;
use crate::gf::xtime;
use crate::observer::{NullObserver, Step, StepObserver};
use crate::sbox::sub_byte;
use crate::state::Word;

/// Block size in words (FIPS-197 Nb).
pub const NB: usize = 4;
/// Key size in words for AES-128 (Nk).
pub const NK: usize = 4;
/// Number of rounds for AES-128 (Nr).
pub const NR: usize = 10;
/// Total schedule length in words, `Nb * (Nr + 1)`.
pub const SCHEDULE_WORDS: usize = NB * (NR + 1);

/// AES-128 key wrapper. Exactly 16 bytes by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    /// Fails with [`Error::InvalidKeyLength`] before any schedule work if
    /// the slice is not exactly 16 bytes.
    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        let raw: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength(bytes.len()))?;
        Ok(Self(raw))
    }
}

/// The 44 expanded round-key words, immutable once built.
///
/// Words 0..4 are the raw key split into 4-byte groups; the rest are
/// derived. Word `round * 4 + col` feeds column `col` of round `round`
/// during AddRoundKey.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule([Word; SCHEDULE_WORDS]);

impl KeySchedule {
    /// Expands a key without reporting steps.
    pub fn expand(key: &Aes128Key) -> Self {
        Self::expand_observed(key, &mut NullObserver)
    }

    /// Expands a key, reporting each finished word to `observer`.
    pub fn expand_observed(key: &Aes128Key, observer: &mut dyn StepObserver) -> Self {
        let mut words = [[0u8; 4]; SCHEDULE_WORDS];
        for (index, chunk) in key.0.chunks_exact(4).enumerate() {
            words[index].copy_from_slice(chunk);
            observer.on_step(Step::ScheduleWord {
                index,
                word: words[index],
            });
        }

        for index in NK..SCHEDULE_WORDS {
            let mut temp = words[index - 1];
            if index % NK == 0 {
                temp = sub_word(rot_word(temp));
                temp[0] ^= rcon(index / NK);
            } else if NK > 6 && index % NK == 4 {
                // Inert at Nk = 4; matches FIPS-197 for larger key sizes.
                temp = sub_word(temp);
            }
            for (byte, prev) in temp.iter_mut().zip(words[index - NK].iter()) {
                *byte ^= prev;
            }
            words[index] = temp;
            observer.on_step(Step::ScheduleWord { index, word: temp });
        }

        Self(words)
    }

    /// Returns the schedule word feeding column `col` of round `round`.
    #[inline]
    pub fn word(&self, round: usize, col: usize) -> &Word {
        &self.0[round * NB + col]
    }

    /// All 44 words in expansion order.
    pub fn words(&self) -> &[Word; SCHEDULE_WORDS] {
        &self.0
    }
}

/// Rotates a word left by one byte: `[a0,a1,a2,a3] -> [a1,a2,a3,a0]`.
#[inline]
pub(crate) fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

/// Applies the S-box to each byte of a word.
#[inline]
pub(crate) fn sub_word(word: Word) -> Word {
    word.map(sub_byte)
}

/// Round-constant byte `x^(i-1)` for `i >= 1`, built by repeated doubling.
pub(crate) fn rcon(i: usize) -> u8 {
    let mut constant = 0x01;
    for _ in 1..i {
        constant = xtime(constant);
    }
    constant
}
