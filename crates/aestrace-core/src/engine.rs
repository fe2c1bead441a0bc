//! Round state machine driving one AES-128 block encryption.

use crate::observer::{NullObserver, StepObserver, Transform};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::{Aes128Key, KeySchedule, NR};
use crate::state::{Block, State};

/// Position of a round index within the 11-round sequence. The three phases
/// replace the jump-based special-casing some reference code uses for the
/// first and last rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundPhase {
    /// Round 0: the initial AddRoundKey only.
    First,
    /// Rounds 1 through Nr - 1: all four sub-transforms.
    Middle,
    /// Round Nr: MixColumns is skipped.
    Last,
}

impl RoundPhase {
    fn of(round: usize) -> Self {
        if round == 0 {
            Self::First
        } else if round < NR {
            Self::Middle
        } else {
            Self::Last
        }
    }
}

/// Everything one encryption produces: the ciphertext, plus the expanded
/// schedule for diagnostic display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encryption {
    /// The 16 ciphertext bytes, in the same textual order as the plaintext.
    pub ciphertext: Block,
    /// The schedule the rounds drew their keys from.
    pub schedule: KeySchedule,
}

/// Drives the key schedule and the 11-round sequence over one block.
///
/// The engine owns the state for the duration of a call; nothing persists
/// between encryptions.
#[derive(Clone, Copy, Debug)]
pub struct CipherEngine {
    key: Aes128Key,
}

impl CipherEngine {
    /// Creates an engine for the given key.
    pub fn new(key: Aes128Key) -> Self {
        Self { key }
    }

    /// Encrypts one block with no observer attached.
    pub fn encrypt(&self, plaintext: &Block) -> Encryption {
        self.encrypt_observed(plaintext, &mut NullObserver)
    }

    /// Encrypts one block, reporting every step to `observer`.
    ///
    /// The schedule is expanded fresh on each call so the observer sees the
    /// word derivations too. Observers receive events but can never feed
    /// anything back, so the ciphertext is identical with or without one.
    pub fn encrypt_observed(
        &self,
        plaintext: &Block,
        observer: &mut dyn StepObserver,
    ) -> Encryption {
        let schedule = KeySchedule::expand_observed(&self.key, observer);
        let mut state = State::from_block(plaintext);

        for round in 0..=NR {
            match RoundPhase::of(round) {
                RoundPhase::First => {
                    add_round_key(&mut state, &schedule, round, observer);
                    observer.on_transform(round, Transform::AddRoundKey, &state);
                }
                RoundPhase::Middle => {
                    sub_bytes(&mut state, observer);
                    observer.on_transform(round, Transform::SubBytes, &state);
                    shift_rows(&mut state, observer);
                    observer.on_transform(round, Transform::ShiftRows, &state);
                    mix_columns(&mut state, observer);
                    observer.on_transform(round, Transform::MixColumns, &state);
                    add_round_key(&mut state, &schedule, round, observer);
                    observer.on_transform(round, Transform::AddRoundKey, &state);
                }
                RoundPhase::Last => {
                    sub_bytes(&mut state, observer);
                    observer.on_transform(round, Transform::SubBytes, &state);
                    shift_rows(&mut state, observer);
                    observer.on_transform(round, Transform::ShiftRows, &state);
                    add_round_key(&mut state, &schedule, round, observer);
                    observer.on_transform(round, Transform::AddRoundKey, &state);
                }
            }
        }

        Encryption {
            ciphertext: state.to_block(),
            schedule,
        }
    }
}

/// Convenience wrapper: one key, one block, no observer, ciphertext out.
pub fn encrypt_block(key: &Aes128Key, plaintext: &Block) -> Block {
    CipherEngine::new(*key).encrypt(plaintext).ciphertext
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex;
    use crate::observer::Step;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn block_from_hex(text: &str) -> Block {
        let bytes = hex::decode(text, 16).unwrap();
        let mut block = [0u8; 16];
        block.copy_from_slice(&bytes);
        block
    }

    #[test]
    fn fips_appendix_b_known_answer() {
        let key = Aes128Key::from(block_from_hex("2b7e151628aed2a6abf7158809cf4f3c"));
        let plaintext = block_from_hex("3243f6a8885a308d313198a2e0370734");
        let ciphertext = encrypt_block(&key, &plaintext);
        assert_eq!(hex::encode(&ciphertext), "3925841d02dc09fbdc118597196a0b32");
    }

    #[test]
    fn all_zero_vector() {
        let ciphertext = encrypt_block(&Aes128Key::from([0u8; 16]), &[0u8; 16]);
        assert_eq!(hex::encode(&ciphertext), "66e94bd4ef8a2c3b884cfa59ca342b2e");
    }

    #[test]
    fn nist_appendix_c_vector() {
        let key = Aes128Key::from(block_from_hex("000102030405060708090a0b0c0d0e0f"));
        let plaintext = block_from_hex("00112233445566778899aabbccddeeff");
        let ciphertext = encrypt_block(&key, &plaintext);
        assert_eq!(hex::encode(&ciphertext), "69c4e0d86a7b0430d8cdb78070b4c55a");
    }

    #[test]
    fn observer_presence_never_changes_the_ciphertext() {
        struct Tally {
            steps: usize,
            snapshots: usize,
        }
        impl StepObserver for Tally {
            fn on_step(&mut self, _step: Step) {
                self.steps += 1;
            }
            fn on_transform(&mut self, _round: usize, _transform: Transform, _state: &State) {
                self.snapshots += 1;
            }
        }

        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        for _ in 0..20 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let engine = CipherEngine::new(Aes128Key::from(key_bytes));

            let silent = engine.encrypt(&block);
            let mut tally = Tally {
                steps: 0,
                snapshots: 0,
            };
            let observed = engine.encrypt_observed(&block, &mut tally);

            assert_eq!(silent, observed);
            // 1 snapshot for round 0, 4 for each middle round, 3 for the last.
            assert_eq!(tally.snapshots, 1 + 9 * 4 + 3);
            // 44 schedule words + 4 column XORs in round 0
            // + (16 + 3 + 4 + 4) per middle round + (16 + 3 + 4) for the last.
            assert_eq!(tally.steps, 44 + 4 + 9 * 27 + 23);
        }
    }

    #[test]
    fn schedule_in_the_result_matches_a_direct_expansion() {
        let key = Aes128Key::from(block_from_hex("2b7e151628aed2a6abf7158809cf4f3c"));
        let encryption = CipherEngine::new(key).encrypt(&[0u8; 16]);
        assert_eq!(encryption.schedule, KeySchedule::expand(&key));
    }
}
