//! The four round sub-transforms, operating in place on the state.

use crate::gf::multiply;
use crate::observer::{Step, StepObserver};
use crate::sbox::sub_byte;
use crate::schedule::{KeySchedule, NB};
use crate::state::{State, Word};

/// Replaces every state byte with its S-box substitution.
pub fn sub_bytes(state: &mut State, observer: &mut dyn StepObserver) {
    for row in 0..4 {
        for col in 0..4 {
            let before = state.get(row, col);
            let after = sub_byte(before);
            state.set(row, col, after);
            observer.on_step(Step::ByteSubstituted {
                row,
                col,
                before,
                after,
            });
        }
    }
}

/// Rotates row `r` left by `r` positions; row 0 stays put.
pub fn shift_rows(state: &mut State, observer: &mut dyn StepObserver) {
    for row in 1..4 {
        let before = state.row(row);
        let after = rotate_word(before, row);
        state.set_row(row, after);
        observer.on_step(Step::RowShifted {
            row,
            amount: row,
            before,
            after,
        });
    }
}

/// Cyclically rotates a word left by `amount` bytes.
pub(crate) fn rotate_word(word: Word, amount: usize) -> Word {
    let mut rotated = [0u8; 4];
    for (i, slot) in rotated.iter_mut().enumerate() {
        *slot = word[(i + amount) % 4];
    }
    rotated
}

/// Mixes every column against the 02/03/01/01 circulant polynomial.
pub fn mix_columns(state: &mut State, observer: &mut dyn StepObserver) {
    for col in 0..4 {
        let before = state.column(col);
        let after = mix_single_column(before);
        state.set_column(col, after);
        observer.on_step(Step::ColumnMixed { col, before, after });
    }
}

fn mix_single_column(column: Word) -> Word {
    let [s0, s1, s2, s3] = column;
    [
        multiply(s0, 0x02) ^ multiply(s1, 0x03) ^ s2 ^ s3,
        s0 ^ multiply(s1, 0x02) ^ multiply(s2, 0x03) ^ s3,
        s0 ^ s1 ^ multiply(s2, 0x02) ^ multiply(s3, 0x03),
        multiply(s0, 0x03) ^ s1 ^ s2 ^ multiply(s3, 0x02),
    ]
}

/// XORs round `round`'s schedule words into the state, one word per column.
///
/// The word supplies a vertical slice: byte `row` of the word lands on cell
/// `(row, col)`.
pub fn add_round_key(
    state: &mut State,
    schedule: &KeySchedule,
    round: usize,
    observer: &mut dyn StepObserver,
) {
    for col in 0..NB {
        let before = state.column(col);
        let word = schedule.word(round, col);
        let mut after = before;
        for (byte, key_byte) in after.iter_mut().zip(word.iter()) {
            *byte ^= key_byte;
        }
        state.set_column(col, after);
        observer.on_step(Step::RoundKeyAdded {
            round,
            col,
            before,
            after,
        });
    }
}
