//! Step events emitted by the engine and the observer trait that consumes
//! them.

use crate::state::{State, Word};

/// The round sub-transform a state snapshot follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// A schedule word was XORed into each column.
    AddRoundKey,
    /// Every byte went through the S-box.
    SubBytes,
    /// Rows were rotated by their row index.
    ShiftRows,
    /// Columns were mixed against the 02/03/01/01 polynomial.
    MixColumns,
}

/// One discrete operation performed during an encryption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A key-schedule word was seeded from the raw key or derived.
    ScheduleWord {
        /// Position in the 44-word schedule.
        index: usize,
        /// The finished word.
        word: Word,
    },
    /// One state byte was substituted through the S-box.
    ByteSubstituted {
        /// State row of the byte.
        row: usize,
        /// State column of the byte.
        col: usize,
        /// Value before substitution.
        before: u8,
        /// Value after substitution.
        after: u8,
    },
    /// A state row was cyclically rotated left.
    RowShifted {
        /// The rotated row.
        row: usize,
        /// Rotation distance in bytes.
        amount: usize,
        /// Row contents before the rotation.
        before: Word,
        /// Row contents after the rotation.
        after: Word,
    },
    /// One state column was mixed.
    ColumnMixed {
        /// The mixed column.
        col: usize,
        /// Column contents before mixing.
        before: Word,
        /// Column contents after mixing.
        after: Word,
    },
    /// A schedule word was XORed down one state column.
    RoundKeyAdded {
        /// Round the key word belongs to.
        round: usize,
        /// The column it was added to.
        col: usize,
        /// Column contents before the XOR.
        before: Word,
        /// Column contents after the XOR.
        after: Word,
    },
}

/// Sink for engine step events.
///
/// The engine only ever calls into the observer; nothing flows back, so an
/// implementation cannot change the ciphertext. Both methods default to
/// doing nothing, and the engine introduces no pacing of its own; any
/// animation delay belongs to the observer.
pub trait StepObserver {
    /// Receives each discrete operation as it happens.
    fn on_step(&mut self, step: Step) {
        let _ = step;
    }

    /// Receives the full state after each sub-transform of each round.
    fn on_transform(&mut self, round: usize, transform: Transform, state: &State) {
        let _ = (round, transform, state);
    }
}

/// Observer that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {}
