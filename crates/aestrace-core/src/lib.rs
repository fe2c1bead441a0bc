//! Step-traced AES-128 reference implementation.
//!
//! This crate mirrors the FIPS-197 specification for one forward encryption
//! of one 16-byte block under a 128-bit key, and reports every intermediate
//! computation to an optional [`StepObserver`] so an external renderer can
//! display the algorithm as it runs. With no observer attached the engine is
//! a plain AES-128 block encryption.
//!
//! The implementation aims for clarity and observability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod error;
pub mod gf;
pub mod hex;
mod observer;
mod round;
mod sbox;
mod schedule;
mod state;

pub use crate::engine::{encrypt_block, CipherEngine, Encryption};
pub use crate::error::{Error, Result};
pub use crate::observer::{NullObserver, Step, StepObserver, Transform};
pub use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
pub use crate::sbox::{sub_byte, SBOX};
pub use crate::schedule::{Aes128Key, KeySchedule, NB, NK, NR, SCHEDULE_WORDS};
pub use crate::state::{Block, State, Word};
