//! Observer implementations for `aestrace-core`.
//!
//! The core emits step events; this crate supplies the two consumers used
//! outside of tests: a [`Recorder`] that keeps every event for later
//! inspection, and a [`Reporter`] that renders grids of hex bytes to a
//! writer as the cipher advances.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod recorder;
mod reporter;

pub use crate::recorder::{Recorder, Snapshot};
pub use crate::reporter::Reporter;
