//! Plain-text reporter that prints the cipher as it runs.

use std::io::{self, Write};

use aestrace_core::{hex, State, Step, StepObserver, Transform};

/// Prints schedule words and state grids to a writer as the engine advances.
///
/// Schedule words come out one per line as they are derived, then each
/// sub-transform is followed by the state as a 4x4 grid of two-digit hex.
/// Write failures are deferred rather than surfaced mid-encryption, since
/// the observer interface cannot report them; call [`Reporter::finish`] to
/// pick up any error once the encryption is done.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Consumes the reporter, returning the writer or the first deferred
    /// write error.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_none() {
            if let Err(error) = write(&mut self.out) {
                self.error = Some(error);
            }
        }
    }
}

fn label(transform: Transform) -> &'static str {
    match transform {
        Transform::AddRoundKey => "add round key",
        Transform::SubBytes => "sub bytes",
        Transform::ShiftRows => "shift rows",
        Transform::MixColumns => "mix columns",
    }
}

impl<W: Write> StepObserver for Reporter<W> {
    fn on_step(&mut self, step: Step) {
        if let Step::ScheduleWord { index, word } = step {
            self.emit(|out| writeln!(out, "w{index:02} {}", hex::encode(&word)));
        }
    }

    fn on_transform(&mut self, round: usize, transform: Transform, state: &State) {
        self.emit(|out| {
            writeln!(out, "round {round:2} {}:", label(transform))?;
            for row in 0..4 {
                let cells = state.row(row);
                writeln!(
                    out,
                    "  {:02x} {:02x} {:02x} {:02x}",
                    cells[0], cells[1], cells[2], cells[3]
                )?;
            }
            Ok(())
        });
    }
}
