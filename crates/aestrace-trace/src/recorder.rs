//! Event recorder for inspection after an encryption completes.

use aestrace_core::{State, Step, StepObserver, Transform, Word};

/// A state image captured right after one sub-transform finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Round the transform belongs to.
    pub round: usize,
    /// The transform that produced this state.
    pub transform: Transform,
    /// The state as the transform left it.
    pub state: State,
}

/// Collects every step event and state snapshot in arrival order.
///
/// Useful for renderers that want to play an encryption back at their own
/// pace, and for asserting on intermediate values in tests.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    steps: Vec<Step>,
    snapshots: Vec<Snapshot>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded step events, oldest first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// All recorded state snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The key-schedule words seen so far, in expansion order.
    pub fn schedule_words(&self) -> Vec<Word> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::ScheduleWord { word, .. } => Some(*word),
                _ => None,
            })
            .collect()
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.snapshots.clear();
    }
}

impl StepObserver for Recorder {
    fn on_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    fn on_transform(&mut self, round: usize, transform: Transform, state: &State) {
        self.snapshots.push(Snapshot {
            round,
            transform,
            state: *state,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aestrace_core::{Aes128Key, CipherEngine, SCHEDULE_WORDS};
    use rand::RngCore;

    #[test]
    fn records_every_schedule_word() {
        let mut rng = rand::thread_rng();
        let mut key_bytes = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);

        let mut recorder = Recorder::new();
        let encryption =
            CipherEngine::new(Aes128Key::from(key_bytes)).encrypt_observed(&[0u8; 16], &mut recorder);

        let words = recorder.schedule_words();
        assert_eq!(words.len(), SCHEDULE_WORDS);
        assert_eq!(&words[..], &encryption.schedule.words()[..]);
    }

    #[test]
    fn final_snapshot_is_the_ciphertext_state() {
        let key = Aes128Key::from([0u8; 16]);
        let mut recorder = Recorder::new();
        let encryption = CipherEngine::new(key).encrypt_observed(&[0u8; 16], &mut recorder);

        let last = recorder.snapshots().last().unwrap();
        assert_eq!(last.round, 10);
        assert_eq!(last.transform, Transform::AddRoundKey);
        assert_eq!(last.state.to_block(), encryption.ciphertext);
    }

    #[test]
    fn snapshot_counts_follow_the_round_table() {
        let mut recorder = Recorder::new();
        CipherEngine::new(Aes128Key::from([1u8; 16])).encrypt_observed(&[2u8; 16], &mut recorder);

        let per_round = |round: usize| {
            recorder
                .snapshots()
                .iter()
                .filter(|s| s.round == round)
                .count()
        };
        assert_eq!(per_round(0), 1);
        for round in 1..10 {
            assert_eq!(per_round(round), 4);
        }
        assert_eq!(per_round(10), 3);

        let mixes = recorder
            .snapshots()
            .iter()
            .filter(|s| s.transform == Transform::MixColumns)
            .count();
        assert_eq!(mixes, 9);
    }

    #[test]
    fn clear_empties_both_logs() {
        let mut recorder = Recorder::new();
        CipherEngine::new(Aes128Key::from([3u8; 16])).encrypt_observed(&[4u8; 16], &mut recorder);
        assert!(!recorder.steps().is_empty());
        recorder.clear();
        assert!(recorder.steps().is_empty());
        assert!(recorder.snapshots().is_empty());
    }
}
