//! Uniform choice over small sets, behind a trait so tests can script the draws.

use crate::error::SchedulingError;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// One operation: draw a uniform index in `0..len`.
pub trait ChoiceSource: Send {
    /// `len` is always at least 1.
    fn draw_index(&mut self, len: usize) -> Result<usize, SchedulingError>;
}

/// Pick one element of `items` through `source`.
pub fn choose<'a, T>(
    source: &mut dyn ChoiceSource,
    items: &'a [T],
    what: &'static str,
) -> Result<&'a T, SchedulingError> {
    if items.is_empty() {
        return Err(SchedulingError::EmptyChoiceSet(what));
    }
    let index = source.draw_index(items.len())?;
    items.get(index).ok_or(SchedulingError::IndexOutOfRange {
        index,
        len: items.len(),
    })
}

/// Default source: `StdRng` seeded from OS entropy on first draw.
/// An entropy failure surfaces as `SourceUnavailable` instead of a panic.
#[derive(Debug, Clone, Default)]
pub struct EntropySource {
    rng: Option<StdRng>,
}

impl ChoiceSource for EntropySource {
    fn draw_index(&mut self, len: usize) -> Result<usize, SchedulingError> {
        if self.rng.is_none() {
            let seeded = StdRng::from_rng(OsRng)
                .map_err(|e| SchedulingError::SourceUnavailable(e.to_string()))?;
            self.rng = Some(seeded);
        }
        match self.rng.as_mut() {
            Some(rng) => Ok(rng.gen_range(0..len)),
            None => Err(SchedulingError::RandomnessExhausted),
        }
    }
}

/// `StdRng` seeded either from a fixed value (reproducible) or from OS entropy.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fails when the operating system cannot provide entropy.
    pub fn from_os_entropy() -> Result<Self, SchedulingError> {
        let rng = StdRng::from_rng(OsRng)
            .map_err(|e| SchedulingError::SourceUnavailable(e.to_string()))?;
        Ok(Self { rng })
    }
}

impl ChoiceSource for SeededSource {
    fn draw_index(&mut self, len: usize) -> Result<usize, SchedulingError> {
        Ok(self.rng.gen_range(0..len))
    }
}

/// Replays a fixed list of indices, then reports exhaustion.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl ChoiceSource for ScriptedSource {
    fn draw_index(&mut self, _len: usize) -> Result<usize, SchedulingError> {
        self.draws
            .pop_front()
            .ok_or(SchedulingError::RandomnessExhausted)
    }
}
