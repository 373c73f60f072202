//! Uniform random sources for the variate samplers.
//!
//! Every draw in the crate comes through [`UniformSource`], so a test can swap
//! the platform RNG for a scripted sequence and get reproducible rankings.

use rand::rngs::ThreadRng;
use rand::{Rng, RngExt};

use crate::error::SamplingError;

/// A source of uniform draws in [0, 1).
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Adapts any `rand` generator into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ThreadRng> {
    /// The thread-local generator, the default source for ranking.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of uniforms, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<f64>,
    consumed: usize,
}

impl ReplaySource {
    pub fn new(values: Vec<f64>) -> Result<Self, SamplingError> {
        if values.is_empty() {
            return Err(SamplingError::EmptyReplay);
        }
        if let Some(&bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(SamplingError::UniformOutOfRange(bad));
        }
        Ok(Self { values, consumed: 0 })
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl UniformSource for ReplaySource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.consumed % self.values.len()];
        self.consumed += 1;
        value
    }
}
