//! Random perturbation sources for the simulated-AI mode.
//!
//! The optimizer never touches a global generator; callers hand in a
//! [`JitterSource`], so tests can substitute a fixed sequence.

use rand::Rng;

/// Supplies one perturbation factor per recommendation.
pub trait JitterSource {
    /// Returns a factor in `[-bound, bound]`.
    fn next_factor(&mut self, bound: f64) -> f64;
}

/// Uniform jitter drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomJitter<R>(pub R);

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn next_factor(&mut self, bound: f64) -> f64 {
        if bound <= 0.0 {
            return 0.0;
        }
        self.0.random_range(-bound..=bound)
    }
}

/// Replays a fixed sequence of factors, cycling when exhausted.
///
/// Factors are clamped to the requested bound.
#[derive(Debug, Clone)]
pub struct FixedJitter {
    factors: Vec<f64>,
    next: usize,
}

impl FixedJitter {
    pub fn new(factors: Vec<f64>) -> Self {
        Self { factors, next: 0 }
    }

    /// Always returns the same factor.
    pub fn constant(factor: f64) -> Self {
        Self::new(vec![factor])
    }
}

impl JitterSource for FixedJitter {
    fn next_factor(&mut self, bound: f64) -> f64 {
        if self.factors.is_empty() {
            return 0.0;
        }
        let factor = self.factors[self.next % self.factors.len()];
        self.next += 1;
        factor.clamp(-bound.abs(), bound.abs())
    }
}
