//! Jitter sources for the final, explicit tie-break step of scoring.

use coursefeed_core::config::FeedConfig;
use coursefeed_core::traits::IJitterSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Always zero. Scoring becomes a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl IJitterSource for NoJitter {
    fn sample(&mut self, _max: f64) -> f64 {
        0.0
    }
}

/// Jitter is on only for a finite, positive bound.
fn enabled(max: f64) -> bool {
    max.is_finite() && max > 0.0
}

/// A constant offset, returned whenever jitter is enabled. Held inside `[0, max)`.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl IJitterSource for FixedJitter {
    fn sample(&mut self, max: f64) -> f64 {
        if !enabled(max) {
            return 0.0;
        }
        let below_max = max * (1.0 - f64::EPSILON);
        self.0.clamp(0.0, below_max)
    }
}

/// Reproducible jitter from a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IJitterSource for SeededJitter {
    fn sample(&mut self, max: f64) -> f64 {
        if !enabled(max) {
            return 0.0;
        }
        self.rng.gen_range(0.0..max)
    }
}

/// Fresh variety on every pass, from the thread-local RNG.
#[derive(Debug, Clone, Default)]
pub struct ThreadJitter {
    rng: ThreadRng,
}

impl IJitterSource for ThreadJitter {
    fn sample(&mut self, max: f64) -> f64 {
        if !enabled(max) {
            return 0.0;
        }
        self.rng.gen_range(0.0..max)
    }
}

/// Pick the jitter source the feed config asks for:
/// `jitter_max == 0` → [`NoJitter`], a seed → [`SeededJitter`], otherwise [`ThreadJitter`].
pub fn from_config(feed: &FeedConfig) -> Box<dyn IJitterSource> {
    if !enabled(feed.jitter_max) {
        Box::new(NoJitter)
    } else if let Some(seed) = feed.jitter_seed {
        Box::new(SeededJitter::new(seed))
    } else {
        Box::new(ThreadJitter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_jitter_is_reproducible_and_in_range() {
        let mut a = SeededJitter::new(7);
        let mut b = SeededJitter::new(7);
        for _ in 0..100 {
            let x = a.sample(5.0);
            assert_eq!(x, b.sample(5.0));
            assert!((0.0..5.0).contains(&x));
        }
    }

    #[test]
    fn disabled_jitter_is_zero_for_every_source() {
        assert_eq!(NoJitter.sample(5.0), 0.0);
        assert_eq!(FixedJitter(2.0).sample(0.0), 0.0);
        assert_eq!(SeededJitter::new(1).sample(0.0), 0.0);
        assert_eq!(ThreadJitter::default().sample(0.0), 0.0);
    }

    #[test]
    fn thread_jitter_stays_in_range() {
        let mut j = ThreadJitter::default();
        for _ in 0..100 {
            let x = j.sample(5.0);
            assert!((0.0..5.0).contains(&x));
        }
    }

    #[test]
    fn non_finite_bound_disables_jitter() {
        for max in [f64::INFINITY, f64::NAN] {
            assert_eq!(SeededJitter::new(1).sample(max), 0.0);
            assert_eq!(ThreadJitter::default().sample(max), 0.0);
            assert_eq!(FixedJitter(2.0).sample(max), 0.0);
        }
        let feed = FeedConfig {
            jitter_max: f64::INFINITY,
            ..FeedConfig::default()
        };
        assert_eq!(from_config(&feed).sample(feed.jitter_max), 0.0);
    }

    #[test]
    fn fixed_jitter_stays_below_the_bound() {
        assert_eq!(FixedJitter(2.5).sample(5.0), 2.5);
        let x = FixedJitter(9.0).sample(5.0);
        assert!((0.0..5.0).contains(&x));
        assert_eq!(FixedJitter(-1.0).sample(5.0), 0.0);
    }

    #[test]
    fn config_without_jitter_yields_zero() {
        let feed = FeedConfig {
            jitter_max: 0.0,
            jitter_seed: Some(3),
            ..FeedConfig::default()
        };
        let mut source = from_config(&feed);
        assert_eq!(source.sample(feed.jitter_max), 0.0);
    }
}
