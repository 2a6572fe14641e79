use std::env;

use log::warn;

/// Environment variable overriding [`GeneratorConfig::parallel_threshold`].
pub const PARALLEL_THRESHOLD_ENV: &str = "BGMOVE_PARALLEL_THRESHOLD";

/// Tuning knobs for roll enumeration. Results never depend on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// A search layer with at least this many open nodes is expanded on the rayon pool.
    /// `usize::MAX` keeps everything on the calling thread.
    pub parallel_threshold: usize,
}

impl GeneratorConfig {
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

    pub fn sequential() -> Self {
        GeneratorConfig { parallel_threshold: usize::MAX }
    }

    /// Default configuration with overrides from the environment applied.
    pub fn from_env() -> Self {
        let mut config = GeneratorConfig::default();
        if let Ok(raw) = env::var(PARALLEL_THRESHOLD_ENV) {
            match raw.trim().parse() {
                Ok(threshold) => config.parallel_threshold = threshold,
                Err(_) => warn!("ignoring {PARALLEL_THRESHOLD_ENV}={raw:?}: not an unsigned integer"),
            }
        }
        config
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig { parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_never_reaches_threshold() {
        assert_eq!(GeneratorConfig::default().parallel_threshold, 64);
        assert_eq!(GeneratorConfig::sequential().parallel_threshold, usize::MAX);
    }
}
