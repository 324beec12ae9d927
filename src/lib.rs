//! # eigenear
//!
//! Online winner-take-all competitive-learning network for audio spectral
//! frames. A small, fixed population of units incrementally learns dominant
//! recurring spectral shapes from a stream of frequency-magnitude frames,
//! producing per-unit eigenvector-like direction estimates and
//! eigenvalue-like magnitude estimates, refreshed every frame.
//!
//! ## Features
//!
//! - **Online**: one synchronous, CPU-bound `step` per incoming frame
//! - **Competitive**: only the best-aligned unit adapts toward the input
//! - **Forgetful**: every unit drifts slowly toward noise, so the population
//!   re-specializes as the signal's spectral content moves
//! - **Reproducible**: seeded random number generation
//! - **Configurable**: YAML configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use eigenear::{Network, NetworkConfig};
//!
//! let config = NetworkConfig::default();
//! let mut network = Network::new_with_seed(config, 42).unwrap();
//!
//! // One frame of magnitude samples per tick, from any analyser
//! let frame = vec![0.5f32; 128];
//! let winner = network.step(&frame).unwrap();
//!
//! // Presenters read a snapshot after each step
//! let snapshot = network.snapshot();
//! assert_eq!(snapshot.winner, winner);
//! ```
//!
//! The frame source and any rendering are external collaborators: the core
//! takes one frame in and hands one state snapshot out, per tick. Callers
//! must serialize `step` calls; the network has no internal synchronization.

pub mod config;
pub mod error;
pub mod network;
pub mod source;
pub mod stats;
pub mod vector;

// Re-export main types
pub use config::{Config, NetworkConfig, SourceConfig};
pub use error::EigenearError;
pub use network::{Network, NetworkSnapshot, Unit};
pub use source::SyntheticSource;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark against the synthetic source
pub fn benchmark(frames: u64, config: Config, seed: u64) -> BenchmarkResult {
    use std::time::Instant;

    let mut network =
        Network::new_with_seed(config.network.clone(), seed).expect("valid benchmark config");
    let mut source = SyntheticSource::new(config.source.clone(), seed);

    let start = Instant::now();
    for _ in 0..frames {
        let frame = source.next_frame();
        network.step(&frame).expect("frame_len >= synapse_count");
    }
    let elapsed = start.elapsed();

    let evals = network.eigenvalues();
    let (dominant_unit, eigenvalue_max) = evals
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, &v)| (i, v))
        .unwrap_or((0, 0.0));

    BenchmarkResult {
        frames,
        elapsed_secs: elapsed.as_secs_f64(),
        frames_per_second: frames as f64 / elapsed.as_secs_f64(),
        dominant_unit,
        eigenvalue_max,
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub frames: u64,
    pub elapsed_secs: f64,
    pub frames_per_second: f64,
    pub dominant_unit: usize,
    pub eigenvalue_max: f32,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Frames: {}", self.frames)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} frames/s", self.frames_per_second)?;
        writeln!(f, "Dominant unit: {}", self.dominant_unit)?;
        writeln!(f, "Max eigenvalue: {:.4}", self.eigenvalue_max)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_benchmark() {
        let result = benchmark(100, Config::default(), 42);

        assert_eq!(result.frames, 100);
        assert!(result.frames_per_second > 0.0);
        assert!(result.dominant_unit < 10);
    }
}
