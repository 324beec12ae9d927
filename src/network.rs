//! The competitive-learning network: unit state, initialization, and the
//! per-frame step engine.
//!
//! Each unit holds one weight vector (a direction estimate over its input
//! window) and a running eigenvalue estimate. Every frame, each unit is fed
//! a slice of the incoming magnitude spectrum; the unit whose weights align
//! best with its slice wins and is pulled toward that input (Hebbian/Oja
//! style), while every unit drifts slowly toward uniform noise so that no
//! unit stays frozen when the signal's spectral content moves on.

use crate::config::NetworkConfig;
use crate::error::{EigenearError, Result};
use crate::vector;
use ndarray::{Array1, ArrayView1};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Epsilon added to input-window magnitudes before normalization, so that a
/// silent frame divides by something finite.
const NORM_EPSILON: f32 = 1e-6;

/// One competitive-learning element
#[derive(Clone, Debug)]
pub struct Unit {
    /// Current direction estimate; not necessarily unit-norm after updates
    pub weights: Array1<f32>,
    /// Exponentially-weighted estimate of squared winning alignment
    pub eigenvalue: f32,
}

/// The network: a fixed population of units plus its seeded random source.
///
/// Single-writer by design: `step` mutates unit state with no internal
/// synchronization, so concurrent calls on the same network are a data race
/// and must be serialized by the caller.
#[derive(Clone, Debug)]
pub struct Network {
    config: NetworkConfig,
    units: Vec<Unit>,
    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
    /// Frames processed so far
    frames: u64,
    /// Winner of the most recent step
    last_winner: usize,
}

/// Read-only copy of network state for presenters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub frames: u64,
    pub winner: usize,
    pub weights: Vec<Vec<f32>>,
    pub eigenvalues: Vec<f32>,
}

impl Network {
    /// Create a network with a random seed
    pub fn new(config: NetworkConfig) -> Result<Self> {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create a network with a specific seed for reproducibility.
    ///
    /// Initial weights are uniform in [0, 1); eigenvalues start at zero.
    pub fn new_with_seed(config: NetworkConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let units = (0..config.n_units)
            .map(|_| Unit {
                weights: Array1::from_shape_fn(config.synapse_count, |_| rng.gen::<f32>()),
                eigenvalue: 0.0,
            })
            .collect();

        Ok(Self {
            config,
            units,
            rng,
            seed,
            frames: 0,
            last_winner: 0,
        })
    }

    /// Create a network with explicit initial weights (tests and tooling).
    ///
    /// Every inner vector must have length `synapse_count`, and there must be
    /// exactly `n_units` of them.
    pub fn from_weights(
        config: NetworkConfig,
        seed: u64,
        weights: Vec<Vec<f32>>,
    ) -> Result<Self> {
        config.validate()?;
        if weights.len() != config.n_units {
            return Err(EigenearError::InvalidConfiguration(format!(
                "expected {} weight vectors, got {}",
                config.n_units,
                weights.len()
            )));
        }
        for (i, w) in weights.iter().enumerate() {
            if w.len() != config.synapse_count {
                return Err(EigenearError::InvalidConfiguration(format!(
                    "unit {} has {} weights, expected {}",
                    i,
                    w.len(),
                    config.synapse_count
                )));
            }
        }

        let units = weights
            .into_iter()
            .map(|w| Unit {
                weights: Array1::from_vec(w),
                eigenvalue: 0.0,
            })
            .collect();

        Ok(Self {
            config,
            units,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            frames: 0,
            last_winner: 0,
        })
    }

    /// Advance the network by one frame and return the winning unit's index.
    ///
    /// Rejects frames shorter than `synapse_count` with `InvalidFrameLength`
    /// before touching any unit, so a failed step leaves the network
    /// bit-identical.
    pub fn step(&mut self, frame: &[f32]) -> Result<usize> {
        let synapses = self.config.synapse_count;
        if frame.len() < synapses {
            return Err(EigenearError::InvalidFrameLength {
                got: frame.len(),
                required: synapses,
            });
        }

        // Stride between each unit's input window. Windows may overlap or
        // leave gaps; each unit attends to its own sub-band of the frame.
        let shift = (frame.len() - synapses) / self.units.len();

        let alpha = self.config.learning_rate;
        let beta = self.config.forget_rate;

        // Find the unit whose weights align best with its slice of the input.
        // The sign flag is carried across the whole loop, not reset per unit:
        // once any unit sees a negative alignment, the flipped sign applies to
        // the comparison and the final update for all later units too.
        let mut best_align = -1.0f32;
        let mut sign = 1.0f32;
        let mut winner: Option<(usize, Array1<f32>)> = None;

        for (i, unit) in self.units.iter_mut().enumerate() {
            let start = i * shift;
            let raw = ArrayView1::from(&frame[start..start + synapses]);
            let xnorm = vector::magnitude(raw) + NORM_EPSILON;
            let x = vector::scale(raw, 1.0 / xnorm);

            let mut d = vector::dot(unit.weights.view(), x.view());
            if d < 0.0 {
                d = -d;
                sign = -1.0;
            }
            if sign * d > best_align {
                best_align = d;
                winner = Some((i, x));
            }

            // Forget: every unit drifts toward uniform noise, winner or not.
            for w in unit.weights.iter_mut() {
                *w = (1.0 - beta) * *w + beta * self.rng.gen::<f32>();
            }
        }

        // Pull the winner toward its normalized input and fold the squared
        // alignment into its eigenvalue estimate. The effective rate is
        // unclamped: extreme alignments with a large alpha can push the decay
        // factor past [0, 1].
        if let Some((index, x)) = winner {
            let rate = alpha * sign * best_align;
            let unit = &mut self.units[index];
            for (w, &xj) in unit.weights.iter_mut().zip(x.iter()) {
                *w = (1.0 - rate) * *w + rate * sign * xj;
            }
            unit.eigenvalue = (1.0 - rate) * unit.eigenvalue + rate * best_align * best_align;
            self.last_winner = index;
        }

        self.frames += 1;
        Ok(self.last_winner)
    }

    /// Read-only view of the unit population
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Eigenvalue estimates in unit order
    pub fn eigenvalues(&self) -> Vec<f32> {
        self.units.iter().map(|u| u.eigenvalue).collect()
    }

    /// Winner of the most recent step (0 before any step has run)
    pub fn last_winner(&self) -> usize {
        self.last_winner
    }

    /// Frames processed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Network configuration
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Owned snapshot of the full network state for presenters
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            frames: self.frames,
            winner: self.last_winner,
            weights: self.units.iter().map(|u| u.weights.to_vec()).collect(),
            eigenvalues: self.eigenvalues(),
        }
    }
}
