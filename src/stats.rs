//! Statistics tracking for a learning session.

use crate::network::Network;
use crate::vector;
use serde::{Deserialize, Serialize};

/// Statistics snapshot for a step of the session
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Frames processed so far
    pub frames: u64,
    /// Winner of the most recent step
    pub winner: usize,
    /// Unit with the largest eigenvalue estimate
    pub dominant_unit: usize,
    /// Largest eigenvalue estimate
    pub eigenvalue_max: f32,
    /// Mean eigenvalue estimate across units
    pub eigenvalue_mean: f32,
    /// Mean weight-vector norm across units
    pub weight_norm_mean: f32,
    /// Steps per second (performance)
    pub steps_per_second: f32,
}

impl Stats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats from the current network state
    pub fn update(&mut self, network: &Network) {
        self.frames = network.frames();
        self.winner = network.last_winner();

        let evals = network.eigenvalues();
        let n = evals.len() as f32;

        self.dominant_unit = evals
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.eigenvalue_max = evals.iter().cloned().fold(f32::MIN, f32::max);
        self.eigenvalue_mean = evals.iter().sum::<f32>() / n;

        self.weight_norm_mean = network
            .units()
            .iter()
            .map(|u| vector::magnitude(u.weights.view()))
            .sum::<f32>()
            / n;
    }

    /// Save stats to JSON file
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    /// Load stats from JSON file
    pub fn load_json(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "F:{:7} | Win:{:2} | Dom:{:2} | Lmax:{:.4} | Lmean:{:.4} | |w|:{:.2}",
            self.frames,
            self.winner,
            self.dominant_unit,
            self.eigenvalue_max,
            self.eigenvalue_mean,
            self.weight_norm_mean,
        )
    }
}

/// Historical statistics tracker
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded stats snapshots
    pub snapshots: Vec<Stats>,
    /// Recording interval
    pub interval: u64,
}

impl StatsHistory {
    /// Create new history with recording interval
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    /// Record a stats snapshot
    pub fn record(&mut self, stats: Stats) {
        self.snapshots.push(stats);
    }

    /// Get stats at a specific frame count (approximate)
    pub fn get_at(&self, frames: u64) -> Option<&Stats> {
        let index = (frames / self.interval) as usize;
        self.snapshots.get(index)
    }

    /// Maximum eigenvalue over time
    pub fn eigenvalue_series(&self) -> Vec<(u64, f32)> {
        self.snapshots
            .iter()
            .map(|s| (s.frames, s.eigenvalue_max))
            .collect()
    }

    /// Winner over time
    pub fn winner_series(&self) -> Vec<(u64, usize)> {
        self.snapshots.iter().map(|s| (s.frames, s.winner)).collect()
    }

    /// Save history to JSON file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)
    }

    /// Load history from JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;

    #[test]
    fn test_stats_update() {
        let config = NetworkConfig {
            n_units: 3,
            synapse_count: 4,
            learning_rate: 0.05,
            forget_rate: 0.0,
        };
        let mut net = Network::new_with_seed(config, 5).unwrap();
        let frame = vec![0.5f32; 12];
        for _ in 0..10 {
            net.step(&frame).unwrap();
        }

        let mut stats = Stats::new();
        stats.update(&net);

        assert_eq!(stats.frames, 10);
        assert!(stats.winner < 3);
        assert!(stats.dominant_unit < 3);
        assert!(stats.eigenvalue_max >= stats.eigenvalue_mean);
        assert!(stats.weight_norm_mean > 0.0);
        assert!(!stats.summary().is_empty());
    }

    #[test]
    fn test_history_series() {
        let mut history = StatsHistory::new(10);
        for i in 0..5u64 {
            let stats = Stats {
                frames: i * 10,
                eigenvalue_max: i as f32,
                ..Stats::default()
            };
            history.record(stats);
        }

        assert_eq!(history.snapshots.len(), 5);
        assert_eq!(history.get_at(20).map(|s| s.frames), Some(20));

        let series = history.eigenvalue_series();
        assert_eq!(series.len(), 5);
        assert_eq!(series[4], (40, 4.0));
    }
}
