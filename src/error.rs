use std::path::PathBuf;

use thiserror::Error;

use crate::constants::MAX_DIMENSION;

#[derive(Debug, Error)]
pub enum DungeonError {
    #[error("Invalid dimensions {width}x{height}: width and height must be between 1 and {}", MAX_DIMENSION)]
    InvalidDimensions { width: i32, height: i32 },
    #[error("Invalid {field} distribution: mu and sigma must be finite (got mu={mu}, sigma={sigma})")]
    InvalidDistribution { field: &'static str, mu: f64, sigma: f64 },
    #[error("Partitioning did not terminate within {depth} levels; try a partition mu nearer 0.5 or a larger sigma")]
    PartitionDiverged { depth: usize },
    #[error("Failed to read {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse configuration: {0}")]
    ParseConfig(#[from] serde_json::Error),
    #[error("Failed to start generation worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),
    #[error("Generation worker stopped before answering")]
    WorkerDisconnected,
    #[error("No generation request is pending")]
    NoPendingRequest,
}

pub type Result<T> = std::result::Result<T, DungeonError>;
