//! Reproducible dungeon layouts from a text seed.
//!
//! A map is recursively partitioned with Gaussian split offsets, each leaf is
//! shrunk into a room, sibling subtrees are joined with elbow corridors, and
//! thin wall slivers are opened up. The same [`GenerationOptions`] always give
//! the same [`Dungeon`].
//!
//! ```
//! use seeded_dungeon::{generate, GenerationOptions};
//!
//! let options = GenerationOptions::new("1234", 80, 40).with_padding(0.2, 1.0);
//! let dungeon = generate(&options).unwrap();
//! assert_eq!((dungeon.width(), dungeon.height()), (80, 40));
//! assert!(!dungeon.is_floor(0, 0));
//! ```

pub mod area;
pub mod cli;
pub mod config;
pub mod constants;
pub mod corridors;
pub mod dungeon_gen;
pub mod error;
pub mod grid;
pub mod logging;
pub mod random;
pub mod renderer;
pub mod rooms;
pub mod tree;
pub mod walls;
pub mod worker;

pub use area::Rect;
pub use config::GenerationOptions;
pub use dungeon_gen::{generate, Dungeon, DungeonGenerator};
pub use error::{DungeonError, Result};
pub use grid::Grid;
pub use random::{GaussianOptions, RandomStream};
pub use renderer::{render, RenderOptions};
pub use tree::BspTree;
pub use walls::{normalize_walls, Walls};
pub use worker::GeneratorWorker;
