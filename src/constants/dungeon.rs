//! Dungeon generation constants.

/// Areas narrower or shorter than this are never split
pub const MIN_PARTITION_SIZE: i32 = 10;
/// Largest accepted width or height
pub const MAX_DIMENSION: i32 = 4096;
/// Thickness of the solid wall kept around the whole map
pub const BORDER_WIDTH: i32 = 1;

/// Default seed text
pub const DEFAULT_SEED: &str = "1234";
/// Default dungeon width
pub const DEFAULT_WIDTH: i32 = 80;
/// Default dungeon height
pub const DEFAULT_HEIGHT: i32 = 40;
/// Default split position, as a fraction of the side being split
pub const DEFAULT_PARTITION_MU: f64 = 0.5;
/// Default standard deviation of the split position
pub const DEFAULT_PARTITION_SIGMA: f64 = 0.5;
/// Default room margin, as a fraction of the leaf side
pub const DEFAULT_PADDING_MU: f64 = 0.5;
/// Default standard deviation of the room margin
pub const DEFAULT_PADDING_SIGMA: f64 = 0.5;
