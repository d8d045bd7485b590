//! Text rendering constants.

/// Glyph drawn for solid wall cells
pub const WALL_GLYPH: &str = "#";
/// Glyph drawn for passable floor cells
pub const FLOOR_GLYPH: &str = ".";
