//! Text rendering of a generated dungeon.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FLOOR_GLYPH, WALL_GLYPH};
use crate::dungeon_gen::Dungeon;

/// Glyphs used for each kind of cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub wall: String,
    pub space: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wall: WALL_GLYPH.to_string(),
            space: FLOOR_GLYPH.to_string(),
        }
    }
}

/// Render one line per row, each cell drawn with the wall or space glyph.
/// No trailing newline.
pub fn render(options: &RenderOptions, dungeon: &Dungeon) -> String {
    puffin::profile_function!();
    dungeon
        .walls()
        .map(|&open| if open { options.space.as_str() } else { options.wall.as_str() })
        .inspect()
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&RenderOptions::default(), self))
    }
}
