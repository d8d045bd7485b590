//! Rectangles and the recursive area partitioner.

use crate::constants::MIN_PARTITION_SIZE;
use crate::error::{DungeonError, Result};
use crate::random::{GaussianOptions, RandomStream};
use crate::tree::BspTree;

/// A rectangle of grid cells.
///
/// Padded rooms can end up with a negative extent when their margins
/// overlap; such a rectangle covers no cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Zero-sized along either axis. Degenerate rooms never take part in
    /// corridor selection.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of cells covered, zero for degenerate or inverted rectangles.
    pub fn cell_count(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.width as usize * self.height as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    /// Cut along x: left and right halves share the full height
    Horizontal,
    /// Cut along y: top and bottom halves share the full width
    Vertical,
}

impl Axis {
    fn flip(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Recursively split `area` into a BSP tree, alternating axis and starting
/// with a horizontal split.
///
/// Each split draws its offset from a normal distribution centred on
/// `partition.mu` of the side being cut. Areas narrower or shorter than
/// [`MIN_PARTITION_SIZE`] become leaves. Branch nodes keep the unsplit area.
///
/// An offset clamped to either edge hands one child the whole parent area.
/// If that keeps happening the recursion never bottoms out, so it gives up
/// with [`DungeonError::PartitionDiverged`] past `2 * (width + height)` levels.
pub fn random_partition(rng: &mut RandomStream, partition: GaussianOptions, area: Rect) -> Result<BspTree<Rect>> {
    puffin::profile_function!();
    let max_depth = 2 * (area.width.max(0) as usize + area.height.max(0) as usize);
    partition_along(rng, partition, Axis::Horizontal, area, 0, max_depth)
}

fn partition_along(
    rng: &mut RandomStream,
    partition: GaussianOptions,
    axis: Axis,
    area: Rect,
    depth: usize,
    max_depth: usize,
) -> Result<BspTree<Rect>> {
    if area.width < MIN_PARTITION_SIZE || area.height < MIN_PARTITION_SIZE {
        return Ok(BspTree::leaf(area));
    }
    if depth >= max_depth {
        return Err(DungeonError::PartitionDiverged { depth: max_depth });
    }

    let (first, second) = match axis {
        Axis::Horizontal => split_horizontally(rng, partition, area),
        Axis::Vertical => split_vertically(rng, partition, area),
    };

    let next = axis.flip();
    let left = partition_along(rng, partition, next, first, depth + 1, max_depth)?;
    let right = partition_along(rng, partition, next, second, depth + 1, max_depth)?;
    Ok(BspTree::branch(area, left, right))
}

fn split_horizontally(rng: &mut RandomStream, partition: GaussianOptions, area: Rect) -> (Rect, Rect) {
    let split_x = rng.gaussian_offset(partition, area.width);
    let left = Rect::new(area.x, area.y, split_x, area.height);
    let right = Rect::new(area.x + split_x, area.y, area.width - split_x, area.height);
    (left, right)
}

fn split_vertically(rng: &mut RandomStream, partition: GaussianOptions, area: Rect) -> (Rect, Rect) {
    let split_y = rng.gaussian_offset(partition, area.height);
    let top = Rect::new(area.x, area.y, area.width, split_y);
    let bottom = Rect::new(area.x, area.y + split_y, area.width, area.height - split_y);
    (top, bottom)
}
