//! Room padding: shrink every partition leaf into the room carved inside it.

use crate::area::Rect;
use crate::random::{GaussianOptions, RandomStream};
use crate::tree::BspTree;

/// Replace every leaf of `partition` with its padded room, keeping the tree
/// shape. Branch nodes keep their original area.
///
/// Leaves are visited left to right, four margins each, so the draw order is
/// fixed for a given tree.
pub fn pad_rooms(rng: &mut RandomStream, padding: GaussianOptions, partition: BspTree<Rect>) -> BspTree<Rect> {
    puffin::profile_function!();
    partition.map_leaves(|leaf| pad_room(rng, padding, leaf))
}

/// Shrink `leaf` by independent random margins on each side.
///
/// Margins are drawn top, right, bottom, left. Each is clamped to the side
/// it is measured against, but the two margins of one axis may together
/// exceed it, leaving a zero or negative extent.
pub fn pad_room(rng: &mut RandomStream, padding: GaussianOptions, leaf: Rect) -> Rect {
    let top = rng.gaussian_offset(padding, leaf.height);
    let right = rng.gaussian_offset(padding, leaf.width);
    let bottom = rng.gaussian_offset(padding, leaf.height);
    let left = rng.gaussian_offset(padding, leaf.width);

    Rect::new(
        leaf.x + left,
        leaf.y + top,
        leaf.width - (left + right),
        leaf.height - (top + bottom),
    )
}
