//! Corridor carving between rooms of sibling subtrees.

use tracing::trace;

use crate::area::Rect;
use crate::grid::Grid;
use crate::random::RandomStream;
use crate::tree::BspTree;

/// Connect sibling subtrees of the padded tree with elbow corridors.
///
/// Branches are visited in pre-order. For each one a room is picked from the
/// left subtree and one from the right, ignoring degenerate rooms. Both picks
/// always consume a draw; when either side has no room the branch gets no
/// corridor, which can leave parts of the dungeon unreachable.
///
/// Returns the number of corridors carved.
pub fn carve_corridors(rng: &mut RandomStream, rooms: &BspTree<Rect>, walls: &mut Grid<bool>) -> usize {
    puffin::profile_function!();
    let mut carved = 0;

    for branch in rooms.branches() {
        let Some((left, right)) = branch.children() else {
            continue;
        };
        let left_rooms = selectable_rooms(left);
        let right_rooms = selectable_rooms(right);

        let left_room = left_rooms.get(rng.pick_index(left_rooms.len()));
        let right_room = right_rooms.get(rng.pick_index(right_rooms.len()));

        match (left_room, right_room) {
            (Some(from), Some(to)) => {
                carve_elbow(rng, from, to, walls);
                carved += 1;
            }
            _ => trace!(area = ?branch.node(), "branch has no room on one side, skipping corridor"),
        }
    }

    carved
}

fn selectable_rooms(subtree: &BspTree<Rect>) -> Vec<Rect> {
    subtree
        .leaves()
        .into_iter()
        .filter(|room| !room.is_degenerate())
        .copied()
        .collect()
}

/// Carve an S-shaped corridor between a random cell of `room_a` and a
/// random cell of `room_b`.
///
/// The x and y coordinates of the two points are sorted independently.
/// The corridor runs down column `from_x` to the halfway row, across the
/// halfway row, then down column `to_x` to `to_y`.
pub fn carve_elbow(rng: &mut RandomStream, room_a: &Rect, room_b: &Rect, walls: &mut Grid<bool>) {
    let xa = room_a.x + offset_within(rng, room_a.width);
    let xb = room_b.x + offset_within(rng, room_b.width);
    let ya = room_a.y + offset_within(rng, room_a.height);
    let yb = room_b.y + offset_within(rng, room_b.height);

    let from_x = xa.min(xb);
    let to_x = xa.max(xb);
    let from_y = ya.min(yb);
    let to_y = ya.max(yb);
    let halfway_y = (from_y + to_y).div_euclid(2);

    create_v_corridor(walls, from_x, from_y, halfway_y);
    create_h_corridor(walls, from_x, to_x, halfway_y);
    create_v_corridor(walls, to_x, halfway_y + 1, to_y);
}

fn offset_within(rng: &mut RandomStream, extent: i32) -> i32 {
    (rng.next_unit() * f64::from(extent)).floor() as i32
}

fn create_h_corridor(walls: &mut Grid<bool>, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        walls.set(x, y, true);
    }
}

/// Inclusive on both ends; an empty range when `y1 > y2`.
fn create_v_corridor(walls: &mut Grid<bool>, x: i32, y1: i32, y2: i32) {
    for y in y1..=y2 {
        walls.set(x, y, true);
    }
}
