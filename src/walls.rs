use crate::grid::Grid;

/// `true` is passable floor, `false` is solid wall.
pub type Walls = Grid<bool>;

/// Open up wall cells trapped between floor directly above and below.
///
/// Neighbours are read from the unmodified input, and cells off the grid
/// count as wall. Applying the pass twice gives the same grid as applying it once.
pub fn normalize_walls(walls: &Walls) -> Walls {
    puffin::profile_function!();
    walls.map_with_coordinates(|&open, x, y| {
        if open {
            return true;
        }
        let (x, y) = (x as i32, y as i32);
        is_floor(walls, x, y - 1) && is_floor(walls, x, y + 1)
    })
}

fn is_floor(walls: &Walls, x: i32, y: i32) -> bool {
    walls.get(x, y).copied().unwrap_or(false)
}
