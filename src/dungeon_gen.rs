use tracing::debug;

use crate::area::{random_partition, Rect};
use crate::config::GenerationOptions;
use crate::constants::BORDER_WIDTH;
use crate::corridors::carve_corridors;
use crate::error::Result;
use crate::random::RandomStream;
use crate::rooms::pad_rooms;
use crate::tree::BspTree;
use crate::walls::{normalize_walls, Walls};

/// Result of dungeon generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    walls: Walls,
}

impl Dungeon {
    /// The generated layout: `true` is floor, `false` is wall.
    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.walls.get(x, y).copied().unwrap_or(false)
    }

    pub fn into_walls(self) -> Walls {
        self.walls
    }
}

/// Owns the state of one generation run: its random stream and the grid
/// being carved. Nothing is shared between runs.
pub struct DungeonGenerator {
    rng: RandomStream,
    walls: Walls,
}

impl DungeonGenerator {
    fn new(options: &GenerationOptions) -> Self {
        Self {
            rng: RandomStream::new(&options.seed),
            walls: Walls::new(options.width as usize, options.height as usize, false),
        }
    }

    /// Generate a dungeon from `options`.
    ///
    /// Fails when the options are invalid, or when the partition settings
    /// keep cutting at an edge so the split never terminates. The same
    /// options always give the same dungeon.
    pub fn generate(options: &GenerationOptions) -> Result<Dungeon> {
        puffin::profile_function!();
        options.validate()?;

        let mut gen = Self::new(options);

        // Keep a one-cell wall around the whole map
        let safe_area = Rect::new(
            BORDER_WIDTH,
            BORDER_WIDTH,
            options.width - 2 * BORDER_WIDTH,
            options.height - 2 * BORDER_WIDTH,
        );

        let partition = random_partition(&mut gen.rng, options.partition, safe_area)?;
        let leaf_count = partition.leaves().len();

        let rooms = pad_rooms(&mut gen.rng, options.padding, partition);
        let depth = rooms.depth();
        let room_count = gen.carve_rooms(&rooms);

        let corridor_count = carve_corridors(&mut gen.rng, &rooms, &mut gen.walls);

        let walls = normalize_walls(&gen.walls);

        debug!(
            seed = %options.seed,
            width = options.width,
            height = options.height,
            depth,
            leaves = leaf_count,
            rooms = room_count,
            corridors = corridor_count,
            "generated dungeon"
        );

        Ok(Dungeon { walls })
    }

    /// Mark every non-degenerate room as floor. Returns how many were carved.
    fn carve_rooms(&mut self, rooms: &BspTree<Rect>) -> usize {
        puffin::profile_function!();
        let mut carved = 0;
        for room in rooms.leaves() {
            if room.cell_count() == 0 {
                continue;
            }
            self.walls.set_area(room, true);
            carved += 1;
        }
        carved
    }
}

/// Generate a dungeon from `options`. See [`DungeonGenerator::generate`].
pub fn generate(options: &GenerationOptions) -> Result<Dungeon> {
    DungeonGenerator::generate(options)
}
