//! Boards: a finite grid of terrain tiles.
//!
//! A board stores terrain only. Animals and items are rolled on demand when
//! the cat steps onto a tile and are never kept on the board.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::{CoreError, CoreResult};

/// What a tile is made of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Plain tile, eligible for spawns.
    #[default]
    Empty,
    /// A tree trunk: the only place to climb up or down.
    Trunk,
    /// A patch of moss in the canopy: the only place to nap.
    Moss,
}

impl Terrain {
    /// Returns true for terrain that marks a point of interest.
    pub fn is_landmark(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Trunk => write!(f, "tree trunk"),
            Self::Moss => write!(f, "moss"),
        }
    }
}

/// Inclusive generation bounds of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest x coordinate.
    pub min_x: i32,
    /// Largest x coordinate.
    pub max_x: i32,
    /// Smallest y coordinate.
    pub min_y: i32,
    /// Largest y coordinate.
    pub max_y: i32,
}

impl Bounds {
    /// Create bounds from explicit limits. Not validated until a board is built.
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Bounds reaching `half_width` columns and `half_height` rows from the origin.
    pub fn centered(half_width: i32, half_height: i32) -> Self {
        Self::new(-half_width, half_width, -half_height, half_height)
    }

    /// Returns true if `min <= max` on both axes.
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        (i64::from(self.max_x) - i64::from(self.min_x) + 1).max(0) as usize
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        (i64::from(self.max_y) - i64::from(self.min_y) + 1).max(0) as usize
    }

    /// Returns true if the coordinate lies inside the bounds.
    pub fn contains(&self, coord: Coord) -> bool {
        (self.min_x..=self.max_x).contains(&coord.x)
            && (self.min_y..=self.max_y).contains(&coord.y)
    }
}

/// A grid of terrain tiles plus the bounds it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bounds: Bounds,
    tiles: BTreeMap<Coord, Terrain>,
}

impl Board {
    /// Build a board covering every coordinate in `bounds`, all `Empty`.
    pub fn generate(bounds: Bounds) -> CoreResult<Self> {
        if !bounds.is_valid() {
            return Err(CoreError::invalid_range(bounds));
        }

        let tiles = (bounds.min_x..=bounds.max_x)
            .flat_map(|x| {
                (bounds.min_y..=bounds.max_y).map(move |y| (Coord::new(x, y), Terrain::Empty))
            })
            .collect();

        Ok(Self { bounds, tiles })
    }

    /// The bounds this board was generated from.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if the board has no tiles. Never true for generated boards.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Membership test: can the cat stand on this coordinate?
    pub fn is_valid_location(&self, coord: Coord) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// Terrain at a coordinate, or `None` outside the board.
    pub fn terrain_at(&self, coord: Coord) -> Option<Terrain> {
        self.tiles.get(&coord).copied()
    }

    /// Overwrite the terrain of an existing tile. Returns false if the
    /// coordinate is not on the board.
    pub fn set_terrain(&mut self, coord: Coord, terrain: Terrain) -> bool {
        match self.tiles.get_mut(&coord) {
            Some(tile) => {
                *tile = terrain;
                true
            }
            None => false,
        }
    }

    /// Number of tiles with the given terrain.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.tiles.values().filter(|t| **t == terrain).count()
    }

    /// Empty tiles other than the origin, in coordinate order.
    pub fn empty_non_origin(&self) -> Vec<Coord> {
        self.tiles
            .iter()
            .filter(|(c, t)| **t == Terrain::Empty && !c.is_origin())
            .map(|(c, _)| *c)
            .collect()
    }

    /// Iterate over all tiles in coordinate order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, Terrain)> + '_ {
        self.tiles.iter().map(|(c, t)| (*c, *t))
    }
}
