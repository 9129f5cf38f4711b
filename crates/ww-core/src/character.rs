//! The player's cat: position, hunger economy, inventory, and progression.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::item::{BerryColor, Boost, Item};

/// Hunger a brand-new cat starts with.
pub const STARTING_HUNGER: u32 = 100;
/// Animals to help before the first level-up.
pub const STARTING_PROGRESS: u32 = 5;
/// Berries of each color in the starting satchel.
pub const STARTING_BERRIES: u32 = 1;

/// Which board the cat is on. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// On the forest floor.
    #[default]
    Ground,
    /// Up in the canopy.
    Tree,
}

/// State of the final challenge. Only ever moves forward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FinalChallenge {
    /// Level 3 not reached yet.
    #[default]
    Locked,
    /// Unlocked, the Lynx still needs curing.
    Unlocked,
    /// The Lynx has been cured.
    Completed,
}

/// Counts of everything in the cat's satchel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Catnip held.
    pub catnip: u32,
    /// Silvervine held.
    pub silvervine: u32,
    /// Berries held, indexed by [`BerryColor::index`].
    pub berries: [u32; 5],
}

impl Inventory {
    /// No boosts and `berries_each` of every color.
    pub fn starting(berries_each: u32) -> Self {
        Self {
            catnip: 0,
            silvervine: 0,
            berries: [berries_each; 5],
        }
    }

    /// How many of `item` are held.
    pub fn count(&self, item: Item) -> u32 {
        match item {
            Item::Boost(Boost::Catnip) => self.catnip,
            Item::Boost(Boost::Silvervine) => self.silvervine,
            Item::Berry(color) => self.berries[color.index()],
        }
    }

    /// Berries of one color held.
    pub fn berries(&self, color: BerryColor) -> u32 {
        self.berries[color.index()]
    }

    /// Total berries across all colors.
    pub fn total_berries(&self) -> u32 {
        self.berries.iter().sum()
    }

    /// Put an item in the satchel.
    pub fn add(&mut self, item: Item) {
        *self.slot_mut(item) += 1;
    }

    /// Remove one `item` if any is held. Returns false, changing nothing,
    /// when the count is already zero.
    pub fn take(&mut self, item: Item) -> bool {
        let slot = self.slot_mut(item);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    fn slot_mut(&mut self, item: Item) -> &mut u32 {
        match item {
            Item::Boost(Boost::Catnip) => &mut self.catnip,
            Item::Boost(Boost::Silvervine) => &mut self.silvervine,
            Item::Berry(color) => &mut self.berries[color.index()],
        }
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Catnip: {}, Silvervine: {}", self.catnip, self.silvervine)?;
        for color in BerryColor::ALL {
            write!(f, ", {color}: {}", self.berries(color))?;
        }
        Ok(())
    }
}

/// The player-controlled cat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    /// Current level, starting at 1.
    pub level: u32,
    /// Animals still to help before the next level-up.
    pub progress_to_next_level: u32,
    mode: Mode,
    /// Last position on the ground board. Kept while up a tree.
    pub ground_position: Coord,
    /// Position on the current tree board. Reset on every climb up.
    pub tree_position: Coord,
    /// Hunger points. The cat starves at 0 with no energy buffer left.
    pub hunger: u32,
    /// Free actions banked from boosts and naps.
    pub energy: u32,
    /// Animals cured so far.
    pub animals_helped: u32,
    final_challenge: FinalChallenge,
    /// The satchel.
    pub inventory: Inventory,
}

impl Character {
    /// A fresh level-1 cat on the ground at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            progress_to_next_level: STARTING_PROGRESS,
            mode: Mode::Ground,
            ground_position: Coord::ORIGIN,
            tree_position: Coord::ORIGIN,
            hunger: STARTING_HUNGER,
            energy: 0,
            animals_helped: 0,
            final_challenge: FinalChallenge::Locked,
            inventory: Inventory::starting(STARTING_BERRIES),
        }
    }

    /// Set the starting hunger.
    pub fn with_hunger(mut self, hunger: u32) -> Self {
        self.hunger = hunger;
        self
    }

    /// Set the starting energy buffer.
    pub fn with_energy(mut self, energy: u32) -> Self {
        self.energy = energy;
        self
    }

    /// Set the animals needed for the first level-up.
    pub fn with_progress(mut self, progress: u32) -> Self {
        self.progress_to_next_level = progress;
        self
    }

    /// Replace the starting inventory.
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    /// Place the cat on the ground at `position`.
    pub fn on_ground_at(mut self, position: Coord) -> Self {
        self.mode = Mode::Ground;
        self.ground_position = position;
        self
    }

    /// Place the cat in a tree at `position`.
    pub fn in_tree_at(mut self, position: Coord) -> Self {
        self.mode = Mode::Tree;
        self.tree_position = position;
        self
    }

    /// The cat's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Which board the cat is on.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true while up a tree.
    pub fn in_tree(&self) -> bool {
        self.mode == Mode::Tree
    }

    /// Returns true while on the forest floor.
    pub fn on_ground(&self) -> bool {
        self.mode == Mode::Ground
    }

    /// Position on whichever board the cat is currently on.
    pub fn current_location(&self) -> Coord {
        match self.mode {
            Mode::Ground => self.ground_position,
            Mode::Tree => self.tree_position,
        }
    }

    /// Move the active position without touching the other one.
    pub fn set_current_location(&mut self, coord: Coord) {
        match self.mode {
            Mode::Ground => self.ground_position = coord,
            Mode::Tree => self.tree_position = coord,
        }
    }

    /// Enter a fresh tree at its trunk (the tree origin).
    pub fn climb_up(&mut self) {
        self.mode = Mode::Tree;
        self.tree_position = Coord::ORIGIN;
    }

    /// Return to the ground where the climb started.
    pub fn climb_down(&mut self) {
        self.mode = Mode::Ground;
    }

    /// Drop to the ground at the world origin.
    pub fn return_to_origin(&mut self) {
        self.mode = Mode::Ground;
        self.ground_position = Coord::ORIGIN;
    }

    /// Current final challenge state.
    pub fn final_challenge(&self) -> FinalChallenge {
        self.final_challenge
    }

    /// `Locked` to `Unlocked`. Returns false if already past `Locked`.
    pub fn unlock_final_challenge(&mut self) -> bool {
        if self.final_challenge != FinalChallenge::Locked {
            return false;
        }
        self.final_challenge = FinalChallenge::Unlocked;
        true
    }

    /// `Unlocked` to `Completed`. Returns false from any other state.
    pub fn complete_final_challenge(&mut self) -> bool {
        if self.final_challenge != FinalChallenge::Unlocked {
            return false;
        }
        self.final_challenge = FinalChallenge::Completed;
        true
    }
}
