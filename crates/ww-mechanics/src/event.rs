//! Events a game session reports back to the front end.
//!
//! The mechanics never print; every turn returns a list of [`GameEvent`]s
//! for the caller to narrate.

use serde::{Deserialize, Serialize};
use ww_core::{Ailment, Animal, BerryColor, Coord, Item};

use crate::action::Rejection;
use crate::economy::{Charge, HungerWarning};

/// Everything a turn can report back to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    // Actions
    /// The cat stepped onto a new tile.
    Moved {
        /// The new position on the current board.
        to: Coord,
        /// What the step cost.
        charge: Charge,
    },
    /// The cat climbed into a freshly grown canopy.
    ClimbedUp {
        /// What the climb cost.
        charge: Charge,
    },
    /// The cat climbed back down its trunk.
    ClimbedDown {
        /// What the climb cost.
        charge: Charge,
    },
    /// The cat ate something.
    Ate {
        /// What was eaten.
        item: Item,
        /// Hunger points gained.
        hunger: u32,
        /// Energy buffer gained.
        energy: u32,
    },
    /// The cat napped on moss.
    Napped {
        /// Energy buffer gained.
        energy: u32,
    },
    /// The action was refused and nothing changed.
    Rejected(Rejection),

    // Tiles
    /// An item was found and put in the satchel.
    FoundItem(Item),
    /// The tile was empty.
    FoundNothing,
    /// A sick animal needs help. An encounter is now open.
    AnimalAppeared(Animal),

    // Encounters
    /// The satchel has no berry of that colour.
    BerryMissing(BerryColor),
    /// One ailment cured.
    AilmentCured {
        /// The berry fed.
        berry: BerryColor,
        /// The ailment it cured.
        ailment: Ailment,
        /// What is left to cure.
        remaining: Vec<Ailment>,
    },
    /// The berry did nothing; the animal wandered off.
    BerryIneffective(BerryColor),
    /// The player walked away from the animal.
    EncounterAbandoned,
    /// Every ailment cured.
    AnimalHelped {
        /// Name of the animal.
        name: String,
        /// Items it handed over.
        rewards: Vec<Item>,
    },

    // Progression
    /// The cat reached a new level.
    LeveledUp {
        /// The new level.
        level: u32,
        /// Animals to help before the next one.
        next: u32,
    },
    /// The final challenge is open. The cat is back at the ground origin.
    FinalChallengeUnlocked,
    /// The final challenge animal was cured. The game is won.
    FinalChallengeCompleted,

    // Hunger
    /// The tummy is running low.
    HungerWarning(HungerWarning),
    /// The cat passed out. The game is over.
    Starved,
}
