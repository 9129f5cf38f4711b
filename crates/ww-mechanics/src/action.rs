//! Action resolution: Move, Climb, Eat, and Nap.
//!
//! Every resolver checks first and mutates only on success, so a rejected
//! action leaves the cat exactly as it was.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ww_core::{Board, Character, Coord, Direction, Entity, Item, Terrain};

use crate::economy::{Charge, charge_cost, restore};
use crate::error::{MechError, MechResult};
use crate::rules::Rules;

/// Something the player asked the cat to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Take one step.
    Move(Direction),
    /// Climb up the trunk underfoot, or back down it.
    Climb,
    /// Eat something from the satchel.
    Eat(Entity),
    /// Nap on moss to bank energy.
    Nap,
}

const MOVE_VERBS: &[&str] = &["move", "go", "walk"];
const CLIMB_VERBS: &[&str] = &["climb", "c"];
const EAT_VERBS: &[&str] = &["eat", "e"];
const NAP_VERBS: &[&str] = &["nap", "n", "sleep"];

impl Action {
    /// Short label for the action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::Climb => "climb",
            Self::Eat(_) => "eat",
            Self::Nap => "nap",
        }
    }

    /// Parse action text: a WASD key, `climb`, `nap`, `eat <item>`, or
    /// `move <direction>`.
    pub fn parse(input: &str) -> MechResult<Self> {
        let input = input.trim();
        let mut words = input.splitn(2, char::is_whitespace);
        let verb = words.next().unwrap_or("").to_lowercase();
        let rest = words.next().map(str::trim).unwrap_or("");

        if rest.is_empty() {
            if let Ok(direction) = Direction::parse(&verb) {
                return Ok(Self::Move(direction));
            }
        }

        if MOVE_VERBS.contains(&verb.as_str()) {
            if rest.is_empty() {
                return Err(MechError::MissingPayload("move"));
            }
            return Ok(Self::Move(Direction::parse(rest)?));
        }
        if CLIMB_VERBS.contains(&verb.as_str()) && rest.is_empty() {
            return Ok(Self::Climb);
        }
        if NAP_VERBS.contains(&verb.as_str()) && rest.is_empty() {
            return Ok(Self::Nap);
        }
        if EAT_VERBS.contains(&verb.as_str()) {
            if rest.is_empty() {
                return Err(MechError::MissingPayload("eat"));
            }
            return Ok(Self::Eat(Entity::Item(Item::parse(rest)?)));
        }

        Err(MechError::UnknownAction(input.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(direction) => write!(f, "move {direction}"),
            Self::Climb => write!(f, "climb"),
            Self::Eat(Entity::Item(item)) => write!(f, "eat {item}"),
            Self::Eat(Entity::Animal(animal)) => write!(f, "eat {}", animal.name),
            Self::Nap => write!(f, "nap"),
        }
    }
}

/// Why an action was refused. Nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The step would leave the board.
    OutOfBounds {
        /// Where the cat stands.
        from: Coord,
        /// Where it tried to go.
        to: Coord,
    },
    /// Climbing needs a trunk underfoot.
    NotOnTrunk {
        /// What is underfoot instead.
        terrain: Option<Terrain>,
    },
    /// Napping needs moss underfoot.
    NotOnMoss {
        /// What is underfoot instead.
        terrain: Option<Terrain>,
    },
    /// Napping is only possible up a tree.
    NotInTree,
    /// The satchel holds none of this item.
    NoneLeft(Item),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { .. } => write!(f, "You can't go that way."),
            Self::NotOnTrunk { .. } => write!(f, "There is no tree trunk here to climb."),
            Self::NotOnMoss { .. } => write!(f, "There is no soft moss here to nap on."),
            Self::NotInTree => write!(f, "You can only nap up in a tree."),
            Self::NoneLeft(item) => write!(f, "You don't have any {item} left."),
        }
    }
}

/// The result of resolving one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The cat stepped onto a new tile.
    Moved {
        /// The new position.
        to: Coord,
        /// What the step cost.
        charge: Charge,
    },
    /// The cat climbed into the canopy.
    ClimbedUp {
        /// What the climb cost.
        charge: Charge,
    },
    /// The cat climbed back to the forest floor.
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
    /// Refused; nothing changed.
    Rejected(Rejection),
}

impl ActionOutcome {
    /// Returns true unless the action was rejected.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Apply `action` to the cat on `board`, the board it currently stands on.
///
/// Errors are reserved for malformed input (eating an animal); rule
/// violations come back as [`ActionOutcome::Rejected`].
pub fn resolve_action(
    character: &mut Character,
    board: &Board,
    action: &Action,
    rules: &Rules,
) -> MechResult<ActionOutcome> {
    let outcome = match action {
        Action::Move(direction) => move_character(character, board, *direction, rules),
        Action::Climb => climb(character, board, rules),
        Action::Eat(entity) => eat(character, entity, rules)?,
        Action::Nap => nap(character, board, rules),
    };
    debug!(action = %action, ?outcome, "resolved action");
    Ok(outcome)
}

/// One step in `direction`, if the destination is on the board.
pub fn move_character(
    character: &mut Character,
    board: &Board,
    direction: Direction,
    rules: &Rules,
) -> ActionOutcome {
    let from = character.current_location();
    let to = from.step(direction);
    if !board.is_valid_location(to) {
        return ActionOutcome::Rejected(Rejection::OutOfBounds { from, to });
    }

    character.set_current_location(to);
    let charge = charge_cost(character, rules.move_cost);
    ActionOutcome::Moved { to, charge }
}

/// Toggle between ground and canopy from a trunk tile.
pub fn climb(character: &mut Character, board: &Board, rules: &Rules) -> ActionOutcome {
    let terrain = board.terrain_at(character.current_location());
    if terrain != Some(Terrain::Trunk) {
        return ActionOutcome::Rejected(Rejection::NotOnTrunk { terrain });
    }

    if character.in_tree() {
        character.climb_down();
        let charge = charge_cost(character, rules.climb_cost);
        ActionOutcome::ClimbedDown { charge }
    } else {
        character.climb_up();
        let charge = charge_cost(character, rules.climb_cost);
        ActionOutcome::ClimbedUp { charge }
    }
}

/// Eat one held item: a flat hunger restore, scaled and topped up with
/// energy for boosts.
pub fn eat(character: &mut Character, entity: &Entity, rules: &Rules) -> MechResult<ActionOutcome> {
    let item = entity.as_item()?;
    if !character.inventory.take(item) {
        return Ok(ActionOutcome::Rejected(Rejection::NoneLeft(item)));
    }

    let (hunger, energy) = match item {
        Item::Berry(_) => (rules.eat_restore, 0),
        Item::Boost(boost) => {
            let bonus = rules.boost(boost);
            (
                rules.eat_restore.saturating_mul(bonus.hunger_multiplier),
                bonus.energy,
            )
        }
    };
    restore(character, hunger, energy);
    Ok(ActionOutcome::Ate {
        item,
        hunger,
        energy,
    })
}

/// Nap on a moss tile up in a tree.
pub fn nap(character: &mut Character, board: &Board, rules: &Rules) -> ActionOutcome {
    if !character.in_tree() {
        return ActionOutcome::Rejected(Rejection::NotInTree);
    }
    let terrain = board.terrain_at(character.current_location());
    if terrain != Some(Terrain::Moss) {
        return ActionOutcome::Rejected(Rejection::NotOnMoss { terrain });
    }

    restore(character, 0, rules.nap_energy);
    ActionOutcome::Napped {
        energy: rules.nap_energy,
    }
}
