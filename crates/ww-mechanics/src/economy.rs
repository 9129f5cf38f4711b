//! The hunger/energy economy shared by every action that costs effort.

use serde::{Deserialize, Serialize};
use ww_core::Character;

use crate::rules::Rules;

/// What paying for an action actually cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charge {
    /// One unit of energy buffer was spent; hunger untouched.
    Buffered,
    /// Hunger dropped by this many points (after clamping at zero).
    Hunger(u32),
}

/// Pay `units` for an action.
///
/// While the energy buffer is positive, one buffer unit is spent no matter
/// how large `units` is. Otherwise hunger drops by `units`, stopping at 0.
pub fn charge_cost(character: &mut Character, units: u32) -> Charge {
    if character.energy > 0 {
        character.energy -= 1;
        return Charge::Buffered;
    }
    let before = character.hunger;
    character.hunger = character.hunger.saturating_sub(units);
    Charge::Hunger(before - character.hunger)
}

/// Add hunger and energy buffer points.
pub fn restore(character: &mut Character, hunger: u32, energy: u32) {
    character.hunger = character.hunger.saturating_add(hunger);
    character.energy = character.energy.saturating_add(energy);
}

/// Whether the cat can keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consciousness {
    /// Still on its paws.
    Conscious,
    /// Passed out from hunger. Ends the game.
    Starved,
}

/// Starved only when hunger is spent and no energy buffer remains.
pub fn check_starvation(character: &Character) -> Consciousness {
    if character.energy > 0 || character.hunger > 0 {
        Consciousness::Conscious
    } else {
        Consciousness::Starved
    }
}

/// Narration hooks for a dwindling tummy. No effect on the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HungerWarning {
    /// Hunger at or below the hungry threshold.
    Hungry,
    /// Hunger at or below the fainting threshold.
    Fainting,
}

/// The warning to show after an action, if any. Never warns while an energy
/// buffer remains or once the cat has starved.
pub fn hunger_warning(character: &Character, rules: &Rules) -> Option<HungerWarning> {
    if character.energy > 0 || character.hunger == 0 {
        return None;
    }
    if character.hunger <= rules.fainting_threshold {
        Some(HungerWarning::Fainting)
    } else if character.hunger <= rules.hungry_threshold {
        Some(HungerWarning::Hungry)
    } else {
        None
    }
}
