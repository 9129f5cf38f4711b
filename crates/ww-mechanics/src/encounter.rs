//! The animal-helping mini-game: feed berries until every ailment is gone.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ww_core::{Ailment, Animal, BerryColor, Character, Item};

use crate::generate::generate_reward_item;
use crate::rules::Rules;

/// Remove the ailment `berry` treats from `ailments`, if it is there.
/// Otherwise any berry takes care of one `Starving`.
///
/// Returns the ailment removed, or `None` if the berry did nothing.
pub fn validate_berry(berry: BerryColor, ailments: &mut Vec<Ailment>) -> Option<Ailment> {
    let treated = berry.treats();
    let index = ailments
        .iter()
        .position(|a| *a == treated)
        .or_else(|| ailments.iter().position(|a| *a == Ailment::Starving))?;
    Some(ailments.remove(index))
}

/// Items handed over by a grateful animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// The items, already added to the satchel.
    pub items: Vec<Item>,
    /// Whether this animal was the final challenge.
    pub final_challenge: bool,
}

/// What happened when the player offered (or declined to offer) a berry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feeding {
    /// The player walked away. Nothing refunded.
    Abandoned,
    /// The satchel has none of that colour. Nothing consumed; try again.
    Missing(BerryColor),
    /// The berry matched nothing. The encounter is over.
    Ineffective(BerryColor),
    /// One ailment cured, others remain.
    Cured {
        /// Berry fed.
        berry: BerryColor,
        /// Ailment removed.
        ailment: Ailment,
    },
    /// The last ailment cured; the reward is already in the satchel.
    Helped {
        /// Berry fed.
        berry: BerryColor,
        /// Ailment removed.
        ailment: Ailment,
        /// What the animal gave back.
        reward: Reward,
    },
}

impl Feeding {
    /// Returns true when the encounter has ended, for better or worse.
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Abandoned | Self::Ineffective(_) | Self::Helped { .. })
    }
}

/// A sick animal waiting for berries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    animal: Animal,
    berries_fed: u32,
}

impl Encounter {
    /// Start helping `animal`.
    pub fn new(animal: Animal) -> Self {
        Self {
            animal,
            berries_fed: 0,
        }
    }

    /// The animal as it is now, with whatever ailments are left.
    pub fn animal(&self) -> &Animal {
        &self.animal
    }

    /// Ailments still to cure.
    pub fn remaining(&self) -> &[Ailment] {
        &self.animal.ailments
    }

    /// Berries eaten so far.
    pub fn berries_fed(&self) -> u32 {
        self.berries_fed
    }

    /// Offer one berry, or `None` to give up.
    ///
    /// The berry leaves the satchel before it is matched, so an ineffective
    /// berry is lost. Curing the last ailment pays out the reward and
    /// updates the cat's tally.
    pub fn feed<R: Rng + ?Sized>(
        &mut self,
        character: &mut Character,
        berry: Option<BerryColor>,
        rules: &Rules,
        rng: &mut R,
    ) -> Feeding {
        let Some(berry) = berry else {
            warn!(animal = %self.animal.name, "encounter abandoned");
            return Feeding::Abandoned;
        };

        if !character.inventory.take(Item::Berry(berry)) {
            return Feeding::Missing(berry);
        }
        self.berries_fed += 1;

        let Some(ailment) = validate_berry(berry, &mut self.animal.ailments) else {
            warn!(animal = %self.animal.name, %berry, "berry was ineffective");
            return Feeding::Ineffective(berry);
        };
        debug!(animal = %self.animal.name, %berry, %ailment, "cured ailment");

        if !self.animal.is_cured() {
            return Feeding::Cured { berry, ailment };
        }

        let reward = self.pay_out(character, rules, rng);
        Feeding::Helped {
            berry,
            ailment,
            reward,
        }
    }

    fn pay_out<R: Rng + ?Sized>(
        &self,
        character: &mut Character,
        rules: &Rules,
        rng: &mut R,
    ) -> Reward {
        let most = character.level.saturating_add(1).max(rules.reward_min);
        let count = rng.random_range(rules.reward_min..=most);
        let items: Vec<Item> = (0..count)
            .map(|_| generate_reward_item(rules, rng))
            .collect();
        for item in &items {
            character.inventory.add(*item);
        }

        character.animals_helped = character.animals_helped.saturating_add(1);
        character.progress_to_next_level = character.progress_to_next_level.saturating_sub(1);
        if self.animal.final_challenge {
            character.complete_final_challenge();
        }

        debug!(animal = %self.animal.name, rewards = items.len(), "animal helped");
        Reward {
            items,
            final_challenge: self.animal.final_challenge,
        }
    }
}
