//! Sick animals the cat can help.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::Ailment;

/// Species that can turn up in the woods.
pub const SPECIES: &[&str] = &[
    "Mouse",
    "Squirrel",
    "Duck",
    "Mole",
    "Skunk",
    "Hedgehog",
    "Grasshopper",
    "Robin",
    "Raccoon",
    "Owl",
    "Raven",
    "Bunny",
    "Cricket",
    "Spider",
    "Snake",
];

/// Name of the scripted final-challenge animal.
pub const FINAL_CHALLENGE_NAME: &str = "Moonlit Lynx";

/// A sick animal and the ailments it still has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Species or proper name.
    pub name: String,
    /// Remaining ailments. May contain repeats (the final challenge does).
    pub ailments: Vec<Ailment>,
    /// True for the scripted final-challenge animal.
    pub final_challenge: bool,
}

impl Animal {
    /// An ordinary sick animal.
    pub fn new(name: impl Into<String>, ailments: Vec<Ailment>) -> Self {
        Self {
            name: name.into(),
            ailments,
            final_challenge: false,
        }
    }

    /// The final-challenge animal: every ailment except `Starving`, twice,
    /// so curing it takes exactly two berries of each color.
    pub fn final_challenge() -> Self {
        let once: Vec<Ailment> = Ailment::ALL
            .into_iter()
            .filter(|a| *a != Ailment::Starving)
            .collect();
        let mut ailments = once.clone();
        ailments.extend(once);

        Self {
            name: FINAL_CHALLENGE_NAME.to_string(),
            ailments,
            final_challenge: true,
        }
    }

    /// Returns true once no ailments remain.
    pub fn is_cured(&self) -> bool {
        self.ailments.is_empty()
    }

    /// How many instances of `ailment` remain.
    pub fn count(&self, ailment: Ailment) -> usize {
        self.ailments.iter().filter(|a| **a == ailment).count()
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ailments.is_empty() {
            return write!(f, "{} (healthy)", self.name);
        }
        let ailments: Vec<String> = self.ailments.iter().map(|a| a.to_string()).collect();
        write!(f, "{} ({})", self.name, ailments.join(", "))
    }
}
