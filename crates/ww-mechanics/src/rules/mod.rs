//! Tunable numbers behind every rule in the game.
//!
//! [`Rules::default`] reproduces the classic Whisker Woods tuning. Rules
//! can be loaded from JSON with [`Rules::from_json`]; missing fields fall
//! back to the defaults. Ready-made variants live in [`preset`].

pub mod preset;

use serde::{Deserialize, Serialize};
use ww_core::{Boost, Bounds, Character, Inventory};

use crate::error::{MechError, MechResult};

/// Hunger and energy granted by one boost item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostRules {
    /// Multiplier applied to [`Rules::eat_restore`].
    pub hunger_multiplier: u32,
    /// Energy buffer granted on eating.
    pub energy: u32,
}

/// Every tunable constant of the rules.
///
/// Chances are "one in N": `5` fires with probability 1/5, `0` never fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Columns on each side of the ground origin.
    pub ground_half_width: i32,
    /// Rows on each side of the ground origin.
    pub ground_half_height: i32,
    /// Fewest trunks placed on the ground board.
    pub ground_trunks_min: usize,
    /// Most trunks placed on the ground board.
    pub ground_trunks_max: usize,
    /// Half-extents a tree board may be generated with.
    pub tree_radii: Vec<i32>,

    /// Chance of an animal on an ordinary tile.
    pub animal_one_in: u32,
    /// Chance of Silvervine, rolled first.
    pub silvervine_one_in: u32,
    /// Chance of Catnip, rolled second.
    pub catnip_one_in: u32,
    /// Chance of a berry, rolled last and only in trees.
    pub berry_one_in: u32,

    /// Hunger charged per step.
    pub move_cost: u32,
    /// Hunger charged per climb, up or down.
    pub climb_cost: u32,
    /// Hunger restored by eating anything.
    pub eat_restore: u32,
    /// Catnip bonuses.
    pub catnip: BoostRules,
    /// Silvervine bonuses.
    pub silvervine: BoostRules,
    /// Energy buffer granted by a nap on moss.
    pub nap_energy: u32,

    /// Hunger of a new cat.
    pub starting_hunger: u32,
    /// Berries of each color in a new cat's satchel.
    pub starting_berries: u32,
    /// Animals to help per level: reaching level `n + 1` takes `n * multiplier`.
    pub level_multiplier: u32,
    /// Level that unlocks the final challenge.
    pub final_challenge_level: u32,
    /// Fewest reward items for curing an animal. The most is `level + 1`.
    pub reward_min: u32,

    /// Hunger at or below which the cat feels hungry.
    pub hungry_threshold: u32,
    /// Hunger at or below which the cat is about to pass out.
    pub fainting_threshold: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            ground_half_width: 12,
            ground_half_height: 12,
            ground_trunks_min: 30,
            ground_trunks_max: 60,
            tree_radii: vec![1, 3, 5, 7, 9],
            animal_one_in: 5,
            silvervine_one_in: 100,
            catnip_one_in: 20,
            berry_one_in: 5,
            move_cost: 1,
            climb_cost: 5,
            eat_restore: 25,
            catnip: BoostRules {
                hunger_multiplier: 2,
                energy: 25,
            },
            silvervine: BoostRules {
                hunger_multiplier: 4,
                energy: 50,
            },
            nap_energy: 5,
            starting_hunger: 100,
            starting_berries: 1,
            level_multiplier: 5,
            final_challenge_level: 3,
            reward_min: 2,
            hungry_threshold: 10,
            fainting_threshold: 1,
        }
    }
}

impl Rules {
    /// Parse rules from JSON and validate them.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let rules: Self =
            serde_json::from_str(json).map_err(|e| MechError::InvalidRules(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Pretty JSON for this rule set.
    pub fn to_json(&self) -> MechResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MechError::InvalidRules(e.to_string()))
    }

    /// Reject tunings that would make board setup or progression impossible.
    pub fn validate(&self) -> MechResult<()> {
        let invalid = |msg: String| -> MechResult<()> { Err(MechError::InvalidRules(msg)) };

        if self.ground_half_width < 0 || self.ground_half_height < 0 {
            return invalid("ground half-extents must not be negative".into());
        }
        if self.ground_trunks_min == 0 || self.ground_trunks_min > self.ground_trunks_max {
            return invalid(format!(
                "ground trunk range {}..={} must be non-empty and start at 1 or more",
                self.ground_trunks_min, self.ground_trunks_max
            ));
        }
        let ground = self.ground_bounds();
        let spare = (ground.width() * ground.height()).saturating_sub(1);
        if self.ground_trunks_max > spare {
            return invalid(format!(
                "{} trunks do not fit on a ground board with {spare} free tiles",
                self.ground_trunks_max
            ));
        }
        if self.tree_radii.is_empty() {
            return invalid("at least one tree radius is required".into());
        }
        if let Some(r) = self.tree_radii.iter().find(|r| **r < 1) {
            return invalid(format!("tree radius {r} must be at least 1"));
        }
        if self.level_multiplier == 0 {
            return invalid("level multiplier must be at least 1".into());
        }
        if self.final_challenge_level < 2 {
            return invalid("final challenge level must be at least 2".into());
        }
        if self.reward_min == 0 {
            return invalid("a cured animal must give at least one reward".into());
        }
        Ok(())
    }

    /// Bonuses for one boost item.
    pub fn boost(&self, boost: Boost) -> BoostRules {
        match boost {
            Boost::Catnip => self.catnip,
            Boost::Silvervine => self.silvervine,
        }
    }

    /// Generation bounds of the ground board.
    pub fn ground_bounds(&self) -> Bounds {
        Bounds::centered(self.ground_half_width, self.ground_half_height)
    }

    /// Animals to help after reaching `level` before the next level-up.
    pub fn progress_for_level(&self, level: u32) -> u32 {
        self.level_multiplier.saturating_mul(level)
    }

    /// A fresh cat using these rules' starting values.
    pub fn new_character(&self, name: impl Into<String>) -> Character {
        Character::new(name)
            .with_hunger(self.starting_hunger)
            .with_progress(self.progress_for_level(1))
            .with_inventory(Inventory::starting(self.starting_berries))
    }

    /// Set every spawn chance to zero.
    pub fn without_spawns(mut self) -> Self {
        self.animal_one_in = 0;
        self.silvervine_one_in = 0;
        self.catnip_one_in = 0;
        self.berry_one_in = 0;
        self
    }

    /// Set the ground board half-extents.
    pub fn with_ground_size(mut self, half_width: i32, half_height: i32) -> Self {
        self.ground_half_width = half_width;
        self.ground_half_height = half_height;
        self
    }

    /// Set the ground trunk count range.
    pub fn with_ground_trunks(mut self, min: usize, max: usize) -> Self {
        self.ground_trunks_min = min;
        self.ground_trunks_max = max;
        self
    }

    /// Set the level multiplier.
    pub fn with_level_multiplier(mut self, multiplier: u32) -> Self {
        self.level_multiplier = multiplier;
        self
    }
}
