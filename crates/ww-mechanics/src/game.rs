//! A game session: the turn loop that ties actions, spawns, encounters, and
//! progression together.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ww_core::{Animal, BerryColor, Board, Character, Entity, Mode, Terrain};

use crate::action::{Action, ActionOutcome, resolve_action};
use crate::config::GameConfig;
use crate::economy::{Consciousness, check_starvation, hunger_warning};
use crate::encounter::{Encounter, Feeding};
use crate::error::{MechError, MechResult};
use crate::event::GameEvent;
use crate::generate::{generate_entity, generate_ground_board, generate_tree_board};
use crate::progression::update_level;
use crate::rules::Rules;

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for an action.
    Exploring,
    /// Waiting for a berry.
    Encounter,
    /// The cat passed out. Terminal.
    Starved,
    /// The final challenge is done. Terminal.
    Won,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        matches!(self, Self::Starved | Self::Won)
    }
}

/// One playthrough.
#[derive(Debug)]
pub struct Game {
    rules: Rules,
    rng: StdRng,
    ground: Board,
    tree: Option<Board>,
    character: Character,
    encounter: Option<Encounter>,
    turn: u32,
    status: GameStatus,
}

fn active_board<'a>(ground: &'a Board, tree: &'a Option<Board>, mode: Mode) -> &'a Board {
    match (mode, tree) {
        (Mode::Tree, Some(tree)) => tree,
        _ => ground,
    }
}

impl Game {
    /// Validate the rules, grow the forest, and place a fresh cat at the
    /// ground origin.
    pub fn new(config: GameConfig) -> MechResult<Self> {
        config.rules.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let ground = generate_ground_board(&config.rules, &mut rng)?;
        let character = config.rules.new_character(config.name);
        info!(seed = config.seed, name = character.name(), "new game");

        Ok(Self {
            rules: config.rules,
            rng,
            ground,
            tree: None,
            character,
            encounter: None,
            turn: 0,
            status: GameStatus::Exploring,
        })
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The cat.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// The rules in force.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The board the cat is standing on.
    pub fn board(&self) -> &Board {
        active_board(&self.ground, &self.tree, self.character.mode())
    }

    /// The forest floor.
    pub fn ground_board(&self) -> &Board {
        &self.ground
    }

    /// The canopy, while the cat is up a tree.
    pub fn tree_board(&self) -> Option<&Board> {
        self.tree.as_ref()
    }

    /// The animal waiting for berries, if any.
    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    /// Successful actions taken so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    fn ensure_running(&self) -> MechResult<()> {
        if self.status.is_over() {
            return Err(MechError::GameOver);
        }
        Ok(())
    }

    /// Take one action.
    ///
    /// A successful move or climb is paid for, then checked for
    /// starvation. A successful move also rolls for whatever is on the new
    /// tile, which may open an encounter.
    pub fn act(&mut self, action: Action) -> MechResult<Vec<GameEvent>> {
        self.ensure_running()?;
        if self.encounter.is_some() {
            return Err(MechError::EncounterInProgress);
        }

        // The canopy is grown before the climb is charged.
        let location = self.character.current_location();
        let canopy = if matches!(action, Action::Climb)
            && self.character.on_ground()
            && self.ground.terrain_at(location) == Some(Terrain::Trunk)
        {
            Some(generate_tree_board(&self.rules, &mut self.rng)?)
        } else {
            None
        };

        let board = active_board(&self.ground, &self.tree, self.character.mode());
        let outcome = resolve_action(&mut self.character, board, &action, &self.rules)?;

        let mut events = Vec::new();
        match outcome {
            ActionOutcome::Rejected(rejection) => {
                debug!(%rejection, "action rejected");
                events.push(GameEvent::Rejected(rejection));
                return Ok(events);
            }
            ActionOutcome::Moved { to, charge } => events.push(GameEvent::Moved { to, charge }),
            ActionOutcome::ClimbedUp { charge } => {
                self.tree = canopy;
                events.push(GameEvent::ClimbedUp { charge });
            }
            ActionOutcome::ClimbedDown { charge } => {
                self.tree = None;
                events.push(GameEvent::ClimbedDown { charge });
            }
            ActionOutcome::Ate {
                item,
                hunger,
                energy,
            } => events.push(GameEvent::Ate {
                item,
                hunger,
                energy,
            }),
            ActionOutcome::Napped { energy } => events.push(GameEvent::Napped { energy }),
        }
        self.turn += 1;

        if !matches!(action, Action::Move(_) | Action::Climb) {
            return Ok(events);
        }

        if check_starvation(&self.character) == Consciousness::Starved {
            info!(turn = self.turn, "the cat starved");
            self.status = GameStatus::Starved;
            events.push(GameEvent::Starved);
            return Ok(events);
        }
        if let Some(warning) = hunger_warning(&self.character, &self.rules) {
            events.push(GameEvent::HungerWarning(warning));
        }

        if matches!(action, Action::Move(_)) {
            self.explore_tile(&mut events);
        }
        Ok(events)
    }

    /// Feed the current animal a berry, or pass `None` to walk away.
    pub fn offer_berry(&mut self, berry: Option<BerryColor>) -> MechResult<Vec<GameEvent>> {
        self.ensure_running()?;
        let Some(mut encounter) = self.encounter.take() else {
            return Err(MechError::NoEncounter);
        };

        let feeding = encounter.feed(&mut self.character, berry, &self.rules, &mut self.rng);
        let mut events = Vec::new();
        match feeding {
            Feeding::Missing(berry) => {
                events.push(GameEvent::BerryMissing(berry));
                self.encounter = Some(encounter);
                return Ok(events);
            }
            Feeding::Cured { berry, ailment } => {
                events.push(GameEvent::AilmentCured {
                    berry,
                    ailment,
                    remaining: encounter.remaining().to_vec(),
                });
                self.encounter = Some(encounter);
                return Ok(events);
            }
            Feeding::Ineffective(berry) => events.push(GameEvent::BerryIneffective(berry)),
            Feeding::Abandoned => events.push(GameEvent::EncounterAbandoned),
            Feeding::Helped {
                berry,
                ailment,
                reward,
            } => {
                events.push(GameEvent::AilmentCured {
                    berry,
                    ailment,
                    remaining: Vec::new(),
                });
                events.push(GameEvent::AnimalHelped {
                    name: encounter.animal().name.clone(),
                    rewards: reward.items,
                });
                if reward.final_challenge {
                    events.push(GameEvent::FinalChallengeCompleted);
                }
            }
        }

        self.status = GameStatus::Exploring;
        self.advance_level(&mut events);
        Ok(events)
    }

    fn explore_tile(&mut self, events: &mut Vec<GameEvent>) {
        let board = active_board(&self.ground, &self.tree, self.character.mode());
        match generate_entity(board, &self.character, &self.rules, &mut self.rng) {
            Some(Entity::Item(item)) => {
                self.character.inventory.add(item);
                events.push(GameEvent::FoundItem(item));
            }
            Some(Entity::Animal(animal)) => self.start_encounter(animal, events),
            None => events.push(GameEvent::FoundNothing),
        }
    }

    fn start_encounter(&mut self, animal: Animal, events: &mut Vec<GameEvent>) {
        debug!(%animal, "animal appeared");
        events.push(GameEvent::AnimalAppeared(animal.clone()));
        self.encounter = Some(Encounter::new(animal));
        self.status = GameStatus::Encounter;
    }

    fn advance_level(&mut self, events: &mut Vec<GameEvent>) {
        let report = update_level(&mut self.character, &self.rules);
        if let Some(level) = report.leveled_up {
            events.push(GameEvent::LeveledUp {
                level,
                next: self.character.progress_to_next_level,
            });
        }

        if report.won {
            info!(turn = self.turn, "final challenge completed");
            self.status = GameStatus::Won;
            return;
        }

        if report.unlocked {
            self.character.return_to_origin();
            self.tree = None;
            events.push(GameEvent::FinalChallengeUnlocked);
            self.start_encounter(Animal::final_challenge(), events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ww_core::{Ailment, Bounds, Coord, Direction, FinalChallenge, Inventory, Item};

    use crate::economy::{Charge, HungerWarning};

    fn quiet_game() -> Game {
        let config = GameConfig::default().with_rules(Rules::default().without_spawns());
        let mut game = Game::new(config).unwrap();
        game.ground = Board::generate(Bounds::centered(5, 5)).unwrap();
        game
    }

    fn step(game: &mut Game, direction: Direction) -> Vec<GameEvent> {
        game.act(Action::Move(direction)).unwrap()
    }

    #[test]
    fn new_game_defaults() {
        let game = Game::new(GameConfig::default()).unwrap();
        assert_eq!(game.status(), GameStatus::Exploring);
        assert_eq!(game.turn(), 0);
        assert!(game.tree_board().is_none());
        assert!(game.encounter().is_none());

        let cat = game.character();
        assert_eq!(cat.name(), "Mittens");
        assert_eq!(cat.hunger, 100);
        assert_eq!(cat.current_location(), Coord::ORIGIN);

        let ground = game.ground_board();
        assert_eq!(ground.len(), 25 * 25);
        assert!((30..=60).contains(&ground.count(Terrain::Trunk)));
        assert_eq!(ground.terrain_at(Coord::ORIGIN), Some(Terrain::Empty));
    }

    #[test]
    fn same_seed_same_forest() {
        let a = Game::new(GameConfig::default().with_seed(9)).unwrap();
        let b = Game::new(GameConfig::default().with_seed(9)).unwrap();
        assert_eq!(a.ground_board(), b.ground_board());
    }

    #[test]
    fn invalid_rules_refused() {
        let rules = Rules::default().with_level_multiplier(0);
        assert!(matches!(
            Game::new(GameConfig::default().with_rules(rules)),
            Err(MechError::InvalidRules(_))
        ));
    }

    #[test]
    fn walk_three_then_fail_to_climb() {
        let mut game = quiet_game();
        for _ in 0..3 {
            let events = step(&mut game, Direction::Right);
            assert!(matches!(
                events[0],
                GameEvent::Moved {
                    charge: Charge::Hunger(1),
                    ..
                }
            ));
            assert_eq!(events.last(), Some(&GameEvent::FoundNothing));
        }
        assert_eq!(game.character().hunger, 97);
        assert_eq!(game.character().current_location(), Coord::new(3, 0));
        assert_eq!(game.turn(), 3);

        let before = game.character().clone();
        let events = game.act(Action::Climb).unwrap();
        assert!(matches!(events.as_slice(), [GameEvent::Rejected(_)]));
        assert_eq!(game.character(), &before);
        assert_eq!(game.turn(), 3);
    }

    #[test]
    fn climb_grows_and_drops_a_tree() {
        let mut game = quiet_game();
        game.ground.set_terrain(Coord::new(1, 0), Terrain::Trunk);
        step(&mut game, Direction::Right);

        let events = game.act(Action::Climb).unwrap();
        assert_eq!(
            events[0],
            GameEvent::ClimbedUp {
                charge: Charge::Hunger(5)
            }
        );
        assert!(game.character().in_tree());
        assert_eq!(game.character().hunger, 94);
        let tree = game.tree_board().unwrap();
        assert_eq!(tree.terrain_at(Coord::ORIGIN), Some(Terrain::Trunk));
        assert_eq!(game.board(), tree);

        let events = game.act(Action::Climb).unwrap();
        assert_eq!(
            events[0],
            GameEvent::ClimbedDown {
                charge: Charge::Hunger(5)
            }
        );
        assert!(game.tree_board().is_none());
        assert_eq!(game.character().current_location(), Coord::new(1, 0));
        assert_eq!(game.board(), game.ground_board());
    }

    #[test]
    fn nap_on_moss_in_tree() {
        let mut game = quiet_game();
        game.ground.set_terrain(Coord::ORIGIN, Terrain::Trunk);
        game.act(Action::Climb).unwrap();
        if let Some(tree) = game.tree.as_mut() {
            tree.set_terrain(Coord::new(0, 1), Terrain::Moss);
        }
        step(&mut game, Direction::Down);

        let events = game.act(Action::Nap).unwrap();
        assert_eq!(events, vec![GameEvent::Napped { energy: 5 }]);
        assert_eq!(game.character().energy, 5);
    }

    #[test]
    fn eat_reports_gain() {
        let mut game = quiet_game();
        game.character.hunger = 50;
        let events = game
            .act(Action::Eat(Entity::Item(Item::Berry(BerryColor::Green))))
            .unwrap();
        assert_eq!(
            events,
            vec![GameEvent::Ate {
                item: Item::Berry(BerryColor::Green),
                hunger: 25,
                energy: 0
            }]
        );
        assert_eq!(game.character().hunger, 75);
    }

    #[test]
    fn eating_an_animal_errors() {
        let mut game = quiet_game();
        let owl = Entity::Animal(Animal::new("Owl", vec![Ailment::Sad]));
        assert!(matches!(
            game.act(Action::Eat(owl)),
            Err(MechError::Core(_))
        ));
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn hunger_warnings_then_starvation() {
        let mut game = quiet_game();
        game.character.hunger = 11;

        let events = step(&mut game, Direction::Up);
        assert!(events.contains(&GameEvent::HungerWarning(HungerWarning::Hungry)));

        game.character.hunger = 2;
        let events = step(&mut game, Direction::Up);
        assert!(events.contains(&GameEvent::HungerWarning(HungerWarning::Fainting)));

        let events = step(&mut game, Direction::Up);
        assert_eq!(events.last(), Some(&GameEvent::Starved));
        assert_eq!(game.status(), GameStatus::Starved);
        assert!(matches!(game.act(Action::Nap), Err(MechError::GameOver)));
    }

    #[test]
    fn buffer_keeps_cat_awake() {
        let mut game = quiet_game();
        game.character.hunger = 0;
        game.character.energy = 2;
        let events = step(&mut game, Direction::Left);
        assert!(matches!(
            events[0],
            GameEvent::Moved {
                charge: Charge::Buffered,
                ..
            }
        ));
        assert_eq!(game.character().energy, 1);
        assert_eq!(game.status(), GameStatus::Exploring);
    }

    #[test]
    fn spending_last_buffer_unit_on_empty_tummy_starves() {
        let mut game = quiet_game();
        game.character.hunger = 0;
        game.character.energy = 1;
        let events = step(&mut game, Direction::Left);
        assert!(matches!(
            events[0],
            GameEvent::Moved {
                charge: Charge::Buffered,
                ..
            }
        ));
        assert_eq!(events.last(), Some(&GameEvent::Starved));
        assert_eq!(game.character().energy, 0);
        assert_eq!(game.status(), GameStatus::Starved);
    }

    #[test]
    fn failed_tree_growth_leaves_cat_on_ground() {
        let mut game = quiet_game();
        game.ground.set_terrain(Coord::ORIGIN, Terrain::Trunk);
        game.rules.tree_radii.clear();
        let before = game.character().clone();

        assert!(matches!(
            game.act(Action::Climb),
            Err(MechError::InvalidRules(_))
        ));
        assert_eq!(game.character(), &before);
        assert!(game.tree_board().is_none());
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn spawned_animal_blocks_actions_until_resolved() {
        let mut rules = Rules::default().without_spawns();
        rules.animal_one_in = 1;
        let mut game = Game::new(GameConfig::default().with_rules(rules)).unwrap();
        game.ground = Board::generate(Bounds::centered(5, 5)).unwrap();

        let events = step(&mut game, Direction::Right);
        assert!(matches!(events.last(), Some(GameEvent::AnimalAppeared(_))));
        assert_eq!(game.status(), GameStatus::Encounter);
        assert!(game.encounter().is_some());
        assert!(matches!(
            game.act(Action::Nap),
            Err(MechError::EncounterInProgress)
        ));

        let before = game.character().clone();
        let events = game.offer_berry(None).unwrap();
        assert_eq!(events, vec![GameEvent::EncounterAbandoned]);
        assert_eq!(game.status(), GameStatus::Exploring);
        assert_eq!(game.character(), &before);
        assert!(matches!(game.offer_berry(None), Err(MechError::NoEncounter)));
    }

    #[test]
    fn finding_items() {
        let mut rules = Rules::default().without_spawns();
        rules.catnip_one_in = 1;
        let mut game = Game::new(GameConfig::default().with_rules(rules)).unwrap();
        game.ground = Board::generate(Bounds::centered(5, 5)).unwrap();

        let events = step(&mut game, Direction::Down);
        assert_eq!(
            events.last(),
            Some(&GameEvent::FoundItem(Item::Boost(ww_core::Boost::Catnip)))
        );
        assert_eq!(game.character().inventory.catnip, 1);
    }

    #[test]
    fn helping_an_animal() {
        let mut game = quiet_game();
        game.encounter = Some(Encounter::new(Animal::new(
            "Owl",
            vec![Ailment::Injured, Ailment::Sad],
        )));
        game.status = GameStatus::Encounter;

        let events = game.offer_berry(Some(BerryColor::Red)).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::AilmentCured {
                berry: BerryColor::Red,
                ailment: Ailment::Injured,
                remaining: vec![Ailment::Sad]
            }]
        );

        let events = game.offer_berry(Some(BerryColor::Red)).unwrap();
        assert_eq!(events, vec![GameEvent::BerryMissing(BerryColor::Red)]);
        assert_eq!(game.status(), GameStatus::Encounter);

        let events = game.offer_berry(Some(BerryColor::Purple)).unwrap();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::AilmentCured { .. }, GameEvent::AnimalHelped { name, rewards }]
                if name == "Owl" && rewards.len() == 2
        ));
        assert_eq!(game.status(), GameStatus::Exploring);
        assert_eq!(game.character().animals_helped, 1);
        assert_eq!(game.character().progress_to_next_level, 4);
    }

    #[test]
    fn ineffective_berry_ends_encounter() {
        let mut game = quiet_game();
        game.encounter = Some(Encounter::new(Animal::new("Fox", vec![Ailment::Burned])));
        game.status = GameStatus::Encounter;

        let events = game.offer_berry(Some(BerryColor::Blue)).unwrap();
        assert_eq!(events, vec![GameEvent::BerryIneffective(BerryColor::Blue)]);
        assert!(game.encounter().is_none());
        assert_eq!(game.character().inventory.berries(BerryColor::Blue), 0);
        assert_eq!(game.character().animals_helped, 0);
    }

    #[test]
    fn reaching_level_three_starts_final_challenge() {
        let mut game = quiet_game();
        let mut cat = game.rules.new_character("Mittens").with_progress(1);
        cat.level = 2;
        game.character = cat.on_ground_at(Coord::new(2, 2)).in_tree_at(Coord::new(1, 1));
        game.tree = Some(Board::generate(Bounds::centered(3, 3)).unwrap());
        game.encounter = Some(Encounter::new(Animal::new("Owl", vec![Ailment::Injured])));
        game.status = GameStatus::Encounter;

        let events = game.offer_berry(Some(BerryColor::Red)).unwrap();
        assert!(events.contains(&GameEvent::LeveledUp { level: 3, next: 15 }));
        assert!(events.contains(&GameEvent::FinalChallengeUnlocked));
        assert!(matches!(
            events.last(),
            Some(GameEvent::AnimalAppeared(animal)) if animal.final_challenge
        ));

        let cat = game.character();
        assert!(cat.on_ground());
        assert_eq!(cat.current_location(), Coord::ORIGIN);
        assert_eq!(cat.final_challenge(), FinalChallenge::Unlocked);
        assert!(game.tree_board().is_none());
        assert_eq!(game.status(), GameStatus::Encounter);
    }

    #[test]
    fn abandoned_final_challenge_returns_at_origin() {
        let mut game = quiet_game();
        game.character.level = 3;
        game.character.unlock_final_challenge();

        let events = step(&mut game, Direction::Right);
        assert_eq!(events.last(), Some(&GameEvent::FoundNothing));
        let events = step(&mut game, Direction::Left);
        assert!(matches!(
            events.last(),
            Some(GameEvent::AnimalAppeared(animal)) if animal.final_challenge
        ));
    }

    #[test]
    fn curing_the_lynx_wins() {
        let mut game = quiet_game();
        game.character = game
            .rules
            .new_character("Mittens")
            .with_inventory(Inventory::starting(2));
        game.character.level = 3;
        game.character.unlock_final_challenge();
        game.encounter = Some(Encounter::new(Animal::final_challenge()));
        game.status = GameStatus::Encounter;

        let mut events = Vec::new();
        for color in BerryColor::ALL {
            for _ in 0..2 {
                events = game.offer_berry(Some(color)).unwrap();
            }
        }
        assert!(events.contains(&GameEvent::FinalChallengeCompleted));
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.status().is_over());
        assert!(matches!(
            game.act(Action::Move(Direction::Up)),
            Err(MechError::GameOver)
        ));
    }
}
