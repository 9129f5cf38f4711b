//! Procedural generation: boards, animals, items, and tile encounters.
//!
//! Every generator takes the random source explicitly so games and tests
//! can be replayed from a seed.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;
use ww_core::animal::SPECIES;
use ww_core::{
    Ailment, Animal, BerryColor, Board, Boost, Bounds, Character, Coord, Entity, FinalChallenge,
    Item, Terrain,
};

use crate::error::{MechError, MechResult};
use crate::rules::Rules;

/// Roll a "one in `n`" chance. `n == 0` never fires.
pub fn one_in<R: Rng + ?Sized>(rng: &mut R, n: u32) -> bool {
    n != 0 && rng.random_range(1..=n) == 1
}

/// An all-empty board covering the inclusive rectangle.
pub fn generate_board(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> MechResult<Board> {
    Ok(Board::generate(Bounds::new(min_x, max_x, min_y, max_y))?)
}

/// Overwrite `count` distinct, uniformly chosen empty non-origin tiles with
/// `terrain`. Returns the chosen coordinates.
///
/// Fails without touching the board when `count` is zero or exceeds the
/// number of candidate tiles.
pub fn populate_board<R: Rng + ?Sized>(
    board: &mut Board,
    terrain: Terrain,
    count: usize,
    rng: &mut R,
) -> MechResult<Vec<Coord>> {
    let candidates = board.empty_non_origin();
    if count == 0 || count > candidates.len() {
        return Err(ww_core::CoreError::InsufficientSpace {
            requested: count,
            available: candidates.len(),
        }
        .into());
    }

    let chosen: Vec<Coord> = candidates.choose_multiple(rng, count).copied().collect();
    for coord in &chosen {
        board.set_terrain(*coord, terrain);
    }
    Ok(chosen)
}

/// The forest floor: a fixed-size board scattered with trunks.
pub fn generate_ground_board<R: Rng + ?Sized>(rules: &Rules, rng: &mut R) -> MechResult<Board> {
    rules.validate()?;
    let mut board = Board::generate(rules.ground_bounds())?;
    let trunks = rng.random_range(rules.ground_trunks_min..=rules.ground_trunks_max);
    populate_board(&mut board, Terrain::Trunk, trunks, rng)?;
    debug!(tiles = board.len(), trunks, "generated ground board");
    Ok(board)
}

/// A tree canopy: a square board of random radius with its trunk at the
/// origin and a few patches of moss.
pub fn generate_tree_board<R: Rng + ?Sized>(rules: &Rules, rng: &mut R) -> MechResult<Board> {
    rules.validate()?;
    let radius = *rules
        .tree_radii
        .choose(rng)
        .ok_or_else(|| MechError::InvalidRules("no tree radii configured".into()))?;

    let mut board = Board::generate(Bounds::centered(radius, radius))?;
    board.set_terrain(Coord::ORIGIN, Terrain::Trunk);

    let moss = rng.random_range(1..=radius.max(1) as usize);
    populate_board(&mut board, Terrain::Moss, moss, rng)?;
    debug!(radius, moss, "generated tree board");
    Ok(board)
}

/// A sick animal of a random species with up to `level` distinct ailments.
///
/// The requested ailment count is drawn from `1..=level`; repeated draws
/// collapse, so the animal may end up with fewer.
pub fn generate_animal<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Animal {
    let name = SPECIES[rng.random_range(0..SPECIES.len())];
    let draws = rng.random_range(1..=level.max(1));

    let ailments: BTreeSet<Ailment> = (0..draws)
        .map(|_| Ailment::ALL[rng.random_range(0..Ailment::ALL.len())])
        .collect();

    Animal::new(name, ailments.into_iter().collect())
}

fn roll_boost<R: Rng + ?Sized>(rules: &Rules, rng: &mut R) -> Option<Boost> {
    if one_in(rng, rules.silvervine_one_in) {
        Some(Boost::Silvervine)
    } else if one_in(rng, rules.catnip_one_in) {
        Some(Boost::Catnip)
    } else {
        None
    }
}

fn random_berry<R: Rng + ?Sized>(rng: &mut R) -> BerryColor {
    BerryColor::ALL[rng.random_range(0..BerryColor::ALL.len())]
}

/// Roll for an item on a tile.
///
/// Silvervine, then Catnip, then (only in trees) a berry. With
/// `force_berry` the tree check is skipped and a berry is always the
/// fallback, so the result is never `None`.
pub fn generate_item<R: Rng + ?Sized>(
    in_tree: bool,
    force_berry: bool,
    rules: &Rules,
    rng: &mut R,
) -> Option<Item> {
    if let Some(boost) = roll_boost(rules, rng) {
        return Some(Item::Boost(boost));
    }
    if force_berry || (in_tree && one_in(rng, rules.berry_one_in)) {
        return Some(Item::Berry(random_berry(rng)));
    }
    None
}

/// One reward item for curing an animal: [`generate_item`] with the berry
/// forced, so something always comes back.
pub fn generate_reward_item<R: Rng + ?Sized>(rules: &Rules, rng: &mut R) -> Item {
    generate_item(false, true, rules, rng).unwrap_or_else(|| Item::Berry(random_berry(rng)))
}

/// Decide what, if anything, the cat meets on its current tile.
pub fn generate_entity<R: Rng + ?Sized>(
    board: &Board,
    character: &Character,
    rules: &Rules,
    rng: &mut R,
) -> Option<Entity> {
    let location = character.current_location();

    if character.final_challenge() == FinalChallenge::Unlocked
        && character.on_ground()
        && location.is_origin()
    {
        return Some(Entity::Animal(Animal::final_challenge()));
    }

    if board.terrain_at(location).is_some_and(Terrain::is_landmark) {
        return None;
    }

    if one_in(rng, rules.animal_one_in) {
        return Some(Entity::Animal(generate_animal(character.level, rng)));
    }

    generate_item(character.in_tree(), false, rules, rng).map(Entity::Item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ww_core::CoreError;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn one_in_zero_never_fires() {
        let mut rng = rng();
        assert!((0..1000).all(|_| !one_in(&mut rng, 0)));
        assert!((0..100).all(|_| one_in(&mut rng, 1)));
    }

    #[test]
    fn generate_board_counts_and_errors() {
        let board = generate_board(-2, 2, -1, 1).unwrap();
        assert_eq!(board.len(), 15);
        assert!(matches!(
            generate_board(2, -1, 0, 0),
            Err(MechError::Core(CoreError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn populate_places_exact_count_off_origin() {
        let mut rng = rng();
        let mut board = generate_board(-2, 2, -2, 2).unwrap();
        let placed = populate_board(&mut board, Terrain::Trunk, 7, &mut rng).unwrap();
        assert_eq!(placed.len(), 7);
        assert_eq!(board.count(Terrain::Trunk), 7);
        assert_eq!(board.terrain_at(Coord::ORIGIN), Some(Terrain::Empty));
    }

    #[test]
    fn populate_skips_occupied_tiles() {
        let mut rng = rng();
        let mut board = generate_board(-1, 1, -1, 1).unwrap();
        populate_board(&mut board, Terrain::Trunk, 4, &mut rng).unwrap();
        populate_board(&mut board, Terrain::Moss, 4, &mut rng).unwrap();
        assert_eq!(board.count(Terrain::Trunk), 4);
        assert_eq!(board.count(Terrain::Moss), 4);
        assert_eq!(board.count(Terrain::Empty), 1);
    }

    #[test]
    fn populate_overflow_leaves_board_untouched() {
        let mut rng = rng();
        let mut board = generate_board(-1, 1, -1, 1).unwrap();
        let before = board.clone();
        let err = populate_board(&mut board, Terrain::Trunk, 9, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            MechError::Core(CoreError::InsufficientSpace {
                requested: 9,
                available: 8
            })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn populate_zero_is_rejected() {
        let mut rng = rng();
        let mut board = generate_board(-1, 1, -1, 1).unwrap();
        assert!(populate_board(&mut board, Terrain::Moss, 0, &mut rng).is_err());
        assert_eq!(board.count(Terrain::Moss), 0);
    }

    #[test]
    fn inverted_trunk_range_is_an_error() {
        let mut rng = rng();
        let rules = Rules::default().with_ground_trunks(10, 5);
        assert!(matches!(
            generate_ground_board(&rules, &mut rng),
            Err(MechError::InvalidRules(_))
        ));
    }

    #[test]
    fn bad_tree_radii_are_an_error() {
        let mut rng = rng();
        let mut rules = Rules::default();
        rules.tree_radii = vec![0];
        assert!(matches!(
            generate_tree_board(&rules, &mut rng),
            Err(MechError::InvalidRules(_))
        ));
        rules.tree_radii.clear();
        assert!(generate_tree_board(&rules, &mut rng).is_err());
    }

    #[test]
    fn ground_board_has_trunks_in_range() {
        let rules = Rules::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = generate_ground_board(&rules, &mut rng).unwrap();
            assert_eq!(board.len(), 25 * 25);
            let trunks = board.count(Terrain::Trunk);
            assert!((30..=60).contains(&trunks), "{trunks} trunks");
            assert_eq!(board.terrain_at(Coord::ORIGIN), Some(Terrain::Empty));
        }
    }

    #[test]
    fn tree_board_has_trunk_at_origin_and_some_moss() {
        let rules = Rules::default();
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = generate_tree_board(&rules, &mut rng).unwrap();
            let radius = board.bounds().max_x;
            assert!(rules.tree_radii.contains(&radius));
            assert_eq!(board.bounds(), Bounds::centered(radius, radius));
            assert_eq!(board.terrain_at(Coord::ORIGIN), Some(Terrain::Trunk));
            let moss = board.count(Terrain::Moss);
            assert!((1..=radius as usize).contains(&moss));
        }
    }

    #[test]
    fn animal_ailments_are_distinct_and_bounded() {
        let mut rng = rng();
        for level in 1..=4 {
            for _ in 0..50 {
                let animal = generate_animal(level, &mut rng);
                assert!(SPECIES.contains(&animal.name.as_str()));
                assert!(!animal.ailments.is_empty());
                assert!(animal.ailments.len() <= level as usize);
                let distinct: BTreeSet<_> = animal.ailments.iter().collect();
                assert_eq!(distinct.len(), animal.ailments.len());
                assert!(!animal.final_challenge);
            }
        }
    }

    #[test]
    fn level_one_animals_have_one_ailment() {
        let mut rng = rng();
        for _ in 0..20 {
            assert_eq!(generate_animal(1, &mut rng).ailments.len(), 1);
        }
    }

    #[test]
    fn berries_only_grow_in_trees() {
        let rules = Rules {
            silvervine_one_in: 0,
            catnip_one_in: 0,
            berry_one_in: 1,
            ..Rules::default()
        };
        let mut rng = rng();
        assert_eq!(generate_item(false, false, &rules, &mut rng), None);
        assert!(matches!(
            generate_item(true, false, &rules, &mut rng),
            Some(Item::Berry(_))
        ));
    }

    #[test]
    fn forced_berry_ignores_tree_gate() {
        let rules = Rules::default().without_spawns();
        let mut rng = rng();
        for _ in 0..20 {
            assert!(matches!(
                generate_item(false, true, &rules, &mut rng),
                Some(Item::Berry(_))
            ));
        }
    }

    #[test]
    fn silvervine_takes_priority() {
        let rules = Rules {
            silvervine_one_in: 1,
            catnip_one_in: 1,
            ..Rules::default()
        };
        let mut rng = rng();
        assert_eq!(
            generate_item(true, true, &rules, &mut rng),
            Some(Item::Boost(Boost::Silvervine))
        );
        assert_eq!(
            generate_reward_item(&rules, &mut rng),
            Item::Boost(Boost::Silvervine)
        );
    }

    #[test]
    fn reward_is_a_berry_without_boosts() {
        let rules = Rules {
            silvervine_one_in: 0,
            catnip_one_in: 0,
            ..Rules::default()
        };
        let mut rng = rng();
        for _ in 0..50 {
            assert!(matches!(
                generate_reward_item(&rules, &mut rng),
                Item::Berry(_)
            ));
        }
    }

    #[test]
    fn most_ground_tiles_yield_nothing() {
        let rules = Rules::default();
        let mut rng = rng();
        let hits = (0..2000)
            .filter(|_| generate_item(false, false, &rules, &mut rng).is_some())
            .count();
        // Expected rate is about 6%.
        assert!(hits < 300, "{hits} items in 2000 rolls");
    }

    #[test]
    fn no_spawns_on_landmarks() {
        let rules = Rules {
            animal_one_in: 1,
            ..Rules::default()
        };
        let mut rng = rng();
        let mut board = generate_board(-1, 1, -1, 1).unwrap();
        board.set_terrain(Coord::new(1, 0), Terrain::Trunk);
        let cat = Character::new("Mittens").on_ground_at(Coord::new(1, 0));
        assert_eq!(generate_entity(&board, &cat, &rules, &mut rng), None);

        let cat = Character::new("Mittens").on_ground_at(Coord::new(-1, 0));
        assert!(matches!(
            generate_entity(&board, &cat, &rules, &mut rng),
            Some(Entity::Animal(_))
        ));
    }

    #[test]
    fn final_challenge_waits_at_ground_origin() {
        let rules = Rules::default().without_spawns();
        let mut rng = rng();
        let board = generate_board(-1, 1, -1, 1).unwrap();
        let mut cat = Character::new("Mittens");

        assert_eq!(generate_entity(&board, &cat, &rules, &mut rng), None);

        cat.unlock_final_challenge();
        match generate_entity(&board, &cat, &rules, &mut rng) {
            Some(Entity::Animal(animal)) => assert!(animal.final_challenge),
            other => panic!("expected the final challenge, got {other:?}"),
        }

        cat.climb_up();
        assert_eq!(generate_entity(&board, &cat, &rules, &mut rng), None);

        cat.climb_down();
        cat.complete_final_challenge();
        assert_eq!(generate_entity(&board, &cat, &rules, &mut rng), None);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let rules = Rules::default();
        let a = generate_ground_board(&rules, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_ground_board(&rules, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn populate_never_touches_origin(half in 1i32..6, seed in any::<u64>(), pick in 1usize..200) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = generate_board(-half, half, -half, half).unwrap();
            let available = board.empty_non_origin().len();
            let count = 1 + pick % available;
            populate_board(&mut board, Terrain::Trunk, count, &mut rng).unwrap();
            prop_assert_eq!(board.count(Terrain::Trunk), count);
            prop_assert_eq!(board.terrain_at(Coord::ORIGIN), Some(Terrain::Empty));
        }
    }
}
