//! Flavor text for everything the game reports.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use ww_core::{Animal, Board, Character, FinalChallenge, Item, Terrain};
use ww_mechanics::{Charge, GameEvent, HungerWarning};

const SICK_ANIMAL: &[&str] = &[
    "A very frail {name} lies here, shivering and weak. Its big eyes look up at you, pleading for help.",
    "You see a sickly {name} curled up on the ground, its breathing shallow and labored.",
    "A wounded {name} rests here, its fur matted and its body trembling. It needs care urgently.",
    "A fragile little {name} lies here, letting out faint cries. It looks like it hasn't eaten in days.",
    "A pitiful {name} lies in the dirt, its eyes half-closed. It's too weak to move on its own.",
    "A trembling {name} is lying on its side, struggling to lift its head.",
    "The {name} is covered in scratches and bruises. Its eyes are dull.",
    "The poor {name} lets out a faint, pitiful sound. It needs help quickly.",
];

/// Backstory and goals shown when a game starts.
pub fn backstory(name: &str) -> String {
    format!(
        "{title}\n\
         Deep in the heart of Whisker Woods, a magical forest brimming with life,\n\
         animals have fallen ill from mysterious ailments.\n\
         Meet {name}, a kind-hearted healer cat with a satchel of enchanted berries.\n\
         \n\
         {mission}\n\
         - Work out which berry cures each animal's ailment.\n\
         - Heal enough animals to level up.\n\
         - Reach Level 3 and cure the Moonlit Lynx to save the forest for good.\n\
         \n\
         Type 'help' for commands.",
        title = "Welcome to Whisker Woods Rescue!".bold(),
        mission = "Your mission:".bold(),
    )
}

/// Shown when the cat passes out.
pub fn game_over() -> String {
    format!(
        "{}\nWithout the energy to continue, your adventure comes to an end.\n\
         But every hero gets another chance!",
        "Oh no! You've passed out from hunger!".red().bold()
    )
}

/// Shown when the final challenge is cured.
pub fn game_complete(name: &str) -> String {
    format!(
        "{}\nThanks to your kindness, the forest is thriving again.\n\
         {name} is now the ultimate healer of Whisker Woods!",
        "Congratulations! You've completed Whisker Woods Rescue!"
            .green()
            .bold()
    )
}

/// Where the cat is and what is underfoot.
pub fn describe_location(character: &Character, board: &Board) -> String {
    let place = if character.in_tree() {
        "high in the treetops"
    } else {
        "on the forest floor"
    };
    let location = character.current_location();
    let mut text = format!("You are {place} at {location}.");
    match board.terrain_at(location) {
        Some(Terrain::Trunk) if character.in_tree() => {
            text.push_str(" The trunk leads back down.");
        }
        Some(Terrain::Trunk) => text.push_str(" A sturdy tree trunk rises here. You could climb it."),
        Some(Terrain::Moss) => text.push_str(" A soft patch of moss looks perfect for a nap."),
        _ => {}
    }
    text
}

/// One-line summary of the cat's stats.
pub fn status_line(character: &Character) -> String {
    let challenge = match character.final_challenge() {
        FinalChallenge::Locked => "locked",
        FinalChallenge::Unlocked => "waiting at the heart of the forest",
        FinalChallenge::Completed => "completed",
    };
    format!(
        "{} | Level {} ({} to next) | Hunger {} | Energy {} | Helped {} | Final challenge: {challenge}",
        character.name().bold(),
        character.level,
        character.progress_to_next_level,
        character.hunger,
        character.energy,
        character.animals_helped,
    )
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Turns events into prose.
pub struct Narrator {
    rng: StdRng,
}

impl Narrator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A random description of a sick animal and what ails it.
    pub fn sick_animal(&mut self, animal: &Animal) -> String {
        let template = SICK_ANIMAL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("A sick {name} lies here.");
        format!(
            "{} It appears to be suffering from {}.",
            template.replace("{name}", &animal.name),
            join(&animal.ailments)
        )
    }

    /// Prose for one event. `None` for events that need no comment.
    pub fn narrate(&mut self, event: &GameEvent) -> Option<String> {
        let text = match event {
            GameEvent::Moved { to, charge } => {
                let mut text = format!("You pad over to {to}.");
                if *charge == Charge::Buffered {
                    text.push_str(&format!(" {}", "(powered by your boost)".dimmed()));
                }
                text
            }
            GameEvent::ClimbedUp { .. } => "You scramble up the trunk into the canopy.".into(),
            GameEvent::ClimbedDown { .. } => "You climb back down to the forest floor.".into(),
            GameEvent::Ate {
                item,
                hunger,
                energy,
            } => {
                let mut text = format!("You eat the {item}. Hunger +{hunger}");
                if *energy > 0 {
                    text.push_str(&format!(", energy +{energy}"));
                }
                text.push('.');
                text
            }
            GameEvent::Napped { energy } => {
                format!("You curl up on the moss for a catnap. Energy +{energy}.")
            }
            GameEvent::Rejected(rejection) => rejection.to_string().yellow().to_string(),
            GameEvent::FoundItem(item) => format!("You picked up a {}.", item.to_string().cyan()),
            GameEvent::FoundNothing | GameEvent::Starved => return None,
            GameEvent::AnimalAppeared(animal) if animal.final_challenge => format!(
                "{}\nThe {} lies before you, every ailment twice over.\n\
                 Mix a medicine of two berries of every colour, or press ENTER to skip.",
                "You are accepting the Final Challenge!".magenta().bold(),
                animal.name
            ),
            GameEvent::AnimalAppeared(animal) => format!(
                "{}\n{}: I don't feel so good, I have {}. Can you help me?\n\
                 Give them the right berries, or press ENTER to skip.",
                self.sick_animal(animal),
                animal.name.bold(),
                join(&animal.ailments)
            ),
            GameEvent::BerryMissing(berry) => {
                format!("Oh no! You don't have any {berry} berries.")
                    .yellow()
                    .to_string()
            }
            GameEvent::AilmentCured {
                berry,
                ailment,
                remaining,
            } => {
                let mut text = format!(
                    "The {berry} berry worked! No longer {}.",
                    ailment.to_string().to_lowercase()
                );
                if !remaining.is_empty() {
                    text.push_str(&format!(" Still suffering from: {}.", join(remaining)));
                }
                text
            }
            GameEvent::BerryIneffective(berry) => format!(
                "The {berry} berry was not effective. The animal wanders off sadly."
            )
            .red()
            .to_string(),
            GameEvent::EncounterAbandoned => "You skipped giving the animal a berry.".into(),
            GameEvent::AnimalHelped { name, rewards } => format!(
                "The {name} has been completely cured! It gives you {} as thanks: {}.",
                plural(rewards.len(), "item"),
                join(rewards)
            )
            .green()
            .to_string(),
            GameEvent::LeveledUp { level, next } => format!(
                "{} Help {} to reach the next level.",
                format!("You leveled up to Level {level}!").green().bold(),
                plural(*next as usize, "more animal")
            ),
            GameEvent::FinalChallengeUnlocked => format!(
                "{}\nA hush falls over Whisker Woods, and you are whisked back to its heart.",
                "The Final Challenge has begun!".magenta().bold()
            ),
            GameEvent::FinalChallengeCompleted => {
                "The Moonlit Lynx rises, healthy at last, and the whole forest purrs."
                    .magenta()
                    .to_string()
            }
            GameEvent::HungerWarning(HungerWarning::Hungry) => {
                "Your tummy rumbles. Eat something soon.".yellow().to_string()
            }
            GameEvent::HungerWarning(HungerWarning::Fainting) => {
                "You feel faint with hunger!".red().bold().to_string()
            }
        };
        Some(text)
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// The satchel, one line per kind.
pub fn inventory(character: &Character) -> String {
    let inv = &character.inventory;
    let berries = ww_core::BerryColor::ALL
        .iter()
        .map(|c| format!("{c}: {}", inv.berries(*c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Boosts  {}: {}, {}: {}\nBerries {berries}",
        Item::Boost(ww_core::Boost::Catnip),
        inv.catnip,
        Item::Boost(ww_core::Boost::Silvervine),
        inv.silvervine
    )
}

/// Which berry treats which ailment.
pub fn berry_help() -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Berry", "Treats"]);
    for color in ww_core::BerryColor::ALL {
        table.add_row(vec![
            Item::Berry(color).to_string(),
            color.treats().to_string(),
        ]);
    }
    table.add_row(vec![
        "Any Berry".to_string(),
        ww_core::Ailment::Starving.to_string(),
    ]);
    table.to_string()
}
