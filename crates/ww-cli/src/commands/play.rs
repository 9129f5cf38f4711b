use std::io::{self, BufRead, Write};

use colored::Colorize;

use ww_core::Item;
use ww_mechanics::{Action, Game, GameConfig, GameEvent, GameStatus, Rules};

use super::map::render_board;
use crate::narrator::{self, Narrator};

const HELP: &str = "\
  w / a / s / d      move up, left, down, right
  climb (c)          climb the trunk underfoot, or back down
  eat <item> (e)     eat catnip, silvervine, or a berry (e.g. 'eat red')
  nap (n)            nap on moss while up a tree
  inventory (i)      show your satchel
  status             show level, hunger, and energy
  look (l)           describe where you are
  map (m)            draw the board you are on
  berries (b)        which berry treats which ailment
  quit (q)           leave the forest";

pub fn run(seed: u64, name: &str, rules: Rules) -> Result<(), String> {
    let config = GameConfig::default()
        .with_seed(seed)
        .with_name(name)
        .with_rules(rules);
    let mut game = Game::new(config).map_err(|e| format!("failed to start game: {e}"))?;
    let mut narrator = Narrator::new(seed);

    println!("{}\n", narrator::backstory(name));
    println!(
        "{}\n",
        narrator::describe_location(game.character(), game.board())
    );

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !game.status().is_over() {
        let prompt = if game.status() == GameStatus::Encounter {
            "Which color berry would you like to give? "
        } else {
            "> "
        };
        print!("{prompt}");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        let input = line.trim();

        let events = if game.status() == GameStatus::Encounter {
            match input.to_lowercase().as_str() {
                "quit" | "q" => break,
                "berries" | "b" => {
                    println!("{}\n", narrator::berry_help());
                    continue;
                }
                _ => {}
            }
            match parse_berry(input) {
                Ok(berry) => game.offer_berry(berry),
                Err(msg) => {
                    println!("{}\n", msg.yellow());
                    continue;
                }
            }
        } else {
            if input.is_empty() {
                continue;
            }
            match input.to_lowercase().as_str() {
                "quit" | "q" => break,
                "help" | "h" | "?" => {
                    println!("{HELP}\n");
                    continue;
                }
                "inventory" | "inv" | "i" => {
                    println!("{}\n", narrator::inventory(game.character()));
                    continue;
                }
                "status" => {
                    println!("{}\n", narrator::status_line(game.character()));
                    continue;
                }
                "look" | "l" => {
                    println!(
                        "{}\n",
                        narrator::describe_location(game.character(), game.board())
                    );
                    continue;
                }
                "berries" | "b" => {
                    println!("{}\n", narrator::berry_help());
                    continue;
                }
                "map" | "m" => {
                    print!(
                        "{}",
                        render_board(game.board(), game.character().current_location())
                    );
                    println!();
                    continue;
                }
                _ => Action::parse(input).and_then(|action| game.act(action)),
            }
        };

        match events {
            Ok(events) => report(&game, &mut narrator, &events),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    match game.status() {
        GameStatus::Starved => println!("{}", narrator::game_over()),
        GameStatus::Won => println!("{}", narrator::game_complete(name)),
        _ => println!("You curl up for a long rest. Goodbye!"),
    }
    Ok(())
}

/// Empty input walks away; anything else must name a berry.
fn parse_berry(input: &str) -> Result<Option<ww_core::BerryColor>, String> {
    if input.is_empty() {
        return Ok(None);
    }
    match Item::parse(input) {
        Ok(Item::Berry(color)) => Ok(Some(color)),
        _ => Err(format!(
            "'{input}' is not a berry color. Try red, green, blue, yellow, or purple."
        )),
    }
}

fn report(game: &Game, narrator: &mut Narrator, events: &[GameEvent]) {
    for event in events {
        if let Some(text) = narrator.narrate(event) {
            println!("{text}");
        }
    }
    let moved = events.iter().any(|e| {
        matches!(
            e,
            GameEvent::Moved { .. } | GameEvent::ClimbedUp { .. } | GameEvent::ClimbedDown { .. }
        )
    });
    if moved && !game.status().is_over() && game.status() != GameStatus::Encounter {
        println!(
            "{}",
            narrator::describe_location(game.character(), game.board())
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use ww_core::BerryColor;

    #[test]
    fn berry_input() {
        assert_eq!(parse_berry(""), Ok(None));
        assert_eq!(parse_berry("Red"), Ok(Some(BerryColor::Red)));
        assert_eq!(parse_berry("purple berry"), Ok(Some(BerryColor::Purple)));
        assert!(parse_berry("catnip").is_err());
        assert!(parse_berry("mud").is_err());
    }
}
