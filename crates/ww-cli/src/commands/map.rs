use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ww_core::{Board, Coord, Terrain};
use ww_mechanics::Rules;
use ww_mechanics::generate::{generate_ground_board, generate_tree_board};

pub fn run(seed: u64, tree: bool, rules: &Rules) -> Result<(), String> {
    rules.validate().map_err(|e| e.to_string())?;
    let mut rng = StdRng::seed_from_u64(seed);
    let ground = generate_ground_board(rules, &mut rng).map_err(|e| e.to_string())?;

    let (label, board) = if tree {
        let canopy = generate_tree_board(rules, &mut rng).map_err(|e| e.to_string())?;
        ("Tree canopy", canopy)
    } else {
        ("Forest floor", ground)
    };

    let bounds = board.bounds();
    println!(
        "  {} {}",
        label.bold(),
        format!(
            "(seed={seed}, {}x{}, {} trunk, {} moss)",
            bounds.width(),
            bounds.height(),
            board.count(Terrain::Trunk),
            board.count(Terrain::Moss)
        )
        .dimmed()
    );
    println!();
    print!("{}", render_board(&board, Coord::ORIGIN));
    println!();
    println!("  {}", "@ you   T tree trunk   m moss   . open ground".dimmed());
    Ok(())
}

fn glyph(terrain: Terrain) -> char {
    match terrain {
        Terrain::Empty => '.',
        Terrain::Trunk => 'T',
        Terrain::Moss => 'm',
    }
}

/// Draw `board` row by row, top row first, with `@` at `cat`.
pub fn render_board(board: &Board, cat: Coord) -> String {
    let bounds = board.bounds();
    let mut out = String::new();
    for y in bounds.min_y..=bounds.max_y {
        out.push_str("  ");
        for x in bounds.min_x..=bounds.max_x {
            let coord = Coord::new(x, y);
            let c = if coord == cat {
                '@'
            } else {
                board.terrain_at(coord).map(glyph).unwrap_or(' ')
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
