//! Headless cat-and-mouse match
//!
//! Plays one game on a reference board and prints every half-turn.
//!
//! ```text
//! cargo run --example headless_match -- [cat] [mouse] [small|big] [seed]
//! cargo run --example headless_match -- minimax:4 astar big 7
//! ```
//!
//! Set `RUST_LOG=debug` to see the simulation log.

use std::env;
use std::process;

use cat_and_mouse::{boards, GameConfig, Simulation, Strategy};

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let cat: Strategy = parse_arg(&args, 0, "minimax");
    let mouse: Strategy = parse_arg(&args, 1, "astar");
    let board_name = args.get(2).map(String::as_str).unwrap_or("small");
    let seed: Option<u64> = args.get(3).and_then(|s| s.parse().ok());

    let graph = match board_name {
        "small" => boards::small(),
        "big" => boards::big(),
        other => {
            eprintln!("Unknown board '{}', expected 'small' or 'big'", other);
            process::exit(2);
        }
    };
    let graph = graph.unwrap_or_else(|e| {
        eprintln!("Could not build the board: {}", e);
        process::exit(1);
    });

    let mut config = GameConfig::default()
        .with_cat_strategy(cat)
        .with_mouse_strategy(mouse);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    println!("Cat and Mouse");
    println!("=============");
    println!("Board: {} ({} nodes)", board_name, graph.len());
    println!("Cat: {}   Mouse: {}", cat, mouse);
    println!();

    let mut game = match Simulation::new(&graph, config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Could not start the game: {}", e);
            process::exit(1);
        }
    };

    let start = game.state();
    println!(
        "Start: cat={} mouse={} cheese={} goal={}",
        start.cat, start.mouse, start.cheese, start.goal
    );

    while !game.is_finished() {
        let mover = game.state().mover;
        match game.step() {
            Ok(transition) => {
                let state = &transition.state;
                let cheese = if state.has_cheese { " (has cheese)" } else { "" };
                println!(
                    "{:>4} {:<5} -> {:>2}   cat={:>2} mouse={:>2}{}",
                    state.step_count,
                    mover,
                    state.position_of(mover),
                    state.cat,
                    state.mouse,
                    cheese
                );
            }
            Err(e) => {
                eprintln!("Game stopped: {}", e);
                process::exit(1);
            }
        }
    }

    if let Some(summary) = game.summary() {
        println!();
        match summary.outcome.winner() {
            Some(winner) => println!("Winner: {} after {} half-turns", winner, summary.steps),
            None => println!("Draw after {} half-turns", summary.steps),
        }
        println!("Elapsed: {:.2?}", summary.elapsed);

        if summary.search.nodes_visited > 0 {
            println!();
            println!("{}", summary.search.summary());
        }
    }
}

fn parse_arg(args: &[String], index: usize, default: &str) -> Strategy {
    let raw = args.get(index).map(String::as_str).unwrap_or(default);
    raw.parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    })
}
