//! Self-play simulation for the 3D tic-tac-toe engine
//!
//! Pits the line-extension heuristic against the random heuristic over a
//! number of games, alternating who moves first, and prints a win/draw
//! tally. Usage:
//!
//! ```text
//! qubic [games] [board_size] [max_depth] [prune_fraction]
//! ```

use qubic::{EngineConfig, GameState, GameStatus, Heuristic, Mark, MoveSelector};

struct SimArgs {
    games: u32,
    board_size: usize,
    max_depth: u8,
    prune_fraction: f32,
}

impl SimArgs {
    fn parse() -> Result<Self, String> {
        let mut args = std::env::args().skip(1);
        let mut parsed = Self {
            games: 20,
            board_size: 3,
            max_depth: 3,
            prune_fraction: 0.5,
        };
        if let Some(v) = args.next() {
            parsed.games = v.parse().map_err(|_| format!("invalid game count: {v}"))?;
        }
        if let Some(v) = args.next() {
            parsed.board_size = v.parse().map_err(|_| format!("invalid board size: {v}"))?;
        }
        if let Some(v) = args.next() {
            parsed.max_depth = v.parse().map_err(|_| format!("invalid depth: {v}"))?;
        }
        if let Some(v) = args.next() {
            parsed.prune_fraction = v.parse().map_err(|_| format!("invalid fraction: {v}"))?;
        }
        Ok(parsed)
    }
}

struct Tally {
    line_wins: u32,
    random_wins: u32,
    draws: u32,
    aborted: u32,
}

fn main() {
    env_logger::init();

    let args = match SimArgs::parse() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: qubic [games] [board_size] [max_depth] [prune_fraction]");
            std::process::exit(2);
        }
    };

    println!(
        "Starting {} games on a {size}x{size}x{size} board (depth {}, pruning {})",
        args.games,
        args.max_depth,
        args.prune_fraction,
        size = args.board_size
    );
    println!("Line-extension heuristic vs. random heuristic\n");

    let mut tally = Tally {
        line_wins: 0,
        random_wins: 0,
        draws: 0,
        aborted: 0,
    };

    for game in 0..args.games {
        // Alternate who moves first; X always opens
        let line_plays_x = game % 2 == 0;
        match run_game(&args, game, line_plays_x) {
            Some(GameStatus::Won(winner)) => {
                let line_won = (winner == Mark::X) == line_plays_x;
                if line_won {
                    tally.line_wins += 1;
                } else {
                    tally.random_wins += 1;
                }
                log::info!("game {game}: {winner} wins (line as X: {line_plays_x})");
            }
            Some(GameStatus::Draw) => {
                tally.draws += 1;
                log::info!("game {game}: draw");
            }
            Some(GameStatus::InProgress) | None => {
                tally.aborted += 1;
                log::warn!("game {game}: aborted without a result");
            }
        }
    }

    let pct = |n: u32| f64::from(n) / f64::from(args.games) * 100.0;
    println!("Results:");
    println!("  Games played:  {}", args.games);
    println!(
        "  Line wins:     {} ({:.1}%)",
        tally.line_wins,
        pct(tally.line_wins)
    );
    println!(
        "  Random wins:   {} ({:.1}%)",
        tally.random_wins,
        pct(tally.random_wins)
    );
    println!("  Draws:         {} ({:.1}%)", tally.draws, pct(tally.draws));
    if tally.aborted > 0 {
        println!("  Aborted:       {}", tally.aborted);
    }
}

/// Play one game to completion. Returns the final status, or `None` if
/// the game could not be set up or continued.
fn run_game(args: &SimArgs, game: u32, line_plays_x: bool) -> Option<GameStatus> {
    let base = EngineConfig {
        board_size: args.board_size,
        max_depth: args.max_depth,
        prune_fraction: args.prune_fraction,
        heuristic: Heuristic::Line,
        seed: u64::from(game),
    };
    let random = EngineConfig {
        heuristic: Heuristic::Random,
        seed: u64::from(game) + 0x8000_0000,
        ..base
    };

    let (x_config, o_config) = if line_plays_x {
        (base, random)
    } else {
        (random, base)
    };

    let mut state = GameState::new(args.board_size).ok()?;
    let mut x = MoveSelector::new(&x_config).ok()?;
    let mut o = MoveSelector::new(&o_config).ok()?;

    while !state.is_terminal() {
        let selector = match state.current_player() {
            Some(Mark::X) => &mut x,
            Some(_) => &mut o,
            None => break,
        };
        if let Err(err) = selector.play(&mut state) {
            log::warn!("game {game}: no continuation possible ({err})");
            return None;
        }
    }

    Some(state.status())
}
