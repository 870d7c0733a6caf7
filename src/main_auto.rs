// Copyright (C) 2020-2024 Andy Kurnia.

use rand::prelude::*;
use teamduel::{display, duel_state, error, lineup, solver, strategy};

// plays one game from the opening. side 0 always follows a best move,
// side 1 does too unless sloppy. returns the net score for side 0.
fn play_out(
    opening: &duel_state::DuelState,
    table: &mut strategy::StrategyTable,
    rng: &mut rand_chacha::ChaCha20Rng,
    sloppy: bool,
    verbose: bool,
) -> i16 {
    let mut state = opening.clone();
    let mut side = 0u8;
    let mut realized = 0i16;
    while !state.is_terminal() {
        let mv = if side == 1 && sloppy {
            rng.random_range(state.legal_moves())
        } else {
            let entry = solver::solve_one(&state, table);
            *entry.best_moves.choose(rng).unwrap_or(&1)
        };
        let t = state.apply(mv, true);
        if verbose {
            println!(
                "  p{} {}: sends {}, {:+}",
                side + 1,
                display::state_label(&state),
                state.mine()[mv as usize - 1],
                t.score_delta
            );
        }
        realized += if side == 0 {
            t.score_delta as i16
        } else {
            -(t.score_delta as i16)
        };
        if t.switched {
            side ^= 1;
        }
        state = t.state;
    }
    realized
}

fn main() -> error::Returns<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        println!(
            "args:
  4 [GAMES] [SEED]
    self-play random openings with 4 teams per side"
        );
        return Ok(());
    }
    let n = args[1].parse::<usize>()?;
    if 2 * n > u8::MAX as usize {
        return Err("too many teams".into());
    }
    let num_games = match args.get(2) {
        Some(x) => x.parse::<usize>()?,
        None => 100,
    };
    let mut rng = match args.get(3) {
        Some(x) => rand_chacha::ChaCha20Rng::seed_from_u64(x.parse::<u64>()?),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    let openings = lineup::initial_states(n);
    let mut table = strategy::StrategyTable::new();
    let t0 = std::time::Instant::now();
    let mut num_mismatches = 0;
    for game_num in 0..num_games {
        let opening = openings.choose(&mut rng).ok_or("no openings")?;
        let value = solver::solve_one(opening, &mut table).best_score;
        let sloppy = game_num % 2 == 1;
        let verbose = game_num < 2;
        if verbose {
            println!(
                "game {} ({}): {}",
                game_num + 1,
                if sloppy { "vs random" } else { "vs best" },
                display::state_label(opening)
            );
        }
        let realized = play_out(opening, &mut table, &mut rng, sloppy, verbose);
        // a best-move player can only gain from a sloppy opponent
        if realized < value || (!sloppy && realized != value) {
            num_mismatches += 1;
            log::error!(
                "game {}: {} realized {} but solved {}",
                game_num + 1,
                display::state_label(opening),
                realized,
                value
            );
        }
    }
    println!(
        "{} games, {} mismatches, {} states in table",
        num_games,
        num_mismatches,
        table.len()
    );
    println!("time taken: {:?}", t0.elapsed());
    if num_mismatches != 0 {
        return Err(format!("{} games disagreed with the solved value", num_mismatches).into());
    }
    Ok(())
}
