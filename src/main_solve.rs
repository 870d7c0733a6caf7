// Copyright (C) 2020-2024 Andy Kurnia.

use teamduel::{display, duel_config, error, tabulate};

fn main() -> error::Returns<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        println!(
            "args:
  3
    solve every opening with 3 teams per side
  3 three.csv
    also write the whole strategy table
  4 four.csv --warm=three.csv
    start from a previous table
  options:
    --by-length  resolve level by level instead of with the work list
    --raw        do not canonicalize (slow, diagnostics only)"
        );
        return Ok(());
    }
    let config = duel_config::DuelConfig::from_args(&args[1..])?;
    let t0 = std::time::Instant::now();
    let mut table = config.load_table()?;
    let seeds = config.initial_states();
    let stats = config.solve(seeds.iter().cloned(), &mut table);

    let n = config.teams_per_side() as i16;
    let mut histogram = vec![0usize; 2 * n as usize + 1];
    for seed in &seeds {
        let entry = table.get(seed).ok_or("opening left unsolved")?;
        histogram[(entry.best_score + n) as usize] += 1;
    }
    println!(
        "{} openings with {} teams per side, {} states in table",
        seeds.len(),
        n,
        table.len()
    );
    for (i, &count) in histogram.iter().enumerate() {
        if count != 0 {
            println!("{:+3}: {}", i as i16 - n, count);
        }
    }
    if seeds.len() <= 20 {
        for seed in &seeds {
            if let Some(entry) = table.get(seed) {
                display::print_entry(seed, entry);
            }
        }
    }
    println!(
        "{} new states, {} transitions, {} deferrals",
        stats.finalized, stats.transitions, stats.deferred
    );

    if let Some(path) = config.output() {
        tabulate::write_table_to_path(path, &table)?;
        println!("wrote {}", path);
    }
    println!("time taken: {:?}", t0.elapsed());
    Ok(())
}
