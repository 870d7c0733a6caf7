// Copyright (C) 2020-2024 Andy Kurnia.

use teamduel::duel_state::DuelState;
use teamduel::strategy::{StrategyEntry, StrategyTable};
use teamduel::{lineup, solver, tabulate};

fn entry(best_score: i16, best_moves: &[u8]) -> StrategyEntry {
    StrategyEntry {
        best_score,
        best_moves: best_moves.into(),
    }
}

fn histogram(n: usize, table: &StrategyTable) -> Vec<(i16, usize)> {
    let mut counts = std::collections::BTreeMap::new();
    for s in lineup::initial_states(n) {
        *counts.entry(table.get(&s).unwrap().best_score).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

#[test]
fn example_a_three_each() {
    let mut t = StrategyTable::new();
    let s = DuelState::new(&[1, 4, 5], &[2, 3, 6], 0, true);
    assert_eq!(*solver::solve_one(&s, &mut t), entry(-1, &[1, 2, 3]));
}

#[test]
fn example_b_pending_response() {
    let mut t = StrategyTable::new();
    let s = DuelState::new(&[3, 6], &[1, 5], 2, false);
    // sending the 3 loses to the 5: -1 - (-1) = 0.
    // sending the 6 beats it: +1 + 1 = 2.
    assert_eq!(*solver::solve_one(&s, &mut t), entry(2, &[2]));
}

#[test]
fn raw_seed_matches_its_reranked_form() {
    let raw = DuelState::new(&[3, 6], &[1, 5], 2, false);
    let (mine, theirs) = teamduel::duel_state::canonicalize(raw.mine(), raw.theirs());
    let canonical = DuelState::new(&mine, &theirs, raw.chosen(), true);
    assert_eq!(canonical, DuelState::new(&[2, 4], &[1, 3], 2, true));

    let mut raw_table = StrategyTable::new();
    let raw_entry = solver::solve_one(&raw, &mut raw_table).clone();
    let mut canonical_table = StrategyTable::new();
    assert_eq!(*solver::solve_one(&canonical, &mut canonical_table), raw_entry);
    // past the seed both tables hold the same re-ranked subgames
    assert_eq!(raw_table.len(), canonical_table.len());

    let parsed = teamduel::display::parse_state("3,6", "1,5", Some("2")).unwrap();
    assert_eq!(parsed, canonical);
}

#[test]
fn example_c_one_each() {
    let mut t = StrategyTable::new();
    let s = DuelState::new(&[1], &[2], 0, true);
    assert_eq!(*solver::solve_one(&s, &mut t), entry(-1, &[1]));
}

#[test]
fn example_d_nothing_left() {
    let mut t = StrategyTable::new();
    let s = DuelState::new(&[], &[], 0, true);
    assert_eq!(*solver::solve_one(&s, &mut t), entry(0, &[]));
}

#[test]
fn openings_are_bounded_with_matching_parity() {
    let mut t = StrategyTable::new();
    for n in 0..=5 {
        let seeds = lineup::initial_states(n);
        solver::solve(seeds.iter().cloned(), &mut t);
        for s in &seeds {
            assert_eq!(s.length(), 2 * n);
            let e = t.get(s).unwrap();
            let n = n as i16;
            assert!((-n..=n).contains(&e.best_score), "{:?} {:?}", s, e);
            assert_eq!((e.best_score - n).rem_euclid(2), 0, "{:?} {:?}", s, e);
        }
    }
}

#[test]
fn terminal_entries_are_empty() {
    let mut t = StrategyTable::new();
    solver::solve(lineup::initial_states(3), &mut t);
    let mut num_terminal = 0;
    for (s, e) in t.iter() {
        assert_eq!(s.is_terminal(), e.best_moves.is_empty());
        if s.is_terminal() {
            num_terminal += 1;
            assert_eq!(*e, entry(0, &[]));
        }
    }
    assert_eq!(num_terminal, 1);
}

#[test]
fn opening_values() {
    let mut t = StrategyTable::new();
    solver::solve(lineup::initial_states(1), &mut t);
    assert_eq!(t.len(), 5);
    assert_eq!(histogram(1, &t), vec![(-1, 1), (1, 1)]);

    let mut t = StrategyTable::new();
    solver::solve(lineup::initial_states(2), &mut t);
    assert_eq!(t.len(), 23);
    assert_eq!(histogram(2, &t), vec![(-2, 2), (0, 3), (2, 1)]);
    assert_eq!(
        t.get(&DuelState::with_defaults(&[3, 4], &[1, 2])),
        Some(&entry(2, &[1, 2]))
    );
    assert_eq!(
        t.get(&DuelState::with_defaults(&[1, 4], &[2, 3])),
        Some(&entry(0, &[1, 2]))
    );

    let mut t = StrategyTable::new();
    solver::solve(lineup::initial_states(3), &mut t);
    assert_eq!(t.len(), 103);
    assert_eq!(histogram(3, &t), vec![(-3, 2), (-1, 9), (1, 8), (3, 1)]);

    let mut t = StrategyTable::new();
    solver::solve_by_length(lineup::initial_states(4), &mut t);
    assert_eq!(t.len(), 453);
    assert_eq!(
        histogram(4, &t),
        vec![(-4, 2), (-2, 22), (0, 33), (2, 12), (4, 1)]
    );
}

#[test]
fn alone_batch_and_fresh_agree() {
    let seeds = lineup::initial_states(4);
    let mut batch = StrategyTable::new();
    let batch_stats = solver::solve(seeds.iter().cloned(), &mut batch);
    let mut alone_total = 0;
    for s in &seeds {
        let mut alone = StrategyTable::new();
        let stats = solver::solve(vec![s.clone()], &mut alone);
        alone_total += stats.finalized;
        assert_eq!(alone.get(s), batch.get(s));
        for (k, v) in alone.iter() {
            assert_eq!(batch.get(k), Some(v));
        }
    }
    // shared subgames are solved once in a batch
    assert!(batch_stats.finalized < alone_total);

    let mut fresh = StrategyTable::new();
    solver::solve(seeds.iter().rev().cloned(), &mut fresh);
    assert_eq!(fresh.len(), batch.len());
    for (k, v) in batch.iter() {
        assert_eq!(fresh.get(k), Some(v));
    }
}

#[test]
fn warm_start_from_smaller_solve() {
    // 3-a-side subgames recur inside the 4-a-side games
    let mut warm = StrategyTable::new();
    solver::solve(lineup::initial_states(3), &mut warm);
    let mut out = Vec::new();
    tabulate::write_table(&mut out, &warm).unwrap();
    let mut warm = tabulate::read_table(&out[..]).unwrap();
    let before = warm.len();
    let stats = solver::solve(lineup::initial_states(4), &mut warm);
    assert_eq!(warm.len(), before + stats.finalized);

    let mut cold = StrategyTable::new();
    solver::solve(lineup::initial_states(4), &mut cold);
    for s in lineup::initial_states(4) {
        assert_eq!(warm.get(&s), cold.get(&s));
    }
    assert!(stats.finalized < cold.len());
}
