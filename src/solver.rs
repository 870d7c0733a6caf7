// Copyright (C) 2020-2024 Andy Kurnia.

// exhaustive backward induction over the team duel.
// note: the state space is exponential in the number of teams per side.

use super::{
    duel_move::Transition,
    duel_state::DuelState,
    error, fash,
    strategy::{BestSoFar, StrategyEntry, StrategyTable},
};

const PROGRESS_INTERVAL: usize = 1 << 20;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct SolveStats {
    // entries written by this solve
    pub finalized: usize,
    // times a state had to wait for missing children
    pub deferred: usize,
    // transitions applied
    pub transitions: usize,
    // deepest the work list got
    pub peak_work: usize,
}

// one step along a principal line
#[derive(Clone, Debug, serde::Serialize)]
pub struct LineStep {
    pub mine: Box<[u8]>,
    pub theirs: Box<[u8]>,
    pub chosen: u8,
    pub mv: u8,
    pub score_delta: i8,
    pub switched: bool,
}

// reusable allocations
pub struct DuelSolver {
    canonicalize: bool,
    work: Vec<DuelState>,
    pending: Vec<DuelState>,
}

impl Default for DuelSolver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DuelSolver {
    pub fn new(canonicalize: bool) -> Self {
        Self {
            canonicalize,
            work: Vec::new(),
            pending: Vec::new(),
        }
    }

    // scan moves in increasing order. None if some child is not in the table
    // yet, in which case every missing child was appended to self.pending.
    fn evaluate(
        &mut self,
        state: &DuelState,
        table: &StrategyTable,
        stats: &mut SolveStats,
    ) -> Option<StrategyEntry> {
        let mut best = BestSoFar::new();
        let mut complete = true;
        for mv in state.legal_moves() {
            let Transition {
                state: child,
                score_delta,
                switched,
            } = state.apply(mv, self.canonicalize);
            stats.transitions += 1;
            match table.get(&child) {
                Some(child_entry) => {
                    let child_value = if switched {
                        -child_entry.best_score
                    } else {
                        child_entry.best_score
                    };
                    best.offer(mv, score_delta as i16 + child_value);
                }
                None => {
                    complete = false;
                    self.pending.push(child);
                }
            }
        }
        if complete { Some(best.finish()) } else { None }
    }

    // work-list fixpoint. the top of the list is always the most recently
    // added unresolved state; it is finalized only when all children are.
    pub fn solve<I: IntoIterator<Item = DuelState>>(
        &mut self,
        seeds: I,
        table: &mut StrategyTable,
    ) -> SolveStats {
        let t0 = std::time::Instant::now();
        let mut stats = SolveStats::default();
        self.work.clear();
        self.work.extend(seeds);
        // seeds are listed first-to-last, solve the first one first
        self.work.reverse();
        let num_seeds = self.work.len();
        stats.peak_work = self.work.len();
        while let Some(state) = self.work.pop() {
            if table.contains(&state) {
                // duplicate seed, shared child, or warm start
                continue;
            }
            if state.is_terminal() {
                table.insert(state, StrategyEntry::terminal());
                stats.finalized += 1;
                continue;
            }
            self.pending.clear();
            match self.evaluate(&state, table, &mut stats) {
                Some(entry) => {
                    table.insert(state, entry);
                    stats.finalized += 1;
                    if stats.finalized % PROGRESS_INTERVAL == 0 {
                        log::debug!(
                            "finalized {} states, work list {}, table {}",
                            stats.finalized,
                            self.work.len(),
                            table.len()
                        );
                    }
                }
                None => {
                    stats.deferred += 1;
                    self.work.push(state);
                    self.work.append(&mut self.pending);
                    stats.peak_work = stats.peak_work.max(self.work.len());
                }
            }
        }
        log::info!(
            "solved {} seeds: {} new states, {} deferrals, peak work list {}, {:?}",
            num_seeds,
            stats.finalized,
            stats.deferred,
            stats.peak_work,
            t0.elapsed()
        );
        stats
    }

    // two passes: gather every reachable unsolved state by plies remaining,
    // then resolve from the shortest up. children are always one ply shorter.
    pub fn solve_by_length<I: IntoIterator<Item = DuelState>>(
        &mut self,
        seeds: I,
        table: &mut StrategyTable,
    ) -> SolveStats {
        let t0 = std::time::Instant::now();
        let mut stats = SolveStats::default();
        let mut levels = Vec::<Vec<DuelState>>::new();
        let mut seen = fash::FashSet::<DuelState>::default();
        self.work.clear();
        self.work.extend(seeds);
        while let Some(state) = self.work.pop() {
            if table.contains(&state) || seen.contains(&state) {
                continue;
            }
            for mv in state.legal_moves() {
                self.work.push(state.apply(mv, self.canonicalize).state);
                stats.transitions += 1;
            }
            stats.peak_work = stats.peak_work.max(self.work.len());
            let len = state.length();
            if levels.len() <= len {
                levels.resize_with(len + 1, Vec::new);
            }
            seen.insert(state.clone());
            levels[len].push(state);
        }
        drop(seen);
        log::debug!(
            "gathered {} states over {} lengths",
            levels.iter().map(|v| v.len()).sum::<usize>(),
            levels.len()
        );
        for (len, level) in levels.into_iter().enumerate() {
            for state in level {
                self.pending.clear();
                let entry = match self.evaluate(&state, table, &mut stats) {
                    Some(entry) => entry,
                    None => panic!(
                        "{:?} at length {} depends on unsolved {:?}",
                        state, len, self.pending
                    ),
                };
                table.insert(state, entry);
                stats.finalized += 1;
            }
        }
        log::info!(
            "solved by length: {} new states, {:?}",
            stats.finalized,
            t0.elapsed()
        );
        stats
    }
}

pub fn solve<I: IntoIterator<Item = DuelState>>(seeds: I, table: &mut StrategyTable) -> SolveStats {
    DuelSolver::default().solve(seeds, table)
}

pub fn solve_by_length<I: IntoIterator<Item = DuelState>>(
    seeds: I,
    table: &mut StrategyTable,
) -> SolveStats {
    DuelSolver::default().solve_by_length(seeds, table)
}

pub fn solve_one<'a>(state: &DuelState, table: &'a mut StrategyTable) -> &'a StrategyEntry {
    solve(std::iter::once(state.clone()), table);
    table
        .get(state)
        .unwrap_or_else(|| panic!("{:?} left unsolved", state))
}

// follow the first best move until the game ends. must have been solved.
pub fn principal_line(
    state: &DuelState,
    table: &StrategyTable,
    canonicalize: bool,
) -> error::Returns<Vec<LineStep>> {
    let mut ret = Vec::with_capacity(state.length());
    let mut state = state.clone();
    while !state.is_terminal() {
        let entry = match table.get(&state) {
            Some(entry) => entry,
            None => {
                return_error!(format!("{:?} has not been solved", state));
            }
        };
        let mv = entry.best_moves[0];
        let t = state.apply(mv, canonicalize);
        ret.push(LineStep {
            mine: state.mine().into(),
            theirs: state.theirs().into(),
            chosen: state.chosen(),
            mv,
            score_delta: t.score_delta,
            switched: t.switched,
        });
        state = t.state;
    }
    Ok(ret)
}
