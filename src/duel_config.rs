// Copyright (C) 2020-2024 Andy Kurnia.

use super::{duel_state::DuelState, error, lineup, solver, strategy, tabulate};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveMethod {
    WorkList,
    ByLength,
}

#[derive(Clone, Debug)]
pub struct DuelConfig {
    teams_per_side: usize,
    method: SolveMethod,
    canonicalize: bool,
    output: Option<String>,
    warm_start: Option<String>,
}

impl DuelConfig {
    #[inline(always)]
    pub fn teams_per_side(&self) -> usize {
        self.teams_per_side
    }

    #[inline(always)]
    pub fn method(&self) -> SolveMethod {
        self.method
    }

    #[inline(always)]
    pub fn canonicalize(&self) -> bool {
        self.canonicalize
    }

    #[inline(always)]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    #[inline(always)]
    pub fn warm_start(&self) -> Option<&str> {
        self.warm_start.as_deref()
    }

    // n [output.csv] [--by-length] [--raw] [--warm=previous.csv]
    pub fn from_args(args: &[String]) -> error::Returns<Self> {
        let mut teams_per_side = None;
        let mut ret = make_default_duel_config(0);
        for arg in args {
            match arg.as_str() {
                "--by-length" => ret.method = SolveMethod::ByLength,
                "--work-list" => ret.method = SolveMethod::WorkList,
                "--raw" => ret.canonicalize = false,
                _ if arg.starts_with("--warm=") => {
                    ret.warm_start = Some(arg["--warm=".len()..].to_string());
                }
                _ if arg.starts_with("--") => {
                    return_error!(format!("unknown option {}", arg));
                }
                _ if teams_per_side.is_none() => {
                    let n = arg
                        .parse::<usize>()
                        .map_err(|e| format!("bad team count {:?}: {}", arg, e))?;
                    if 2 * n > u8::MAX as usize {
                        return_error!(format!("{} teams per side is too many", n));
                    }
                    teams_per_side = Some(n);
                }
                _ if ret.output.is_none() => ret.output = Some(arg.clone()),
                _ => {
                    return_error!(format!("unexpected argument {}", arg));
                }
            }
        }
        match teams_per_side {
            Some(n) => ret.teams_per_side = n,
            None => {
                return_error!("need number of teams per side".into());
            }
        }
        if !ret.canonicalize && ret.warm_start.is_some() {
            return_error!("saved tables hold canonical states only".into());
        }
        Ok(ret)
    }

    // the table to start from: empty, or a previous run's output
    pub fn load_table(&self) -> error::Returns<strategy::StrategyTable> {
        match &self.warm_start {
            Some(path) => {
                let table = tabulate::read_table_from_path(path)?;
                log::info!("warm start from {} with {} states", path, table.len());
                Ok(table)
            }
            None => Ok(strategy::StrategyTable::new()),
        }
    }

    pub fn initial_states(&self) -> Vec<DuelState> {
        lineup::initial_states(self.teams_per_side)
    }

    pub fn solve<I: IntoIterator<Item = DuelState>>(
        &self,
        seeds: I,
        table: &mut strategy::StrategyTable,
    ) -> solver::SolveStats {
        let mut duel_solver = solver::DuelSolver::new(self.canonicalize);
        match self.method {
            SolveMethod::WorkList => duel_solver.solve(seeds, table),
            SolveMethod::ByLength => duel_solver.solve_by_length(seeds, table),
        }
    }
}

pub fn make_default_duel_config(teams_per_side: usize) -> DuelConfig {
    DuelConfig {
        teams_per_side,
        method: SolveMethod::WorkList,
        canonicalize: true,
        output: None,
        warm_start: None,
    }
}
