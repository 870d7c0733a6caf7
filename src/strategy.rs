// Copyright (C) 2020-2024 Andy Kurnia.

use super::{duel_state::DuelState, fash};

// value of a state for the side to act, and every first move achieving it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrategyEntry {
    pub best_score: i16,
    pub best_moves: Box<[u8]>,
}

impl StrategyEntry {
    #[inline(always)]
    pub fn terminal() -> Self {
        Self {
            best_score: 0,
            best_moves: [][..].into(),
        }
    }
}

// running best while scanning moves of one state
pub(crate) struct BestSoFar {
    best_score: i16,
    best_moves: Vec<u8>,
}

impl BestSoFar {
    #[inline(always)]
    pub(crate) fn new() -> Self {
        Self {
            best_score: i16::MIN,
            best_moves: Vec::new(),
        }
    }

    // keeps every tying move, in the order offered
    #[inline(always)]
    pub(crate) fn offer(&mut self, mv: u8, value: i16) {
        if value > self.best_score {
            self.best_score = value;
            self.best_moves.clear();
            self.best_moves.push(mv);
        } else if value == self.best_score {
            self.best_moves.push(mv);
        }
    }

    #[inline(always)]
    pub(crate) fn finish(self) -> StrategyEntry {
        if self.best_moves.is_empty() {
            return StrategyEntry::terminal();
        }
        StrategyEntry {
            best_score: self.best_score,
            best_moves: self.best_moves.into(),
        }
    }
}

// the transposition table. write-once per state.
#[derive(Default)]
pub struct StrategyTable {
    entries: fash::FashMap<DuelState, StrategyEntry>,
}

impl StrategyTable {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, state: &DuelState) -> Option<&StrategyEntry> {
        self.entries.get(state)
    }

    #[inline(always)]
    pub fn contains(&self, state: &DuelState) -> bool {
        self.entries.contains_key(state)
    }

    // panics if the state already has an entry.
    pub fn insert(&mut self, state: DuelState, entry: StrategyEntry) {
        match self.entries.entry(state) {
            std::collections::hash_map::Entry::Occupied(o) => {
                panic!("strategy for {:?} already set", o.key());
            }
            std::collections::hash_map::Entry::Vacant(v) => {
                v.insert(entry);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DuelState, &StrategyEntry)> {
        self.entries.iter()
    }

    // deterministic listing order
    pub fn sorted(&self) -> Vec<(&DuelState, &StrategyEntry)> {
        let mut v = self.entries.iter().collect::<Vec<_>>();
        v.sort_unstable_by(|a, b| a.0.cmp(b.0));
        v
    }
}
