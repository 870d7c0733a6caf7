// Copyright (C) 2020-2024 Andy Kurnia.

use super::duel_state::{self, DuelState};

// result of one ply. score_delta is from the mover's point of view,
// the caller negates the child's value when switched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    pub state: DuelState,
    pub score_delta: i8,
    pub switched: bool,
}

#[inline(always)]
fn without(v: &[u8], idx: usize) -> Box<[u8]> {
    v[..idx].iter().chain(v[idx + 1..].iter()).copied().collect()
}

impl DuelState {
    // mv is 1-based into mine.
    pub fn apply(&self, mv: u8, canonicalize: bool) -> Transition {
        let mine = self.mine();
        let theirs = self.theirs();
        if mv == 0 || mv as usize > mine.len() {
            panic!("move {} out of range for {:?}", mv, mine);
        }
        let mv_idx = mv as usize - 1;
        let chosen = self.chosen();
        if chosen == 0 {
            // name a team, the opponent answers
            return Transition {
                state: DuelState::from_parts(theirs.into(), mine.into(), mv),
                score_delta: 0,
                switched: true,
            };
        }
        let opp_idx = chosen as usize - 1;
        let mv_strength = mine[mv_idx];
        let opp_strength = theirs[opp_idx];
        if mv_strength == opp_strength {
            panic!(
                "equal-strength collision: {} against {} in {:?}",
                mv_strength, opp_strength, self
            );
        }
        let won = mv_strength > opp_strength;
        let mut new_mine = without(mine, mv_idx);
        let mut new_theirs = without(theirs, opp_idx);
        if canonicalize {
            (new_mine, new_theirs) = duel_state::canonicalize(&new_mine, &new_theirs);
        }
        if won {
            Transition {
                state: DuelState::from_parts(new_mine, new_theirs, 0),
                score_delta: 1,
                switched: false,
            }
        } else {
            Transition {
                state: DuelState::from_parts(new_theirs, new_mine, 0),
                score_delta: -1,
                switched: true,
            }
        }
    }
}
