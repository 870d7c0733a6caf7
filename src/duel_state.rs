// Copyright (C) 2020-2024 Andy Kurnia.

use super::error;

// one position of the team duel, always seen from the side to act.
// mine and theirs are ascending strengths; together they are exactly 1..=k.
// chosen is 0 when this side picks first, otherwise the 1-based index into
// theirs of the team the opponent already sent out.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DuelState {
    mine: Box<[u8]>,
    theirs: Box<[u8]>,
    chosen: u8,
}

// why these strengths cannot form a position. zeros, repeats and a chosen
// out of range always fail; exact also demands exactly 1..=k.
fn violation(mine: &[u8], theirs: &[u8], chosen: u8, exact: bool) -> Option<String> {
    let k = mine.len() + theirs.len();
    if k > u8::MAX as usize {
        return Some(format!("{} teams do not fit", k));
    }
    let mut seen = [false; 256];
    for &v in mine.iter().chain(theirs.iter()) {
        if v == 0 || seen[v as usize] {
            return Some(format!(
                "{:?} and {:?} repeat or hold a zero",
                mine, theirs
            ));
        }
        if exact && v as usize > k {
            return Some(format!(
                "{:?} and {:?} do not partition 1..={}",
                mine, theirs, k
            ));
        }
        seen[v as usize] = true;
    }
    if chosen as usize > theirs.len() || (chosen != 0 && mine.is_empty()) {
        return Some(format!(
            "chosen {} invalid for {:?} vs {:?}",
            chosen, mine, theirs
        ));
    }
    None
}

// re-rank survivors into 1..=k keeping their relative order.
pub fn canonicalize(mine: &[u8], theirs: &[u8]) -> (Box<[u8]>, Box<[u8]>) {
    let max_value = mine
        .iter()
        .chain(theirs.iter())
        .copied()
        .max()
        .unwrap_or(0) as usize;
    let mut rank = vec![0u8; max_value + 1];
    for &v in mine.iter().chain(theirs.iter()) {
        rank[v as usize] = 1;
    }
    let mut next = 0u8;
    for r in rank.iter_mut() {
        if *r != 0 {
            next += 1;
            *r = next;
        }
    }
    (
        mine.iter().map(|&v| rank[v as usize]).collect(),
        theirs.iter().map(|&v| rank[v as usize]).collect(),
    )
}

impl DuelState {
    pub fn new(mine: &[u8], theirs: &[u8], chosen: u8, sanitize: bool) -> Self {
        let mut mine = Box::<[u8]>::from(mine);
        let mut theirs = Box::<[u8]>::from(theirs);
        if sanitize {
            mine.sort_unstable();
            theirs.sort_unstable();
            if let Some(why) = violation(&mine, &theirs, chosen, true) {
                panic!("malformed state: {}", why);
            }
        }
        Self {
            mine,
            theirs,
            chosen,
        }
    }

    // for untrusted input: any distinct positive strengths, re-ranked.
    // chosen still names the same team since re-ranking keeps the order.
    pub fn checked(mine: &[u8], theirs: &[u8], chosen: u8) -> error::Returns<Self> {
        let mut mine = mine.to_vec();
        let mut theirs = theirs.to_vec();
        mine.sort_unstable();
        theirs.sort_unstable();
        if let Some(why) = violation(&mine, &theirs, chosen, false) {
            return_error!(format!("malformed state: {}", why));
        }
        let (mine, theirs) = canonicalize(&mine, &theirs);
        Ok(Self {
            mine,
            theirs,
            chosen,
        })
    }

    // like checked, but the strengths must already be exactly 1..=k.
    pub fn checked_canonical(mine: &[u8], theirs: &[u8], chosen: u8) -> error::Returns<Self> {
        let mut mine = Box::<[u8]>::from(mine);
        let mut theirs = Box::<[u8]>::from(theirs);
        mine.sort_unstable();
        theirs.sort_unstable();
        if let Some(why) = violation(&mine, &theirs, chosen, true) {
            return_error!(format!("malformed state: {}", why));
        }
        Ok(Self {
            mine,
            theirs,
            chosen,
        })
    }

    #[inline(always)]
    pub fn with_defaults(mine: &[u8], theirs: &[u8]) -> Self {
        Self::new(mine, theirs, 0, true)
    }

    // for the transition function, which already holds fresh boxes.
    #[inline(always)]
    pub(crate) fn from_parts(mine: Box<[u8]>, theirs: Box<[u8]>, chosen: u8) -> Self {
        Self {
            mine,
            theirs,
            chosen,
        }
    }

    #[inline(always)]
    pub fn mine(&self) -> &[u8] {
        &self.mine
    }

    #[inline(always)]
    pub fn theirs(&self) -> &[u8] {
        &self.theirs
    }

    #[inline(always)]
    pub fn chosen(&self) -> u8 {
        self.chosen
    }

    // plies remaining. an unsanitized chosen with nobody left counts as over.
    #[inline(always)]
    pub fn length(&self) -> usize {
        (2 * self.mine.len().min(self.theirs.len())).saturating_sub((self.chosen != 0) as usize)
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.length() == 0
    }

    // 1-based, in increasing order
    #[inline(always)]
    pub fn legal_moves(&self) -> std::ops::RangeInclusive<u8> {
        let last = if self.is_terminal() {
            0
        } else {
            self.mine.len() as u8
        };
        1..=last
    }

    pub fn is_canonical(&self) -> bool {
        let k = self.mine.len() + self.theirs.len();
        let mut seen = vec![false; k + 1];
        self.mine.is_sorted_by(|a, b| a < b)
            && self.theirs.is_sorted_by(|a, b| a < b)
            && self.mine.iter().chain(self.theirs.iter()).all(|&v| {
                let ok = v != 0 && (v as usize) <= k && !seen[v as usize];
                if ok {
                    seen[v as usize] = true;
                }
                ok
            })
    }
}

// listing order only: longer games first, then mine, then chosen.
// theirs only separates states that are otherwise unequal.
impl Ord for DuelState {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .length()
            .cmp(&self.length())
            .then_with(|| self.mine.cmp(&other.mine))
            .then_with(|| self.chosen.cmp(&other.chosen))
            .then_with(|| self.theirs.cmp(&other.theirs))
    }
}

impl PartialOrd for DuelState {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
