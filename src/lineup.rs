// Copyright (C) 2020-2024 Andy Kurnia.

use super::duel_state::DuelState;

// C(2n, n), the number of ways to split 1..=2n into two lineups of n.
pub fn count_initial_states(n: usize) -> u64 {
    let mut ret = 1u64;
    for i in 0..n as u64 {
        // C(2n, i + 1) from C(2n, i), always divisible
        ret = ret * (2 * n as u64 - i) / (i + 1);
    }
    ret
}

// every opening with n teams per side, mine ascending in lexicographic order.
pub fn initial_states(n: usize) -> Vec<DuelState> {
    let k = 2 * n;
    if k > u8::MAX as usize {
        panic!("{} teams per side do not fit", n);
    }
    let mut ret = Vec::with_capacity(count_initial_states(n) as usize);
    let mut theirs = Vec::with_capacity(n);
    let mut picks = (1..=n as u8).collect::<Vec<_>>();
    loop {
        theirs.clear();
        theirs.extend((1..=k as u8).filter(|v| !picks.contains(v)));
        ret.push(DuelState::new(&picks, &theirs, 0, false));
        // next n-combination of 1..=k in lexicographic order
        let mut i = n;
        while i > 0 && picks[i - 1] as usize == k - n + i {
            i -= 1;
        }
        if i == 0 {
            break;
        }
        picks[i - 1] += 1;
        for j in i..n {
            picks[j] = picks[j - 1] + 1;
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        assert_eq!(count_initial_states(0), 1);
        assert_eq!(count_initial_states(1), 2);
        assert_eq!(count_initial_states(2), 6);
        assert_eq!(count_initial_states(3), 20);
        assert_eq!(count_initial_states(8), 12870);
    }

    #[test]
    fn zero_teams_is_the_empty_game() {
        let v = initial_states(0);
        assert_eq!(v, vec![DuelState::with_defaults(&[], &[])]);
    }

    #[test]
    fn two_teams_each() {
        let v = initial_states(2);
        let mines = v.iter().map(|s| s.mine().to_vec()).collect::<Vec<_>>();
        assert_eq!(
            mines,
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4],
            ]
        );
        assert_eq!(v[1].theirs(), &[2, 4]);
    }

    #[test]
    fn all_canonical_and_distinct() {
        for n in 0..=5 {
            let v = initial_states(n);
            assert_eq!(v.len() as u64, count_initial_states(n));
            let mut seen = crate::fash::FashSet::default();
            for s in &v {
                assert!(s.is_canonical());
                assert_eq!(s.length(), 2 * n);
                assert_eq!(s.chosen(), 0);
                assert!(seen.insert(s.clone()));
            }
        }
    }
}
