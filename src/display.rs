// Copyright (C) 2020-2024 Andy Kurnia.

use super::{duel_state::DuelState, error, solver, strategy};

// "1 4 5"
pub fn strengths_label(v: &[u8]) -> String {
    let mut ret = String::with_capacity(v.len() * 3);
    for (i, x) in v.iter().enumerate() {
        if i > 0 {
            ret.push(' ');
        }
        ret.push_str(&x.to_string());
    }
    ret
}

// accepts "1 4 5", "1,4,5", "[1, 4, 5]", or "" / "-" for none.
pub fn parse_strengths(s: &str) -> error::Returns<Vec<u8>> {
    let s = s.trim().trim_start_matches('[').trim_end_matches(']');
    if s.trim() == "-" {
        return Ok(Vec::new());
    }
    let mut ret = Vec::new();
    for t in s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        ret.push(
            t.parse::<u8>()
                .map_err(|e| format!("bad strength {:?}: {}", t, e))?,
        );
    }
    Ok(ret)
}

pub fn parse_state(mine: &str, theirs: &str, chosen: Option<&str>) -> error::Returns<DuelState> {
    let chosen = match chosen {
        Some(c) => c
            .trim()
            .parse::<u8>()
            .map_err(|e| format!("bad chosen {:?}: {}", c, e))?,
        None => 0,
    };
    DuelState::checked(&parse_strengths(mine)?, &parse_strengths(theirs)?, chosen)
}

pub fn state_label(state: &DuelState) -> String {
    let mut ret = format!(
        "[{}] vs [{}]",
        strengths_label(state.mine()),
        strengths_label(state.theirs())
    );
    if state.chosen() != 0 {
        ret.push_str(&format!(
            ", answering {} (#{})",
            state.theirs()[state.chosen() as usize - 1],
            state.chosen()
        ));
    }
    ret
}

pub fn print_entry(state: &DuelState, entry: &strategy::StrategyEntry) {
    let moves = entry
        .best_moves
        .iter()
        .map(|&mv| format!("#{}={}", mv, state.mine()[mv as usize - 1]))
        .collect::<Vec<_>>();
    println!(
        "{}: {:+} with {}",
        state_label(state),
        entry.best_score,
        if moves.is_empty() {
            "nothing to play".to_string()
        } else {
            moves.join(" ")
        }
    );
}

pub fn print_line(line: &[solver::LineStep]) {
    for (i, step) in line.iter().enumerate() {
        let verb = if step.chosen == 0 {
            "sends".to_string()
        } else if step.score_delta > 0 {
            format!("beats {}", step.theirs[step.chosen as usize - 1])
        } else {
            format!("loses to {}", step.theirs[step.chosen as usize - 1])
        };
        println!(
            "{:3}. [{}] vs [{}]: {} {}",
            i + 1,
            strengths_label(&step.mine),
            strengths_label(&step.theirs),
            step.mine[step.mv as usize - 1],
            verb
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(strengths_label(&[1, 4, 5]), "1 4 5");
        assert_eq!(strengths_label(&[]), "");
        assert_eq!(
            state_label(&DuelState::new(&[2, 4], &[1, 3], 2, true)),
            "[2 4] vs [1 3], answering 3 (#2)"
        );
    }

    #[test]
    fn parses_various_forms() {
        assert_eq!(parse_strengths("1 4 5").unwrap(), vec![1, 4, 5]);
        assert_eq!(parse_strengths("[1, 4,5]").unwrap(), vec![1, 4, 5]);
        assert_eq!(parse_strengths("-").unwrap(), Vec::<u8>::new());
        assert_eq!(parse_strengths("").unwrap(), Vec::<u8>::new());
        assert!(parse_strengths("1 x").is_err());
        assert!(parse_strengths("300").is_err());
    }

    #[test]
    fn parse_state_validates() {
        assert_eq!(
            parse_state("4,2", "1,3", Some("2")).unwrap(),
            DuelState::new(&[2, 4], &[1, 3], 2, true)
        );
        // raw strengths are re-ranked, the chosen team stays the 5
        assert_eq!(
            parse_state("3,6", "1,5", Some("2")).unwrap(),
            DuelState::new(&[2, 4], &[1, 3], 2, true)
        );
        assert_eq!(
            parse_state("1", "2", None).unwrap(),
            DuelState::with_defaults(&[1], &[2])
        );
        assert!(parse_state("1,2", "2", None).is_err());
        assert!(parse_state("1", "2", Some("2")).is_err());
        assert!(parse_state("1", "2", Some("z")).is_err());
        assert!(parse_state("0,3", "1", None).is_err());
    }
}
