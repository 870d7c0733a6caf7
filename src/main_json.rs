// Copyright (C) 2020-2024 Andy Kurnia.

use teamduel::{duel_state, error, solver, strategy};

// mine, theirs: strengths, any order. together they must be exactly 1..=k.
// chosen: 0 to pick first, else 1-based index into sorted theirs.
#[derive(serde::Deserialize)]
struct Question {
    mine: Vec<u8>,
    theirs: Vec<u8>,
    #[serde(default)]
    chosen: u8,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Questions {
    One(Question),
    Many(Vec<Question>),
}

#[derive(serde::Serialize)]
struct Answer<'a> {
    mine: &'a [u8],
    theirs: &'a [u8],
    chosen: u8,
    #[serde(flatten)]
    entry: &'a strategy::StrategyEntry,
    line: Vec<solver::LineStep>,
}

// solves every question against one table, subgames are shared.
fn answer(data: &str) -> error::Returns<String> {
    let (questions, just_one) = match serde_json::from_str::<Questions>(data)? {
        Questions::One(q) => (vec![q], true),
        Questions::Many(v) => (v, false),
    };
    let mut states = Vec::with_capacity(questions.len());
    for question in &questions {
        states.push(duel_state::DuelState::checked(
            &question.mine,
            &question.theirs,
            question.chosen,
        )?);
    }

    let mut table = strategy::StrategyTable::new();
    solver::solve(states.iter().cloned(), &mut table);

    let mut answers = Vec::with_capacity(states.len());
    for state in &states {
        answers.push(Answer {
            mine: state.mine(),
            theirs: state.theirs(),
            chosen: state.chosen(),
            entry: table.get(state).ok_or("left unsolved")?,
            line: solver::principal_line(state, &table, true)?,
        });
    }
    Ok(if just_one {
        serde_json::to_string_pretty(&answers[0])?
    } else {
        serde_json::to_string_pretty(&answers)?
    })
}

fn main() -> error::Returns<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = std::env::args().collect::<Vec<_>>();
    let data = if args.len() > 1 {
        args[1].clone()
    } else {
        std::io::read_to_string(std::io::stdin())?
    };
    println!("{}", answer(&data)?);
    Ok(())
}
