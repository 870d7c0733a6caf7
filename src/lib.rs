// Copyright (C) 2020-2024 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod display;
pub mod duel_config;
pub mod duel_move;
pub mod duel_state;
pub mod fash;
pub mod lineup;
pub mod solver;
pub mod strategy;
pub mod tabulate;
