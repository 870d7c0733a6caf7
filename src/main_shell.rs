// Copyright (C) 2020-2024 Andy Kurnia.

use teamduel::{display, error, return_error, solver, strategy, tabulate};

const HELP: &str = "commands:
  solve MINE THEIRS [CHOSEN]   e.g. solve 1,4,5 2,3,6
  line MINE THEIRS [CHOSEN]    principal line of play
  stats                        table size
  save FILE                    write the table as csv
  load FILE                    replace the table with a saved one
  clear                        forget everything solved so far
  source FILE                  run commands from a file
  exit";

// one command against the shared table. Ok(false) means exit.
fn run_command(strings: &[String], table: &mut strategy::StrategyTable) -> error::Returns<bool> {
    match strings[0].as_str() {
        "help" => {
            println!("{}", HELP);
        }
        "exit" => {
            return Ok(false);
        }
        "solve" | "line" => {
            if strings.len() < 3 || strings.len() > 4 {
                return_error!(format!("{} needs MINE THEIRS [CHOSEN]", strings[0]));
            }
            let state = display::parse_state(
                &strings[1],
                &strings[2],
                strings.get(3).map(|s| s.as_str()),
            )?;
            let t0 = std::time::Instant::now();
            let before = table.len();
            let entry = solver::solve_one(&state, table).clone();
            display::print_entry(&state, &entry);
            if strings[0] == "line" {
                display::print_line(&solver::principal_line(&state, table, true)?);
            }
            println!(
                "{} new states, {} total, {:?}",
                table.len() - before,
                table.len(),
                t0.elapsed()
            );
        }
        "stats" => {
            println!("{} states in table", table.len());
        }
        "save" => {
            if strings.len() != 2 {
                return_error!("save needs FILE".into());
            }
            tabulate::write_table_to_path(&strings[1], table)?;
        }
        "load" => {
            if strings.len() != 2 {
                return_error!("load needs FILE".into());
            }
            *table = tabulate::read_table_from_path(&strings[1])?;
            println!("{} states in table", table.len());
        }
        "clear" => {
            *table = strategy::StrategyTable::new();
        }
        _ => {
            println!("invalid input, help for help");
        }
    }
    Ok(true)
}

fn main() -> error::Returns<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut rl = rustyline::DefaultEditor::new()?;
    let mut table = strategy::StrategyTable::new();
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() || strings[0].starts_with('#') {
                        continue;
                    }
                    if strings[0] == "source" {
                        if strings.len() > 1 {
                            match std::fs::read_to_string(&strings[1]) {
                                Ok(whole_file) => {
                                    let v = cmd_stack.len();
                                    for (line_num, line) in whole_file.lines().enumerate() {
                                        cmd_stack.push((
                                            line.to_string(),
                                            Some((strings[1].clone(), line_num + 1)),
                                        ));
                                    }
                                    cmd_stack[v..].reverse();
                                }
                                Err(err) => {
                                    println!("cannot open file: {:?}", err);
                                }
                            }
                        } else {
                            println!("need another arg");
                        }
                        continue;
                    }
                    match run_command(&strings, &mut table) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(err) => {
                            println!("error: {}", err);
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
