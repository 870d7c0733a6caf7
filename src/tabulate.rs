// Copyright (C) 2020-2024 Andy Kurnia.

use super::{display, duel_state::DuelState, error, strategy};

const HEADER: [&str; 5] = ["mine", "theirs", "chosen", "best_score", "best_moves"];

// sequences are space-separated so the csv stays one field per column.
#[derive(serde::Serialize, serde::Deserialize)]
struct Row {
    mine: String,
    theirs: String,
    chosen: u8,
    best_score: i16,
    best_moves: String,
}

// header, then one row per entry in listing order.
fn write_rows<W: std::io::Write>(
    csv_out: &mut csv::Writer<W>,
    table: &strategy::StrategyTable,
) -> error::Returns<()> {
    csv_out.write_record(HEADER)?;
    for (state, entry) in table.sorted() {
        csv_out.serialize(Row {
            mine: display::strengths_label(state.mine()),
            theirs: display::strengths_label(state.theirs()),
            chosen: state.chosen(),
            best_score: entry.best_score,
            best_moves: display::strengths_label(&entry.best_moves),
        })?;
    }
    csv_out.flush()?;
    Ok(())
}

// the header is written explicitly so an empty table still gets one.
pub fn write_table<W: std::io::Write>(
    writer: W,
    table: &strategy::StrategyTable,
) -> error::Returns<()> {
    write_rows(
        &mut csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer),
        table,
    )
}

pub fn write_table_to_path<P: AsRef<std::path::Path>>(
    path: P,
    table: &strategy::StrategyTable,
) -> error::Returns<()> {
    write_rows(
        &mut csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?,
        table,
    )
}

// inverse of write_table, for warm-starting a later solve.
pub fn read_table<R: std::io::Read>(reader: R) -> error::Returns<strategy::StrategyTable> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    if !csv_reader.headers()?.iter().eq(HEADER) {
        return_error!(format!("unexpected header {:?}", csv_reader.headers()?));
    }
    let mut table = strategy::StrategyTable::new();
    for result in csv_reader.deserialize::<Row>() {
        let row = result?;
        let state = DuelState::checked_canonical(
            &display::parse_strengths(&row.mine)?,
            &display::parse_strengths(&row.theirs)?,
            row.chosen,
        )?;
        let best_moves = display::parse_strengths(&row.best_moves)?;
        if best_moves.is_empty() != state.is_terminal()
            || best_moves
                .iter()
                .any(|&mv| mv == 0 || mv as usize > state.mine().len())
        {
            return_error!(format!(
                "bad moves {:?} for {}",
                row.best_moves,
                display::state_label(&state)
            ));
        }
        if table.contains(&state) {
            return_error!(format!("duplicate row for {}", display::state_label(&state)));
        }
        table.insert(
            state,
            strategy::StrategyEntry {
                best_score: row.best_score,
                best_moves: best_moves.into(),
            },
        );
    }
    Ok(table)
}

pub fn read_table_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> error::Returns<strategy::StrategyTable> {
    read_table(std::fs::File::open(path)?)
}
