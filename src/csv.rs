use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::Cents;
use crate::amount::ParseCentsError;
use crate::model::{Group, Participant, Transfer};

/// Errors that can occur when reading or writing csv data
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open {path}: {source}")]
    Open { path: String, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: invalid amount for {name}: {source}")]
    InvalidAmount {
        line: usize,
        name: String,
        source: ParseCentsError,
    },

    #[error("failed to write csv: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush csv output: {0}")]
    Flush(#[from] io::Error),
}

#[derive(Debug, Deserialize)]
struct InputRow {
    name: String,
    spent: String,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    from: &'a str,
    to: &'a str,
    amount: String,
}

/// Read `name,spent` rows from a csv file
pub fn read_participants(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<(String, Cents), CsvError>>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.display().to_string(),
            source,
        })?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            let spent = row
                .spent
                .parse::<Cents>()
                .map_err(|source| CsvError::InvalidAmount {
                    line,
                    name: row.name.clone(),
                    source,
                })?;
            Ok((row.name, spent))
        }))
}

/// Write transfers as `from,to,amount` rows, naming participants from `group`
pub fn write_transfers(
    writer: impl io::Write,
    group: &Group,
    transfers: &[Transfer],
) -> Result<(), CsvError> {
    let mut writer = csv::Writer::from_writer(writer);

    for transfer in transfers {
        let name_of = |id| group.get(id).map_or("?", Participant::name);
        let row = OutputRow {
            from: name_of(transfer.from),
            to: name_of(transfer.to),
            amount: transfer.amount.to_string(),
        };
        writer.serialize(&row)?;
    }

    writer.flush()?;
    Ok(())
}
