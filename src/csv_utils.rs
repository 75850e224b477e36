//! CSV serialization and deserialization utilities.
//!
//! Provides generic functions for reading and writing CSV data, plus the
//! group roster reader built on top of them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::{Group, Result};

/// Creates an iterator that reads CSV records from a file.
/// Each record is deserialized into type T.
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?
        .into_deserialize())
}

/// Writes an iterator of records to a CSV writer.
/// Each record must implement Serialize.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads an ordered group list from a `name,quantity[,ratio]` CSV file.
/// Every group is validated; the first invalid row aborts the read.
pub fn read_group_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Group>> {
    let mut groups = Vec::new();
    for group in read_csv::<Group, _>(path)? {
        let group = group?;
        group.validate()?;
        groups.push(group);
    }
    debug!(groups = groups.len(), "group roster read");
    Ok(groups)
}
