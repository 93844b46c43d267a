use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::store::MemoryStore;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Dump a store to JSONL files in `output_dir`, one file per table, rows in ID order.
///
/// Creates the directory if needed. Writes `competitors.jsonl`, `titles.jsonl`,
/// `reigns.jsonl`, `events.jsonl` and `matches.jsonl`.
pub fn flush_to_jsonl(store: &MemoryStore, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(
        &output_dir.join("competitors.jsonl"),
        store.competitors.values(),
    )?;
    write_jsonl(&output_dir.join("titles.jsonl"), store.titles.values())?;
    write_jsonl(&output_dir.join("reigns.jsonl"), store.reigns.values())?;
    write_jsonl(&output_dir.join("events.jsonl"), store.events.values())?;
    write_jsonl(&output_dir.join("matches.jsonl"), store.matches.values())?;

    Ok(())
}
