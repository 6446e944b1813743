use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::ecs::resources::TickRecord;
use crate::sim::SimulationWorld;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Export the world's reporting data to JSONL files in `output_dir`.
///
/// Creates the output directory if it does not exist. Writes 2 files:
/// - `population.jsonl`: one `TickRecord` per completed tick
/// - `agents.jsonl`: one `AgentView` per live agent, ordered by ID
pub fn flush_to_jsonl(world: &SimulationWorld, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(
        &output_dir.join("population.jsonl"),
        world.population_log().records.iter(),
    )?;
    write_jsonl(&output_dir.join("agents.jsonl"), world.snapshot().iter())?;

    Ok(())
}

/// Read back a `population.jsonl` file, skipping blank lines.
pub fn read_population_jsonl(path: &Path) -> io::Result<Vec<TickRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}
