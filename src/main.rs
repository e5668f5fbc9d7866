//! Batch runner: reads commands from `input.txt` in the working directory
//! and writes protocol output to `output.txt`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::Context;
use fleetdb::Session;
use tracing::info;

const INPUT_PATH: &str = "input.txt";
const OUTPUT_PATH: &str = "output.txt";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let input = File::open(INPUT_PATH).with_context(|| format!("opening {INPUT_PATH}"))?;
    let output = File::create(OUTPUT_PATH).with_context(|| format!("creating {OUTPUT_PATH}"))?;

    let mut session = Session::new();
    let mut writer = BufWriter::new(output);
    session.run(BufReader::new(input), &mut writer)?;
    writer.flush()?;

    info!(records = session.executor().store().len(), "batch complete");
    Ok(())
}
