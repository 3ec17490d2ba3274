use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use tj_core::Location;

#[derive(Serialize)]
struct ListReport<'a> {
    count: usize,
    locations: &'a [Location],
}

/// Machine-readable location list for piping into other tools.
pub struct JsonReporter;

impl JsonReporter {
    pub fn generate(&self, locations: &[Location], out: &mut dyn Write) -> Result<()> {
        let report = ListReport {
            count: locations.len(),
            locations,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }
}
