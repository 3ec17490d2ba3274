use std::io::Write;

use anyhow::Result;

use tj_core::Location;

/// Plain numbered location list, one entry per line.
pub struct TextReporter;

impl TextReporter {
    pub fn generate(&self, locations: &[Location], out: &mut dyn Write) -> Result<()> {
        for (idx, location) in locations.iter().enumerate() {
            writeln!(out, "{:>3}. {}", idx + 1, location)?;
        }
        Ok(())
    }
}
