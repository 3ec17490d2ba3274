pub mod dialects;

pub use dialects::Dialect;

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::models::Location;

/// Traceback text parser.
///
/// Walks the input line by line and applies an ordered set of dialect rules
/// to each line; only the first rule that matches a given line contributes a
/// location. Total over arbitrary text: unmatched lines are skipped, noise
/// (prompts, log output, partial pastes) is tolerated, and nothing panics.
pub struct TraceParser {
    dialects: &'static [Dialect],
}

impl TraceParser {
    pub fn new() -> Self {
        Self {
            dialects: Dialect::priority_order(),
        }
    }

    /// Extracts all frame-line locations in encounter order.
    ///
    /// Duplicate (file, line) pairs are preserved here; callers that present
    /// a choice fold them with [`fold_duplicates`].
    pub fn parse(&self, text: &str) -> Vec<Location> {
        let mut locations = Vec::new();
        for line in text.lines() {
            for dialect in self.dialects {
                if let Some(location) = dialect.apply(line) {
                    trace!(%location, ?dialect, "matched frame line");
                    locations.push(location);
                    break;
                }
            }
        }
        debug!(count = locations.len(), "trace parsed");
        locations
    }

    /// True when at least one line of `text` is a recognizable frame line.
    pub fn has_locations(&self, text: &str) -> bool {
        text.lines()
            .any(|line| self.dialects.iter().any(|d| d.apply(line).is_some()))
    }
}

impl Default for TraceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapses repeated (file, line) pairs, keeping each pair's first
/// occurrence and its column. Presentation order is unchanged.
pub fn fold_duplicates(locations: &[Location]) -> Vec<Location> {
    let mut seen = HashSet::new();
    locations
        .iter()
        .filter(|location| seen.insert((*location).clone()))
        .cloned()
        .collect()
}
