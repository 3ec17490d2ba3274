use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use colored::Colorize;
use tracing::{debug, warn};

use tj_core::parser::fold_duplicates;
use tj_core::{Location, TjError};

/// Terminal state of one selection round.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A location was chosen and the opener ran successfully
    Opened(Location),
    /// The user declined to pick anything (empty line or `q`)
    Cancelled,
}

/// Decides which location to act on and invokes the opener.
///
/// Duplicate (file, line) pairs are folded before presentation. A single
/// distinct location opens immediately with no prompt; multiple locations
/// are listed top-to-bottom in encounter order with 1-based indices and one
/// choice is read interactively, unless `pick` preselects an index. With no
/// interactive terminal available the most recent frame (last entry) is
/// opened.
pub fn select_and_open<F>(
    locations: &[Location],
    pick: Option<usize>,
    mut opener: F,
) -> Result<Outcome, TjError>
where
    F: FnMut(&Location) -> Result<(), TjError>,
{
    let candidates = fold_duplicates(locations);
    if candidates.is_empty() {
        return Err(TjError::NoLocations);
    }

    if let Some(index) = pick {
        check_range(index, candidates.len())?;
        let location = candidates[index - 1].clone();
        opener(&location)?;
        return Ok(Outcome::Opened(location));
    }

    if candidates.len() == 1 {
        let location = candidates[0].clone();
        opener(&location)?;
        return Ok(Outcome::Opened(location));
    }

    match interaction_stream() {
        Some(mut input) => {
            let mut prompt = io::stderr();
            match choose(&candidates, &mut input, &mut prompt)? {
                Some(location) => {
                    opener(&location)?;
                    Ok(Outcome::Opened(location))
                }
                None => Ok(Outcome::Cancelled),
            }
        }
        None => {
            let location = match candidates.last() {
                Some(location) => location.clone(),
                None => return Err(TjError::NoLocations),
            };
            warn!(%location, "no interactive terminal, falling back to most recent frame");
            eprintln!(
                "{}",
                "No interactive terminal; opening the most recent location...".yellow()
            );
            opener(&location)?;
            Ok(Outcome::Opened(location))
        }
    }
}

/// Presents the candidates and reads one selection.
///
/// Returns None on cancel. Invalid input is reported and re-prompted;
/// exhausting the input stream without a valid choice is an error, never a
/// silent default.
pub fn choose<R, W>(
    candidates: &[Location],
    input: &mut R,
    prompt: &mut W,
) -> Result<Option<Location>, TjError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let count = candidates.len();
    for (idx, location) in candidates.iter().enumerate() {
        let marker = if idx + 1 == count {
            "  (most recent)"
        } else {
            ""
        };
        let _ = writeln!(
            prompt,
            "{:>3}. {}{}",
            (idx + 1).to_string().green(),
            location,
            marker.dimmed()
        );
    }

    loop {
        let _ = write!(prompt, "Select location [1-{}], q to cancel: ", count);
        let _ = prompt.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                return Err(TjError::InvalidSelection {
                    input: "<end of input>".to_string(),
                    reason: "input closed before a valid selection".to_string(),
                })
            }
            Ok(_) => {}
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match parse_index(trimmed, count) {
            Ok(index) => return Ok(Some(candidates[index - 1].clone())),
            Err(err) => {
                debug!(input = %trimmed, "rejected selection input");
                let _ = writeln!(prompt, "{}", err.to_string().red());
            }
        }
    }
}

fn parse_index(raw: &str, count: usize) -> Result<usize, TjError> {
    let index: usize = raw.parse().map_err(|_| TjError::InvalidSelection {
        input: raw.to_string(),
        reason: "not a number".to_string(),
    })?;
    check_range(index, count)?;
    Ok(index)
}

fn check_range(index: usize, count: usize) -> Result<(), TjError> {
    if index < 1 || index > count {
        return Err(TjError::InvalidSelection {
            input: index.to_string(),
            reason: format!("expected a value between 1 and {}", count),
        });
    }
    Ok(())
}

/// The stream selections are read from. When stdin carried the trace itself
/// the controlling terminal is used instead; None when neither is available.
fn interaction_stream() -> Option<Box<dyn BufRead>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Some(Box::new(BufReader::new(stdin)));
    }

    #[cfg(unix)]
    let tty = File::open("/dev/tty");
    #[cfg(windows)]
    let tty = File::open("CONIN$");

    tty.ok()
        .map(|f| Box::new(BufReader::new(f)) as Box<dyn BufRead>)
}
