//! Show board command and shared board rendering.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use stopboard_core::board::BoardSnapshot;
use stopboard_core::models::{Stop, StopGroup};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::util::{build_board, load_settings, seed_source};

/// Show board command handler
pub fn cmd_show(
    config_path: Option<&Path>,
    seed: Option<&Path>,
    format: OutputFormat,
    show_private: bool,
    division: Option<u32>,
) -> Result<(), CliError> {
    let mut settings = load_settings(config_path)?;
    settings.show_private |= show_private;

    let source = seed_source(seed, std::time::Duration::ZERO);
    let board = build_board(&settings, source.as_ref())?;

    print_board(&board.snapshot(), format, division)
}

/// Prints a snapshot in the requested format
pub fn print_board(
    snapshot: &BoardSnapshot,
    format: OutputFormat,
    division: Option<u32>,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => println!("{}", format_table(snapshot, division)),
        OutputFormat::Json => println!("{}", format_json(snapshot, division)?),
    }
    Ok(())
}

/// Format a snapshot as a table string
#[must_use]
pub fn format_table(snapshot: &BoardSnapshot, division: Option<u32>) -> String {
    let mut output = String::new();

    let groups: Vec<&StopGroup> = snapshot.visible_groups().collect();
    if groups.is_empty() {
        output.push_str("No groups.\n");
    }
    for group in groups {
        write_group(&mut output, group);
    }

    let pool = pool_view(snapshot, division);
    let _ = writeln!(output, "UNASSIGNED POOL ({} stops)", pool.len());
    let name_width = pool.iter().map(|s| s.name.len()).max().unwrap_or(4).max(4);
    let _ = writeln!(output, "  {:<4}  {:<name_width$}  ROOM", "ID", "NAME");
    for stop in pool {
        let _ = writeln!(
            output,
            "  {:<4}  {:<name_width$}  {}",
            stop.id, stop.name, stop.room
        );
    }

    output.trim_end().to_string()
}

fn write_group(output: &mut String, group: &StopGroup) {
    let state = if group.is_expanded {
        "expanded"
    } else {
        "collapsed"
    };
    let _ = writeln!(
        output,
        "GROUP {}  {}  ({}, {}, {} stops)",
        group.id,
        group.name,
        group.visibility,
        state,
        group.stops.len()
    );
    if group.is_expanded {
        let uid_width = group
            .stops
            .iter()
            .map(|s| s.uid.as_str().len())
            .max()
            .unwrap_or(3)
            .max(3);
        for (index, instance) in group.stops.iter().enumerate() {
            let _ = writeln!(
                output,
                "  {:>2}. {:<uid_width$}  {}  {}",
                index + 1,
                instance.uid,
                instance.stop.name,
                instance.stop.room
            );
        }
    }
    output.push('\n');
}

fn pool_view(snapshot: &BoardSnapshot, division: Option<u32>) -> Vec<&Stop> {
    match division {
        Some(division) => snapshot.pool_in_division(division),
        None => snapshot.pool.iter().collect(),
    }
}

/// Rendered board for JSON output: only visible groups, filtered pool
#[derive(Debug, Serialize)]
pub struct BoardOutput<'a> {
    pub revision: u64,
    pub show_private: bool,
    pub groups: Vec<&'a StopGroup>,
    pub pool: Vec<&'a Stop>,
}

impl<'a> BoardOutput<'a> {
    /// Builds the output view of a snapshot
    #[must_use]
    pub fn new(snapshot: &'a BoardSnapshot, division: Option<u32>) -> Self {
        Self {
            revision: snapshot.revision,
            show_private: snapshot.show_private,
            groups: snapshot.visible_groups().collect(),
            pool: pool_view(snapshot, division),
        }
    }
}

/// Format a snapshot as a JSON string
///
/// # Errors
///
/// Returns `CliError::Output` if JSON serialization fails.
pub fn format_json(snapshot: &BoardSnapshot, division: Option<u32>) -> Result<String, CliError> {
    serde_json::to_string_pretty(&BoardOutput::new(snapshot, division))
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))
}
