//! Script replay command.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use stopboard_core::board::Board;
use stopboard_core::event::{BoardEvent, EventOutcome};
use stopboard_core::identity::IdentityStrategy;
use stopboard_core::trace_operation;
use stopboard_core::tracing::span_names;

use super::show::{BoardOutput, format_table};
use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::util::{build_board, load_settings, seed_source};

/// Run script command handler
pub fn cmd_run(
    config_path: Option<&Path>,
    script: &Path,
    seed: Option<&Path>,
    format: OutputFormat,
    sequential: bool,
) -> Result<(), CliError> {
    let mut settings = load_settings(config_path)?;
    if sequential {
        settings.identity = IdentityStrategy::Sequential;
    }

    let events = read_script(script)?;
    let source = seed_source(seed, std::time::Duration::ZERO);
    let mut board = build_board(&settings, source.as_ref())?;

    let steps = replay(&mut board, events);
    let snapshot = board.snapshot();

    match format {
        OutputFormat::Table => {
            println!("{}", format_steps(&steps));
            println!();
            println!("{}", format_table(&snapshot, None));
        }
        OutputFormat::Json => {
            let output = RunOutput {
                steps: &steps,
                board: BoardOutput::new(&snapshot, None),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Reads a JSON array of events
pub fn read_script(path: &Path) -> Result<Vec<BoardEvent>, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Script(format!("Failed to read {}: {e}", path.display())))?;
    parse_script(&content)
}

/// Parses a JSON array of events
pub fn parse_script(content: &str) -> Result<Vec<BoardEvent>, CliError> {
    serde_json::from_str(content).map_err(|e| CliError::Script(format!("Invalid script: {e}")))
}

/// One replayed event and what it did
#[derive(Debug, Serialize)]
pub struct Step {
    pub index: usize,
    pub event: &'static str,
    pub outcome: EventOutcome,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    steps: &'a [Step],
    board: BoardOutput<'a>,
}

/// Applies every event in order
pub fn replay(board: &mut Board, events: Vec<BoardEvent>) -> Vec<Step> {
    let _span = trace_operation!(span_names::SCRIPT_REPLAY, item_count = events.len()).entered();
    events
        .into_iter()
        .enumerate()
        .map(|(index, event)| {
            let name = event.name();
            let outcome = board.apply(event);
            tracing::debug!(index, event = name, changed = outcome.changed(), "Event applied");
            Step {
                index: index + 1,
                event: name,
                outcome,
            }
        })
        .collect()
}

/// Format replayed steps as a table string
#[must_use]
pub fn format_steps(steps: &[Step]) -> String {
    if steps.is_empty() {
        return "No events.".to_string();
    }

    let event_width = steps.iter().map(|s| s.event.len()).max().unwrap_or(5).max(5);
    let mut output = String::new();
    let _ = writeln!(output, "{:>3}  {:<event_width$}  RESULT", "#", "EVENT");
    for step in steps {
        let _ = writeln!(
            output,
            "{:>3}  {:<event_width$}  {}",
            step.index,
            step.event,
            describe(&step.outcome)
        );
    }
    output.trim_end().to_string()
}

fn describe(outcome: &EventOutcome) -> String {
    use stopboard_core::board::DropOutcome;

    match outcome {
        EventOutcome::Drop { outcome } => match outcome {
            DropOutcome::GroupsReordered { group, from, to } => {
                format!("group {group} moved {from} -> {to}")
            }
            DropOutcome::Reordered { location, from, to } => {
                format!("reordered in {location}: {from} -> {to}")
            }
            DropOutcome::Unassigned { uid, from } => format!("removed {uid} from group {from}"),
            DropOutcome::Placed {
                uid,
                stop,
                into,
                removed_source,
                ..
            } => match removed_source {
                Some(source) => format!("moved stop {stop} into group {into} as {uid} (was {source})"),
                None => format!("placed stop {stop} into group {into} as {uid}"),
            },
            DropOutcome::Unchanged => "unchanged".to_string(),
            DropOutcome::Cancelled { reason } => format!("cancelled: {reason}"),
        },
        EventOutcome::Applied { changed: true } | EventOutcome::Done => "ok".to_string(),
        EventOutcome::Applied { changed: false } => "ignored".to_string(),
    }
}
