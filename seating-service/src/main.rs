use seating_service::tables::{CommandError, CommandResponse, TableCommand};
use seating_service::{SeatingManager, setup_environment};
use shared::error::ErrorCode;
use std::io::{self, BufRead, Write};

/// Reads one JSON `TableCommand` per line from stdin and writes one JSON
/// `CommandResponse` per line to stdout.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    let config = setup_environment();

    // 2. Manager
    let manager = SeatingManager::new(&config);
    tracing::info!("Seating service ready, reading commands from stdin");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = respond(&manager, &line);
        serde_json::to_writer(&mut stdout, &response)?;
        writeln!(stdout)?;
    }

    tracing::info!(tables = manager.list_tables().len(), "Input closed, shutting down");
    Ok(())
}

/// Every input line gets exactly one response, malformed ones included
fn respond(manager: &SeatingManager, line: &str) -> CommandResponse {
    match serde_json::from_str::<TableCommand>(line) {
        Ok(cmd) => manager.execute_command(cmd),
        Err(e) => {
            tracing::warn!(error = %e, "Malformed command");
            let command_id = serde_json::from_str::<serde_json::Value>(line)
                .ok()
                .and_then(|v| v.get("command_id")?.as_str().map(str::to_string))
                .unwrap_or_default();
            CommandResponse::error(
                command_id,
                CommandError::new(ErrorCode::InvalidRequest, format!("malformed command: {e}")),
            )
        }
    }
}
