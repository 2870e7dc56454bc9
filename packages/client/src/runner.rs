//! REPL loop.

use rustyline::{DefaultEditor, error::ReadlineError};
use tagalong_mock_api::{MockApi, MockStore};

use crate::{
    command::parse_command, config::ClientConfig, error::ClientError, session::Session,
};

fn prompt(session: &Session) -> String {
    match session.open_room_id() {
        Some(room_id) => format!("room {room_id}> "),
        None => "rides> ".to_string(),
    }
}

/// Run the interactive client against a freshly seeded mock store.
///
/// Must be called from a multi-threaded tokio runtime: line editing blocks
/// the current worker while waiting for input.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let api = MockApi::new(MockStore::seeded(), config.latency);
    let mut session = Session::new(api, &config);
    let mut editor = DefaultEditor::new()?;

    tracing::info!(user_id = %config.current_user, "session started");
    println!("Tagalong. Type 'help' for commands.");

    loop {
        let prompt = prompt(&session);
        let line = match tokio::task::block_in_place(|| editor.readline(&prompt)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            tracing::debug!("failed to record history: {}", e);
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.handle(command).await {
            Ok(outcome) => {
                for line in &outcome.lines {
                    println!("{line}");
                }
                if outcome.quit {
                    break;
                }
            }
            Err(e @ ClientError::NoRoomOpen) => println!("{e}"),
            Err(e) => {
                tracing::error!("command failed: {}", e);
                println!("error: {e}");
            }
        }
    }

    tracing::info!("session ended");
    Ok(())
}
