//! Interactive read loop wiring the session to the terminal.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use parlor_core::config::ChatConfig;
use parlor_core::session::{ChatSession, SubmitOutcome};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::render;

pub async fn run(session: Arc<ChatSession>, config: &ChatConfig) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("{}", render::welcome_banner(config));

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        editor.add_history_entry(input)?;

        if let Some(command) = input.strip_prefix('/') {
            if handle_command(&session, config, command, &mut editor).await? {
                break;
            }
            continue;
        }

        submit(&session, config, input).await;
    }

    Ok(())
}

/// Sends one question and prints the exchange.
///
/// The typing indicator appears only once the in-flight guard has been
/// passed; a rejected attempt just gets the busy notice. Returns the
/// rendered reply line, if the exchange produced one.
async fn submit(session: &ChatSession, config: &ChatConfig, input: &str) -> Option<String> {
    if session.is_sending().await {
        println!("{}", busy_notice());
        return None;
    }
    println!("{}", render::typing_indicator());
    match session.submit(input).await {
        SubmitOutcome::Replied => {
            let transcript = session.transcript().await;
            let line = transcript
                .last()
                .map(|message| render::render_message(message, config.trust_markup));
            if let Some(line) = &line {
                println!("{line}");
            }
            line
        }
        SubmitOutcome::Busy => {
            println!("{}", busy_notice());
            None
        }
        SubmitOutcome::Empty => None,
    }
}

fn busy_notice() -> String {
    "still waiting for the previous reply".dimmed().to_string()
}

/// Handles a slash command. Returns `true` when the loop should exit.
async fn handle_command(
    session: &Arc<ChatSession>,
    config: &ChatConfig,
    command: &str,
    editor: &mut DefaultEditor,
) -> Result<bool> {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("quit") | Some("q") => return Ok(true),
        Some("new") => {
            let answer = editor.readline(
                "Start a new conversation? The current transcript will be cleared. [y/N] ",
            )?;
            let confirmed = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
            if session.reset_conversation(confirmed).await {
                println!("{}", render::welcome_banner(config));
            }
        }
        Some("endpoint") => match parts.next() {
            Some(path) => {
                session.select_endpoint(path).await;
                println!("endpoint set to {}", path.yellow());
            }
            None => println!("usage: /endpoint <path>"),
        },
        Some("endpoints") => {
            let selected = session.selected_endpoint().await;
            for choice in &config.endpoints {
                let marker = if choice.path == selected { "*" } else { " " };
                println!(
                    "{} {}  {}",
                    marker,
                    choice.label.yellow(),
                    choice.path.dimmed()
                );
            }
        }
        Some("help") | None => print_help(),
        Some(other) => {
            println!("unknown command: /{other}");
            print_help();
        }
    }
    Ok(false)
}

fn print_help() {
    println!("/endpoint <path>  select the endpoint used by new messages");
    println!("/endpoints        list the configured endpoints");
    println!("/new              start a new conversation (asks first)");
    println!("/help             show this help");
    println!("/quit             exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_core::session::ChatBackend;
    use parlor_core::Result as ParlorResult;
    use tokio::sync::Notify;

    struct CannedBackend {
        reply: String,
    }

    #[async_trait::async_trait]
    impl ChatBackend for CannedBackend {
        async fn ask(&self, _endpoint: &str, _question: &str) -> ParlorResult<String> {
            Ok(self.reply.clone())
        }
    }

    // Blocks inside ask() until released, keeping the session busy.
    struct GatedBackend {
        entered: Notify,
        release: Notify,
    }

    impl GatedBackend {
        fn new() -> Self {
            Self {
                entered: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait::async_trait]
    impl ChatBackend for GatedBackend {
        async fn ask(&self, _endpoint: &str, _question: &str) -> ParlorResult<String> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok("late reply".to_string())
        }
    }

    #[tokio::test]
    async fn completed_exchange_returns_the_rendered_reply() {
        colored::control::set_override(false);
        let backend = Arc::new(CannedBackend {
            reply: "Hi there".to_string(),
        });
        let session = ChatSession::new(backend, "/api/chat");

        let line = submit(&session, &ChatConfig::default(), "hello").await;
        assert_eq!(line.as_deref(), Some("assistant: Hi there"));
    }

    #[tokio::test]
    async fn busy_session_gets_the_notice_and_no_indicator() {
        let backend = Arc::new(GatedBackend::new());
        let session = Arc::new(ChatSession::new(backend.clone(), "/api/chat"));

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.submit("first").await })
        };
        backend.entered.notified().await;

        // The attempt takes the busy path before the indicator is shown;
        // nothing is submitted and the transcript does not grow.
        assert_eq!(submit(&session, &ChatConfig::default(), "second").await, None);
        assert_eq!(session.transcript().await.len(), 1);

        backend.release.notify_one();
        pending.await.unwrap();
        assert_eq!(session.transcript().await.len(), 2);
    }
}
