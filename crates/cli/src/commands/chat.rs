//! `jotter chat`: interactive or single-message terminal chat.
//!
//! The journal lives only as long as this process.

use jotter_agent::AgentLoop;
use jotter_core::message::{Conversation, Message};
use jotter_journal::JournalStore;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

use super::{load_config, print_missing_key_help};

pub async fn run(message: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    if !config.has_api_key() {
        print_missing_key_help();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let provider = jotter_providers::build_from_config(&config)?;
    let journal = Arc::new(JournalStore::new());
    let tools = Arc::new(jotter_tools::journal_registry(journal.clone()));
    let agent = AgentLoop::from_config(&config, provider, tools);
    debug!(model = %config.model, one_shot = message.is_some(), "Terminal chat ready");

    if let Some(msg) = message {
        let mut conv = Conversation::new();
        conv.push(Message::user(msg));

        eprint!("  Thinking...");
        let response = agent.process(&mut conv).await?;
        eprint!("\r              \r");
        println!("{response}");
        return Ok(());
    }

    println!();
    println!("  📓 Jotter: interactive journal");
    println!();
    println!("  Model:     {}", config.model);
    println!("  Commands:  'journal' lists entries, 'exit' quits");
    println!();

    let mut conv = Conversation::new();
    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        print!("  You > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit" | "/exit" | "/quit") {
            break;
        }
        if matches!(line, "journal" | "/journal") {
            print_journal(&journal);
            continue;
        }

        eprint!("  ...");

        match run_turn(&agent, &mut conv, line).await {
            Ok(response) => {
                eprint!("\r     \r");
                for text in response.lines() {
                    println!("  Journal > {text}");
                }
                println!();
            }
            Err(e) => {
                eprint!("\r     \r");
                eprintln!("  [Error] {e}");
                println!();
            }
        }
    }

    println!();
    println!("  Goodbye! 👋");
    Ok(())
}

/// Send one user line through the assistant.
///
/// A failed turn leaves `conv` exactly as it was, so the next line does not
/// follow a dangling tool exchange.
async fn run_turn(
    agent: &AgentLoop,
    conv: &mut Conversation,
    line: &str,
) -> jotter_core::Result<String> {
    let before = conv.messages.len();
    conv.push(Message::user(line));

    let result = agent.process(conv).await;
    if result.is_err() {
        conv.messages.truncate(before);
    }
    result
}

fn print_journal(journal: &JournalStore) {
    let entries = journal.entries();
    if entries.is_empty() {
        println!("  (journal is empty)");
    }
    for entry in entries {
        println!("  #{:<3} [{}] {}", entry.id, entry.category_labels(), entry.content);
    }
    println!();
}
