mod app;
mod config;
mod constants;
mod error;
mod input;
mod mail;
mod mailbox;
mod ui;

use anyhow::{Context, Result};
use chrono::Utc;
use std::env;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::Config;
use crate::mail::{Folder, Message, source_from_config};
use crate::mailbox::Mailbox;
use crate::mailbox::format::friendly_time;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mailbox=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::ensure_dirs()
        .and_then(|_| Config::config_dir())
        .ok()
        .map(|dir| dir.join("mailbox.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"mailbox - Terminal webmail client

Usage: mailbox [command]

Commands:
    (none)          Start the mail client
    list [folder]   Print a folder's messages grouped by day (default: inbox)
    help            Show this help message

Folders: inbox, starred, sent, drafts, archive, spam, trash

Configuration file: ~/.config/mailbox/config.toml
"#
    );
}

fn load_messages(config: &Config) -> Result<Vec<Message>> {
    let source = source_from_config(&config.data);
    let messages = source
        .load_messages()
        .with_context(|| format!("Failed to load messages from {}", source.describe()))?;
    tracing::info!("Loaded {} messages from {}", messages.len(), source.describe());
    Ok(messages)
}

fn run_list(folder: Option<&str>) -> Result<()> {
    let folder: Folder = match folder {
        Some(name) => name.parse()?,
        None => Folder::Inbox,
    };

    let config = Config::load()?;
    let messages = load_messages(&config)?;
    let mut mailbox = Mailbox::new(messages, config.identity);
    mailbox.select_folder(folder);

    let now = Utc::now();
    let groups = mailbox.day_groups();
    if groups.is_empty() {
        println!("No messages in {}", folder.label());
        return Ok(());
    }

    for group in groups {
        println!("{}  ({})", group.label, group.key());
        for message in group.messages {
            let flags = format!(
                "{}{}",
                if message.unread { '*' } else { ' ' },
                if message.starred { '+' } else { ' ' }
            );
            println!(
                "  {} {:<10} {:<24} {}",
                flags,
                friendly_time(message.timestamp, now),
                message.display_from(),
                message.subject
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("list") => run_list(args.get(2).map(|s| s.as_str())),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;
            let messages = load_messages(&config)?;

            let mut app = App::new(config, messages);
            app.run()
        }
    }
}
