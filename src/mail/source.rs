//! Message hydration
//!
//! The mailbox is seeded once at startup from a `MessageSource`. The default
//! source is the sample set compiled into the binary; a config entry can
//! point at a TOML file with the same layout instead.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::types::Message;
use crate::config::DataConfig;

const SAMPLE_MESSAGES: &str = include_str!("../../data/messages.toml");

/// Initial hydration boundary for the message store
pub trait MessageSource {
    fn load_messages(&self) -> Result<Vec<Message>>;

    /// Short human-readable origin, used in logs and load errors
    fn describe(&self) -> String;
}

/// The sample mailbox bundled with the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl MessageSource for EmbeddedSource {
    fn load_messages(&self) -> Result<Vec<Message>> {
        parse_messages(SAMPLE_MESSAGES).context("Failed to parse bundled sample messages")
    }

    fn describe(&self) -> String {
        "sample mailbox".to_string()
    }
}

/// Messages read from a user-supplied TOML file
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl MessageSource for FileSource {
    fn load_messages(&self) -> Result<Vec<Message>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read message file: {}", self.path.display()))?;
        parse_messages(&content)
            .with_context(|| format!("Failed to parse message file: {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick the source named by the config, falling back to the bundled sample set
pub fn source_from_config(data: &DataConfig) -> Box<dyn MessageSource> {
    match data.messages {
        Some(ref path) => Box::new(FileSource { path: path.clone() }),
        None => Box::new(EmbeddedSource),
    }
}

#[derive(Debug, Deserialize)]
struct MessageFile {
    #[serde(default, rename = "message")]
    messages: Vec<Message>,
}

/// Parse a `[[message]]` TOML document. Ids must be unique.
pub fn parse_messages(content: &str) -> Result<Vec<Message>> {
    let file: MessageFile = toml::from_str(content)?;

    let mut seen = HashSet::with_capacity(file.messages.len());
    for message in &file.messages {
        if !seen.insert(message.id.as_str()) {
            anyhow::bail!("Duplicate message id: {}", message.id);
        }
    }

    Ok(file.messages)
}
