use thiserror::Error;

/// Reasons a draft submission is refused. The mailbox is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Recipient is required to send")]
    MissingRecipient,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown folder: {0}")]
pub struct ParseFolderError(pub String);
