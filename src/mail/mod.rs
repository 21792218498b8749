pub mod source;
pub mod types;

pub use source::source_from_config;
pub use types::{Folder, Message};
