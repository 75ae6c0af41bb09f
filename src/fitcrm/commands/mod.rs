use crate::config::FitcrmConfig;
use crate::model::ClientRecord;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod detail;
pub mod form;
pub mod init;
pub mod list;

pub use list::ClientListing;

#[derive(Debug, Clone)]
pub struct FitcrmPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_clients: Vec<ClientRecord>,
    pub listing: Option<ClientListing>,
    pub config: Option<FitcrmConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_clients(mut self, clients: Vec<ClientRecord>) -> Self {
        self.affected_clients = clients;
        self
    }

    pub fn with_listing(mut self, listing: ClientListing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_config(mut self, config: FitcrmConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
