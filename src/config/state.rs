// Application state module
// Read-only state shared by every connection

use super::types::Config;
use crate::http::MimeTable;

/// Application state
///
/// Built once at startup and handed to each connection behind an `Arc`.
/// Nothing in here changes after the listener is bound.
pub struct AppState {
    pub config: Config,
    pub mime_types: MimeTable,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            mime_types: MimeTable::standard(),
        }
    }
}
