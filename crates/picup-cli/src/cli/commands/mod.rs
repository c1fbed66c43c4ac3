//! CLI command handlers. Each command is in its own file.

mod completions;
mod config;
mod scan;
mod upload;

pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use scan::run_scan;
pub use upload::run_upload;

use anyhow::Result;
use picup_core::document::{self, FileDocument, ACTIVE_DOCUMENT_ENV};
use picup_core::notify::{Notice, Notifier, StderrNotifier};
use std::path::Path;

/// The explicit path or `$PICUP_ACTIVE_DOCUMENT`; tells the user when there is none.
fn active_document(path: Option<&Path>) -> Result<FileDocument> {
    let env_value = std::env::var(ACTIVE_DOCUMENT_ENV).ok();
    document::resolve_active(path, env_value.as_deref()).map_err(|e| {
        StderrNotifier.notify(&Notice::NoActiveDocument);
        e.into()
    })
}
