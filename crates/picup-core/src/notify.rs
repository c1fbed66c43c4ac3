//! User-facing notifications.
//!
//! The pipeline reports progress through a [`Notifier`]; the CLI prints to
//! stderr, tests collect notices in memory.

use std::fmt;
use std::sync::Mutex;

/// A transient status message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoActiveDocument,
    RunStarted { document: String },
    UploadStarted { url: String },
    UploadSucceeded { url: String, hosted: String },
    UploadFailed { url: String, reason: String },
    Summary { uploaded: usize, skipped: usize },
}

impl Notice {
    /// True for notices that report a problem.
    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::NoActiveDocument | Notice::UploadFailed { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoActiveDocument => write!(f, "No active file"),
            Notice::RunStarted { document } => write!(f, "Uploading images in {document}"),
            Notice::UploadStarted { url } => write!(f, "Uploading image: {url}"),
            Notice::UploadSucceeded { url, .. } => write!(f, "Successfully uploaded: {url}"),
            Notice::UploadFailed { reason, .. } => write!(f, "Upload failed: {reason}"),
            Notice::Summary { uploaded, skipped } if *uploaded > 0 => write!(
                f,
                "Successfully uploaded {uploaded} images. Skipped {skipped} images."
            ),
            Notice::Summary { skipped, .. } => {
                write!(f, "No images were uploaded. Skipped {skipped} images.")
            }
        }
    }
}

/// Receives notices during a run.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Prints each notice on its own line to stderr.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: &Notice) {
        eprintln!("{notice}");
    }
}

/// Collects notices in memory.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything notified so far, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Rendered messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.notices().iter().map(ToString::to_string).collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut n) = self.notices.lock() {
            n.push(notice.clone());
        }
    }
}
