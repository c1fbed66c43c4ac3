//! One upload run over a document: scan, filter, upload, rewrite.
//!
//! References are handled strictly one at a time in document order; an upload
//! finishes before the next reference is looked at. A failing reference is
//! reported and counted as skipped, never aborting the run.

use anyhow::Result;

use crate::config::PicupConfig;
use crate::document::Document;
use crate::filter::{self, Eligibility};
use crate::notify::{Notice, Notifier};
use crate::rewrite::Rewriter;
use crate::scan::{self, ImageReference};
use crate::upload::Uploader;

/// Counts and final text of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub uploaded: usize,
    pub skipped: usize,
    pub content: String,
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// At least one upload succeeded and the document was written back.
    Rewritten,
    /// Nothing uploaded; the document was not touched.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub state: RunState,
}

/// A reference together with its eligibility verdict (dry-run view).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedReference {
    pub reference: ImageReference,
    pub eligibility: Eligibility,
}

/// Scan `content` and classify every reference without uploading anything.
pub fn plan(content: &str, cfg: &PicupConfig) -> Vec<PlannedReference> {
    scan::scan_references(content)
        .into_iter()
        .map(|reference| {
            let eligibility = filter::check(&reference.url, &cfg.blacklist);
            PlannedReference {
                reference,
                eligibility,
            }
        })
        .collect()
}

/// Upload one reference, converting any failure into a notice and `None`.
fn upload_one(
    reference: &ImageReference,
    cfg: &PicupConfig,
    uploader: &dyn Uploader,
    notifier: &dyn Notifier,
) -> Option<String> {
    let url = &reference.url;
    notifier.notify(&Notice::UploadStarted { url: url.clone() });
    match uploader.upload(cfg, url) {
        Ok(hosted) => {
            tracing::info!(url = %url, hosted = %hosted, "uploaded image");
            notifier.notify(&Notice::UploadSucceeded {
                url: url.clone(),
                hosted: hosted.clone(),
            });
            Some(hosted)
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, transport = e.is_transport(), "failed to upload image");
            notifier.notify(&Notice::UploadFailed {
                url: url.clone(),
                reason: e.to_string(),
            });
            None
        }
    }
}

/// Run scan → filter → upload → rewrite over `content`.
///
/// `uploaded + skipped` always equals the number of references found.
pub fn process_content(
    content: &str,
    cfg: &PicupConfig,
    uploader: &dyn Uploader,
    notifier: &dyn Notifier,
) -> RunSummary {
    tracing::debug!(bytes = content.len(), "scanning");
    let planned = plan(content, cfg);
    tracing::debug!(references = planned.len(), "scan complete");

    let mut rewriter = Rewriter::new(content);
    let mut skipped = 0usize;

    for PlannedReference {
        reference,
        eligibility,
    } in &planned
    {
        match eligibility {
            Eligibility::Blacklisted => {
                tracing::info!(url = %reference.url, "skipping blacklisted image");
                skipped += 1;
            }
            Eligibility::NotUploadable => {
                tracing::debug!(url = %reference.url, "skipping image that needs no upload");
                skipped += 1;
            }
            Eligibility::Upload => match upload_one(reference, cfg, uploader, notifier) {
                Some(hosted) => rewriter.replace(reference, &hosted),
                None => skipped += 1,
            },
        }
    }

    let uploaded = rewriter.len();
    RunSummary {
        uploaded,
        skipped,
        content: rewriter.finish(),
    }
}

/// Full run over a document. Writes back only when something was uploaded.
///
/// Only document I/O errors abort; per-reference failures become skips.
pub fn run(
    document: &dyn Document,
    cfg: &PicupConfig,
    uploader: &dyn Uploader,
    notifier: &dyn Notifier,
) -> Result<RunOutcome> {
    let name = document.name();
    notifier.notify(&Notice::RunStarted {
        document: name.clone(),
    });
    tracing::info!(document = %name, endpoint = %cfg.picgo_server, "run started");

    let content = document.read()?;
    let summary = process_content(&content, cfg, uploader, notifier);

    let state = if summary.uploaded > 0 {
        document.write(&summary.content)?;
        RunState::Rewritten
    } else {
        RunState::Unchanged
    };

    notifier.notify(&Notice::Summary {
        uploaded: summary.uploaded,
        skipped: summary.skipped,
    });
    tracing::info!(
        document = %name,
        uploaded = summary.uploaded,
        skipped = summary.skipped,
        ?state,
        "run finished"
    );

    Ok(RunOutcome { summary, state })
}
