//! `picup upload [path]` – upload every eligible image and rewrite the document.

use anyhow::{Context, Result};
use picup_core::config::PicupConfig;
use picup_core::notify::StderrNotifier;
use picup_core::pipeline::{self, RunState};
use picup_core::upload::PicGoClient;
use std::path::Path;

pub async fn run_upload(path: Option<&Path>, cfg: &PicupConfig) -> Result<()> {
    let doc = super::active_document(path)?;

    // Uploads are blocking curl calls, one after another.
    let outcome = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        move || pipeline::run(&doc, &cfg, &PicGoClient::new(), &StderrNotifier)
    })
    .await
    .context("upload task join")??;

    if outcome.state == RunState::Rewritten {
        tracing::info!("document rewritten ({} uploaded)", outcome.summary.uploaded);
    }
    Ok(())
}
