//! `picup scan [path]` – list image references and their upload verdicts.

use anyhow::Result;
use picup_core::config::PicupConfig;
use picup_core::document::Document;
use picup_core::pipeline;
use picup_core::scan::ReferenceKind;
use std::path::Path;

pub async fn run_scan(path: Option<&Path>, cfg: &PicupConfig) -> Result<()> {
    let doc = super::active_document(path)?;
    let content = doc.read()?;
    let planned = pipeline::plan(&content, cfg);

    if planned.is_empty() {
        println!("No image references in {}.", doc.name());
        return Ok(());
    }

    println!("{:<4} {:<9} {:<15} {}", "#", "KIND", "VERDICT", "URL");
    for (i, p) in planned.iter().enumerate() {
        let kind = match p.reference.kind {
            ReferenceKind::Markdown => "markdown",
            ReferenceKind::Html => "html",
        };
        println!(
            "{:<4} {:<9} {:<15} {}",
            i + 1,
            kind,
            p.eligibility.to_string(),
            p.reference.url
        );
    }
    let uploadable = planned
        .iter()
        .filter(|p| p.eligibility.should_upload())
        .count();
    println!(
        "{} reference(s), {} to upload, {} to skip.",
        planned.len(),
        uploadable,
        planned.len() - uploadable
    );
    Ok(())
}
