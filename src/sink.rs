//! Dataset half of the report sink: persist the cleaned collections and the
//! typed report as JSON documents.

use crate::model::{Comment, Post};
use crate::report::AnalysisReport;
use crate::util::write_json_pretty;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write the deduplicated, classified collections under
/// `<out_dir>/processed/`. Original fields are preserved alongside the
/// derived ones.
pub fn write_processed(
    posts: &[Post],
    comments: &[Comment],
    out_dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    let processed = out_dir.join("processed");
    fs::create_dir_all(&processed)
        .with_context(|| format!("create {}", processed.display()))?;

    let posts_path = processed.join("filtered_contents.json");
    write_json_pretty(&posts_path, &posts)?;

    let comments_path = processed.join("filtered_comments.json");
    write_json_pretty(&comments_path, &comments)?;

    Ok((posts_path, comments_path))
}

/// Write the aggregate report as `<out_dir>/report.json`.
pub fn write_report(report: &AnalysisReport, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let path = out_dir.join("report.json");
    write_json_pretty(&path, report)?;
    Ok(path)
}
