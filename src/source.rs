//! Record source: discover and parse the crawled JSON documents.
//!
//! The data directory is walked recursively; every `*.json` file whose name
//! marks it as a contents (post) or comments dump is parsed as a JSON array
//! of records. A malformed document or record is logged and skipped — a bad
//! file never aborts the run.

use crate::model::{Comment, Post};
use crate::progress::make_count_progress;
use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Posts,
    Comments,
}

#[derive(Debug, Default)]
pub struct RawData {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Default)]
pub struct LoadStats {
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub bad_records: usize,
}

/// Contents dumps take precedence over comments when a name matches both.
fn classify_file(name: &str) -> Option<FileKind> {
    // Compiled per call; the file list is tiny compared to the parse work.
    let contents_re = Regex::new(r"(?i)contents?").unwrap();
    let comments_re = Regex::new(r"(?i)comments?").unwrap();
    if contents_re.is_match(name) {
        Some(FileKind::Posts)
    } else if comments_re.is_match(name) {
        Some(FileKind::Comments)
    } else {
        None
    }
}

fn discover_json_files(dir: &Path) -> Vec<(FileKind, PathBuf)> {
    let mut files = Vec::new();
    if !dir.exists() {
        return files;
    }
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(kind) = classify_file(name) {
                files.push((kind, path.to_path_buf()));
            }
        }
    }
    files
}

fn read_records(path: &Path) -> Result<Vec<Value>> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let records: Vec<Value> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(records)
}

/// Load every post/comment record under `dir`.
pub fn load_tree(dir: &Path, progress: bool) -> Result<(RawData, LoadStats)> {
    let files = discover_json_files(dir);
    if files.is_empty() {
        tracing::warn!("No post/comment JSON files found under {}. Check the data dir.", dir.display());
        return Ok((RawData::default(), LoadStats::default()));
    }

    let pb = progress.then(|| make_count_progress(files.len() as u64, "Loading data files"));

    let mut data = RawData::default();
    let mut stats = LoadStats::default();

    for (kind, path) in files {
        match read_records(&path) {
            Ok(records) => {
                stats.files_loaded += 1;
                for record in records {
                    match kind {
                        FileKind::Posts => match serde_json::from_value::<Post>(record) {
                            Ok(post) => data.posts.push(post),
                            Err(e) => {
                                stats.bad_records += 1;
                                tracing::debug!(path=%path.display(), error=%e, "skipping bad post record");
                            }
                        },
                        FileKind::Comments => match serde_json::from_value::<Comment>(record) {
                            Ok(comment) => data.comments.push(comment),
                            Err(e) => {
                                stats.bad_records += 1;
                                tracing::debug!(path=%path.display(), error=%e, "skipping bad comment record");
                            }
                        },
                    }
                }
            }
            Err(e) => {
                stats.files_skipped += 1;
                tracing::warn!(path=%path.display(), error=%e, "skipping unreadable data file");
            }
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("data loaded");
    }
    Ok((data, stats))
}
