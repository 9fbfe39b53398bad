//! The batch pipeline: Source → Relevance Filter → Deduplicator →
//! Classifiers → Aggregator → Report Sink, strictly in that order, single
//! threaded, one pass over an in-memory snapshot.

use crate::catalog::Catalog;
use crate::classify;
use crate::config::ReportOptions;
use crate::dedupe::dedupe_in_order;
use crate::filter::is_game_related;
use crate::model::KeyStrictness;
use crate::report::{analyze, AnalysisReport};
use crate::source::load_tree;
use crate::util::init_tracing_once;
use crate::{charts, sink};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Builder-style entry point for a full report run.
#[derive(Clone, Debug, Default)]
pub struct ReportPipeline {
    opts: ReportOptions,
}

/// What a run produced, for callers that want to print a summary.
#[derive(Debug)]
pub struct RunSummary {
    pub raw_posts: usize,
    pub raw_comments: usize,
    pub relevant_posts: usize,
    pub relevant_comments: usize,
    pub unique_posts: usize,
    pub unique_comments: usize,
    pub charts_rendered: usize,
    pub report_path: PathBuf,
    pub report: AnalysisReport,
}

impl ReportPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    // -------- Builder methods --------
    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.opts = self.opts.with_data_dir(dir);
        self
    }
    pub fn out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.opts = self.opts.with_out_dir(dir);
        self
    }
    pub fn top_boards(mut self, k: usize) -> Self {
        self.opts = self.opts.with_top_boards(k);
        self
    }
    pub fn top_games(mut self, k: usize) -> Self {
        self.opts = self.opts.with_top_games(k);
        self
    }
    pub fn top_keywords(mut self, k: usize) -> Self {
        self.opts = self.opts.with_top_keywords(k);
        self
    }
    pub fn top_commented(mut self, k: usize) -> Self {
        self.opts = self.opts.with_top_commented(k);
        self
    }
    pub fn strictness(mut self, strictness: KeyStrictness) -> Self {
        self.opts = self.opts.with_strictness(strictness);
        self
    }
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.opts = self.opts.with_catalog(catalog);
        self
    }
    pub fn progress(mut self, yes: bool) -> Self {
        self.opts = self.opts.with_progress(yes);
        self
    }
    pub fn charts(mut self, yes: bool) -> Self {
        self.opts = self.opts.with_charts(yes);
        self
    }

    /// Run the whole pipeline and write every output.
    pub fn run(self) -> Result<RunSummary> {
        init_tracing_once();
        let opts = self.opts;
        let catalog = &opts.catalog;

        let (raw, load_stats) = load_tree(&opts.data_dir, opts.progress)?;
        tracing::info!(
            posts = raw.posts.len(),
            comments = raw.comments.len(),
            files_skipped = load_stats.files_skipped,
            bad_records = load_stats.bad_records,
            "data loaded"
        );
        let (raw_posts, raw_comments) = (raw.posts.len(), raw.comments.len());

        // Relevance filter.
        let mut posts = raw.posts;
        posts.retain(|p| {
            is_game_related(p.tieba_name.as_deref(), &p.filter_text(), catalog)
        });
        let mut comments = raw.comments;
        comments.retain(|c| is_game_related(None, &c.filter_text(), catalog));
        let (relevant_posts, relevant_comments) = (posts.len(), comments.len());

        // Deduplicate, first occurrence wins.
        let strictness = opts.strictness;
        let mut posts = dedupe_in_order(posts, |p| p.identity_key(strictness));
        let comments = dedupe_in_order(comments, |c| c.identity_key(strictness));
        tracing::info!(
            posts = posts.len(),
            comments = comments.len(),
            "after filtering and deduplication"
        );

        // Classification appends the derived fields.
        for post in posts.iter_mut() {
            classify::classify_post(post, catalog);
        }

        // Aggregate and persist.
        let report = analyze(&posts, &comments, &opts);
        sink::write_processed(&posts, &comments, &opts.out_dir)?;
        let report_path = sink::write_report(&report, &opts.out_dir)?;

        let charts_rendered = if opts.charts {
            charts::render_all(&report, &opts.out_dir.join("visualizations"))?
        } else {
            0
        };

        Ok(RunSummary {
            raw_posts,
            raw_comments,
            relevant_posts,
            relevant_comments,
            unique_posts: posts.len(),
            unique_comments: comments.len(),
            charts_rendered,
            report_path,
            report,
        })
    }
}
