use crate::catalog::Catalog;
use crate::model::KeyStrictness;
use std::path::{Path, PathBuf};

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    pub top_boards: usize,
    pub top_games: usize,
    pub top_keywords: usize,
    pub top_commented: usize,
    pub strictness: KeyStrictness,
    pub catalog: Catalog,
    pub progress: bool, // show progress bars
    pub charts: bool,   // render chart PNGs (disable for headless test runs)
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            out_dir: PathBuf::from("./report"),
            top_boards: 10,
            top_games: 10,
            top_keywords: 20,
            top_commented: 10,
            strictness: KeyStrictness::Lossy,
            catalog: Catalog::builtin(),
            progress: true,
            charts: true,
        }
    }
}

impl ReportOptions {
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_top_boards(mut self, k: usize) -> Self {
        self.top_boards = k.max(1);
        self
    }
    pub fn with_top_games(mut self, k: usize) -> Self {
        self.top_games = k.max(1);
        self
    }
    pub fn with_top_keywords(mut self, k: usize) -> Self {
        self.top_keywords = k.max(1);
        self
    }
    pub fn with_top_commented(mut self, k: usize) -> Self {
        self.top_commented = k.max(1);
        self
    }
    pub fn with_strictness(mut self, strictness: KeyStrictness) -> Self {
        self.strictness = strictness;
        self
    }
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_charts(mut self, yes: bool) -> Self {
        self.charts = yes;
        self
    }
}
