mod catalog;
mod config;
mod date;
mod model;

mod dedupe;
mod filter;
mod progress;
mod source;
mod util;

mod classify;
mod sentiment;
mod stats;
mod tokens;
mod trend;

mod charts;
mod pipeline;
mod report;
mod sink;

pub use crate::catalog::{Catalog, HOST_PSEUDO_GAME, MOBILE_PSEUDO_GAME};
pub use crate::config::ReportOptions;
pub use crate::date::{parse_publish_time_str, YearMonth};
pub use crate::model::{Comment, GameType, KeyStrictness, Post, Sentiment};
pub use crate::pipeline::{ReportPipeline, RunSummary};
pub use crate::report::{analyze, AnalysisReport, SentimentRates, TopCommented};

// Expose the individual pipeline stages for library users and tests.
pub use crate::classify::{
    classify_post, cross_platform_games, game_type_of, matched_games, mention_tallies,
    CrossPlatformGame, MentionTallies,
};
pub use crate::dedupe::dedupe_in_order;
pub use crate::filter::is_game_related;
pub use crate::sentiment::{classify as classify_sentiment, three_way, Verdict};
pub use crate::source::{load_tree, LoadStats, RawData};
pub use crate::tokens::top_keywords;
pub use crate::trend::{
    mean_replies_by_game_type, mean_replies_by_hour, mean_replies_by_length_bin,
    mean_replies_by_weekday, monthly_by_game_type, posts_per_day, MonthlySeries,
    MonthlyTypeTable,
};

// Expose the pure statistics helpers.
pub use crate::stats::{
    histogram, iqr_trimmed_summary, pearson, top_k, Counter, HistBin, TrimmedSummary,
};

// Expose the chart sink for callers that want individual charts.
pub use crate::charts::{render, render_all, specs, ChartData, ChartKind, ChartSpec};
pub use crate::sink::{write_processed, write_report};
