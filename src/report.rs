//! The aggregator: every derived statistic, computed into one well-typed
//! report struct.
//!
//! Each aggregate is an independent pure computation with its own
//! empty/insufficient-input guard; an absent aggregate leaves its field
//! `None` and never blocks the others.

use crate::classify::{self, CrossPlatformGame};
use crate::config::ReportOptions;
use crate::model::{Comment, GameType, Post, Sentiment};
use crate::sentiment::{self, Verdict};
use crate::stats::{self, Counter, HistBin, TrimmedSummary};
use crate::tokens;
use crate::trend::{self, MonthlyTypeTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// Three-way approval rates, in percent of all posts.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SentimentRates {
    pub positive_rate: f64,
    pub negative_rate: f64,
    pub neutral_rate: f64,
    pub total_count: usize,
}

/// A heavily-commented post, joined back to its title when the parent post
/// is present in the dataset.
#[derive(Clone, Debug, Serialize)]
pub struct TopCommented {
    pub note_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub comment_count: u64,
}

/// Everything the aggregator can produce. One named, typed field per
/// aggregate; `None` means that aggregate had no usable input.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AnalysisReport {
    pub total_posts: usize,
    pub total_comments: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_boards: Option<Vec<(String, u64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_games: Option<Vec<(String, u64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_host_games: Option<Vec<(String, u64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_mobile_games: Option<Vec<(String, u64)>>,
    pub platform_only_host: u64,
    pub platform_only_mobile: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_platform_games: Option<Vec<CrossPlatformGame>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_stats: Option<TrimmedSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_histogram: Option<Vec<HistBin>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_posts: Option<BTreeMap<String, u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_posts: Option<BTreeMap<String, u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_type_distribution: Option<Vec<(String, u64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_type_counts: Option<MonthlyTypeTable>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_per_post: Option<Vec<(String, u64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_comments_per_post: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_commented_posts: Option<Vec<TopCommented>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_comment_correlation: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_rates: Option<SentimentRates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_distribution: Option<Vec<(String, u64)>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_reply_correlation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_reply_points: Option<Vec<(u64, u64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_replies_by_length: Option<Vec<(String, f64)>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_keywords: Option<Vec<(String, u64)>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_replies_by_hour: Option<Vec<(u8, f64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_replies_by_day: Option<Vec<(String, f64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_replies_by_type: Option<Vec<(String, f64)>>,
}

fn non_empty<T>(v: Vec<T>) -> Option<Vec<T>> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}

/// Compute every aggregate over the classified collections. Pure; safe to
/// recompute.
pub fn analyze(posts: &[Post], comments: &[Comment], opts: &ReportOptions) -> AnalysisReport {
    let catalog = &opts.catalog;
    let mut report = AnalysisReport {
        total_posts: posts.len(),
        total_comments: comments.len(),
        ..AnalysisReport::default()
    };

    // Popularity rankings.
    report.hot_boards = stats::top_k(
        posts.iter().filter_map(|p| p.tieba_name.as_deref()),
        opts.top_boards,
    );

    let tallies = classify::mention_tallies(posts, catalog);
    report.platform_only_host = tallies.platform_only_host;
    report.platform_only_mobile = tallies.platform_only_mobile;
    if !tallies.overall.is_empty() {
        report.hot_games = Some(tallies.overall.most_common(opts.top_games));
    }
    if !tallies.host.is_empty() {
        report.hot_host_games = Some(tallies.host.most_common(opts.top_games));
    }
    if !tallies.mobile.is_empty() {
        report.hot_mobile_games = Some(tallies.mobile.most_common(opts.top_games));
    }
    report.cross_platform_games =
        non_empty(classify::cross_platform_games(&tallies.host, &tallies.mobile));

    // Reply-count distribution.
    let reply_values: Vec<f64> = posts
        .iter()
        .filter_map(|p| p.total_replay_num)
        .map(|r| r as f64)
        .collect();
    report.reply_stats = stats::iqr_trimmed_summary(&reply_values);
    let positive_replies: Vec<f64> =
        reply_values.iter().copied().filter(|r| *r > 0.0).collect();
    report.reply_histogram = stats::histogram(&positive_replies, 20);

    // Time buckets.
    let daily = trend::posts_per_day(posts);
    if !daily.is_empty() {
        let mut monthly: BTreeMap<String, u64> = BTreeMap::new();
        for (day, n) in &daily {
            *monthly.entry(day[..7].to_string()).or_insert(0) += n;
        }
        report.monthly_posts = Some(monthly);
        report.daily_posts = Some(daily);
    }

    let mut type_counter = Counter::new();
    for post in posts {
        if let Some(gt) = post.game_type {
            type_counter.add(gt.label());
        }
    }
    if !type_counter.is_empty() {
        report.game_type_distribution =
            Some(type_counter.most_common(GameType::ALL.len()));
    }

    let monthly_types = trend::monthly_by_game_type(posts);
    if !monthly_types.months.is_empty() {
        report.monthly_type_counts = Some(monthly_types);
    }

    // Comment/post relationship.
    let mut comment_counts = Counter::new();
    for comment in comments {
        if let Some(id) = &comment.note_id {
            comment_counts.add(id);
        }
    }
    if !comment_counts.is_empty() {
        let ranked = comment_counts.most_common(comment_counts.len());
        report.top_commented_posts = Some(
            ranked
                .iter()
                .take(opts.top_commented)
                .map(|(note_id, count)| TopCommented {
                    note_id: note_id.clone(),
                    title: posts
                        .iter()
                        .find(|p| p.note_id.as_deref() == Some(note_id.as_str()))
                        .and_then(|p| p.title.clone()),
                    comment_count: *count,
                })
                .collect(),
        );
        report.comments_per_post = Some(ranked);
    }
    if !posts.is_empty() && !comments.is_empty() {
        report.avg_comments_per_post = Some(comments.len() as f64 / posts.len() as f64);
    }

    let (mut xs, mut ys) = (Vec::new(), Vec::new());
    for post in posts {
        if let Some(replies) = post.total_replay_num {
            let count = post
                .note_id
                .as_deref()
                .map(|id| comment_counts.get(id))
                .unwrap_or(0);
            xs.push(replies as f64);
            ys.push(count as f64);
        }
    }
    report.reply_comment_correlation = stats::pearson(&xs, &ys);

    // Approval rates (three-way lexicons).
    if !posts.is_empty() {
        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut neutral = 0usize;
        for post in posts {
            match sentiment::three_way(&post.sentiment_text(), catalog) {
                Verdict::Positive => positive += 1,
                Verdict::Negative => negative += 1,
                Verdict::Neutral => neutral += 1,
            }
        }
        let total = posts.len();
        report.sentiment_rates = Some(SentimentRates {
            positive_rate: positive as f64 / total as f64 * 100.0,
            negative_rate: negative as f64 / total as f64 * 100.0,
            neutral_rate: neutral as f64 / total as f64 * 100.0,
            total_count: total,
        });
    }

    // Five-level sentiment distribution.
    let mut sentiment_counter = Counter::new();
    for post in posts {
        if let Some(s) = post.sentiment {
            sentiment_counter.add(s.label());
        }
    }
    if !sentiment_counter.is_empty() {
        report.sentiment_distribution =
            Some(sentiment_counter.most_common(Sentiment::ALL.len()));
    }

    // Post length vs replies, posts with at least one reply only.
    let points: Vec<(u64, u64)> = posts
        .iter()
        .filter_map(|p| {
            let replies = p.total_replay_num.filter(|r| *r > 0)?;
            let length = p.post_length.unwrap_or_else(|| p.text_length()) as u64;
            Some((length, replies))
        })
        .collect();
    let lx: Vec<f64> = points.iter().map(|(l, _)| *l as f64).collect();
    let ly: Vec<f64> = points.iter().map(|(_, r)| *r as f64).collect();
    report.length_reply_correlation = stats::pearson(&lx, &ly);
    report.length_reply_points = non_empty(points);
    report.avg_replies_by_length = non_empty(trend::mean_replies_by_length_bin(posts, catalog));

    // Keyword discovery.
    report.top_keywords = non_empty(tokens::top_keywords(posts, catalog, opts.top_keywords));

    // Publish-time vs replies.
    report.avg_replies_by_hour = non_empty(trend::mean_replies_by_hour(posts));
    report.avg_replies_by_day = non_empty(trend::mean_replies_by_weekday(posts, catalog));
    report.avg_replies_by_type = non_empty(trend::mean_replies_by_game_type(posts));

    report
}
