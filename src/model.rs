//! Post/comment records and their derived fields.
//!
//! All source fields are optional; unknown source fields are preserved
//! verbatim through `extra` so the cleaned dataset round-trips everything
//! the crawler produced.

use crate::date::parse_publish_time;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use time::PrimitiveDateTime;

/// Coarse platform category of a post, derived from platform keywords only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "主机")]
    Host,
    #[serde(rename = "手游")]
    Mobile,
    #[serde(rename = "双平台")]
    CrossPlatform,
    #[serde(rename = "其他")]
    Other,
}

impl GameType {
    pub const ALL: [GameType; 4] = [
        GameType::CrossPlatform,
        GameType::Host,
        GameType::Mobile,
        GameType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GameType::Host => "主机",
            GameType::Mobile => "手游",
            GameType::CrossPlatform => "双平台",
            GameType::Other => "其他",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Five ordered sentiment levels. Classification precedence is
/// very-negative, very-positive, negative, positive, neutral default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "非常正面")]
    VeryPositive,
    #[serde(rename = "正面")]
    Positive,
    #[serde(rename = "中性")]
    Neutral,
    #[serde(rename = "负面")]
    Negative,
    #[serde(rename = "非常负面")]
    VeryNegative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 5] = [
        Sentiment::VeryPositive,
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
        Sentiment::VeryNegative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "非常正面",
            Sentiment::Positive => "正面",
            Sentiment::Neutral => "中性",
            Sentiment::Negative => "负面",
            Sentiment::VeryNegative => "非常负面",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity-key strictness for deduplication.
///
/// `Lossy` reproduces the original heuristic: records lacking an explicit id
/// fall back to "title-desc-publish_time" with absent parts empty, so two
/// different id-less records with the same tuple merge. `Strict` folds the
/// record kind and comment content into the fallback key, avoiding those
/// false merges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyStrictness {
    #[default]
    Lossy,
    Strict,
}

/// A top-level forum submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tieba_name: Option<String>,
    /// Raw publish time as crawled (string or epoch number); parsed lazily.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_replay_num: Option<u64>,

    // Derived fields, absent until classification runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_type: Option<GameType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_games: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Blob used by the relevance filter: title, desc, board, each with a
    /// trailing space, absent fields contributing nothing.
    pub fn filter_text(&self) -> String {
        let mut text = String::new();
        for part in [&self.title, &self.desc, &self.tieba_name] {
            if let Some(s) = part {
                text.push_str(s);
                text.push(' ');
            }
        }
        text
    }

    /// "title desc board" with absent parts empty; the classifier input.
    pub fn classify_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title.as_deref().unwrap_or(""),
            self.desc.as_deref().unwrap_or(""),
            self.tieba_name.as_deref().unwrap_or("")
        )
    }

    /// "title desc" with absent parts empty; the sentiment/tokenizer input.
    pub fn sentiment_text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or(""),
            self.desc.as_deref().unwrap_or("")
        )
    }

    /// Character count of title+desc.
    pub fn text_length(&self) -> usize {
        self.title.as_deref().unwrap_or("").chars().count()
            + self.desc.as_deref().unwrap_or("").chars().count()
    }

    pub fn parsed_time(&self) -> Option<PrimitiveDateTime> {
        self.publish_time.as_ref().and_then(parse_publish_time)
    }

    /// Stable, total identity key: explicit id, else the lossy composite.
    pub fn identity_key(&self, strictness: KeyStrictness) -> String {
        if let Some(id) = &self.note_id {
            return id.clone();
        }
        let base = format!(
            "{}-{}-{}",
            self.title.as_deref().unwrap_or(""),
            self.desc.as_deref().unwrap_or(""),
            raw_time_str(self.publish_time.as_ref())
        );
        match strictness {
            KeyStrictness::Lossy => base,
            KeyStrictness::Strict => format!("post:{base}"),
        }
    }
}

/// A reply attached to a post. `note_id` may reference a post that is not in
/// the current dataset; that is not an error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    /// Blob used by the relevance filter: just the content.
    pub fn filter_text(&self) -> String {
        match &self.content {
            Some(s) => format!("{s} "),
            None => String::new(),
        }
    }

    /// Explicit id, else the same composite fallback as posts. Comments have
    /// no title/desc/publish_time, so under `Lossy` all id-less comments
    /// share the key "--"; that merge is the documented heuristic, not a bug.
    pub fn identity_key(&self, strictness: KeyStrictness) -> String {
        if let Some(id) = &self.comment_id {
            return id.clone();
        }
        match strictness {
            KeyStrictness::Lossy => "--".to_string(),
            KeyStrictness::Strict => {
                format!("comment:--:{}", self.content.as_deref().unwrap_or(""))
            }
        }
    }
}

fn raw_time_str(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
