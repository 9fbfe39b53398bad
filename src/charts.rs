//! Chart half of the report sink: turn aggregates into labeled series plus a
//! chart-kind hint, and render each one as a PNG with plotters.
//!
//! A failed chart is logged and skipped; it never takes the rest of the
//! report down with it.

use crate::catalog::{HOST_PSEUDO_GAME, MOBILE_PSEUDO_GAME};
use crate::report::AnalysisReport;
use anyhow::{bail, Result};
use plotters::element::Pie;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Line,
    MultiLine,
    Pie,
    Scatter,
    Histogram,
    GroupedBar,
}

/// The data shapes a chart can carry.
#[derive(Clone, Debug)]
pub enum ChartData {
    /// One value per labeled category.
    Categories { labels: Vec<String>, values: Vec<f64> },
    /// Several named series over shared category labels.
    Series { labels: Vec<String>, series: Vec<(String, Vec<f64>)> },
    /// Raw (x, y) points.
    Points { points: Vec<(f64, f64)> },
}

/// A named series/table plus rendering hints, as handed to the sink.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub stem: &'static str,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
    pub data: ChartData,
}

const PALETTE: [RGBColor; 10] = [
    RGBColor(76, 175, 80),   // green
    RGBColor(33, 150, 243),  // blue
    RGBColor(244, 67, 54),   // red
    RGBColor(255, 193, 7),   // amber
    RGBColor(156, 39, 176),  // purple
    RGBColor(255, 87, 34),   // deep orange
    RGBColor(0, 150, 136),   // teal
    RGBColor(121, 85, 72),   // brown
    RGBColor(139, 195, 74),  // light green
    RGBColor(158, 158, 158), // grey
];

const SKYBLUE: RGBColor = RGBColor(135, 206, 235);

fn categories(
    stem: &'static str,
    title: &str,
    x_label: &str,
    y_label: &str,
    kind: ChartKind,
    labels: Vec<String>,
    values: Vec<f64>,
) -> ChartSpec {
    ChartSpec {
        stem,
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        kind,
        data: ChartData::Categories { labels, values },
    }
}

fn truncate_label(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }
}

fn without_pseudo(ranked: &[(String, u64)]) -> (Vec<String>, Vec<f64>) {
    let kept: Vec<_> = ranked
        .iter()
        .filter(|(name, _)| name != HOST_PSEUDO_GAME && name != MOBILE_PSEUDO_GAME)
        .collect();
    (
        kept.iter().map(|(name, _)| name.clone()).collect(),
        kept.iter().map(|(_, count)| *count as f64).collect(),
    )
}

/// The full chart inventory for a report. Aggregates that are absent (or
/// collapse to nothing once pseudo markers are filtered) contribute no chart.
pub fn specs(report: &AnalysisReport) -> Vec<ChartSpec> {
    let mut specs = Vec::new();

    if let Some(boards) = &report.hot_boards {
        specs.push(categories(
            "hot_tieba", "热门游戏贴吧TOP10", "贴吧名称", "帖子数量", ChartKind::Bar,
            boards.iter().map(|(b, _)| b.clone()).collect(),
            boards.iter().map(|(_, n)| *n as f64).collect(),
        ));
    }
    if let Some(games) = &report.hot_games {
        specs.push(categories(
            "hot_games", "热门游戏TOP10", "游戏名称", "提及次数", ChartKind::Bar,
            games.iter().map(|(g, _)| g.clone()).collect(),
            games.iter().map(|(_, n)| *n as f64).collect(),
        ));
    }
    if let Some(games) = &report.hot_host_games {
        let (labels, values) = without_pseudo(games);
        if !labels.is_empty() {
            specs.push(categories(
                "hot_host_games", "主机游戏热度TOP10", "游戏名称", "提及次数",
                ChartKind::Bar, labels, values,
            ));
        }
    }
    if let Some(games) = &report.hot_mobile_games {
        let (labels, values) = without_pseudo(games);
        if !labels.is_empty() {
            specs.push(categories(
                "hot_mobile_games", "手游热度TOP10", "游戏名称", "提及次数",
                ChartKind::Bar, labels, values,
            ));
        }
    }

    if let Some(daily) = &report.daily_posts {
        specs.push(categories(
            "post_trend", "帖子发布时间趋势", "日期", "帖子数量", ChartKind::Line,
            daily.keys().cloned().collect(),
            daily.values().map(|n| *n as f64).collect(),
        ));
    }
    if let Some(monthly) = &report.monthly_posts {
        specs.push(categories(
            "monthly_distribution", "帖子发布月份分布", "月份", "帖子数量", ChartKind::Bar,
            monthly.keys().cloned().collect(),
            monthly.values().map(|n| *n as f64).collect(),
        ));
    }

    if let Some(rates) = &report.sentiment_rates {
        specs.push(categories(
            "sentiment_pie", "游戏评价分布", "", "", ChartKind::Pie,
            vec!["好评".into(), "差评".into(), "中性".into()],
            vec![rates.positive_rate, rates.negative_rate, rates.neutral_rate],
        ));
    }

    if let Some(bins) = &report.reply_histogram {
        specs.push(categories(
            "replies_distribution", "帖子回复数分布", "回复数", "帖子数量",
            ChartKind::Histogram,
            bins.iter()
                .map(|b| format!("{:.0}-{:.0}", b.lower, b.upper))
                .collect(),
            bins.iter().map(|b| b.count as f64).collect(),
        ));
    }

    if let Some(cross) = &report.cross_platform_games {
        specs.push(ChartSpec {
            stem: "cross_platform_games",
            title: "双平台游戏热度对比".to_string(),
            x_label: "游戏名称".to_string(),
            y_label: "提及次数".to_string(),
            kind: ChartKind::GroupedBar,
            data: ChartData::Series {
                labels: cross.iter().map(|g| g.name.clone()).collect(),
                series: vec![
                    (
                        "主机平台".to_string(),
                        cross.iter().map(|g| g.host_mentions as f64).collect(),
                    ),
                    (
                        "手游平台".to_string(),
                        cross.iter().map(|g| g.mobile_mentions as f64).collect(),
                    ),
                ],
            },
        });
    }

    if let Some(table) = &report.monthly_type_counts {
        specs.push(ChartSpec {
            stem: "game_type_trend",
            title: "不同游戏类型的月度分布趋势".to_string(),
            x_label: "月份".to_string(),
            y_label: "帖子数量".to_string(),
            kind: ChartKind::MultiLine,
            data: ChartData::Series {
                labels: table.months.iter().map(|m| m.to_string()).collect(),
                series: table
                    .series
                    .iter()
                    .map(|s| {
                        (
                            s.game_type.clone(),
                            s.counts.iter().map(|n| *n as f64).collect(),
                        )
                    })
                    .collect(),
            },
        });
    }

    if let Some(types) = &report.game_type_distribution {
        specs.push(categories(
            "game_type_distribution", "游戏类型分布", "", "", ChartKind::Pie,
            types.iter().map(|(t, _)| t.clone()).collect(),
            types.iter().map(|(_, n)| *n as f64).collect(),
        ));
    }

    if let Some(points) = &report.length_reply_points {
        specs.push(ChartSpec {
            stem: "length_reply_scatter",
            title: "帖子长度与回复数关系".to_string(),
            x_label: "帖子长度（字符数）".to_string(),
            y_label: "回复数".to_string(),
            kind: ChartKind::Scatter,
            data: ChartData::Points {
                points: points.iter().map(|(l, r)| (*l as f64, *r as f64)).collect(),
            },
        });
    }
    if let Some(by_length) = &report.avg_replies_by_length {
        specs.push(categories(
            "avg_replies_by_length", "不同帖子长度区间的平均回复数", "帖子长度区间",
            "平均回复数", ChartKind::Bar,
            by_length.iter().map(|(b, _)| b.clone()).collect(),
            by_length.iter().map(|(_, v)| *v).collect(),
        ));
    }

    if let Some(top) = &report.top_commented_posts {
        specs.push(categories(
            "top_commented_posts", "评论最多的帖子TOP10", "评论数量", "帖子标题",
            ChartKind::HorizontalBar,
            top.iter()
                .map(|t| {
                    truncate_label(t.title.as_deref().unwrap_or("未知标题"), 25)
                })
                .collect(),
            top.iter().map(|t| t.comment_count as f64).collect(),
        ));
    }
    if let Some(keywords) = &report.top_keywords {
        specs.push(categories(
            "top_game_keywords", "热门游戏讨论关键词TOP20", "提及次数", "关键词",
            ChartKind::HorizontalBar,
            keywords.iter().map(|(w, _)| w.clone()).collect(),
            keywords.iter().map(|(_, n)| *n as f64).collect(),
        ));
    }

    if let Some(by_hour) = &report.avg_replies_by_hour {
        specs.push(categories(
            "avg_replies_by_hour", "不同发布小时的平均回复数", "发布小时", "平均回复数",
            ChartKind::Bar,
            by_hour.iter().map(|(h, _)| h.to_string()).collect(),
            by_hour.iter().map(|(_, v)| *v).collect(),
        ));
    }
    if let Some(by_day) = &report.avg_replies_by_day {
        specs.push(categories(
            "avg_replies_by_day", "不同星期几的平均回复数", "星期几", "平均回复数",
            ChartKind::Bar,
            by_day.iter().map(|(d, _)| d.clone()).collect(),
            by_day.iter().map(|(_, v)| *v).collect(),
        ));
    }
    if let Some(by_type) = &report.avg_replies_by_type {
        specs.push(categories(
            "avg_replies_by_type", "不同游戏类型的平均回复数", "游戏类型", "平均回复数",
            ChartKind::Bar,
            by_type.iter().map(|(t, _)| t.clone()).collect(),
            by_type.iter().map(|(_, v)| *v).collect(),
        ));
    }

    if let Some(dist) = &report.sentiment_distribution {
        specs.push(categories(
            "enhanced_sentiment_pie", "游戏评价情感倾向分布（增强版）", "", "",
            ChartKind::Pie,
            dist.iter().map(|(s, _)| s.clone()).collect(),
            dist.iter().map(|(_, n)| *n as f64).collect(),
        ));
    }

    specs
}

/// Render every chart for `report` into `out_dir`. Individual failures are
/// logged and skipped; returns the number of charts written.
pub fn render_all(report: &AnalysisReport, out_dir: &Path) -> Result<usize> {
    fs::create_dir_all(out_dir)?;
    let mut rendered = 0;
    for spec in specs(report) {
        match render(&spec, out_dir) {
            Ok(path) => {
                rendered += 1;
                tracing::debug!(chart=%path.display(), "chart written");
            }
            Err(e) => {
                tracing::warn!(chart = spec.stem, error = %e, "skipping failed chart");
            }
        }
    }
    Ok(rendered)
}

/// Render one chart. The kind hint must match the data shape.
pub fn render(spec: &ChartSpec, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.png", spec.stem));
    match (&spec.kind, &spec.data) {
        (ChartKind::Bar | ChartKind::Histogram, ChartData::Categories { labels, values }) => {
            draw_bars(&path, spec, labels, values, spec.kind == ChartKind::Histogram)?
        }
        (ChartKind::HorizontalBar, ChartData::Categories { labels, values }) => {
            draw_horizontal_bars(&path, spec, labels, values)?
        }
        (ChartKind::Line, ChartData::Categories { labels, values }) => {
            let series = vec![(String::new(), values.clone())];
            draw_lines(&path, spec, labels, &series, false)?
        }
        (ChartKind::MultiLine, ChartData::Series { labels, series }) => {
            draw_lines(&path, spec, labels, series, true)?
        }
        (ChartKind::Pie, ChartData::Categories { labels, values }) => {
            draw_pie(&path, spec, labels, values)?
        }
        (ChartKind::Scatter, ChartData::Points { points }) => {
            draw_scatter(&path, spec, points)?
        }
        (ChartKind::GroupedBar, ChartData::Series { labels, series }) => {
            draw_grouped_bars(&path, spec, labels, series)?
        }
        _ => bail!("chart {} has a kind/data shape mismatch", spec.stem),
    }
    Ok(path)
}

fn y_ceiling(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

fn draw_bars(
    path: &Path,
    spec: &ChartSpec,
    labels: &[String],
    values: &[f64],
    tight: bool,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let n = labels.len();
    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(80)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..n as f64, 0f64..y_ceiling(values))?;
    let owned = labels.to_vec();
    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_labels(n.min(30))
        .x_label_formatter(&move |x| {
            owned.get(x.floor() as usize).cloned().unwrap_or_default()
        })
        .draw()?;
    let (pad_lo, pad_hi) = if tight { (0.0, 1.0) } else { (0.15, 0.85) };
    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        Rectangle::new(
            [(i as f64 + pad_lo, 0.0), (i as f64 + pad_hi, *v)],
            SKYBLUE.filled(),
        )
    }))?;
    root.present()?;
    Ok(())
}

fn draw_horizontal_bars(
    path: &Path,
    spec: &ChartSpec,
    labels: &[String],
    values: &[f64],
) -> Result<()> {
    let n = labels.len();
    let height = (40 * n + 180).max(400) as u32;
    let root = BitMapBackend::new(path, (1100, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(60)
        .y_label_area_size(220)
        .build_cartesian_2d(0f64..y_ceiling(values), 0f64..n as f64)?;
    let owned = labels.to_vec();
    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .y_labels(n)
        .y_label_formatter(&move |y| {
            owned.get(y.floor() as usize).cloned().unwrap_or_default()
        })
        .draw()?;
    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        Rectangle::new(
            [(0.0, i as f64 + 0.15), (*v, i as f64 + 0.85)],
            SKYBLUE.filled(),
        )
    }))?;
    root.present()?;
    Ok(())
}

fn draw_lines(
    path: &Path,
    spec: &ChartSpec,
    labels: &[String],
    series: &[(String, Vec<f64>)],
    legend: bool,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let n = labels.len();
    let ymax = y_ceiling(
        &series
            .iter()
            .flat_map(|(_, v)| v.iter().copied())
            .collect::<Vec<_>>(),
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(80)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..(n.max(2) - 1) as f64, 0f64..ymax)?;
    let owned = labels.to_vec();
    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_labels(n.min(20))
        .x_label_formatter(&move |x| {
            owned.get(x.round() as usize).cloned().unwrap_or_default()
        })
        .draw()?;

    for (idx, (name, values)) in series.iter().enumerate() {
        let color = PALETTE[idx % PALETTE.len()];
        let pts: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();
        let line = chart.draw_series(LineSeries::new(pts.clone(), color.stroke_width(2)))?;
        if legend {
            line.label(name.clone()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
        }
        chart.draw_series(
            pts.iter().map(|(x, y)| Circle::new((*x, *y), 3, color.filled())),
        )?;
    }
    if legend {
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()?;
    }
    root.present()?;
    Ok(())
}

fn draw_pie(path: &Path, spec: &ChartSpec, labels: &[String], values: &[f64]) -> Result<()> {
    let root = BitMapBackend::new(path, (680, 680)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&spec.title, ("sans-serif", 28))?;

    // Zero-weight slices have no angle; drop them.
    let mut sizes = Vec::new();
    let mut names = Vec::new();
    let mut colors = Vec::new();
    for (i, (label, value)) in labels.iter().zip(values).enumerate() {
        if *value > 0.0 {
            sizes.push(*value);
            names.push(label.clone());
            colors.push(PALETTE[i % PALETTE.len()]);
        }
    }
    if sizes.is_empty() {
        bail!("pie chart {} has no positive slices", spec.stem);
    }

    let center = (340, 330);
    let radius = 220.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &names);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 20).into_font());
    pie.percentages(("sans-serif", 16).into_font().color(&BLACK));
    root.draw(&pie)?;
    root.present()?;
    Ok(())
}

fn draw_scatter(path: &Path, spec: &ChartSpec, points: &[(f64, f64)]) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let xmax = y_ceiling(&points.iter().map(|(x, _)| *x).collect::<Vec<_>>());
    let ymax = y_ceiling(&points.iter().map(|(_, y)| *y).collect::<Vec<_>>());
    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..xmax, 0f64..ymax)?;
    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .draw()?;
    chart.draw_series(
        points
            .iter()
            .map(|(x, y)| Circle::new((*x, *y), 4, PALETTE[1].mix(0.5).filled())),
    )?;
    root.present()?;
    Ok(())
}

fn draw_grouped_bars(
    path: &Path,
    spec: &ChartSpec,
    labels: &[String],
    series: &[(String, Vec<f64>)],
) -> Result<()> {
    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let n = labels.len();
    let ymax = y_ceiling(
        &series
            .iter()
            .flat_map(|(_, v)| v.iter().copied())
            .collect::<Vec<_>>(),
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(80)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..n as f64, 0f64..ymax)?;
    let owned = labels.to_vec();
    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_labels(n.min(30))
        .x_label_formatter(&move |x| {
            owned.get(x.floor() as usize).cloned().unwrap_or_default()
        })
        .draw()?;

    let group_width = 0.8 / series.len().max(1) as f64;
    for (idx, (name, values)) in series.iter().enumerate() {
        let color = PALETTE[idx % PALETTE.len()];
        let offset = 0.1 + idx as f64 * group_width;
        chart
            .draw_series(values.iter().enumerate().map(|(i, v)| {
                Rectangle::new(
                    [
                        (i as f64 + offset, 0.0),
                        (i as f64 + offset + group_width * 0.9, *v),
                    ],
                    color.filled(),
                )
            }))?
            .label(name.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
            });
    }
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}
