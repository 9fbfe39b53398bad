use anyhow::Result;
use tieba_game_report::ReportPipeline;

const DATA_ROOT: &str = "./data";
const OUT_ROOT: &str = "./report";

fn main() -> Result<()> {
    let summary = ReportPipeline::new()
        .data_dir(DATA_ROOT)
        .out_dir(OUT_ROOT)
        .progress(true)
        .run()?;

    println!(
        "原始数据：{}个帖子，{}条评论",
        summary.raw_posts, summary.raw_comments
    );
    println!(
        "筛选后：{}个帖子，{}条评论",
        summary.relevant_posts, summary.relevant_comments
    );
    println!(
        "去重后：{}个帖子，{}条评论",
        summary.unique_posts, summary.unique_comments
    );
    println!("已生成 {} 张图表", summary.charts_rendered);
    println!("分析报告：{}", summary.report_path.display());

    Ok(())
}
