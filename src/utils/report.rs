//! 运行报告
//!
//! 按处理顺序输出文件列表、每个文件的过滤情况、最终统计和示例数据

use super::logging::{banner, now, rule};
use crate::config::Config;
use crate::error::MergeError;
use crate::models::{BatchFile, Dataset, Difficulty, DifficultyCounts, LoadedBatch};
use crate::orchestrator::RunSummary;
use std::path::Path;
use tracing::{error, info, warn};

/// 百分比，总数为 0 时返回 `None`
pub fn percentage(count: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 / total as f64 * 100.0)
    }
}

/// 格式化各难度数量，例如 `simple: 2, deep: 1`
pub fn format_counts(counts: &DifficultyCounts) -> String {
    if counts.is_empty() {
        return "无".to_string();
    }
    counts
        .iter()
        .map(|(difficulty, count)| format!("{}: {}", difficulty, count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn log_startup(config: &Config) {
    info!("{}", banner());
    info!("🚀 问答数据合并 - {}", now());
    info!("📁 输入目录: {}", config.input_dir.display());
    info!("🔍 文件模式: {}", config.file_pattern);
    info!("💾 输出基础名: {}", config.output_base);
    info!("{}", banner());
}

pub fn log_files_found(files: &[BatchFile]) {
    let names: Vec<String> = files.iter().map(BatchFile::file_name).collect();
    info!("找到{}个response文件: {:?}\n", files.len(), names);
    if files.is_empty() {
        warn!("⚠️ 没有找到匹配的文件");
    }
}

pub fn log_file_start(file: &BatchFile) {
    info!("处理文件: {}", file.path.display());
}

/// 输出单个文件的过滤情况和累计数量
pub fn log_file_loaded(batch: &LoadedBatch, running_total: usize) {
    let path = batch.path.display();

    if batch.has_null_rows() {
        warn!("警告: {} 有 {} 行包含空值，将被移除", path, batch.null_dropped);
        warn!(
            "警告: 过滤后从 {} 行减少到 {} 行",
            batch.total_rows,
            batch.rows_after_null_filter()
        );
    }

    if batch.has_invalid_difficulty() {
        let before = batch.rows_after_null_filter();
        error!(
            "错误: {} 包含无效的difficulty值: {:?}",
            path, batch.invalid_values
        );
        error!("      有效值应为: {:?}", Difficulty::valid_names());
        error!("      共有 {} 行数据受影响，将被移除", batch.invalid_dropped);
        warn!(
            "警告: 过滤后从 {} 行减少到 {} 行",
            before,
            before - batch.invalid_dropped
        );
    }

    info!(
        "成功添加 {} 条记录，现有总记录 {} 条",
        batch.records.len(),
        running_total
    );
    info!(
        "此文件中各难度问题数量: {}\n",
        format_counts(&batch.difficulty_counts())
    );
}

pub fn log_file_failed(path: &Path, err: &MergeError) {
    error!("错误: 处理 {} 时发生异常: {}\n", path.display(), err);
}

/// 输出合并后各难度的数量和占比
///
/// 在排序前调用，难度按首次出现的顺序列出
pub fn log_distribution(dataset: &Dataset) {
    let total = dataset.len();
    info!("{}", rule());
    info!("合并后总共有 {} 条问答对", total);

    if dataset.is_empty() {
        warn!("⚠️ 没有任何有效记录，跳过难度统计，将写出空文件");
        return;
    }

    info!("各难度问题数量统计:");
    for (difficulty, count) in dataset.difficulty_counts_first_seen() {
        if let Some(pct) = percentage(count, total) {
            info!("- {}: {}题 ({:.1}%)", difficulty, count, pct);
        }
    }
}

pub fn log_exported(format_name: &str, path: &Path) {
    info!("✓ 成功将所有数据保存为{}: {}", format_name, path.display());
}

/// 输出排序后的前几条记录
pub fn log_sample(dataset: &Dataset, sample_size: usize) {
    if dataset.is_empty() || sample_size == 0 {
        return;
    }
    info!("\n示例数据:");
    for (idx, record) in dataset.head(sample_size).iter().enumerate() {
        info!("{:>3}  {}", idx, record);
    }
}

pub fn print_final_stats(summary: &RunSummary) {
    info!("\n{}", banner());
    info!("📊 合并完成统计");
    info!("完成时间: {}", now());
    info!("{}", banner());
    info!(
        "📄 文件: 找到 {} 个，成功 {} 个，跳过 {} 个",
        summary.files_found,
        summary.batches.len(),
        summary.skipped_files.len()
    );
    info!("✅ 记录: {} 条", summary.total_records);
    info!("{}", banner());

    if summary.error_count > 0 {
        warn!(
            "\n警告: 处理过程中共发现 {} 个错误，请检查上述日志",
            summary.error_count
        );
    }
}
