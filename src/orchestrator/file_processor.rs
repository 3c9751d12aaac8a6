//! 单个批次文件处理器 - 编排层
//!
//! 加载并校验一个文件，把通过校验的记录追加到数据集，并更新运行统计。
//! 单个文件失败只记一次错误，不影响后续文件。

use super::{BatchReport, RunSummary};
use crate::models::{load_batch, BatchFile, Dataset};
use crate::utils::report;

/// 处理单个批次文件
///
/// # 参数
/// - `file`: 批次文件
/// - `dataset`: 正在构建的数据集
/// - `summary`: 本次运行的统计
pub async fn process_file(file: &BatchFile, dataset: &mut Dataset, summary: &mut RunSummary) {
    report::log_file_start(file);

    let batch = match load_batch(&file.path).await {
        Ok(batch) => batch,
        Err(e) => {
            report::log_file_failed(&file.path, &e);
            summary.error_count += 1;
            summary.skipped_files.push(file.path.clone());
            return;
        }
    };

    // 每个含非法 difficulty 的文件只计一次错误
    if batch.has_invalid_difficulty() {
        summary.error_count += 1;
    }

    let added = batch.records.len();
    summary.total_records += added;
    report::log_file_loaded(&batch, summary.total_records);

    summary.batches.push(BatchReport {
        path: file.path.clone(),
        total_rows: batch.total_rows,
        null_dropped: batch.null_dropped,
        invalid_dropped: batch.invalid_dropped,
        accepted: added,
        difficulty_counts: batch.difficulty_counts(),
    });
    dataset.extend_batch(batch.records);
}
