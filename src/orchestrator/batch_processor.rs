//! 批量合并处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，按顺序完成一次合并运行：
//!
//! 1. **定位文件**：扫描输入目录，按批次编号排序
//! 2. **逐个加载**：委托 file_processor 加载、校验、追加
//! 3. **排序**：按 simple < complex < deep 稳定排序
//! 4. **导出**：写出 CSV 和 JSON
//! 5. **统计**：输出分布、示例数据和错误汇总
//!
//! 单个文件失败不会中止运行；输入目录不存在或输出写入失败会中止运行。

use super::{file_processor, RunSummary};
use crate::config::Config;
use crate::error::MergeResult;
use crate::models::{locate_batch_files, BatchFile, Dataset};
use crate::services::{self, CsvExporter, DatasetSink, JsonExporter};
use crate::utils::report;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行一次完整的合并流程
    pub async fn run(&self) -> MergeResult<RunSummary> {
        report::log_startup(&self.config);

        let files = self.locate_files().await?;
        report::log_files_found(&files);

        let mut summary = RunSummary {
            files_found: files.len(),
            ..Default::default()
        };
        let mut dataset = Dataset::new();

        for file in &files {
            file_processor::process_file(file, &mut dataset, &mut summary).await;
        }

        report::log_distribution(&dataset);
        dataset.sort_by_difficulty();

        let csv = CsvExporter::new(&self.config.output_base);
        let json = JsonExporter::new(&self.config.output_base);
        self.write_output(&csv, &dataset).await?;
        self.write_output(&json, &dataset).await?;
        summary.csv_path = Some(csv.path().to_path_buf());
        summary.json_path = Some(json.path().to_path_buf());

        report::log_sample(&dataset, self.config.sample_size);
        summary.dataset = dataset;
        report::print_final_stats(&summary);

        Ok(summary)
    }

    /// 定位批次文件
    async fn locate_files(&self) -> MergeResult<Vec<BatchFile>> {
        info!("\n📁 正在扫描待合并的文件...");
        locate_batch_files(&self.config.input_dir, &self.config.file_pattern).await
    }

    async fn write_output(&self, sink: &impl DatasetSink, dataset: &Dataset) -> MergeResult<()> {
        services::export(sink, dataset).await?;
        report::log_exported(sink.format_name(), sink.path());
        Ok(())
    }
}
