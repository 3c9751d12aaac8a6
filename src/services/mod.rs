//! 导出能力层
//!
//! 每种输出格式一个导出服务，只负责把完整数据集写成一个文件

pub mod csv_exporter;
pub mod json_exporter;

pub use csv_exporter::{read_exported_csv, CsvExporter};
pub use json_exporter::JsonExporter;

use crate::error::{MergeError, MergeResult};
use crate::models::Dataset;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// 数据集输出目标
pub trait DatasetSink {
    /// 格式名称（用于日志）
    fn format_name(&self) -> &'static str;

    /// 输出文件路径
    fn path(&self) -> &Path;

    /// 将数据集序列化为文件内容
    fn render(&self, dataset: &Dataset) -> MergeResult<Vec<u8>>;
}

/// 将数据集写入输出目标，必要时创建上级目录
pub async fn export(sink: &impl DatasetSink, dataset: &Dataset) -> MergeResult<()> {
    let path = sink.path();
    let content = sink.render(dataset)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| MergeError::write_failed(parent, e))?;
    }

    debug!(
        "写入{}: {} | {} 条记录 | {} 字节",
        sink.format_name(),
        path.display(),
        dataset.len(),
        content.len()
    );

    fs::write(path, content)
        .await
        .map_err(|e| MergeError::write_failed(path, e))
}
