//! JSON 导出服务
//!
//! 输出为对象数组，两个空格缩进，非 ASCII 字符原样保留

use super::DatasetSink;
use crate::error::{MergeError, MergeResult};
use crate::models::Dataset;
use std::path::{Path, PathBuf};

/// JSON 导出服务
pub struct JsonExporter {
    output_path: PathBuf,
}

impl JsonExporter {
    /// 根据输出基础名创建，文件名为 `<base>.json`
    pub fn new(output_base: &str) -> Self {
        Self::with_path(format!("{}.json", output_base))
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }
}

impl DatasetSink for JsonExporter {
    fn format_name(&self) -> &'static str {
        "JSON"
    }

    fn path(&self) -> &Path {
        &self.output_path
    }

    fn render(&self, dataset: &Dataset) -> MergeResult<Vec<u8>> {
        serde_json::to_vec_pretty(dataset.records()).map_err(|e| MergeError::Serialize {
            path: self.output_path.clone(),
            message: e.to_string(),
        })
    }
}
