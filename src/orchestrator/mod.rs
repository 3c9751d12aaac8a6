//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量合并处理器
//! - 定位全部批次文件
//! - 逐个委托 file_processor，累积数据集
//! - 排序、导出、输出最终统计
//!
//! ### `file_processor` - 单个文件处理器
//! - 加载并校验一个批次文件
//! - 更新运行统计（累计记录数、错误数）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<BatchFile>)
//!     ↓
//! file_processor (处理单个文件)
//!     ↓
//! models::loaders (定位 / 解析 / 校验)
//!     ↓
//! services (导出：CSV / JSON)
//! ```

pub mod batch_processor;
pub mod file_processor;

pub use batch_processor::App;
pub use file_processor::process_file;

use crate::models::{Dataset, DifficultyCounts};
use std::path::PathBuf;

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub path: PathBuf,
    pub total_rows: usize,
    pub null_dropped: usize,
    pub invalid_dropped: usize,
    pub accepted: usize,
    pub difficulty_counts: DifficultyCounts,
}

/// 一次运行的统计结果
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 匹配到的文件数
    pub files_found: usize,
    /// 成功加载的文件，按处理顺序
    pub batches: Vec<BatchReport>,
    /// 无法解析而被跳过的文件
    pub skipped_files: Vec<PathBuf>,
    /// 累计接受的记录数
    pub total_records: usize,
    /// 错误数：每个跳过的文件和每个含非法 difficulty 的文件各计一次
    pub error_count: usize,
    /// 排序后的数据集
    pub dataset: Dataset,
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

impl RunSummary {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
