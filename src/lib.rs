//! # QA Merge
//!
//! 将多个 `prompt_batch<N>_response.csv` 问答批次文件合并为一个数据集，
//! 校验难度字段，按难度排序后导出为 CSV 和 JSON。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `Difficulty`、`Record`、`Dataset`
//! - `models/loaders` - 文件定位、CSV 解析与校验
//!
//! ### ② 能力层（Services）
//! - `services/` - 导出能力，每种格式一个 `DatasetSink`
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 一次完整的合并运行
//! - `orchestrator/file_processor` - 单个批次文件的处理
//!
//! ### ④ 工具（Utils）
//! - `utils/logging` - 日志初始化和格式化
//! - `utils/report` - 运行报告输出
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{Cli, Config};
pub use error::{MergeError, MergeResult};
pub use models::{Dataset, Difficulty, Record};
pub use orchestrator::{App, RunSummary};
