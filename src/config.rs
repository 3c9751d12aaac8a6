use clap::Parser;
use std::path::PathBuf;

/// 命令行参数
#[derive(Parser, Debug, Default)]
#[command(name = "qa-merge")]
#[command(version)]
#[command(about = "合并 prompt_batch*_response.csv 问答文件，按难度排序后导出 CSV 和 JSON")]
pub struct Cli {
    /// 输入目录
    pub input_dir: Option<PathBuf>,

    /// 输出文件基础名（生成 <base>.csv 和 <base>.json）
    pub output_base: Option<String>,
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 批次文件所在目录
    pub input_dir: PathBuf,
    /// 输出文件基础名
    pub output_base: String,
    /// 批次文件名模式，`*` 为批次编号所在位置
    pub file_pattern: String,
    /// 结束时展示的示例记录条数
    pub sample_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_base: "qa-1200".to_string(),
            file_pattern: "prompt_batch*_response.csv".to_string(),
            sample_size: 3,
        }
    }
}

impl Config {
    /// 命令行参数覆盖默认值
    pub fn from_cli(cli: Cli) -> Self {
        let default = Self::default();
        Self {
            input_dir: cli.input_dir.unwrap_or(default.input_dir),
            output_base: cli.output_base.unwrap_or(default.output_base),
            ..default
        }
    }
}
