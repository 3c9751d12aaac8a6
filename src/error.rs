use std::path::PathBuf;
use thiserror::Error;

/// 合并流程错误类型
#[derive(Debug, Error)]
pub enum MergeError {
    /// 输入目录不存在或不是目录
    #[error("目录不存在: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// 文件名匹配模式无效
    #[error("无效的文件匹配模式 '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// 读取文件或目录失败
    #[error("读取失败 ({}): {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV 结构无法解析
    #[error("CSV解析失败 ({}): {source}", path.display())]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// 表头缺少必需列
    #[error("表头缺少必需列 '{column}' ({})", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// 数据行字段数超过表头列数
    #[error("第 {line} 行有 {found} 个字段，表头只有 {expected} 列 ({})", path.display())]
    UnexpectedFieldCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// 导出文件中的行不是合法记录
    #[error("第 {line} 行不是合法记录 ({}): {reason}", path.display())]
    InvalidRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// 写入输出文件失败
    #[error("写入文件失败 ({}): {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 序列化输出失败
    #[error("序列化失败 ({}): {message}", path.display())]
    Serialize { path: PathBuf, message: String },
}

// ========== 便捷构造函数 ==========

impl MergeError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建 CSV 解析错误
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        MergeError::CsvParse {
            path: path.into(),
            source,
        }
    }

    /// 是否为整个运行必须中止的错误
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MergeError::DirectoryNotFound { .. }
                | MergeError::InvalidPattern { .. }
                | MergeError::WriteFailed { .. }
                | MergeError::Serialize { .. }
        )
    }
}

// ========== Result 类型别名 ==========

/// 合并流程结果类型
pub type MergeResult<T> = Result<T, MergeError>;
