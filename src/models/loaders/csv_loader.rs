use crate::error::{MergeError, MergeResult};
use crate::models::{count_by_difficulty, Difficulty, DifficultyCounts, Record};
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 单个批次文件的加载与校验结果
#[derive(Debug, Clone, Default)]
pub struct LoadedBatch {
    pub path: PathBuf,
    /// 表头之后的数据行数
    pub total_rows: usize,
    /// 因字段为空而移除的行数
    pub null_dropped: usize,
    /// 出现过的非法 difficulty 取值（按首次出现顺序，去重）
    pub invalid_values: Vec<String>,
    /// 因 difficulty 非法而移除的行数
    pub invalid_dropped: usize,
    /// 通过校验的记录，保持文件内顺序
    pub records: Vec<Record>,
}

impl LoadedBatch {
    /// 空值过滤后剩余的行数
    pub fn rows_after_null_filter(&self) -> usize {
        self.total_rows - self.null_dropped
    }

    pub fn has_null_rows(&self) -> bool {
        self.null_dropped > 0
    }

    pub fn has_invalid_difficulty(&self) -> bool {
        !self.invalid_values.is_empty()
    }

    pub fn difficulty_counts(&self) -> DifficultyCounts {
        count_by_difficulty(&self.records)
    }
}

/// 列名到列下标的映射
struct ColumnIndex {
    difficulty: usize,
    question: usize,
    answer: usize,
}

impl ColumnIndex {
    fn from_headers(path: &Path, headers: &StringRecord) -> MergeResult<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == column)
                .ok_or_else(|| MergeError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };

        Ok(Self {
            difficulty: find("difficulty")?,
            question: find("question")?,
            answer: find("answer")?,
        })
    }
}

/// 读取并校验单个批次文件
pub async fn load_batch(path: &Path) -> MergeResult<LoadedBatch> {
    let data = fs::read(path)
        .await
        .map_err(|e| MergeError::read_failed(path, e))?;
    parse_batch(path, &data)
}

/// 解析 CSV 内容并校验每一行
///
/// - 引号内允许包含分隔符、换行和双写的引号
/// - 字段数少于表头的行按缺失字段处理；多于表头则整个文件视为无法解析
/// - 先过滤空值行，再过滤 difficulty 非法的行
pub fn parse_batch(path: &Path, data: &[u8]) -> MergeResult<LoadedBatch> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| MergeError::csv(path, e))?
        .clone();
    let columns = ColumnIndex::from_headers(path, &headers)?;

    let mut batch = LoadedBatch {
        path: path.to_path_buf(),
        ..Default::default()
    };

    for row in reader.records() {
        let row = row.map_err(|e| MergeError::csv(path, e))?;
        if row.len() > headers.len() {
            return Err(MergeError::UnexpectedFieldCount {
                path: path.to_path_buf(),
                line: row.position().map(|p| p.line()).unwrap_or_default(),
                expected: headers.len(),
                found: row.len(),
            });
        }
        batch.total_rows += 1;

        let field = |idx: usize| row.get(idx).filter(|v| !v.is_empty());
        let (Some(difficulty), Some(question), Some(answer)) = (
            field(columns.difficulty),
            field(columns.question),
            field(columns.answer),
        ) else {
            batch.null_dropped += 1;
            continue;
        };

        let Some(level) = Difficulty::parse(difficulty) else {
            batch.invalid_dropped += 1;
            if !batch.invalid_values.iter().any(|v| v == difficulty) {
                batch.invalid_values.push(difficulty.to_string());
            }
            continue;
        };

        match Record::new(level, question, answer) {
            Some(record) => batch.records.push(record),
            None => batch.null_dropped += 1,
        }
    }

    Ok(batch)
}
