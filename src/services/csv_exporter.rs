//! CSV 导出服务
//!
//! 方言：所有字段加引号，字段内的引号双写为 `""`，反斜杠写作 `\\`

use super::DatasetSink;
use crate::error::{MergeError, MergeResult};
use crate::models::{Dataset, Difficulty, Record};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::path::{Path, PathBuf};

/// 转义字符
pub const ESCAPE_CHAR: u8 = b'\\';

/// CSV 导出服务
pub struct CsvExporter {
    output_path: PathBuf,
}

impl CsvExporter {
    /// 根据输出基础名创建，文件名为 `<base>.csv`
    pub fn new(output_base: &str) -> Self {
        Self::with_path(format!("{}.csv", output_base))
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }
}

impl DatasetSink for CsvExporter {
    fn format_name(&self) -> &'static str {
        "CSV"
    }

    fn path(&self) -> &Path {
        &self.output_path
    }

    fn render(&self, dataset: &Dataset) -> MergeResult<Vec<u8>> {
        let to_error = |message: String| MergeError::Serialize {
            path: self.output_path.clone(),
            message,
        };

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .double_quote(true)
            .from_writer(Vec::new());

        writer
            .write_record(Record::COLUMNS)
            .map_err(|e| to_error(e.to_string()))?;

        for record in dataset.records() {
            // 引号由 csv 双写，反斜杠需要预先转义
            writer
                .write_record([
                    record.difficulty().name(),
                    escape_backslashes(record.question()).as_str(),
                    escape_backslashes(record.answer()).as_str(),
                ])
                .map_err(|e| to_error(e.to_string()))?;
        }

        writer.into_inner().map_err(|e| to_error(e.to_string()))
    }
}

fn escape_backslashes(text: &str) -> String {
    let escape = char::from(ESCAPE_CHAR);
    text.replace(escape, &format!("{escape}{escape}"))
}

/// 按导出方言读回 CSV 内容
pub fn read_exported_csv(path: &Path, data: &[u8]) -> MergeResult<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .double_quote(true)
        .escape(Some(ESCAPE_CHAR))
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| MergeError::csv(path, e))?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let invalid = |reason: String| MergeError::InvalidRow {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let difficulty = row.get(0).unwrap_or_default();
        let level = Difficulty::parse(difficulty)
            .ok_or_else(|| invalid(format!("无效的difficulty值: {:?}", difficulty)))?;
        let record = Record::new(
            level,
            row.get(1).unwrap_or_default(),
            row.get(2).unwrap_or_default(),
        )
        .ok_or_else(|| invalid("问题或答案为空".to_string()))?;
        records.push(record);
    }

    Ok(Dataset::from(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from(vec![
            Record::new(Difficulty::Simple, "路径 C:\\temp\\", "他说 \"好\"").unwrap(),
            Record::new(Difficulty::Deep, "多行\n问题, 含逗号", "答案").unwrap(),
        ])
    }

    #[test]
    fn test_render_quotes_every_field() {
        let exporter = CsvExporter::new("qa");
        let rendered = exporter.render(&sample()).unwrap();
        let text = String::from_utf8(rendered).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("\"difficulty\",\"question\",\"answer\""));
        assert_eq!(
            lines.next(),
            Some("\"simple\",\"路径 C:\\\\temp\\\\\",\"他说 \"\"好\"\"\"")
        );
    }

    #[test]
    fn test_quotes_doubled_and_backslash_escaped() {
        let dataset = Dataset::from(vec![
            Record::new(Difficulty::Simple, "a\"b", "c\\d").unwrap(),
        ]);
        let rendered = CsvExporter::new("qa").render(&dataset).unwrap();
        let text = String::from_utf8(rendered).unwrap();

        assert_eq!(text.lines().nth(1), Some("\"simple\",\"a\"\"b\",\"c\\\\d\""));

        let back = read_exported_csv(Path::new("qa.csv"), text.as_bytes()).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn test_backslash_before_quote_reads_back() {
        let dataset = Dataset::from(vec![
            Record::new(Difficulty::Complex, "结尾反斜杠\\", "引号前\\\"x\"").unwrap(),
        ]);
        let rendered = CsvExporter::new("qa").render(&dataset).unwrap();

        let back = read_exported_csv(Path::new("qa.csv"), &rendered).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn test_render_then_read_back() {
        let dataset = sample();
        let exporter = CsvExporter::new("qa");
        let rendered = exporter.render(&dataset).unwrap();

        let back = read_exported_csv(exporter.path(), &rendered).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn test_empty_dataset_renders_header_only() {
        let rendered = CsvExporter::new("qa").render(&Dataset::new()).unwrap();
        assert_eq!(rendered, b"\"difficulty\",\"question\",\"answer\"\n");
    }

    #[test]
    fn test_file_name_from_base() {
        assert_eq!(CsvExporter::new("out/qa-1200").path(), Path::new("out/qa-1200.csv"));
    }
}
