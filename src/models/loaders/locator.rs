use crate::error::{MergeError, MergeResult};
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 待合并的批次文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFile {
    /// 从文件名中提取的批次编号
    pub index: u64,
    pub path: PathBuf,
}

impl BatchFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// 将带 `*` 通配符的文件名模式编译为锚定的正则表达式
pub fn compile_pattern(pattern: &str) -> MergeResult<Regex> {
    let parts: Vec<String> = pattern.split('*').map(regex::escape).collect();
    let source = format!("^{}$", parts.join(".*"));
    Regex::new(&source).map_err(|source| MergeError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// 批次编号：文件名中所有数字字符拼接成的整数
///
/// 没有数字时为 0，超出 u64 范围时取 u64::MAX
pub fn batch_index(file_name: &str) -> u64 {
    file_name
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

/// 扫描目录中匹配模式的批次文件，按批次编号升序返回
///
/// 编号相同的文件按文件名排序
pub async fn locate_batch_files(dir: &Path, pattern: &str) -> MergeResult<Vec<BatchFile>> {
    let is_dir = fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Err(MergeError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let matcher = compile_pattern(pattern)?;
    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| MergeError::read_failed(dir, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| MergeError::read_failed(dir, e))?
    {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !matcher.is_match(name) {
            continue;
        }
        if !fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false) {
            continue;
        }

        tracing::debug!("匹配到批次文件: {}", name);
        files.push(BatchFile {
            index: batch_index(name),
            path,
        });
    }

    files.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.path.cmp(&b.path)));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_index_uses_all_digits() {
        assert_eq!(batch_index("prompt_batch12_response.csv"), 12);
        assert_eq!(batch_index("prompt_batch_response.csv"), 0);
        assert_eq!(batch_index("v2_batch3.csv"), 23);
        assert_eq!(batch_index(&"9".repeat(40)), u64::MAX);
    }

    #[test]
    fn test_compile_pattern_escapes_literals() {
        let re = compile_pattern("prompt_batch*_response.csv").unwrap();
        assert!(re.is_match("prompt_batch7_response.csv"));
        assert!(!re.is_match("prompt_batch7_response_csv"));
        assert!(!re.is_match("xprompt_batch7_response.csv"));
        assert!(!re.is_match("prompt_batch7_response.csv.bak"));
    }

    #[tokio::test]
    async fn test_locate_orders_numerically() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "prompt_batch10_response.csv",
            "prompt_batch2_response.csv",
            "prompt_batch1_response.csv",
            "notes.csv",
        ] {
            std::fs::write(dir.path().join(name), "difficulty,question,answer\n").unwrap();
        }
        std::fs::create_dir(dir.path().join("prompt_batch3_response.csv")).unwrap();

        let files = locate_batch_files(dir.path(), "prompt_batch*_response.csv")
            .await
            .unwrap();
        let indexes: Vec<u64> = files.iter().map(|f| f.index).collect();
        assert_eq!(indexes, vec![1, 2, 10]);
        assert_eq!(files[2].file_name(), "prompt_batch10_response.csv");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_locate_follows_symlinked_batch_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("source.csv");
        std::fs::write(&target, "difficulty,question,answer\nsimple,q,a\n").unwrap();
        let link = dir.path().join("prompt_batch1_response.csv");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let files = locate_batch_files(dir.path(), "prompt_batch*_response.csv")
            .await
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, link);
    }

    #[tokio::test]
    async fn test_locate_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = locate_batch_files(&missing, "*.csv").await.unwrap_err();
        assert!(matches!(err, MergeError::DirectoryNotFound { .. }));
    }
}
