use super::Difficulty;
use serde::{Deserialize, Serialize};

/// 经过校验的问答记录
///
/// 字段顺序即导出时的列顺序；创建后不可修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    difficulty: Difficulty,
    question: String,
    answer: String,
}

impl Record {
    /// 列名，按导出顺序
    pub const COLUMNS: [&'static str; 3] = ["difficulty", "question", "answer"];

    /// 创建记录，问题或答案为空时返回 `None`
    pub fn new(
        difficulty: Difficulty,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Option<Self> {
        let question = question.into();
        let answer = answer.into();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self {
            difficulty,
            question,
            answer,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} => {}",
            self.difficulty,
            crate::utils::logging::truncate_text(&self.question, 40),
            crate::utils::logging::truncate_text(&self.answer, 40)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_fields() {
        assert!(Record::new(Difficulty::Simple, "", "答案").is_none());
        assert!(Record::new(Difficulty::Simple, "问题", "").is_none());
        assert!(Record::new(Difficulty::Simple, "问题", "答案").is_some());
    }

    #[test]
    fn test_display_truncates_long_text() {
        let long = "很".repeat(100);
        let record = Record::new(Difficulty::Deep, long, "短答案").unwrap();
        let shown = record.to_string();
        assert!(shown.starts_with("[deep] "));
        assert!(shown.contains("..."));
        assert!(shown.ends_with("短答案"));
    }
}
