use super::{Difficulty, Record};
use std::collections::BTreeMap;

/// 各难度的记录数量，按难度优先级有序
pub type DifficultyCounts = BTreeMap<Difficulty, usize>;

/// 统计一组记录中各难度的数量
pub fn count_by_difficulty(records: &[Record]) -> DifficultyCounts {
    let mut counts = DifficultyCounts::new();
    for record in records {
        *counts.entry(record.difficulty()).or_insert(0) += 1;
    }
    counts
}

/// 合并后的数据集
///
/// 记录按追加顺序（文件顺序，再文件内行顺序）保存，直到调用 [`Dataset::sort_by_difficulty`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个批次的记录，不去重
    pub fn extend_batch(&mut self, records: Vec<Record>) {
        self.records.extend(records);
    }

    /// 按 simple < complex < deep 稳定排序
    pub fn sort_by_difficulty(&mut self) {
        // Vec::sort_by_key 是稳定排序，同难度记录保持原有相对顺序
        self.records.sort_by_key(|r| r.difficulty().rank());
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 前 n 条记录
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn difficulty_counts(&self) -> DifficultyCounts {
        count_by_difficulty(&self.records)
    }

    /// 各难度数量，按难度在当前记录顺序中首次出现的先后排列
    pub fn difficulty_counts_first_seen(&self) -> Vec<(Difficulty, usize)> {
        let mut counts: Vec<(Difficulty, usize)> = Vec::new();
        for record in &self.records {
            match counts.iter_mut().find(|(d, _)| *d == record.difficulty()) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.difficulty(), 1)),
            }
        }
        counts
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(difficulty: Difficulty, question: &str) -> Record {
        Record::new(difficulty, question, "答").unwrap()
    }

    #[test]
    fn test_sort_is_stable_within_difficulty() {
        let mut dataset = Dataset::new();
        dataset.extend_batch(vec![
            record(Difficulty::Deep, "d1"),
            record(Difficulty::Simple, "s1"),
            record(Difficulty::Complex, "c1"),
        ]);
        dataset.extend_batch(vec![
            record(Difficulty::Simple, "s2"),
            record(Difficulty::Deep, "d2"),
            record(Difficulty::Simple, "s3"),
        ]);

        dataset.sort_by_difficulty();

        let order: Vec<&str> = dataset.records().iter().map(|r| r.question()).collect();
        assert_eq!(order, vec!["s1", "s2", "s3", "c1", "d1", "d2"]);
    }

    #[test]
    fn test_first_seen_counts_follow_append_order() {
        let dataset = Dataset::from(vec![
            record(Difficulty::Deep, "d1"),
            record(Difficulty::Simple, "s1"),
            record(Difficulty::Deep, "d2"),
            record(Difficulty::Complex, "c1"),
        ]);

        assert_eq!(
            dataset.difficulty_counts_first_seen(),
            vec![
                (Difficulty::Deep, 2),
                (Difficulty::Simple, 1),
                (Difficulty::Complex, 1)
            ]
        );
    }

    #[test]
    fn test_counts_and_head() {
        let dataset = Dataset::from(vec![
            record(Difficulty::Simple, "a"),
            record(Difficulty::Deep, "b"),
            record(Difficulty::Simple, "c"),
        ]);

        let counts = dataset.difficulty_counts();
        assert_eq!(counts.get(&Difficulty::Simple), Some(&2));
        assert_eq!(counts.get(&Difficulty::Complex), None);
        assert_eq!(counts.get(&Difficulty::Deep), Some(&1));

        assert_eq!(
            dataset.difficulty_counts_first_seen(),
            vec![(Difficulty::Simple, 2), (Difficulty::Deep, 1)]
        );

        assert_eq!(dataset.head(2).len(), 2);
        assert_eq!(dataset.head(10).len(), 3);
        assert!(Dataset::new().head(3).is_empty());
    }
}
