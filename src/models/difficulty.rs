/// 难度枚举
///
/// 变体声明顺序即排序优先级：simple < complex < deep
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单题
    Simple,
    /// 复杂题
    Complex,
    /// 深度题
    Deep,
}

impl Difficulty {
    /// 全部合法取值，按排序优先级排列
    pub const ALL: [Difficulty; 3] = [Difficulty::Simple, Difficulty::Complex, Difficulty::Deep];

    /// 获取标准名称（即 CSV/JSON 中的取值）
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Simple => "simple",
            Difficulty::Complex => "complex",
            Difficulty::Deep => "deep",
        }
    }

    /// 获取排序键
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// 从字符串解析难度（精确匹配，区分大小写，不去除空白）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(Difficulty::Simple),
            "complex" => Some(Difficulty::Complex),
            "deep" => Some(Difficulty::Deep),
            _ => None,
        }
    }

    /// 合法取值名称列表，用于日志提示
    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.name()).collect()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
