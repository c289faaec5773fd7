//! AI 难度

use serde::{Deserialize, Serialize};

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：只随机落子
    Easy,
    /// 困难：能赢就赢，否则随机
    Hard,
    /// 专家：能赢就赢，其次堵截，否则随机
    #[default]
    Expert,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// 所有选项
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Hard, Difficulty::Expert]
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Expert,
            Difficulty::Expert => Difficulty::Easy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Expert,
            Difficulty::Hard => Difficulty::Easy,
            Difficulty::Expert => Difficulty::Hard,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "hard" | "h" => Ok(Difficulty::Hard),
            "expert" | "x" => Ok(Difficulty::Expert),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_expert() {
        assert_eq!(Difficulty::default(), Difficulty::Expert);
    }

    #[test]
    fn test_cycle() {
        for &d in Difficulty::all() {
            assert_eq!(d.next().prev(), d);
        }
        assert_eq!(Difficulty::Expert.next(), Difficulty::Easy);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("x".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert!("medium".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"Hard\"");
        let decoded: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Difficulty::Hard);
    }
}
