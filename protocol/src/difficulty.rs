use core::fmt;
use core::str::FromStr;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::ProtocolError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Token used in the `level=` body of `/set_difficulty`
    pub const fn level(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }

    /// How often the client polls for new moles at this level.
    pub const fn spawn_interval(self) -> Duration {
        use Difficulty::*;
        match self {
            Easy => Duration::from_millis(1500),
            Medium => Duration::from_millis(1000),
            Hard => Duration::from_millis(500),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.level())
    }
}

impl FromStr for Difficulty {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.level().eq_ignore_ascii_case(level))
            .ok_or_else(|| ProtocolError::UnknownDifficulty(level.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_intervals_match_levels() {
        assert_eq!(Difficulty::Easy.spawn_interval(), Duration::from_millis(1500));
        assert_eq!(Difficulty::Medium.spawn_interval(), Duration::from_millis(1000));
        assert_eq!(Difficulty::Hard.spawn_interval(), Duration::from_millis(500));
    }

    #[test]
    fn parses_levels_loosely() {
        assert_eq!(" Hard\n".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!(matches!(
            "insane".parse::<Difficulty>(),
            Err(ProtocolError::UnknownDifficulty(level)) if level == "insane"
        ));
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
