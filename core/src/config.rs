use core::time::Duration;

use crate::protocol::Difficulty;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Length of a round as shown by the countdown
    pub game_seconds: u32,
    /// Difficulty selected when the page loads
    pub difficulty: Difficulty,
    pub countdown_period: Duration,
    /// Delay between a mole appearing and its pop sound, roughly the peak of the spawn animation
    pub pop_delay: Duration,
    /// Delay before the end of round notice, lets the last render land first
    pub summary_delay: Duration,
}

impl Config {
    pub const DEFAULT_GAME_SECONDS: u32 = 30;

    pub fn with_game_seconds(self, game_seconds: u32) -> Self {
        Self {
            game_seconds: game_seconds.max(1),
            ..self
        }
    }

    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self { difficulty, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_seconds: Self::DEFAULT_GAME_SECONDS,
            difficulty: Difficulty::default(),
            countdown_period: Duration::from_secs(1),
            pop_delay: Duration::from_millis(280),
            summary_delay: Duration::from_millis(100),
        }
    }
}
