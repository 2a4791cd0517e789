use core::fmt;

use crate::protocol::Badges;

/// Why a round ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The server answered a hit with `gameOver`
    Defeated,
    /// A refreshed state showed the miss limit reached
    MissLimit,
    /// The local countdown ran out
    TimeUp,
}

/// Final notice shown to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub reason: EndReason,
    pub score: u32,
    pub badges: Badges,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            EndReason::TimeUp => write!(f, "Time's up! Final Score: {}", self.score)?,
            EndReason::Defeated | EndReason::MissLimit => {
                write!(f, "Game Over! Final Score: {}", self.score)?
            }
        }
        let mut names = self.badges.names();
        if let Some(first) = names.next() {
            write!(f, "\n\nBadges Earned: {}", first)?;
            for name in names {
                write!(f, ", {}", name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn plain_game_over() {
        let summary = Summary {
            reason: EndReason::MissLimit,
            score: 40,
            badges: Badges::empty(),
        };
        assert_eq!(summary.to_string(), "Game Over! Final Score: 40");
    }

    #[test]
    fn time_up_lists_badges() {
        let summary = Summary {
            reason: EndReason::TimeUp,
            score: 75,
            badges: Badges::STARTER | Badges::COMBO_MASTER,
        };
        assert_eq!(
            summary.to_string(),
            "Time's up! Final Score: 75\n\nBadges Earned: 🚀 Combo Master, ⭐ Starter"
        );
    }
}
