use core::fmt;
use core::str::FromStr;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Result of `POST /hit`, sent back as plain text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    Hit,
    Miss,
    GameOver,
}

impl FromStr for HitOutcome {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "hit" => Ok(HitOutcome::Hit),
            "miss" => Ok(HitOutcome::Miss),
            "gameOver" => Ok(HitOutcome::GameOver),
            other => Err(ProtocolError::UnknownHitOutcome(other.to_string())),
        }
    }
}

/// Every request the client makes to the game server.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    Reset,
    SetDifficulty(Difficulty),
    Hit(HoleIndex),
    Pause { time_left_ms: u64 },
    Resume,
    FetchState,
}

impl ApiCall {
    pub const fn method(&self) -> Method {
        match self {
            ApiCall::FetchState => Method::Get,
            _ => Method::Post,
        }
    }

    pub const fn path(&self) -> &'static str {
        use ApiCall::*;
        match self {
            Reset => "/reset",
            SetDifficulty(_) => "/set_difficulty",
            Hit(_) => "/hit",
            Pause { .. } => "/pause",
            Resume => "/resume",
            FetchState => "/game_state",
        }
    }

    /// Plain `key=value` body, if the endpoint takes one.
    pub fn body(&self) -> Option<String> {
        use ApiCall::*;
        match self {
            SetDifficulty(difficulty) => Some(format!("level={}", difficulty.level())),
            Hit(hole) => Some(format!("hole={}", hole)),
            Pause { time_left_ms } => Some(format!("timeLeft={}", time_left_ms)),
            Reset | Resume | FetchState => None,
        }
    }

    /// Interpret a successful response body according to what was asked.
    pub fn decode_reply(&self, body: &str) -> Result<Reply> {
        match self {
            ApiCall::Hit(_) => Ok(Reply::Hit(body.parse()?)),
            ApiCall::FetchState => Ok(Reply::State(GameState::from_json(body)?)),
            _ => Ok(Reply::Ack),
        }
    }
}

impl fmt::Display for ApiCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self.method() {
            Method::Get => "GET",
            Method::Post => "POST",
        };
        write!(f, "{} {}", method, self.path())?;
        if let Some(body) = self.body() {
            write!(f, " ({})", body)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Ack,
    Hit(HitOutcome),
    State(GameState),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_bodies() {
        let table = [
            (ApiCall::Reset, Method::Post, "/reset", None),
            (
                ApiCall::SetDifficulty(Difficulty::Hard),
                Method::Post,
                "/set_difficulty",
                Some("level=hard"),
            ),
            (ApiCall::Hit(7), Method::Post, "/hit", Some("hole=7")),
            (
                ApiCall::Pause { time_left_ms: 12000 },
                Method::Post,
                "/pause",
                Some("timeLeft=12000"),
            ),
            (ApiCall::Resume, Method::Post, "/resume", None),
            (ApiCall::FetchState, Method::Get, "/game_state", None),
        ];

        for (call, method, path, body) in table {
            assert_eq!(call.method(), method, "{call}");
            assert_eq!(call.path(), path, "{call}");
            assert_eq!(call.body().as_deref(), body, "{call}");
        }
    }

    #[test]
    fn hit_replies() {
        let call = ApiCall::Hit(0);
        assert_eq!(call.decode_reply("hit").unwrap(), Reply::Hit(HitOutcome::Hit));
        assert_eq!(call.decode_reply("miss\n").unwrap(), Reply::Hit(HitOutcome::Miss));
        assert_eq!(
            call.decode_reply("gameOver").unwrap(),
            Reply::Hit(HitOutcome::GameOver)
        );
        assert!(matches!(
            call.decode_reply("GAME OVER"),
            Err(ProtocolError::UnknownHitOutcome(_))
        ));
    }

    #[test]
    fn acknowledgements_ignore_body() {
        assert_eq!(ApiCall::Reset.decode_reply("reset").unwrap(), Reply::Ack);
        assert_eq!(ApiCall::Resume.decode_reply("").unwrap(), Reply::Ack);
    }

    #[test]
    fn display_for_logs() {
        assert_eq!(ApiCall::Hit(3).to_string(), "POST /hit (hole=3)");
        assert_eq!(ApiCall::FetchState.to_string(), "GET /game_state");
    }
}
