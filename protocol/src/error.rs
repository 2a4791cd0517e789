use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Unknown hit outcome {0:?}")]
    UnknownHitOutcome(String),
    #[error("Unknown difficulty level {0:?}")]
    UnknownDifficulty(String),
    #[error("Malformed game state: {0}")]
    MalformedState(#[from] serde_json::Error),
}

/// Failure of a single request to the game server, none of these are fatal to the client.
#[derive(Error, Debug)]
pub enum CallError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server replied with status {0}")]
    Status(u16),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;
