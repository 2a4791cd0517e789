//! Wire contract between the browser client and the game server.
//!
//! The server owns every rule of the game (spawning, scoring, the miss limit and badge evaluation). This crate only
//! describes how to talk to it: which endpoints exist, what bodies they take and how to read their replies.

pub use badge::*;
pub use call::*;
pub use difficulty::*;
pub use error::*;
pub use state::*;
pub use types::*;

mod badge;
mod call;
mod difficulty;
mod error;
mod state;
mod types;
