use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot returned by `GET /game_state`.
///
/// The client never edits this, it only mirrors it on screen. `moles` is kept exactly as sent because the server uses
/// `-1` as a "no mole" placeholder; use [`GameState::active_holes`] to get the indices that can be displayed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub score: u32,
    pub hits: u32,
    pub misses: u32,
    pub max_misses: u32,
    pub moles: Vec<i64>,
    pub badges: Badges,
    #[serde(default, deserialize_with = "flag_or_number")]
    pub paused: bool,
    /// Server side spawn interval in milliseconds, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u32>,
    #[serde(default)]
    pub combo: u32,
}

impl GameState {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn active_holes(&self) -> impl Iterator<Item = HoleIndex> + '_ {
        self.moles
            .iter()
            .copied()
            .filter(|&index| is_valid_hole(index))
            .map(|index| index as HoleIndex)
    }

    pub fn is_mole_at(&self, hole: HoleIndex) -> bool {
        self.active_holes().any(|index| index == hole)
    }

    pub fn miss_limit_reached(&self) -> bool {
        self.misses >= self.max_misses
    }
}

fn flag_or_number<'de, D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Number(i64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Flag(flag) => flag,
        Raw::Number(num) => num != 0,
    })
}
