//! Remote room payloads exchanged with the matchmaking service.
//!
//! Field names are camelCase on the wire. The board travels as the base64url
//! text produced by `utils::board_codec`.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameCondition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The two seats of a room. The eagle plays White.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePlayers {
    #[serde(default)]
    pub eagle: Option<RemoteUser>,
    #[serde(default)]
    pub tail: Option<RemoteUser>,
}

impl RemotePlayers {
    /// Seated players, eagle first.
    pub fn list(&self) -> impl Iterator<Item = &RemoteUser> {
        self.eagle.iter().chain(self.tail.iter())
    }

    /// Colour played by `uid`: White for the eagle, Black otherwise.
    pub fn color_of(&self, uid: &str) -> Color {
        match &self.eagle {
            Some(eagle) if eagle.uid == uid => Color::White,
            _ => Color::Black,
        }
    }
}

/// Condition reported by the room service. It has no promotion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteCondition {
    #[default]
    Idle,
    Check,
    Stalemate,
    Mate,
}

impl From<&GameCondition> for RemoteCondition {
    fn from(condition: &GameCondition) -> Self {
        match condition {
            GameCondition::NothingSpecial | GameCondition::PawnMutation { .. } => {
                RemoteCondition::Idle
            }
            GameCondition::Check => RemoteCondition::Check,
            GameCondition::Mate => RemoteCondition::Mate,
            GameCondition::Stalemate => RemoteCondition::Stalemate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteGameState {
    /// Identity of the player to move.
    pub turn: String,
    pub moves_count: u32,
    pub board: String,
    pub state: RemoteCondition,
    #[serde(default)]
    pub winner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRoom {
    pub uid: String,
    pub players: RemotePlayers,
    pub game_state: RemoteGameState,
}

/// Body of a move submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub room_uid: String,
    pub board: String,
}
