use crate::GameState;
use serde::{Deserialize, Serialize};

/// Won and lost projections. While a game runs both are reported; a
/// finished game keeps only the one matching its outcome.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub won: Option<i32>,
    pub lost: Option<i32>,
}

impl Score {
    /// `remaining_monsters` is the summed value of monsters still in the
    /// draw pile and the room.
    pub fn compute(state: GameState, health: i32, remaining_monsters: i32) -> Self {
        let won = health;
        let lost = health - remaining_monsters;
        match state {
            GameState::Started => Self {
                won: Some(won),
                lost: Some(lost),
            },
            GameState::Lost => Self {
                won: None,
                lost: Some(lost),
            },
            GameState::Won => Self {
                won: Some(won),
                lost: None,
            },
        }
    }

    /// `lost/won` while playing, the single final score afterwards.
    pub fn label(&self) -> String {
        match (self.lost, self.won) {
            (Some(lost), Some(won)) => format!("{lost}/{won}"),
            (Some(value), None) | (None, Some(value)) => value.to_string(),
            (None, None) => "-".to_string(),
        }
    }
}
