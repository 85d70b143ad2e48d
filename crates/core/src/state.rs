use crate::{Card, EquippedWeapon, Score, ROOM_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameState {
    Started,
    Lost,
    Won,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Started)
    }
}

/// Everything a view needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u32,
    pub state: GameState,
    pub health: i32,
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
    pub room: [Option<Card>; ROOM_SIZE],
    pub weapon: Option<EquippedWeapon>,
    pub last_room_avoided: bool,
    pub score: Score,
}

impl Snapshot {
    /// Cards accounted for across every pile; 44 for a full dungeon.
    pub fn card_count(&self) -> usize {
        let room = self.room.iter().flatten().count();
        let weapon = self
            .weapon
            .as_ref()
            .map(|weapon| 1 + weapon.slain.len())
            .unwrap_or(0);
        self.draw.len() + room + self.discard.len() + weapon
    }
}
