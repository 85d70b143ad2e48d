use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    GameStarted { seed: u32 },
    RoomDealt { count: usize, remaining: usize },
    RoomAvoided { returned: usize },
    MonsterFought { monster: Card, damage: i32, health: i32 },
    MonsterSlain {
        monster: Card,
        weapon: Card,
        damage: i32,
        health: i32,
    },
    WeaponEquipped { weapon: Card, discarded: usize },
    PotionDrunk { potion: Card, healed: i32, health: i32 },
    GameLost { score: i32 },
    GameWon { score: i32 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
