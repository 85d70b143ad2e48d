use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardKind {
    Monster,
    Weapon,
    Potion,
}

impl CardKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Monster => "monster",
            Self::Weapon => "weapon",
            Self::Potion => "potion",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub kind: CardKind,
    pub value: i32,
}

impl Card {
    pub fn new(kind: CardKind, value: i32) -> Self {
        Self { kind, value }
    }

    pub fn monster(value: i32) -> Self {
        Self::new(CardKind::Monster, value)
    }

    pub fn weapon(value: i32) -> Self {
        Self::new(CardKind::Weapon, value)
    }

    pub fn potion(value: i32) -> Self {
        Self::new(CardKind::Potion, value)
    }

    pub fn is_monster(&self) -> bool {
        self.kind == CardKind::Monster
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.value)
    }
}
