use crate::Card;
use serde::{Deserialize, Serialize};

/// A weapon in hand together with the monsters it has slain, latest last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedWeapon {
    pub card: Card,
    pub slain: Vec<Card>,
}

impl EquippedWeapon {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            slain: Vec::new(),
        }
    }

    pub fn value(&self) -> i32 {
        self.card.value
    }

    /// Value of the last slain monster; `None` while the weapon is fresh.
    pub fn limit(&self) -> Option<i32> {
        self.slain.last().map(|card| card.value)
    }

    pub fn can_slay(&self, monster: &Card) -> bool {
        self.limit().map_or(true, |limit| monster.value < limit)
    }

    pub fn damage_from(&self, monster: &Card) -> i32 {
        (monster.value - self.value()).max(0)
    }

    /// Weapon card first, then the slain monsters in kill order.
    pub fn into_cards(self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.slain.len() + 1);
        cards.push(self.card);
        cards.extend(self.slain);
        cards
    }
}
