use crate::{Card, Deck, ROOM_SIZE};
use serde::{Deserialize, Serialize};

/// The face-up slots. Emptied slots stay in place as `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    slots: [Option<Card>; ROOM_SIZE],
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<Card>; ROOM_SIZE] {
        &self.slots
    }

    pub fn get(&self, slot: usize) -> Option<Card> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn take(&mut self, slot: usize) -> Option<Card> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled() == ROOM_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Empties every slot, yielding the cards in slot order.
    pub fn clear(&mut self) -> Vec<Card> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }

    /// Fills empty slots left to right from the front of the draw pile.
    /// Returns how many cards were dealt.
    pub fn fill_from(&mut self, deck: &mut Deck) -> usize {
        let mut dealt = 0;
        for slot in &mut self.slots {
            if deck.draw.is_empty() {
                break;
            }
            if slot.is_none() {
                *slot = deck.draw_front();
                dealt += 1;
            }
        }
        dealt
    }

    pub fn monster_total(&self) -> i32 {
        self.cards()
            .filter(|card| card.is_monster())
            .map(|card| card.value)
            .sum()
    }
}
