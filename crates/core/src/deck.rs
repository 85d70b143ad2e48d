use crate::{Card, RngState, DECK_SIZE, ITEM_VALUES, MONSTER_COPIES, MONSTER_VALUES};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Draw pile (front is the next card) and discard pile.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub draw: VecDeque<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    /// The 44 dungeon cards in canonical, unshuffled order.
    pub fn dungeon() -> Self {
        let mut draw = VecDeque::with_capacity(DECK_SIZE);
        for value in MONSTER_VALUES {
            for _ in 0..MONSTER_COPIES {
                draw.push_back(Card::monster(value));
            }
        }
        for value in ITEM_VALUES {
            draw.push_back(Card::weapon(value));
            draw.push_back(Card::potion(value));
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn from_draw_pile(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            draw: cards.into_iter().collect(),
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &RngState) {
        rng.shuffle(self.draw.make_contiguous());
    }

    pub fn draw_front(&mut self) -> Option<Card> {
        self.draw.pop_front()
    }

    /// Puts cards back under the draw pile, keeping their order.
    pub fn bury(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.draw.extend(cards);
    }

    pub fn discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    pub fn draw_monster_total(&self) -> i32 {
        self.draw
            .iter()
            .filter(|card| card.is_monster())
            .map(|card| card.value)
            .sum()
    }
}
