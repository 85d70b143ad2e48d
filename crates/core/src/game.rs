//! The turn and combat state machine.
//!
//! Every operation runs to completion and hands back a fresh [`Snapshot`].
//! Rejected actions return a [`GameError`] and leave the game untouched.

use crate::{
    Card, CardKind, Deck, EquippedWeapon, Event, EventBus, GameState, RngState, Room, Score,
    Snapshot, MAX_HEALTH, ROOM_SIZE,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("finish room first")]
    RoomIncomplete,
    #[error("previous room was avoided")]
    RoomAlreadyAvoided,
    #[error("no weapon equipped")]
    NoWeaponEquipped,
    #[error("last slain monster was too weak ({monster} against a limit of {limit})")]
    MonsterTooStrong { monster: i32, limit: i32 },
    #[error("invalid room slot {0}")]
    InvalidSlot(usize),
}

#[derive(Debug, Clone)]
pub struct Game {
    rng: RngState,
    fixed_draw: Option<Vec<Card>>,
    deck: Deck,
    room: Room,
    weapon: Option<EquippedWeapon>,
    health: i32,
    state: GameState,
    last_room_avoided: bool,
}

impl Game {
    /// Shuffles a fresh dungeon with `seed` and deals the first room.
    pub fn new(seed: u32, events: &mut EventBus) -> Self {
        let mut game = Self::blank(RngState::from_seed(seed), None);
        game.start_game(events);
        game
    }

    /// Starts over an explicit draw pile, front card first, without
    /// shuffling. Restarting replays the same pile.
    pub fn from_draw_pile(cards: Vec<Card>, events: &mut EventBus) -> Self {
        let mut game = Self::blank(RngState::from_seed(0), Some(cards));
        game.start_game(events);
        game
    }

    fn blank(rng: RngState, fixed_draw: Option<Vec<Card>>) -> Self {
        Self {
            rng,
            fixed_draw,
            deck: Deck::default(),
            room: Room::new(),
            weapon: None,
            health: MAX_HEALTH,
            state: GameState::Started,
            last_room_avoided: false,
        }
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn weapon(&self) -> Option<&EquippedWeapon> {
        self.weapon.as_ref()
    }

    pub fn last_room_avoided(&self) -> bool {
        self.last_room_avoided
    }

    pub fn start_game(&mut self, events: &mut EventBus) -> Snapshot {
        self.deck = match &self.fixed_draw {
            Some(cards) => Deck::from_draw_pile(cards.iter().copied()),
            None => {
                let mut deck = Deck::dungeon();
                deck.shuffle(&self.rng);
                deck
            }
        };
        self.room = Room::new();
        self.weapon = None;
        self.health = MAX_HEALTH;
        self.last_room_avoided = false;
        self.state = GameState::Started;

        log::info!("game started with seed {}", self.seed());
        events.push(Event::GameStarted { seed: self.seed() });
        self.deal_room(events);
        self.snapshot()
    }

    pub fn start_turn(&mut self, events: &mut EventBus) -> Snapshot {
        self.deal_room(events);
        self.snapshot()
    }

    pub fn avoid_room(&mut self, events: &mut EventBus) -> Result<Snapshot, GameError> {
        if self.state.is_over() {
            return Ok(self.snapshot());
        }
        if !self.room.is_full() {
            return Err(GameError::RoomIncomplete);
        }
        if self.last_room_avoided {
            return Err(GameError::RoomAlreadyAvoided);
        }

        let cards = self.room.clear();
        let returned = cards.len();
        self.deck.bury(cards);
        self.last_room_avoided = true;
        log::debug!("room avoided, {returned} cards returned to the draw pile");
        events.push(Event::RoomAvoided { returned });
        self.deal_room(events);
        Ok(self.snapshot())
    }

    pub fn play_card(
        &mut self,
        slot: usize,
        barehanded: bool,
        events: &mut EventBus,
    ) -> Result<Snapshot, GameError> {
        if slot >= ROOM_SIZE {
            return Err(GameError::InvalidSlot(slot));
        }
        if self.state.is_over() {
            return Ok(self.snapshot());
        }
        let Some(card) = self.room.get(slot) else {
            return Ok(self.snapshot());
        };
        log::debug!("playing {card} from slot {slot} (barehanded: {barehanded})");

        let left_room = match card.kind {
            CardKind::Monster if barehanded => {
                self.fight_barehanded(card, events);
                false
            }
            CardKind::Monster => {
                self.slay_with_weapon(slot, card, events)?;
                true
            }
            CardKind::Weapon => {
                self.equip(slot, card, events);
                true
            }
            CardKind::Potion => {
                self.drink(card, events);
                false
            }
        };

        if self.health <= 0 {
            self.state = GameState::Lost;
            let score = self.lost_score();
            log::info!("game lost with score {score}");
            events.push(Event::GameLost { score });
            return Ok(self.snapshot());
        }
        if !left_room {
            if let Some(card) = self.room.take(slot) {
                self.deck.discard([card]);
            }
        }

        if self.room.is_empty() && self.deck.draw.is_empty() {
            self.state = GameState::Won;
            log::info!("game won with score {}", self.health);
            events.push(Event::GameWon { score: self.health });
        } else if self.room.filled() == 1 {
            self.last_room_avoided = false;
            self.deal_room(events);
        }
        Ok(self.snapshot())
    }

    pub fn score(&self) -> Score {
        Score::compute(self.state, self.health, self.remaining_monsters())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed(),
            state: self.state,
            health: self.health,
            draw: self.deck.draw.iter().copied().collect(),
            discard: self.deck.discard.clone(),
            room: *self.room.slots(),
            weapon: self.weapon.clone(),
            last_room_avoided: self.last_room_avoided,
            score: self.score(),
        }
    }

    fn deal_room(&mut self, events: &mut EventBus) {
        let count = self.room.fill_from(&mut self.deck);
        if count > 0 {
            let remaining = self.deck.draw.len();
            log::debug!("dealt {count} cards, {remaining} left in the draw pile");
            events.push(Event::RoomDealt { count, remaining });
        }
    }

    fn fight_barehanded(&mut self, monster: Card, events: &mut EventBus) {
        self.health -= monster.value;
        events.push(Event::MonsterFought {
            monster,
            damage: monster.value,
            health: self.health,
        });
    }

    fn slay_with_weapon(
        &mut self,
        slot: usize,
        monster: Card,
        events: &mut EventBus,
    ) -> Result<(), GameError> {
        let weapon = self.weapon.as_mut().ok_or(GameError::NoWeaponEquipped)?;
        if let Some(limit) = weapon.limit().filter(|limit| monster.value >= *limit) {
            return Err(GameError::MonsterTooStrong {
                monster: monster.value,
                limit,
            });
        }

        let damage = weapon.damage_from(&monster);
        weapon.slain.push(monster);
        let weapon_card = weapon.card;
        self.room.take(slot);
        self.health -= damage;
        events.push(Event::MonsterSlain {
            monster,
            weapon: weapon_card,
            damage,
            health: self.health,
        });
        Ok(())
    }

    fn equip(&mut self, slot: usize, card: Card, events: &mut EventBus) {
        let discarded = match self.weapon.take() {
            Some(old) => {
                let cards = old.into_cards();
                let count = cards.len();
                self.deck.discard(cards);
                count
            }
            None => 0,
        };
        self.room.take(slot);
        self.weapon = Some(EquippedWeapon::new(card));
        events.push(Event::WeaponEquipped {
            weapon: card,
            discarded,
        });
    }

    fn drink(&mut self, potion: Card, events: &mut EventBus) {
        let mut health = self.health + potion.value;
        // the very last card of the dungeon may overheal
        let remaining = self.deck.draw.len() + self.room.filled();
        if remaining != 1 {
            health = health.min(MAX_HEALTH);
        }
        let healed = health - self.health;
        self.health = health;
        events.push(Event::PotionDrunk {
            potion,
            healed,
            health,
        });
    }

    fn remaining_monsters(&self) -> i32 {
        self.deck.draw_monster_total() + self.room.monster_total()
    }

    fn lost_score(&self) -> i32 {
        self.health - self.remaining_monsters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(cards: Vec<Card>) -> Game {
        Game::from_draw_pile(cards, &mut EventBus::default())
    }

    #[test]
    fn new_game_deals_a_full_room() {
        let mut events = EventBus::default();
        let game = Game::new(321, &mut events);
        assert_eq!(game.room().filled(), ROOM_SIZE);
        assert_eq!(game.deck().draw.len(), 40);
        assert_eq!(game.health(), MAX_HEALTH);
        assert_eq!(game.state(), GameState::Started);
        let drained: Vec<_> = events.drain().collect();
        assert_eq!(drained[0], Event::GameStarted { seed: 321 });
        assert_eq!(
            drained[1],
            Event::RoomDealt {
                count: 4,
                remaining: 40
            }
        );
    }

    #[test]
    fn invalid_slot_is_rejected() {
        let mut game = game_with(vec![Card::potion(2)]);
        let err = game
            .play_card(ROOM_SIZE, false, &mut EventBus::default())
            .expect_err("slot");
        assert_eq!(err, GameError::InvalidSlot(ROOM_SIZE));
    }

    #[test]
    fn empty_slot_is_a_no_op() {
        let mut game = game_with(vec![Card::potion(2), Card::monster(3)]);
        let before = game.snapshot();
        let after = game
            .play_card(3, false, &mut EventBus::default())
            .expect("no-op");
        assert_eq!(before, after);
    }

    #[test]
    fn new_weapon_discards_old_weapon_and_kills() {
        let mut events = EventBus::default();
        let mut game = Game::from_draw_pile(
            vec![
                Card::weapon(4),
                Card::monster(6),
                Card::weapon(9),
                Card::monster(2),
                Card::potion(3),
            ],
            &mut events,
        );
        game.play_card(0, false, &mut events).expect("equip");
        game.play_card(1, false, &mut events).expect("slay");
        assert_eq!(game.health(), MAX_HEALTH - 2);
        game.play_card(2, false, &mut events).expect("swap weapon");

        let weapon = game.weapon().expect("weapon");
        assert_eq!(weapon.card, Card::weapon(9));
        assert!(weapon.slain.is_empty());
        assert_eq!(
            game.deck().discard,
            vec![Card::weapon(4), Card::monster(6)]
        );
    }

    #[test]
    fn start_turn_fills_empty_slots_only() {
        let mut events = EventBus::default();
        let mut game = Game::from_draw_pile(
            vec![
                Card::potion(2),
                Card::potion(3),
                Card::potion(4),
                Card::potion(5),
                Card::monster(2),
                Card::monster(3),
            ],
            &mut events,
        );
        let full = game.snapshot();
        assert_eq!(game.start_turn(&mut events), full);

        game.play_card(0, false, &mut events).expect("drink");
        game.play_card(1, false, &mut events).expect("drink");
        assert_eq!(game.room().filled(), 2);
        let snapshot = game.start_turn(&mut events);
        assert_eq!(
            snapshot.room,
            [
                Some(Card::monster(2)),
                Some(Card::monster(3)),
                Some(Card::potion(4)),
                Some(Card::potion(5)),
            ]
        );
        assert!(snapshot.draw.is_empty());
    }

    #[test]
    fn one_card_left_refills_the_room_and_resets_avoid() {
        let mut events = EventBus::default();
        let mut game = Game::from_draw_pile(
            vec![
                Card::potion(2),
                Card::potion(3),
                Card::potion(4),
                Card::monster(5),
                Card::monster(2),
                Card::monster(3),
                Card::monster(4),
                Card::monster(6),
                Card::monster(11),
            ],
            &mut events,
        );
        game.avoid_room(&mut events).expect("avoid");
        assert!(game.last_room_avoided());
        game.play_card(0, true, &mut events).expect("fight");
        game.play_card(1, true, &mut events).expect("fight");
        assert_eq!(game.room().filled(), 2);
        game.play_card(2, true, &mut events).expect("fight");

        assert!(!game.last_room_avoided());
        assert_eq!(game.health(), 11);
        assert!(game.room().is_full());
        assert_eq!(game.room().get(0), Some(Card::monster(11)));
        assert_eq!(game.room().get(3), Some(Card::monster(6)));
    }
}
