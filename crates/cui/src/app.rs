use scoundrel_core::{
    CardKind, Event, EventBus, Game, GameError, GameState, Snapshot, ROOM_SIZE,
};
use std::collections::VecDeque;

const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub game: Game,
    pub snapshot: Snapshot,
    pub events: EventBus,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(seed: u32) -> Self {
        let mut events = EventBus::default();
        let game = Game::new(seed, &mut events);
        let snapshot = game.snapshot();
        let mut app = Self {
            game,
            snapshot,
            events,
            event_log: VecDeque::new(),
            status_line: "ready".to_string(),
            show_help: false,
            should_quit: false,
        };
        app.flush_events();
        app
    }

    pub fn restart(&mut self) {
        self.snapshot = self.game.start_game(&mut self.events);
        self.push_status(format!("restarted with seed {}", self.snapshot.seed));
        self.flush_events();
    }

    pub fn avoid_room(&mut self) {
        match self.game.avoid_room(&mut self.events) {
            Ok(snapshot) if snapshot == self.snapshot => self.push_hint(),
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.push_status("room avoided");
            }
            Err(err) => self.push_error(err),
        }
        self.flush_events();
    }

    pub fn play_slot(&mut self, slot: usize, barehanded: bool) {
        let card = self.snapshot.room.get(slot).copied().flatten();
        match self.game.play_card(slot, barehanded, &mut self.events) {
            Ok(snapshot) if snapshot == self.snapshot => self.push_hint(),
            Ok(snapshot) => {
                self.snapshot = snapshot;
                if let Some(card) = card {
                    let how = if barehanded && card.kind == CardKind::Monster {
                        " barehanded"
                    } else {
                        ""
                    };
                    self.push_status(format!("played {card}{how}"));
                }
            }
            Err(err) => self.push_error(err),
        }
        self.flush_events();
    }

    pub fn next_hint(&self) -> &'static str {
        match self.snapshot.state {
            GameState::Won => "victory! press r to play again",
            GameState::Lost => "game over! press r to try again",
            GameState::Started => {
                let filled = self.snapshot.room.iter().flatten().count();
                if filled == ROOM_SIZE && !self.snapshot.last_room_avoided {
                    "play a card (1-4) or avoid the room (a)"
                } else {
                    "play a card (1-4, shift for barehanded)"
                }
            }
        }
    }

    pub fn outcome_label(&self) -> &'static str {
        match self.snapshot.state {
            GameState::Started => "",
            GameState::Won => "victory!",
            GameState::Lost => "game over!",
        }
    }

    pub fn push_status(&mut self, value: impl Into<String>) {
        self.status_line = value.into();
    }

    /// Nothing happened; tell the player what they can do instead.
    fn push_hint(&mut self) {
        let hint = self.next_hint();
        self.push_status(hint);
    }

    pub fn push_error(&mut self, err: GameError) {
        self.status_line = format!("error: {err}");
    }

    fn flush_events(&mut self) {
        let drained: Vec<_> = self.events.drain().collect();
        for event in drained {
            self.push_event_line(format_event(&event));
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

pub fn format_event(event: &Event) -> String {
    match event {
        Event::GameStarted { seed } => format!("game started with seed {seed}"),
        Event::RoomDealt { count, remaining } => {
            format!("dealt {count} cards, {remaining} left in the dungeon")
        }
        Event::RoomAvoided { returned } => format!("avoided room, {returned} cards buried"),
        Event::MonsterFought {
            monster,
            damage,
            health,
        } => format!("fought {monster} barehanded: -{damage} health ({health})"),
        Event::MonsterSlain {
            monster,
            weapon,
            damage,
            health,
        } => format!("slew {monster} with {weapon}: -{damage} health ({health})"),
        Event::WeaponEquipped { weapon, discarded } => {
            if *discarded == 0 {
                format!("equipped {weapon}")
            } else {
                format!("equipped {weapon}, discarded {discarded} cards")
            }
        }
        Event::PotionDrunk {
            potion,
            healed,
            health,
        } => format!("drank {potion}: +{healed} health ({health})"),
        Event::GameLost { score } => format!("game over, score {score}"),
        Event::GameWon { score } => format!("victory, score {score}"),
    }
}
