use proptest::prelude::*;
use scoundrel_core::{
    random, shuffle, shuffle_copy, EventBus, Game, GameState, Snapshot, DECK_SIZE, MAX_HEALTH,
    ROOM_SIZE, SEED_LIMIT,
};

#[derive(Debug, Clone, Copy)]
enum Move {
    Avoid,
    Play { slot: usize, barehanded: bool },
    Restart,
}

fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        2 => Just(Move::Avoid),
        12 => (0..ROOM_SIZE, any::<bool>())
            .prop_map(|(slot, barehanded)| Move::Play { slot, barehanded }),
        1 => Just(Move::Restart),
    ]
}

fn assert_invariants(snapshot: &Snapshot) -> Result<(), TestCaseError> {
    prop_assert_eq!(snapshot.card_count(), DECK_SIZE);
    prop_assert_eq!(snapshot.room.len(), ROOM_SIZE);
    if snapshot.health <= 0 {
        prop_assert_eq!(snapshot.state, GameState::Lost);
    }
    if snapshot.health > MAX_HEALTH {
        prop_assert_eq!(snapshot.state, GameState::Won);
    }
    if let Some(weapon) = &snapshot.weapon {
        for pair in weapon.slain.windows(2) {
            prop_assert!(pair[0].value > pair[1].value, "streak broken: {:?}", weapon.slain);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(items in prop::collection::vec(any::<u16>(), 0..80), seed in any::<u32>()) {
        let mut shuffled = items.clone();
        shuffle(&mut shuffled, seed);
        let mut expected = items.clone();
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn shuffle_copy_is_a_permutation(items in prop::collection::vec(any::<u16>(), 0..80), seed in any::<u32>()) {
        let mut shuffled = shuffle_copy(&items, seed);
        let mut expected = items.clone();
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn random_stays_in_range(seed in 0.0f64..1.0) {
        let first = random(seed);
        let second = random(first);
        prop_assert!((0.0..1.0).contains(&first));
        prop_assert!((0.0..1.0).contains(&second));
        prop_assert_eq!(random(seed), first);
    }

    #[test]
    fn invariants_hold_over_random_play(
        seed in 0u32..SEED_LIMIT,
        moves in prop::collection::vec(any_move(), 0..160),
    ) {
        let mut events = EventBus::default();
        let mut game = Game::new(seed, &mut events);
        assert_invariants(&game.snapshot())?;

        for mv in moves {
            let before = game.snapshot();
            let filled_before = before.room.iter().flatten().count();
            let result = match mv {
                Move::Avoid => game.avoid_room(&mut events),
                Move::Play { slot, barehanded } => game.play_card(slot, barehanded, &mut events),
                Move::Restart => Ok(game.start_game(&mut events)),
            };
            let after = game.snapshot();
            match result {
                Ok(returned) => prop_assert_eq!(&returned, &after),
                Err(_) => prop_assert_eq!(&before, &after),
            }
            if let Move::Play { .. } = mv {
                if after.state == GameState::Lost {
                    prop_assert!(after.room.iter().flatten().count() <= filled_before);
                }
            }
            assert_invariants(&after)?;
            let _ = events.drain().count();
        }
    }
}
