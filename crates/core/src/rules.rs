use std::ops::RangeInclusive;

/// Health at the start of a game and the cap applied by potions.
pub const MAX_HEALTH: i32 = 20;

pub const ROOM_SIZE: usize = 4;

pub const DECK_SIZE: usize = 44;

/// Seeds shown to the player stay below this bound.
pub const SEED_LIMIT: u32 = 100_000;

pub const MONSTER_VALUES: RangeInclusive<i32> = 2..=14;
pub const MONSTER_COPIES: usize = 2;

/// Values shared by weapons and potions, one copy each.
pub const ITEM_VALUES: RangeInclusive<i32> = 2..=10;

pub const RULES: &str = include_str!("../assets/rules.txt");
