use super::common::GameError;

/// Guess value that ends the round without counting as an attempt.
pub const GIVE_UP: i64 = 0;

/// Bounds accepted for a custom range.
pub const CUSTOM_MIN: i64 = -1_000_000;
pub const CUSTOM_MAX: i64 = 1_000_000;
/// Upper bound for a custom attempt limit.
pub const CUSTOM_MAX_ATTEMPTS: u32 = 1_000_000;

/// Difficulty levels offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Custom => "Custom",
        }
    }

    /// Menu entry number, starting at 1.
    pub fn menu_index(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Custom => 4,
        }
    }

    pub fn from_menu_index(index: u8) -> Option<Difficulty> {
        Self::ALL.iter().copied().find(|d| d.menu_index() == index)
    }

    /// Fixed configuration for the preset levels. `Custom` has none.
    pub fn preset(&self) -> Option<GameConfig> {
        let (min_value, max_value, max_attempts) = match self {
            Difficulty::Easy => (1, 20, 0),
            Difficulty::Medium => (1, 100, 10),
            Difficulty::Hard => (1, 1000, 12),
            Difficulty::Custom => return None,
        };
        Some(GameConfig {
            difficulty: *self,
            min_value,
            max_value,
            max_attempts,
        })
    }
}

/// Range and attempt limit for one round. `max_attempts == 0` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    difficulty: Difficulty,
    min_value: i64,
    max_value: i64,
    max_attempts: u32,
}

impl GameConfig {
    /// Build a configuration, rejecting empty or inverted ranges.
    pub fn new(
        difficulty: Difficulty,
        min_value: i64,
        max_value: i64,
        max_attempts: u32,
    ) -> Result<Self, GameError> {
        if min_value >= max_value {
            return Err(GameError::InvalidRange {
                min: min_value,
                max: max_value,
            });
        }
        Ok(Self {
            difficulty,
            min_value,
            max_value,
            max_attempts,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn has_attempt_limit(&self) -> bool {
        self.max_attempts > 0
    }

    /// Number of distinct values the secret can take.
    pub fn range_size(&self) -> u64 {
        self.max_value.abs_diff(self.min_value) + 1
    }
}
