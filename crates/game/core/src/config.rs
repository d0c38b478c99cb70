/// Game configuration constants and tunable parameters.
///
/// Missing fields fall back to their defaults when deserialized, so a content
/// file only needs to list the values it overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Currency the player starts with before recruiting.
    pub starting_money: u32,
    /// Fee charged for every hero added to the player roster.
    pub hero_cost: u32,
    /// Upper bound on battle rounds. A battle still undecided after this many
    /// rounds is reported as an error instead of looping forever.
    pub max_rounds: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_MONEY: u32 = 250;
    pub const DEFAULT_HERO_COST: u32 = 50;
    pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

    pub fn new() -> Self {
        Self {
            starting_money: Self::DEFAULT_STARTING_MONEY,
            hero_cost: Self::DEFAULT_HERO_COST,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_starting_money(mut self, starting_money: u32) -> Self {
        self.starting_money = starting_money;
        self
    }

    pub fn with_hero_cost(mut self, hero_cost: u32) -> Self {
        self.hero_cost = hero_cost;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
