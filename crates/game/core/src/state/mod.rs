//! Authoritative battle state representation.
//!
//! [`BattleState`] owns both rosters and the player's currency. The recruitment
//! flow and the battle loop borrow it from the top-level session; there is no
//! process-wide game state.
mod error;

pub use error::StateError;

use crate::config::GameConfig;
use crate::roster::Roster;
use crate::unit::{Unit, UnitId, UnitTemplate};

/// Canonical snapshot of one battle session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleState {
    /// Sequential unit ID allocator (monotonically increasing, never reused).
    next_unit_id: u32,

    player: Roster,
    enemy: Roster,

    /// Player currency. Unsigned, and deductions are all-or-nothing.
    money: u32,
}

impl BattleState {
    /// Creates an empty state funded with the configured starting money.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_money(config.starting_money)
    }

    /// Creates an empty state with an explicit balance.
    pub fn with_money(money: u32) -> Self {
        Self {
            next_unit_id: 0,
            player: Roster::new(),
            enemy: Roster::new(),
            money,
        }
    }

    pub fn player(&self) -> &Roster {
        &self.player
    }

    pub fn enemy(&self) -> &Roster {
        &self.enemy
    }

    pub fn player_mut(&mut self) -> &mut Roster {
        &mut self.player
    }

    pub fn enemy_mut(&mut self) -> &mut Roster {
        &mut self.enemy
    }

    /// Borrows both rosters at once as `(player, enemy)`.
    pub fn rosters_mut(&mut self) -> (&mut Roster, &mut Roster) {
        (&mut self.player, &mut self.enemy)
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    /// Removes `amount` from the balance.
    ///
    /// Fails without touching the balance if it would go negative.
    pub fn deduct_money(&mut self, amount: u32) -> Result<(), StateError> {
        match self.money.checked_sub(amount) {
            Some(remaining) => {
                self.money = remaining;
                Ok(())
            }
            None => Err(StateError::InsufficientFunds {
                requested: amount,
                available: self.money,
            }),
        }
    }

    /// Allocates a new unique unit ID.
    ///
    /// # Errors
    ///
    /// Returns `StateError::UnitIdOverflow` if all IDs are exhausted.
    pub fn allocate_unit_id(&mut self) -> Result<UnitId, StateError> {
        let id = self.next_unit_id;
        self.next_unit_id = id
            .checked_add(1)
            .ok_or(StateError::UnitIdOverflow { current: id })?;
        Ok(UnitId(id))
    }

    /// Instantiates a template under a freshly allocated ID.
    pub fn spawn(&mut self, template: &UnitTemplate) -> Result<Unit, StateError> {
        let id = self.allocate_unit_id()?;
        Ok(template.spawn(id))
    }

    /// Spawns a template straight into the enemy roster.
    pub fn spawn_enemy(&mut self, template: &UnitTemplate) -> Result<UnitId, StateError> {
        let unit = self.spawn(template)?;
        let id = unit.id();
        self.enemy.add(unit);
        Ok(id)
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
