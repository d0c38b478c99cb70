//! Ordered unit collections.

use crate::unit::{Unit, UnitId};

/// Units belonging to one side, in insertion order.
///
/// Dead units stay in the roster; the alive views filter them out on every
/// call so they always reflect current health.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    units: Vec<Unit>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a unit. Duplicates are not checked.
    pub fn add(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    /// Identity-based membership test.
    pub fn contains(&self, id: UnitId) -> bool {
        self.units.iter().any(|unit| unit.id() == id)
    }

    /// Alive units in insertion order.
    pub fn alive_units(&self) -> Vec<&Unit> {
        self.units.iter().filter(|unit| unit.is_alive()).collect()
    }

    /// IDs of alive units in insertion order.
    pub fn alive_ids(&self) -> Vec<UnitId> {
        self.units
            .iter()
            .filter(|unit| unit.is_alive())
            .map(Unit::id)
            .collect()
    }

    pub fn alive_count(&self) -> usize {
        self.units.iter().filter(|unit| unit.is_alive()).count()
    }

    /// True when no unit is left standing, including the empty roster.
    pub fn is_defeated(&self) -> bool {
        !self.units.iter().any(Unit::is_alive)
    }

    /// First alive unit in roster order.
    pub fn first_alive_mut(&mut self) -> Option<&mut Unit> {
        self.units.iter_mut().find(|unit| unit.is_alive())
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id() == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|unit| unit.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl FromIterator<Unit> for Roster {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}
