use super::{Unit, UnitId, UnitKind};

/// Data description of a unit, as written in content files.
///
/// Templates carry no identity; [`UnitTemplate::spawn`] turns one into a unit
/// with the id the caller allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTemplate {
    pub name: String,
    pub health: i32,
    pub damage: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: UnitKind,
}

impl UnitTemplate {
    pub fn new(kind: UnitKind, name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
            kind,
        }
    }

    pub fn soldier(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(UnitKind::Soldier, name, health, damage)
    }

    pub fn dragon(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(UnitKind::Dragon, name, health, damage)
    }

    pub fn spawn(&self, id: UnitId) -> Unit {
        Unit::new(id, self.kind, self.name.clone(), self.health, self.damage)
    }
}
