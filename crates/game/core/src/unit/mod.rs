//! Combat units and their attack behavior.
//!
//! A [`Unit`] is created once from a [`UnitTemplate`] and afterwards only
//! changes by taking damage. Variants differ solely in how their attacks are
//! described, which is captured by the [`UnitKind`] tag instead of separate
//! types.
mod record;
mod template;

use std::fmt;

pub use record::{RecordError, UnitRecord};
pub use template::UnitTemplate;

use crate::event::{EventSink, GameEvent};

/// Identity of a unit.
///
/// Allocated by [`crate::BattleState`] and never reused, so two units with
/// identical stats remain distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Variant tag of a unit.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitKind {
    /// Melee fighter.
    #[default]
    Soldier,
    /// Fire-breathing flyer. Same damage rules, different attack wording.
    Dragon,
}

impl UnitKind {
    /// Verb phrase used when a unit of this kind attacks.
    pub const fn attack_verb(self) -> &'static str {
        match self {
            Self::Soldier => "strikes",
            Self::Dragon => "breathes fire at",
        }
    }

    /// Renders the attack log line for this kind.
    pub fn describe_attack(self, attacker: &str, target: &str, damage: i32) -> String {
        format!("{attacker} {} {target} for {damage} damage!", self.attack_verb())
    }
}

/// Effect of a single resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: UnitId,
    pub target: UnitId,
    pub damage: i32,
    /// True when this attack took the target from alive to dead.
    pub defeated: bool,
}

/// A combat entity owned by a roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    id: UnitId,
    kind: UnitKind,
    name: String,
    /// May drop below zero; no clamping is applied.
    health: i32,
    damage: i32,
    alive: bool,
}

impl Unit {
    /// Creates a unit. It starts alive iff `health > 0`.
    pub fn new(
        id: UnitId,
        kind: UnitKind,
        name: impl Into<String>,
        health: i32,
        damage: i32,
    ) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            health,
            damage,
            alive: health > 0,
        }
    }

    pub fn soldier(id: UnitId, name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(id, UnitKind::Soldier, name, health, damage)
    }

    pub fn dragon(id: UnitId, name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(id, UnitKind::Dragon, name, health, damage)
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Attacks `target` with this unit's fixed damage.
    ///
    /// Does nothing when this unit is dead or there is no target. The attack
    /// line is emitted before the damage lands, so a resulting defeat line
    /// follows it.
    pub fn attack(
        &self,
        target: Option<&mut Unit>,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Option<AttackReport> {
        if !self.alive {
            return None;
        }
        let target = target?;

        sink.emit(GameEvent::UnitAttacked {
            attacker: self.name.clone(),
            kind: self.kind,
            target: target.name.clone(),
            damage: self.damage,
        });
        let defeated = target.take_damage(self.damage, sink);

        Some(AttackReport {
            attacker: self.id,
            target: target.id,
            damage: self.damage,
            defeated,
        })
    }

    /// Subtracts `amount` from health.
    ///
    /// Returns true only for the hit that kills the unit; the defeat event is
    /// emitted exactly once and a dead unit never comes back.
    pub fn take_damage(&mut self, amount: i32, sink: &mut (impl EventSink + ?Sized)) -> bool {
        self.health -= amount;
        if self.alive && self.health <= 0 {
            self.alive = false;
            sink.emit(GameEvent::UnitDefeated {
                unit: self.id,
                name: self.name.clone(),
            });
            return true;
        }
        false
    }

    /// Flat record of this unit's fields.
    pub fn to_record(&self) -> UnitRecord {
        UnitRecord::from(self)
    }

    /// Rebuilds a unit from a record.
    ///
    /// A record marked dead stays dead even with positive health, and a record
    /// with no health left is never alive.
    pub fn from_record(id: UnitId, kind: UnitKind, record: UnitRecord) -> Self {
        Self {
            id,
            kind,
            alive: record.alive && record.health > 0,
            name: record.name,
            health: record.health,
            damage: record.damage,
        }
    }
}
