//! Combat module — контактный урон тарана.

use bevy::prelude::*;

pub mod damage;

// Re-export основных типов
pub use damage::{DamageDealt, RamContact, RamContactState};

/// Combat Plugin
///
/// detect_ram_contacts → apply_ram_damage, event-driven.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RamContact>()
            .add_event::<DamageDealt>()
            .add_systems(
                FixedUpdate,
                (damage::detect_ram_contacts, damage::apply_ram_damage).chain(),
            );
    }
}
