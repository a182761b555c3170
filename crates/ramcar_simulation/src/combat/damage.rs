//! Ram contact detection + damage application.
//!
//! Контакт — proximity check (суррогат engine collision callback), урон —
//! best-effort через Health capability: нет Health у цели — событие
//! молча игнорируется.

use bevy::prelude::*;

use crate::components::{ChaseTarget, Health, VehicleConfig};
use crate::logger;

/// Событие: машина физически коснулась цели
///
/// Эмитится один раз на rising edge контакта (аналог collision enter),
/// флаг сбрасывается при расхождении.
#[derive(Event, Debug, Clone)]
pub struct RamContact {
    pub vehicle: Entity,
    pub target: Entity,
}

/// Событие: урон нанесён
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub target_died: bool,
}

/// Состояние контакта машина↔цель (edge detection, не спамим событиями)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct RamContactState {
    pub touching: bool,
}

/// Система: детект контакта машины с целью
///
/// Дистанция ≤ contact_radius → контакт; событие только при переходе
/// не-контакт → контакт.
pub fn detect_ram_contacts(
    mut vehicles: Query<(
        Entity,
        &Transform,
        &VehicleConfig,
        &ChaseTarget,
        &mut RamContactState,
    )>,
    targets: Query<&Transform, Without<VehicleConfig>>,
    mut contacts: EventWriter<RamContact>,
) {
    for (vehicle, transform, cfg, chase_target, mut contact) in vehicles.iter_mut() {
        let Some(target_entity) = chase_target.0 else {
            contact.touching = false;
            continue;
        };
        let Ok(target_tf) = targets.get(target_entity) else {
            contact.touching = false;
            continue;
        };

        let dist = transform.translation.distance(target_tf.translation);
        let touching = dist <= cfg.contact_radius;

        if touching && !contact.touching {
            contacts.write(RamContact {
                vehicle,
                target: target_entity,
            });
        }
        contact.touching = touching;
    }
}

/// Система: применение урона от контактов
///
/// Capability query вместо reflection-вызова по имени метода: цель либо
/// несёт Health, либо контакт игнорируется без ошибки.
pub fn apply_ram_damage(
    mut contacts: EventReader<RamContact>,
    vehicles: Query<&VehicleConfig>,
    mut healths: Query<&mut Health>,
    mut dealt: EventWriter<DamageDealt>,
) {
    for contact in contacts.read() {
        let Ok(cfg) = vehicles.get(contact.vehicle) else {
            continue;
        };
        let Ok(mut health) = healths.get_mut(contact.target) else {
            // Цель без Health — best-effort delivery, молча пропускаем
            continue;
        };

        let was_alive = health.is_alive();
        health.take_damage(cfg.damage_amount);
        let target_died = was_alive && !health.is_alive();

        logger::log(&format!(
            "💥 Ram contact: {:?} → {:?} ({} damage, health {})",
            contact.vehicle, contact.target, cfg.damage_amount, health.current
        ));

        dealt.write(DamageDealt {
            attacker: contact.vehicle,
            target: contact.target,
            damage: cfg.damage_amount,
            target_died,
        });

        if target_died {
            logger::log_info(&format!(
                "Entity {:?} killed by ram from {:?}",
                contact.target, contact.vehicle
            ));
        }
    }
}
