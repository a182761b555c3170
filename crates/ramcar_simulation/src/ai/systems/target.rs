//! Target resolution + cooldown tick.

use bevy::prelude::*;

use crate::components::{AiDisabled, ChaseTarget, Player, RamCooldown};
use crate::logger;

/// Система: резолвинг цели преследования
///
/// ChaseTarget задаётся явно при спавне, иначе ищем entity с маркером
/// Player (well-known tag lookup). Исчезнувшая цель сбрасывается в None —
/// следующий тик попробует зарезолвить заново.
pub fn resolve_chase_target(
    mut vehicles: Query<(Entity, &mut ChaseTarget), Without<AiDisabled>>,
    players: Query<Entity, With<Player>>,
    transforms: Query<(), With<Transform>>,
) {
    for (vehicle, mut target) in vehicles.iter_mut() {
        if let Some(entity) = target.0 {
            if transforms.get(entity).is_ok() {
                continue;
            }
            // Цель despawned — сбрасываем weak reference
            target.0 = None;
            logger::log(&format!("Vehicle {:?}: chase target despawned", vehicle));
        }

        if let Some(player) = players.iter().next() {
            target.0 = Some(player);
            logger::log(&format!(
                "🎯 Vehicle {:?}: chase target resolved to {:?}",
                vehicle, player
            ));
        }
    }
}

/// Система: тик cooldown'а тарана
///
/// Как и весь update loop — no-op пока цель недоступна.
/// Таймер может уйти чуть в минус, чтение через RamCooldown::remaining().
pub fn tick_ram_cooldown(
    mut vehicles: Query<(&mut RamCooldown, &ChaseTarget), Without<AiDisabled>>,
    targets: Query<(), With<Transform>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut cooldown, target) in vehicles.iter_mut() {
        let Some(target_entity) = target.0 else {
            continue;
        };
        if targets.get(target_entity).is_err() {
            continue;
        }

        if cooldown.0 > 0.0 {
            cooldown.0 -= delta;
        }
    }
}
