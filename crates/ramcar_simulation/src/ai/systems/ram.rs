//! Ram drive — multi-tick физический таран.
//!
//! Аналог suspended coroutine оригинального поведения: вместо yield —
//! elapsed аккумулятор в VehicleAiState::Ram, система тикает его каждый
//! FixedUpdate пока не истечёт ram_duration, после чего глушит физику и
//! возвращает агента на nav surface.

use bevy::prelude::*;

use crate::ai::components::VehicleAiState;
use crate::ai::events::StateChanged;
use crate::components::{AiDisabled, NavAgent, PhysicsBody, VehicleConfig};
use crate::logger;
use crate::nav::NavSurface;

/// Скорость доворота корпуса к направлению движения (slerp factor × Δt)
pub const RAM_TURN_RATE: f32 = 6.0;

/// Квадрат минимальной скорости, при которой доворачиваем корпус
pub const RAM_TURN_MIN_SPEED_SQ: f32 = 0.1;

/// Радиус поиска валидной точки на nav surface после тарана
pub const NAV_RECOVERY_RADIUS: f32 = 3.0;

/// Система: per-tick поведение Ram
///
/// Каждый тик: интеграция velocity → position, доворот корпуса к
/// горизонтальному направлению скорости. По истечении ram_duration:
/// обнуление скоростей, kinematic режим, попытка вернуться на nav
/// surface (warp, не path-walk) → Recover.
pub fn ram_drive(
    mut vehicles: Query<
        (
            Entity,
            &mut VehicleAiState,
            &mut NavAgent,
            &mut PhysicsBody,
            &mut Transform,
            &VehicleConfig,
        ),
        Without<AiDisabled>,
    >,
    surface: Res<NavSurface>,
    time: Res<Time<Fixed>>,
    mut state_events: EventWriter<StateChanged>,
) {
    let delta = time.delta_secs();

    for (entity, mut state, mut agent, mut body, mut transform, cfg) in vehicles.iter_mut() {
        let VehicleAiState::Ram { elapsed } = state.as_ref() else {
            continue;
        };

        // Прямая интеграция velocity (rapier в embedding layer — только коллизии)
        transform.translation += body.velocity * delta;

        // Доворачиваем корпус к горизонтальному направлению движения
        if body.velocity.length_squared() > RAM_TURN_MIN_SPEED_SQ {
            let horizontal = Vec3::new(body.velocity.x, 0.0, body.velocity.z);
            if horizontal.length_squared() > f32::EPSILON {
                let target_rot = Transform::default().looking_to(horizontal, Vec3::Y).rotation;
                transform.rotation = transform
                    .rotation
                    .slerp(target_rot, (delta * RAM_TURN_RATE).min(1.0));
            }
        }

        let elapsed = elapsed + delta;
        if elapsed < cfg.ram_duration {
            *state = VehicleAiState::Ram { elapsed };
            continue;
        }

        // Таран закончен — глушим физику
        body.zero_velocities();
        body.kinematic = true;
        agent.enabled = true;

        // Пытаемся вернуть агента на nav surface (warp, не path-walk)
        match surface.sample_position(transform.translation, NAV_RECOVERY_RADIUS) {
            Some(point) => {
                transform.translation = point;
                agent.reset_path();
                agent.stopped = false;
            }
            None => {
                logger::log_warning(&format!(
                    "Vehicle {:?}: couldn't return to nav surface after ram, parked off-mesh",
                    entity
                ));
                agent.stopped = true;
            }
        }

        logger::log(&format!("🚗 Vehicle {:?}: Ram → Recover", entity));
        state_events.write(StateChanged {
            entity,
            from: VehicleAiState::Ram { elapsed: 0.0 },
            to: VehicleAiState::Recover,
        });
        *state = VehicleAiState::Recover;
    }
}
